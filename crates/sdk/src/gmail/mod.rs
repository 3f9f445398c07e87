use crate::{GoogleServiceFilePath, SecretFilePathError};
use chrono::{DateTime, Utc};
use google_gmail1::api::{Label, WatchRequest, WatchResponse};
use google_gmail1::yup_oauth2::Error as OAuth2Error;
use google_gmail1::yup_oauth2::ServiceAccountAuthenticator;
use google_gmail1::{Error as GmailError, Gmail};
use hyper::Error as HyperError;
use hyper_rustls::HttpsConnector;
use hyper_util::client::legacy::connect::HttpConnector;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io;
use std::sync::Arc;
use tokio::sync::Mutex;

type HttpsConnectorType = HttpsConnector<HttpConnector>;
type GmailClient = Gmail<HttpsConnectorType>;

const READONLY_SCOPES: [&str; 1] = ["https://www.googleapis.com/auth/gmail.readonly"];
const MODIFY_SCOPES: [&str; 2] = ["https://www.googleapis.com/auth/gmail.modify", "https://www.googleapis.com/auth/gmail.readonly"];

#[derive(Debug, thiserror::Error)]
pub enum GmailServiceError {
	#[error("OAuth2 error: {0}")]
	OAuth2(#[from] OAuth2Error),

	#[error("Gmail API error: {0}")]
	Gmail(#[from] GmailError),

	#[error("HTTP client error: {0}")]
	Hyper(#[from] HyperError),

	#[error("IO error: {0}")]
	Io(#[from] io::Error),

	#[error("Service initialization failed: {0}")]
	ServiceInit(String),

	#[error("Secret file path error: {0}")]
	SecretFilePath(#[from] SecretFilePathError),

	#[error("Unexpected error: {0}")]
	TokenError(#[from] Box<dyn std::error::Error + Send + Sync>),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelSummary {
	pub id: String,
	pub name: String,
}

impl LabelSummary {
	fn from_label(label: Label) -> Self {
		Self {
			id: label.id.unwrap_or_default(),
			name: label.name.unwrap_or_default(),
		}
	}
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchSummary {
	pub history_id: u64,
	pub expiration: DateTime<Utc>,
}

impl WatchSummary {
	fn from_response(response: WatchResponse) -> Self {
		Self {
			history_id: response.history_id.unwrap_or_default(),
			expiration: response.expiration.and_then(DateTime::from_timestamp_millis).unwrap_or_default(),
		}
	}
}

impl fmt::Display for WatchSummary {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let json = serde_json::to_string_pretty(self).map_err(|_| fmt::Error)?;
		f.write_str(&json)
	}
}

pub struct GoogleGmailClient {
	user_email: String,
	scopes: &'static [&'static str],
	service: Arc<Mutex<Option<Arc<GmailClient>>>>,
	client_secret_path: GoogleServiceFilePath,
}

impl GoogleGmailClient {
	pub fn new(user_email: String, client_secret_path: String, scopes: &'static [&'static str]) -> Result<Self, GmailServiceError> {
		let validated_path = GoogleServiceFilePath::new(client_secret_path)?;

		Ok(Self {
			user_email,
			scopes,
			service: Arc::new(Mutex::new(None)),
			client_secret_path: validated_path,
		})
	}

	async fn initialize_service(&self) -> Result<GmailClient, GmailServiceError> {
		log::debug!("initializing gmail service for {}", self.user_email);

		let key = google_gmail1::yup_oauth2::read_service_account_key(&self.client_secret_path.as_ref()).await?;

		// The service account impersonates the mailbox owner
		let auth = ServiceAccountAuthenticator::builder(key).subject(&self.user_email).build().await?;

		let connector = hyper_rustls::HttpsConnectorBuilder::new()
			.with_native_roots()?
			.https_or_http()
			.enable_http1()
			.build();

		let executor = hyper_util::rt::TokioExecutor::new();
		let client = hyper_util::client::legacy::Client::builder(executor).build(connector);

		let service = Gmail::new(client, auth);
		let auth = &service.auth;
		auth.get_token(self.scopes).await?;

		log::debug!("primed access token for scopes {:?}", self.scopes);

		Ok(service)
	}

	pub async fn get_service(&self) -> Result<Arc<GmailClient>, GmailServiceError> {
		let mut service_guard = self.service.lock().await;

		if service_guard.is_none() {
			let new_service = self.initialize_service().await?;
			*service_guard = Some(Arc::new(new_service));
		}

		Ok(Arc::clone(service_guard.as_ref().unwrap()))
	}
}

pub struct ReadGmail {
	client: GoogleGmailClient,
}

impl ReadGmail {
	pub fn new(user_email: String, client_secret_path: String) -> Result<Self, GmailServiceError> {
		Ok(Self {
			client: GoogleGmailClient::new(user_email, client_secret_path, &READONLY_SCOPES)?,
		})
	}

	pub async fn list_labels(&self) -> Result<Vec<LabelSummary>, GmailServiceError> {
		let service = self.client.get_service().await?;

		let (_, response) = service.users().labels_list(&self.client.user_email).add_scopes(&READONLY_SCOPES).doit().await?;

		Ok(response.labels.unwrap_or_default().into_iter().map(LabelSummary::from_label).collect())
	}

	pub async fn list_message_ids(&self, label_id: Option<&str>, query: Option<&str>, max_results: u32) -> Result<Vec<String>, GmailServiceError> {
		let service = self.client.get_service().await?;

		let mut request = service.users().messages_list(&self.client.user_email).max_results(max_results).add_scopes(&READONLY_SCOPES);

		if let Some(label_id) = label_id {
			request = request.add_label_ids(label_id);
		}

		if let Some(q) = query {
			request = request.q(q);
		}

		let (_, response) = request.doit().await?;

		Ok(response.messages.unwrap_or_default().into_iter().filter_map(|message| message.id).collect())
	}
}

pub struct WatchGmail {
	client: GoogleGmailClient,
}

impl WatchGmail {
	pub fn new(user_email: String, client_secret_path: String) -> Result<Self, GmailServiceError> {
		Ok(Self {
			client: GoogleGmailClient::new(user_email, client_secret_path, &MODIFY_SCOPES)?,
		})
	}

	pub async fn register(&self, label_id: &str, topic_name: &str) -> Result<WatchSummary, GmailServiceError> {
		log::info!("registering watch on label {} via topic {}", label_id, topic_name);

		let request = build_watch_request(label_id, topic_name);
		let service = self.client.get_service().await?;

		let (_, response) = service.users().watch(request, &self.client.user_email).add_scopes(&MODIFY_SCOPES).doit().await?;

		Ok(WatchSummary::from_response(response))
	}

	pub async fn stop(&self) -> Result<String, GmailServiceError> {
		log::info!("stopping active watch for {}", self.client.user_email);

		let service = self.client.get_service().await?;

		// users.stop returns an empty body, the status line is the whole answer
		let response = service.users().stop(&self.client.user_email).add_scopes(&MODIFY_SCOPES).doit().await?;

		Ok(response.status().to_string())
	}
}

pub fn build_watch_request(label_id: &str, topic_name: &str) -> WatchRequest {
	WatchRequest {
		label_filter_behavior: Some("include".to_string()),
		label_ids: Some(vec![label_id.to_string()]),
		topic_name: Some(topic_name.to_string()),
		..Default::default()
	}
}
