use anyhow::Result;
use clap::Parser;
use mailwatch::cli::{Cli, Commands};
use mailwatch::output;
use sdk::{GmailServiceError, ReadGmail, WatchGmail};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
	dotenv::dotenv().ok();

	let cli = Cli::parse();

	// Results go to stdout, diagnostics stay on stderr
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
		.with_writer(std::io::stderr)
		.init();

	rustls::crypto::ring::default_provider()
		.install_default()
		.map_err(|_| GmailServiceError::ServiceInit("Failed to initialize crypto provider".to_string()))?;

	tracing::debug!("acting on mailbox {}", cli.user);

	match cli.command {
		Commands::Labels => {
			let reader = ReadGmail::new(cli.user, cli.credentials)?;
			let labels = reader.list_labels().await?;
			println!("{}", output::format_labels(&labels));
		}
		Commands::Watch { label_id, topic } => {
			let watcher = WatchGmail::new(cli.user, cli.credentials)?;
			let summary = watcher.register(&label_id, &topic).await?;
			println!("{}", output::format_watch_registered(&summary));
		}
		Commands::Stop => {
			let watcher = WatchGmail::new(cli.user, cli.credentials)?;
			let status = watcher.stop().await?;
			println!("{}", output::format_watch_stopped(&status));
		}
		Commands::Messages { label_id, query, max } => {
			let reader = ReadGmail::new(cli.user, cli.credentials)?;
			let message_ids = reader.list_message_ids(label_id.as_deref(), query.as_deref(), max).await?;
			println!("{}", output::format_message_ids(&message_ids));
		}
	}

	Ok(())
}
