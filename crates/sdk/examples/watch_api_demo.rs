use sdk::*;
use tokio;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	rustls::crypto::ring::default_provider()
		.install_default()
		.map_err(|_| GmailServiceError::ServiceInit("Failed to initialize crypto provider".to_string()))?;

	// Replace these with your actual credentials
	let user_email = "aulgondu@gmail.com".to_string();
	let service_account_path = "service_account_key.json".to_string();

	// Example 1: List mailbox labels
	println!("=== Example 1: Listing Labels ===");
	let gmail_reader = ReadGmail::new(user_email.clone(), service_account_path.clone())?;
	let labels = gmail_reader.list_labels().await?;
	for label in labels {
		println!("{}: {}", label.name, label.id);
	}

	// Example 2: Register a watch on the INBOX label
	println!("\n=== Example 2: Registering Watch ===");
	let gmail_watcher = WatchGmail::new(user_email.clone(), service_account_path.clone())?;
	let summary = gmail_watcher.register("INBOX", "projects/queue-etl/topics/gmail-events").await?;
	println!("{}", summary);

	// Example 3: List recent message ids under the label
	println!("\n=== Example 3: Listing Messages ===");
	let message_ids = gmail_reader.list_message_ids(Some("INBOX"), None, 5).await?;
	for message_id in message_ids {
		println!("message_id: {}", message_id);
	}

	// Example 4: Stop the active watch
	println!("\n=== Example 4: Stopping Watch ===");
	let status = gmail_watcher.stop().await?;
	println!("Watch stopped: {}", status);

	Ok(())
}
