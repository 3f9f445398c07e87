use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "mailwatch")]
#[command(about = "Gmail label and watch management for a delegated mailbox", long_about = None)]
pub struct Cli {
	/// Mailbox owner the service account impersonates
	#[arg(long, env = "GMAIL_USER")]
	pub user: String,

	/// Path to the service account key file
	#[arg(long, env = "GMAIL_SERVICE_ACCOUNT_FILE", value_name = "FILE")]
	pub credentials: String,

	#[clap(subcommand)]
	pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
	/// List mailbox labels with their ids
	Labels,
	/// Register a push notification watch on a label
	Watch {
		/// Label id the watch filters on (find it with `labels`)
		#[arg(long, env = "GMAIL_WATCH_LABEL_ID")]
		label_id: String,

		/// Pub/Sub topic the notifications are published to
		#[arg(long, env = "GMAIL_PUBSUB_TOPIC")]
		topic: String,
	},
	/// Stop the active watch on the mailbox
	Stop,
	/// List recent message ids, optionally restricted to a label
	Messages {
		/// Label id to restrict the listing to
		#[arg(long, env = "GMAIL_WATCH_LABEL_ID")]
		label_id: Option<String>,

		/// Gmail search query, e.g. "subject:invoice"
		#[arg(long)]
		query: Option<String>,

		/// Maximum number of ids to fetch
		#[arg(short = 'n', long, default_value_t = 20)]
		max: u32,
	},
}
