use sdk::{LabelSummary, WatchSummary};

pub fn format_labels(labels: &[LabelSummary]) -> String {
	if labels.is_empty() {
		return "No labels found.".to_string();
	}

	let mut lines = vec!["Labels:".to_string()];
	for label in labels {
		lines.push(format!("{}: {}", label.name, label.id));
	}

	lines.join("\n")
}

pub fn format_watch_registered(summary: &WatchSummary) -> String {
	format!("Watch response:\n{}", summary)
}

pub fn format_watch_stopped(status: &str) -> String {
	format!("Watch stopped: {}", status)
}

pub fn format_message_ids(message_ids: &[String]) -> String {
	if message_ids.is_empty() {
		return "No messages found.".to_string();
	}

	let mut lines = vec!["Messages:".to_string()];
	for message_id in message_ids {
		lines.push(message_id.clone());
	}

	lines.join("\n")
}
