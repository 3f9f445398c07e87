use std::path::{Path as StdPath, PathBuf};
use thiserror::Error;

#[derive(Debug, Clone)]
pub enum GoogleServiceFilePath {
	SecretFilePath(PathBuf), // Store owned PathBuf
}

impl AsRef<StdPath> for GoogleServiceFilePath {
	fn as_ref(&self) -> &StdPath {
		match self {
			GoogleServiceFilePath::SecretFilePath(path) => path.as_ref(),
		}
	}
}

#[derive(Debug, Error)]
pub enum SecretFilePathError {
	#[error("Invalid file extension: expected .json, got {extension}")]
	InvalidExtension { extension: String },

	#[error("Invalid filename: {filename}")]
	InvalidFilename { filename: String },

	#[error("Missing credentials file: {path}")]
	MissingFile { path: String },

	#[error("Not a file (e.g., is a directory): {path}")]
	NotAFile { path: String },
}

impl GoogleServiceFilePath {
	pub fn new(path: String) -> Result<Self, SecretFilePathError> {
		let std_path = StdPath::new(&path);

		// Validate it's not empty
		if path.trim().is_empty() {
			return Err(SecretFilePathError::MissingFile { path: "<empty>".to_string() });
		}

		// The path must name a file, not end in a separator or `..`
		std_path
			.file_name()
			.and_then(|s| s.to_str())
			.ok_or_else(|| SecretFilePathError::InvalidFilename { filename: path.clone() })?;

		// Service account keys are always JSON
		if std_path.extension().and_then(|s| s.to_str()) != Some("json") {
			let extension = std_path.extension().and_then(|s| s.to_str()).unwrap_or("none").to_string();
			return Err(SecretFilePathError::InvalidExtension { extension });
		}

		// Check existence
		if !std_path.exists() {
			return Err(SecretFilePathError::MissingFile { path });
		}

		// Check that it's a file, not a dir
		if !std_path.is_file() {
			return Err(SecretFilePathError::NotAFile { path });
		}

		Ok(GoogleServiceFilePath::SecretFilePath(std_path.to_path_buf()))
	}

	pub fn as_str(&self) -> &str {
		match self {
			GoogleServiceFilePath::SecretFilePath(path) => path.to_str().expect("Path should be valid Unicode"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::fs;
	use tempfile::tempdir;

	fn write_key_file(dir: &tempfile::TempDir, name: &str) -> String {
		let path = dir.path().join(name);
		fs::write(&path, "{}").unwrap();
		path.to_str().unwrap().to_string()
	}

	#[test]
	fn accepts_existing_json_key_file() {
		let dir = tempdir().unwrap();
		let path = write_key_file(&dir, "service_account.json");

		let result = GoogleServiceFilePath::new(path.clone());
		assert!(result.is_ok());
		assert_eq!(result.unwrap().as_str(), path);
	}

	#[test]
	fn accepts_any_json_filename() {
		let dir = tempdir().unwrap();
		let path = write_key_file(&dir, "client_secret_file.json");

		assert!(GoogleServiceFilePath::new(path).is_ok());
	}

	#[test]
	fn rejects_non_json_extension() {
		let dir = tempdir().unwrap();
		let path = write_key_file(&dir, "service_account.txt");

		match GoogleServiceFilePath::new(path) {
			Err(SecretFilePathError::InvalidExtension { extension }) => assert_eq!(extension, "txt"),
			other => panic!("expected InvalidExtension, got {:?}", other),
		}
	}

	#[test]
	fn rejects_missing_extension() {
		let dir = tempdir().unwrap();
		let path = write_key_file(&dir, "service_account");

		match GoogleServiceFilePath::new(path) {
			Err(SecretFilePathError::InvalidExtension { extension }) => assert_eq!(extension, "none"),
			other => panic!("expected InvalidExtension, got {:?}", other),
		}
	}

	#[test]
	fn rejects_empty_path() {
		match GoogleServiceFilePath::new(String::new()) {
			Err(SecretFilePathError::MissingFile { path }) => assert_eq!(path, "<empty>"),
			other => panic!("expected MissingFile, got {:?}", other),
		}
	}

	#[test]
	fn rejects_path_without_filename() {
		match GoogleServiceFilePath::new("/tmp/..".to_string()) {
			Err(SecretFilePathError::InvalidFilename { .. }) => {}
			other => panic!("expected InvalidFilename, got {:?}", other),
		}
	}

	#[test]
	fn rejects_nonexistent_file() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("missing.json").to_str().unwrap().to_string();

		assert!(matches!(GoogleServiceFilePath::new(path), Err(SecretFilePathError::MissingFile { .. })));
	}

	#[test]
	fn rejects_directory_path() {
		let dir = tempdir().unwrap();
		let sub = dir.path().join("keys.json");
		fs::create_dir(&sub).unwrap();
		let path = sub.to_str().unwrap().to_string();

		assert!(matches!(GoogleServiceFilePath::new(path), Err(SecretFilePathError::NotAFile { .. })));
	}
}
