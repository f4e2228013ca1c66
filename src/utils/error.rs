// src/utils/error.rs
use thiserror::Error;

// Errors from reading markdown input, local or remote
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP error: {0}")]
    Http(reqwest::StatusCode),

    #[error("Markdown source not found: {0}")]
    NotFound(String),

    #[error("Unsupported file type: {0} (expected a .md file)")]
    UnsupportedFileType(String),

    #[error("Failed to read file content: {0}")]
    InvalidContent(String),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Loading markdown failed: {0}")]
    Source(#[from] SourceError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_errors_convert_into_app_error() {
        let err: AppError = SourceError::UnsupportedFileType("notes.txt".to_string()).into();
        assert_eq!(
            err.to_string(),
            "Loading markdown failed: Unsupported file type: notes.txt (expected a .md file)"
        );
    }

    #[test]
    fn test_storage_io_error_message() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: AppError = StorageError::from(io).into();
        assert!(err.to_string().starts_with("Storage error: I/O error:"));
    }
}
