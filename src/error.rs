use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("could not open log file {}: {source}", path.display())]
    LogFile { path: PathBuf, source: io::Error },

    #[error("duplicate category name '{0}'")]
    DuplicateCategory(String),

    #[error("duplicate item id '{id}' in category '{category}'")]
    DuplicateItemId { category: String, id: String },

    #[error("category '{0}' not found")]
    UnknownCategory(String),

    #[error("could not serialize checklist: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported shell: {0}. Use bash, zsh, or fish.")]
    UnsupportedShell(String),

    #[error("could not initialise logging: {0}")]
    Logging(String),
}

#[cfg(test)]
mod tests {
    use std::{io, path::PathBuf};

    use super::AppError;

    #[test]
    fn test_io_message_does_not_blame_terminal() {
        let err = AppError::from(io::Error::new(io::ErrorKind::NotFound, "missing"));
        assert_eq!(err.to_string(), "I/O error: missing");
    }

    #[test]
    fn test_log_file_message_names_path() {
        let err = AppError::LogFile {
            path: PathBuf::from("/tmp/tickoff.log"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(
            err.to_string(),
            "could not open log file /tmp/tickoff.log: denied"
        );
    }
}
