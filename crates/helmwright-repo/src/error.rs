//! Error types for chart publishing

use thiserror::Error;

/// Publishing errors
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("Upload rejected: {status} - {message}")]
    Upload { status: u16, message: String },

    #[error("Network error: {message}")]
    Network { message: String },

    #[error("Request timeout")]
    Timeout,

    #[error("Chart archive not found: {path}")]
    ArchiveNotFound { path: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for publishing operations
pub type Result<T> = std::result::Result<T, PublishError>;

impl From<reqwest::Error> for PublishError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            PublishError::Timeout
        } else if let Some(status) = e.status() {
            PublishError::Upload {
                status: status.as_u16(),
                message: e.to_string(),
            }
        } else {
            PublishError::Network {
                message: e.to_string(),
            }
        }
    }
}
