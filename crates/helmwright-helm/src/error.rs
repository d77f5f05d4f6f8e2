//! Error types for Helm CLI operations

use thiserror::Error;

/// Helm adapter errors
#[derive(Debug, Error)]
pub enum HelmError {
    // ============ Subprocess Errors ============
    #[error("Helm executable not found: {executable}")]
    ExecutableNotFound { executable: String },

    #[error("helm {command} failed with exit code {code}:\n{stderr}")]
    CommandFailed {
        command: String,
        code: i32,
        stderr: String,
    },

    #[error("helm {command} was terminated by a signal")]
    CommandKilled { command: String },

    #[error("Failed to parse helm output: {message}")]
    OutputParse { message: String },

    // ============ Client Download Errors ============
    #[error("Client download failed: {status} - {message}")]
    DownloadFailed { status: u16, message: String },

    #[error("Unsupported platform: {os}/{arch}")]
    UnsupportedPlatform { os: String, arch: String },

    #[error("Network error: {message}")]
    Network { message: String },

    // ============ IO Errors ============
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for Helm operations
pub type Result<T> = std::result::Result<T, HelmError>;

impl From<serde_json::Error> for HelmError {
    fn from(e: serde_json::Error) -> Self {
        HelmError::OutputParse {
            message: e.to_string(),
        }
    }
}

impl From<reqwest::Error> for HelmError {
    fn from(e: reqwest::Error) -> Self {
        if let Some(status) = e.status() {
            HelmError::DownloadFailed {
                status: status.as_u16(),
                message: e.to_string(),
            }
        } else {
            HelmError::Network {
                message: e.to_string(),
            }
        }
    }
}
