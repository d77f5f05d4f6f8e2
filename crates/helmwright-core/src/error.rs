//! Error types for core operations

use thiserror::Error;

/// Core operation errors
#[derive(Debug, Error)]
pub enum CoreError {
    // ============ Pattern Errors ============
    #[error("Malformed name pattern '{template}': {reason}")]
    MalformedPattern { template: String, reason: String },

    // ============ Registry Errors ============
    #[error("{kind} already registered: {name}")]
    DuplicateName { kind: &'static str, name: String },

    #[error("{kind} not found: {name}")]
    NotFound { kind: &'static str, name: String },

    // ============ Configuration Errors ============
    #[error("Invalid project configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Invalid repository URL: {url} - {reason}")]
    InvalidRepositoryUrl { url: String, reason: String },

    #[error("Invalid chart version '{version}' for chart {chart}: {reason}")]
    InvalidChartVersion {
        chart: String,
        version: String,
        reason: String,
    },

    // ============ IO Errors ============
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

impl From<serde_yaml::Error> for CoreError {
    fn from(e: serde_yaml::Error) -> Self {
        CoreError::Serialization(e.to_string())
    }
}

impl From<url::ParseError> for CoreError {
    fn from(e: url::ParseError) -> Self {
        CoreError::InvalidRepositoryUrl {
            url: String::new(),
            reason: e.to_string(),
        }
    }
}
