//! CLI error types with exit code handling

use miette::Diagnostic;
use thiserror::Error;

use crate::exit_codes;

/// CLI-specific error type that includes exit code information
#[derive(Error, Debug, Diagnostic)]
pub enum CliError {
    /// Project file or domain object configuration is invalid
    #[error("Configuration error: {message}")]
    #[diagnostic(code(helmwright::cli::config))]
    Config { message: String },

    /// Task resolution failed
    #[error("{message}")]
    #[diagnostic(code(helmwright::cli::task))]
    Task {
        message: String,
        #[help]
        help: Option<String>,
    },

    /// A helm invocation or client download failed
    #[error("Helm error: {message}")]
    #[diagnostic(code(helmwright::cli::helm))]
    Helm { message: String },

    /// A chart upload was rejected
    #[error("Publish error: {message}")]
    #[diagnostic(code(helmwright::cli::publish))]
    Publish { message: String },

    /// IO error (file not found, permissions, etc.)
    #[error("IO error: {message}")]
    #[diagnostic(code(helmwright::cli::io))]
    Io { message: String },
}

impl CliError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Config { .. } => exit_codes::CONFIG_ERROR,
            CliError::Task { .. } => exit_codes::TASK_ERROR,
            CliError::Helm { .. } => exit_codes::EXEC_ERROR,
            CliError::Publish { .. } => exit_codes::PUBLISH_ERROR,
            CliError::Io { .. } => exit_codes::IO_ERROR,
        }
    }

    /// Create a task error with optional help text
    pub fn task(message: impl Into<String>, help: Option<String>) -> Self {
        Self::Task {
            message: message.into(),
            help,
        }
    }
}

impl From<helmwright_core::CoreError> for CliError {
    fn from(err: helmwright_core::CoreError) -> Self {
        match err {
            helmwright_core::CoreError::Io(e) => CliError::Io {
                message: e.to_string(),
            },
            other => CliError::Config {
                message: other.to_string(),
            },
        }
    }
}

impl From<helmwright_rules::RuleError> for CliError {
    fn from(err: helmwright_rules::RuleError) -> Self {
        CliError::Task {
            message: err.to_string(),
            help: None,
        }
    }
}

impl From<helmwright_helm::HelmError> for CliError {
    fn from(err: helmwright_helm::HelmError) -> Self {
        CliError::Helm {
            message: err.to_string(),
        }
    }
}

impl From<helmwright_repo::PublishError> for CliError {
    fn from(err: helmwright_repo::PublishError) -> Self {
        CliError::Publish {
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Io {
            message: err.to_string(),
        }
    }
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
