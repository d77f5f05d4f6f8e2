//! Error types for task resolution
//!
//! Note the asymmetry: a name that simply matches no rule or no domain
//! object is NOT an error (rules decline silently). Errors here are reserved
//! for edges that were expected to resolve but did not, and for cyclic
//! dependency chains caught by the traversal guard.

use thiserror::Error;

/// Task resolution errors
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("Unknown task: {name}")]
    UnknownTask { name: String },

    #[error("Task '{task}' depends on '{dependency}', which does not resolve to any task")]
    UnresolvedDependency { task: String, dependency: String },

    #[error("Dependency cycle detected: {chain}")]
    DependencyCycle { chain: String },
}

/// Result type for task resolution
pub type Result<T> = std::result::Result<T, RuleError>;
