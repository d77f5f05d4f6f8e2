//! Helmwright Core - foundational types for the Helm build-task runner
//!
//! This crate provides the types shared across Helmwright:
//! - `NamePattern`: one-placeholder task-name templates
//! - `Registry`: insertion-ordered domain-object registries
//! - `Chart` / `Repository`: the configured domain objects
//! - `Project` / `ProjectConfig`: two-phase project configuration

pub mod chart;
pub mod error;
pub mod names;
pub mod pattern;
pub mod project;
pub mod registry;
pub mod repository;

pub use chart::Chart;
pub use error::{CoreError, Result};
pub use pattern::NamePattern;
pub use project::{ClientConfig, DEFAULT_PROJECT_FILE, HelmSettings, Project, ProjectConfig};
pub use registry::{Named, Registry};
pub use repository::{Credentials, Repository, UploadMethod};
