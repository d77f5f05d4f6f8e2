//! Helmwright Helm adapter
//!
//! Thin layer over the Helm CLI as an external collaborator:
//!
//! - **Commands**: build argument lists from chart configuration and run
//!   them as subprocesses, surfacing non-zero exits as errors
//! - **Releases**: deserialize `helm list -o json` output
//! - **Client**: download a versioned Helm client archive

pub mod client;
pub mod command;
pub mod error;
pub mod release;

pub use client::{download_client, download_url};
pub use command::{CommandOutput, HelmCommand, dependency_update, lint, list_releases, package};
pub use error::{HelmError, Result};
pub use release::{Release, ReleaseStatus, parse_releases};
