//! Release listing model
//!
//! Deserialized from `helm list -o json`. Helm prints `revision` as a JSON
//! string and `updated` in its own timestamp format, so both stay text.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One deployed release as reported by `helm list`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Release {
    /// Release name
    pub name: String,

    /// Kubernetes namespace
    pub namespace: String,

    /// Revision number (helm emits a string)
    pub revision: String,

    /// Last update timestamp, verbatim
    pub updated: String,

    /// Current status
    pub status: ReleaseStatus,

    /// Chart name and version, e.g. `foo-1.2.3`
    pub chart: String,

    /// Deployed application version
    #[serde(default)]
    pub app_version: String,
}

/// Release status
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ReleaseStatus {
    Deployed,
    Uninstalled,
    Superseded,
    Failed,
    Uninstalling,
    PendingInstall,
    PendingUpgrade,
    PendingRollback,
    #[default]
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for ReleaseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Deployed => "deployed",
            Self::Uninstalled => "uninstalled",
            Self::Superseded => "superseded",
            Self::Failed => "failed",
            Self::Uninstalling => "uninstalling",
            Self::PendingInstall => "pending-install",
            Self::PendingUpgrade => "pending-upgrade",
            Self::PendingRollback => "pending-rollback",
            Self::Unknown => "unknown",
        };
        write!(f, "{}", s)
    }
}

/// Parse the output of `helm list -o json`
pub fn parse_releases(json: &str) -> Result<Vec<Release>> {
    Ok(serde_json::from_str(json)?)
}
