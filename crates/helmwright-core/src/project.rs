//! Project configuration and the resolved project model
//!
//! Configuration is two-phase: a `ProjectConfig` file populates registries
//! into a `Project`, and only then does task resolution read them. Nothing
//! in a `Project` is mutated once resolution begins.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::chart::Chart;
use crate::error::{CoreError, Result};
use crate::registry::Registry;
use crate::repository::Repository;

pub const DEFAULT_PROJECT_FILE: &str = "helmwright.yaml";

/// Project configuration file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    /// API version
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Helm CLI settings
    #[serde(default)]
    pub helm: HelmSettings,

    /// Managed charts
    #[serde(default)]
    pub charts: Vec<Chart>,

    /// Target repositories
    #[serde(default)]
    pub repositories: Vec<Repository>,

    /// Versioned Helm client download
    #[serde(default)]
    pub download_client: Option<ClientConfig>,
}

fn default_api_version() -> String {
    "helmwright.dev/v1".to_string()
}

/// Names are embedded into task names with their first character uppercased
/// and looked up with it lowercased again. A name that already starts with
/// an uppercase letter can never round-trip, so its tasks would silently
/// not exist; reject it up front instead.
fn validate_key(kind: &'static str, name: &str) -> Result<()> {
    match name.chars().next() {
        None => Err(CoreError::InvalidConfig {
            message: format!("{} name must not be empty", kind),
        }),
        Some(first) if first.is_uppercase() => Err(CoreError::InvalidConfig {
            message: format!(
                "{} name '{}' must start with a lowercase character",
                kind, name
            ),
        }),
        Some(_) => Ok(()),
    }
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            api_version: default_api_version(),
            helm: HelmSettings::default(),
            charts: Vec::new(),
            repositories: Vec::new(),
            download_client: None,
        }
    }
}

impl ProjectConfig {
    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Build the resolved project, validating charts and rejecting duplicates
    pub fn into_project(self) -> Result<Project> {
        let mut charts = Registry::new();
        for chart in self.charts {
            validate_key("chart", &chart.name)?;
            chart.validate()?;
            charts.register(chart)?;
        }

        let mut repositories = Registry::new();
        for repo in self.repositories {
            validate_key("repository", &repo.name)?;
            repositories.register(repo)?;
        }

        Ok(Project {
            charts,
            repositories,
            helm: self.helm,
            download_client: self.download_client,
        })
    }
}

/// Helm CLI settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HelmSettings {
    /// Helm executable (name on PATH, or absolute path)
    #[serde(default = "default_executable")]
    pub executable: PathBuf,

    /// Directory packaged charts are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Extra arguments appended to every invocation
    #[serde(default)]
    pub extra_args: Vec<String>,
}

fn default_executable() -> PathBuf {
    PathBuf::from("helm")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("dist/charts")
}

impl Default for HelmSettings {
    fn default() -> Self {
        Self {
            executable: default_executable(),
            output_dir: default_output_dir(),
            extra_args: Vec::new(),
        }
    }
}

/// Versioned Helm client download configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    /// Client version to download (free-form, not validated)
    pub version: String,

    /// Download base URL
    #[serde(default = "default_client_base_url")]
    pub base_url: String,

    /// Destination directory for the extracted client
    #[serde(default = "default_client_destination")]
    pub destination: PathBuf,
}

fn default_client_base_url() -> String {
    "https://get.helm.sh".to_string()
}

fn default_client_destination() -> PathBuf {
    PathBuf::from(".helmwright/client")
}

impl ClientConfig {
    /// Configuration for a version with the default base URL and destination
    pub fn for_version(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            base_url: default_client_base_url(),
            destination: default_client_destination(),
        }
    }
}

/// The resolved project: registries plus settings
///
/// Owned by the rule engine during resolution; rules only ever see `&Project`.
#[derive(Debug, Clone, Default)]
pub struct Project {
    pub charts: Registry<Chart>,
    pub repositories: Registry<Repository>,
    pub helm: HelmSettings,
    pub download_client: Option<ClientConfig>,
}

impl Project {
    /// Absolute path of a chart's packaged archive
    pub fn packaged_chart_path(&self, chart: &Chart) -> PathBuf {
        self.helm.output_dir.join(chart.packaged_file_name())
    }
}
