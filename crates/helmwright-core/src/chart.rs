//! Managed chart definitions

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{CoreError, Result};
use crate::registry::Named;

/// A chart managed by the project
///
/// The `name` is the registry key embedded in generated task names; the
/// chart's own metadata (Chart.yaml) is owned by Helm and never parsed here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chart {
    /// Unique key within the project
    pub name: String,

    /// Chart name passed to Helm (defaults to the key)
    #[serde(default)]
    pub chart_name: Option<String>,

    /// Directory containing the chart sources
    pub source_dir: PathBuf,

    /// Chart version used when packaging
    pub version: String,

    /// Whether publish tasks for this chart are enabled
    #[serde(default = "default_true")]
    pub publish: bool,

    /// Names of other managed charts this chart depends on
    #[serde(default)]
    pub dependencies: Vec<String>,
}

fn default_true() -> bool {
    true
}

impl Chart {
    /// Create a chart with defaults for optional fields
    pub fn new(name: impl Into<String>, source_dir: impl Into<PathBuf>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            chart_name: None,
            source_dir: source_dir.into(),
            version: version.into(),
            publish: true,
            dependencies: Vec::new(),
        }
    }

    /// The chart name as passed to Helm
    pub fn chart_name(&self) -> &str {
        self.chart_name.as_deref().unwrap_or(&self.name)
    }

    /// File name of the packaged archive Helm will produce
    pub fn packaged_file_name(&self) -> String {
        format!("{}-{}.tgz", self.chart_name(), self.version)
    }

    /// Validate the chart version as SemVer
    pub fn validate(&self) -> Result<()> {
        semver::Version::parse(&self.version).map_err(|e| CoreError::InvalidChartVersion {
            chart: self.name.clone(),
            version: self.version.clone(),
            reason: e.to_string(),
        })?;
        Ok(())
    }
}

impl Named for Chart {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind() -> &'static str {
        "chart"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_name_defaults_to_key() {
        let chart = Chart::new("foo", "charts/foo", "1.2.3");
        assert_eq!(chart.chart_name(), "foo");

        let mut renamed = chart.clone();
        renamed.chart_name = Some("foo-chart".to_string());
        assert_eq!(renamed.chart_name(), "foo-chart");
    }

    #[test]
    fn test_packaged_file_name() {
        let chart = Chart::new("foo", "charts/foo", "1.2.3");
        assert_eq!(chart.packaged_file_name(), "foo-1.2.3.tgz");
    }

    #[test]
    fn test_validate_version() {
        assert!(Chart::new("foo", ".", "1.2.3").validate().is_ok());

        let err = Chart::new("foo", ".", "not-a-version").validate().unwrap_err();
        assert!(matches!(err, CoreError::InvalidChartVersion { .. }));
    }

    #[test]
    fn test_deserialization_defaults() {
        let yaml = "name: foo\nsourceDir: charts/foo\nversion: 1.0.0\n";
        let chart: Chart = serde_yaml::from_str(yaml).unwrap();
        assert!(chart.publish);
        assert!(chart.dependencies.is_empty());
        assert!(chart.chart_name.is_none());
    }
}
