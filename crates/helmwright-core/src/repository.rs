//! Chart repository definitions

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::registry::Named;

/// A remote endpoint packaged charts are uploaded to
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Repository {
    /// Unique name for this repository
    pub name: String,

    /// Base URL of the repository
    pub url: String,

    /// Upload convention of the repository server
    #[serde(default)]
    pub method: UploadMethod,

    /// Basic-auth credentials (optional)
    #[serde(default)]
    pub credentials: Option<Credentials>,
}

/// Basic-auth credentials for a repository
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// How a packaged chart is uploaded to the repository
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadMethod {
    /// ChartMuseum-style: POST a multipart form to the API endpoint
    #[default]
    Post,

    /// Artifactory/Nexus-style: PUT the raw archive at a versioned path
    Put,
}

impl Repository {
    /// Create a repository, validating the URL scheme
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let url = url.into();
        Self::validate_url(&url)?;

        Ok(Self {
            name,
            url,
            method: UploadMethod::default(),
            credentials: None,
        })
    }

    /// The URL a packaged chart is uploaded to
    pub fn upload_url(&self, archive_file_name: &str) -> String {
        let base = self.url.trim_end_matches('/');
        match self.method {
            UploadMethod::Post => format!("{}/api/charts", base),
            UploadMethod::Put => format!("{}/{}", base, archive_file_name),
        }
    }

    fn validate_url(url: &str) -> Result<()> {
        if url.starts_with("http://") || url.starts_with("https://") {
            url::Url::parse(url)?;
            Ok(())
        } else {
            Err(CoreError::InvalidRepositoryUrl {
                url: url.to_string(),
                reason: "URL must start with http:// or https://".to_string(),
            })
        }
    }
}

impl Named for Repository {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind() -> &'static str {
        "repository"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates_scheme() {
        assert!(Repository::new("bar", "https://charts.example.com").is_ok());
        assert!(Repository::new("bar", "http://charts.example.com/repo").is_ok());

        let err = Repository::new("bar", "oci://ghcr.io/org").unwrap_err();
        assert!(matches!(err, CoreError::InvalidRepositoryUrl { .. }));
    }

    #[test]
    fn test_upload_url_post() {
        let repo = Repository::new("bar", "https://charts.example.com/").unwrap();
        assert_eq!(
            repo.upload_url("foo-1.0.0.tgz"),
            "https://charts.example.com/api/charts"
        );
    }

    #[test]
    fn test_upload_url_put() {
        let mut repo = Repository::new("bar", "https://charts.example.com").unwrap();
        repo.method = UploadMethod::Put;
        assert_eq!(
            repo.upload_url("foo-1.0.0.tgz"),
            "https://charts.example.com/foo-1.0.0.tgz"
        );
    }

    #[test]
    fn test_serialization_round_trip() {
        let mut repo = Repository::new("bar", "https://charts.example.com").unwrap();
        repo.credentials = Some(Credentials {
            username: "u".to_string(),
            password: "p".to_string(),
        });

        let yaml = serde_yaml::to_string(&repo).unwrap();
        let parsed: Repository = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.name, "bar");
        assert_eq!(parsed.method, UploadMethod::Post);
        assert!(parsed.credentials.is_some());
    }
}
