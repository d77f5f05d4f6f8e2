//! Chart archive upload
//!
//! Two upload conventions are supported, selected per repository:
//! ChartMuseum-style (POST a multipart form to the API endpoint) and
//! Artifactory/Nexus-style (PUT the raw archive at a versioned path).
//! Failed uploads are not retried here; retry policy belongs to the caller.

use std::path::Path;
use tracing::info;

use helmwright_core::{Repository, UploadMethod};

use crate::error::{PublishError, Result};

/// Uploads packaged chart archives to repositories
pub struct Publisher {
    client: reqwest::Client,
}

impl Default for Publisher {
    fn default() -> Self {
        Self::new()
    }
}

impl Publisher {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Upload one packaged chart archive to one repository
    pub async fn publish(&self, repo: &Repository, archive: &Path) -> Result<()> {
        if !archive.exists() {
            return Err(PublishError::ArchiveNotFound {
                path: archive.display().to_string(),
            });
        }

        let file_name = archive
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "chart.tgz".to_string());
        let data = tokio::fs::read(archive).await?;
        let url = repo.upload_url(&file_name);

        info!(repository = %repo.name, url = %url, "publishing chart archive");

        let mut request = match repo.method {
            UploadMethod::Post => {
                let part = reqwest::multipart::Part::bytes(data)
                    .file_name(file_name)
                    .mime_str("application/gzip")
                    .map_err(|e| PublishError::Network {
                        message: e.to_string(),
                    })?;
                let form = reqwest::multipart::Form::new().part("chart", part);
                self.client.post(&url).multipart(form)
            }
            UploadMethod::Put => self
                .client
                .put(&url)
                .header(reqwest::header::CONTENT_TYPE, "application/gzip")
                .body(data),
        };

        if let Some(creds) = &repo.credentials {
            request = request.basic_auth(&creds.username, Some(&creds.password));
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(PublishError::Upload {
                status: status.as_u16(),
                message,
            });
        }

        info!(repository = %repo.name, "chart published");
        Ok(())
    }
}
