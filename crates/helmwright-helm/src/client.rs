//! Versioned Helm client download
//!
//! Fetches a client archive for the current platform from a Helm-style
//! download site (`<base>/helm-v<version>-<os>-<arch>.tar.gz`) and extracts
//! it into a destination directory. The version string is free-form; the
//! download site is the authority on whether it exists.

use std::path::Path;
use tracing::info;

use helmwright_core::ClientConfig;

use crate::error::{HelmError, Result};

/// Platform segment of the archive file name, e.g. `linux-amd64`
pub fn platform() -> Result<String> {
    let os = match std::env::consts::OS {
        "linux" => "linux",
        "macos" => "darwin",
        other => {
            return Err(HelmError::UnsupportedPlatform {
                os: other.to_string(),
                arch: std::env::consts::ARCH.to_string(),
            });
        }
    };
    let arch = match std::env::consts::ARCH {
        "x86_64" => "amd64",
        "aarch64" => "arm64",
        "arm" => "arm",
        other => {
            return Err(HelmError::UnsupportedPlatform {
                os: os.to_string(),
                arch: other.to_string(),
            });
        }
    };
    Ok(format!("{}-{}", os, arch))
}

/// Archive URL for a version on the current platform
pub fn download_url(base_url: &str, version: &str) -> Result<String> {
    let base = base_url.trim_end_matches('/');
    Ok(format!("{}/helm-v{}-{}.tar.gz", base, version, platform()?))
}

/// Download and extract the client into the configured destination
///
/// The archive's contents land under `<destination>/<platform>` the way
/// Helm packages them (the binary sits in a platform-named directory).
pub async fn download_client(config: &ClientConfig) -> Result<()> {
    let url = download_url(&config.base_url, &config.version)?;
    info!(url = %url, "downloading helm client");

    let response = reqwest::get(&url).await?;
    let status = response.status();
    if !status.is_success() {
        return Err(HelmError::DownloadFailed {
            status: status.as_u16(),
            message: format!("GET {}", url),
        });
    }

    let data = response.bytes().await?;
    extract_archive(&data, &config.destination)?;

    info!(destination = %config.destination.display(), "helm client extracted");
    Ok(())
}

/// Extract a tar.gz archive to a directory
fn extract_archive(data: &[u8], dest: &Path) -> Result<()> {
    use flate2::read::GzDecoder;
    use tar::Archive;

    let gz = GzDecoder::new(std::io::Cursor::new(data));
    let mut archive = Archive::new(gz);

    std::fs::create_dir_all(dest)?;
    archive.unpack(dest)?;

    Ok(())
}
