//! Releases command - list deployed releases via helm

use console::style;
use std::path::Path;

use helmwright_helm as helm;

use crate::commands::load_project;
use crate::error::Result;

pub async fn run(file: &Path, namespace: Option<&str>) -> Result<()> {
    let project = load_project(file)?;

    let output = helm::list_releases(&project.helm, namespace).run().await?;
    let releases = helm::parse_releases(&output.stdout)?;

    if releases.is_empty() {
        println!("No releases found.");
        return Ok(());
    }

    println!(
        "{:<24} {:<16} {:<10} {:<16} {}",
        style("NAME").bold(),
        style("NAMESPACE").bold(),
        style("REVISION").bold(),
        style("STATUS").bold(),
        style("CHART").bold()
    );
    for release in releases {
        println!(
            "{:<24} {:<16} {:<10} {:<16} {}",
            release.name, release.namespace, release.revision, release.status, release.chart
        );
    }

    Ok(())
}
