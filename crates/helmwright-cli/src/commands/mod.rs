//! CLI command implementations

pub mod graph;
pub mod releases;
pub mod run;
pub mod tasks;

use std::path::Path;

use helmwright_core::{Project, ProjectConfig};
use helmwright_rules::RuleEngine;

use crate::error::{CliError, Result};

/// Load the project file and build the resolved project
pub fn load_project(file: &Path) -> Result<Project> {
    if !file.exists() {
        return Err(CliError::Config {
            message: format!("project file not found: {}", file.display()),
        });
    }
    let config = ProjectConfig::load_from(file)?;
    Ok(config.into_project()?)
}

/// Build a rule engine with the standard rule set over the project
pub fn build_engine(file: &Path) -> Result<RuleEngine> {
    let project = load_project(file)?;
    Ok(RuleEngine::with_standard_rules(project)?)
}
