//! Versioned client download rule

use helmwright_core::{NamePattern, Project, Result};

use crate::rule::TaskRule;
use crate::task::{Guard, HELM_GROUP, Task, TaskAction};

pub const TEMPLATE: &str = "helmDownloadClient_<Version>";

/// Creates `helmDownloadClient_<Version>` tasks
///
/// The version is free-form and never validated against a registry; any
/// structurally matching name yields a task. Base URL and destination come
/// from the project's client configuration at execution time.
pub struct DownloadClientRule {
    pattern: NamePattern,
}

impl DownloadClientRule {
    pub fn new() -> Result<Self> {
        Ok(Self {
            pattern: NamePattern::parse(TEMPLATE)?,
        })
    }

    pub fn task_name(&self, version: &str) -> String {
        self.pattern.generate(version)
    }
}

impl TaskRule for DownloadClientRule {
    fn pattern(&self) -> &NamePattern {
        &self.pattern
    }

    fn create_for(&self, key: &str, _project: &Project) -> Option<Task> {
        Some(Task {
            name: self.pattern.generate(key),
            group: HELM_GROUP,
            description: format!("Downloads the Helm client, version {}", key),
            action: Some(TaskAction::DownloadClient {
                version: key.to_string(),
            }),
            guard: Guard::Always,
            depends_on: Vec::new(),
        })
    }

    fn known_names(&self, project: &Project) -> Vec<String> {
        project
            .download_client
            .as_ref()
            .map(|c| vec![self.task_name(&c.version)])
            .unwrap_or_default()
    }
}
