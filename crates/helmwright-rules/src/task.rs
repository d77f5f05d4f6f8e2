//! Resolved task model
//!
//! A `Task` is created at most once per distinct name by the rule engine.
//! Dependency edges are stored as plain names and resolved only when the
//! edge is traversed, never at creation time.

use helmwright_core::Project;

/// Task group for chart build tasks
pub const HELM_GROUP: &str = "helm";

/// Task group for publishing tasks
pub const PUBLISH_GROUP: &str = "helm publishing";

/// What a task does when executed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskAction {
    /// `helm package` a chart into the output directory
    PackageChart { chart: String },

    /// `helm lint` a chart's sources
    LintChart { chart: String },

    /// `helm dependency update` a chart
    UpdateDependencies { chart: String },

    /// Upload a packaged chart archive to one repository
    PublishToRepository { chart: String, repository: String },

    /// Download and extract a versioned Helm client
    DownloadClient { version: String },
}

/// Execution-time guard condition
///
/// Evaluated against the project when the task runs, not when it is
/// resolved, so flipping a chart's publish flag between resolution and
/// execution is observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guard {
    Always,
    PublishEnabled { chart: String },
}

impl Guard {
    /// Evaluate the guard; a missing chart counts as disabled
    pub fn evaluate(&self, project: &Project) -> bool {
        match self {
            Guard::Always => true,
            Guard::PublishEnabled { chart } => {
                project.charts.get(chart).map(|c| c.publish).unwrap_or(false)
            }
        }
    }
}

/// A resolved, fully configured task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// The requested name this task was resolved under
    pub name: String,

    /// Task group label
    pub group: &'static str,

    /// Human-readable description
    pub description: String,

    /// The action, or `None` for pure lifecycle tasks that only aggregate edges
    pub action: Option<TaskAction>,

    /// Guard checked before execution
    pub guard: Guard,

    /// Dependency edges by target name, resolved lazily on traversal
    pub depends_on: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use helmwright_core::Chart;

    #[test]
    fn test_guard_publish_enabled() {
        let mut project = Project::default();
        let mut chart = Chart::new("foo", ".", "1.0.0");
        chart.publish = false;
        project.charts.register(chart).unwrap();

        let guard = Guard::PublishEnabled {
            chart: "foo".to_string(),
        };
        assert!(!guard.evaluate(&project));

        project.charts.get_mut("foo").unwrap().publish = true;
        assert!(guard.evaluate(&project));
    }

    #[test]
    fn test_guard_missing_chart_is_disabled() {
        let project = Project::default();
        let guard = Guard::PublishEnabled {
            chart: "ghost".to_string(),
        };
        assert!(!guard.evaluate(&project));
        assert!(Guard::Always.evaluate(&project));
    }
}
