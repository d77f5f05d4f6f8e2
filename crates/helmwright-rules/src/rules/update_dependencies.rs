//! Per-chart dependency-update rule

use helmwright_core::names::{capitalize, decapitalize};
use helmwright_core::{NamePattern, Project, Result};

use crate::rule::TaskRule;
use crate::task::{Guard, HELM_GROUP, Task, TaskAction};

use super::package;

pub const TEMPLATE: &str = "helmUpdate<Chart>ChartDependencies";

/// Creates `helmUpdate<Chart>ChartDependencies` tasks
///
/// When a chart declares dependencies on other managed charts, the update
/// task gets one edge per declared dependency, pointing at that chart's
/// package task. Edges are recorded by name only; a dependency on a chart
/// that is never registered surfaces as `UnresolvedDependency` at traversal
/// time, not here.
pub struct UpdateDependenciesRule {
    pattern: NamePattern,
    package: NamePattern,
}

impl UpdateDependenciesRule {
    pub fn new() -> Result<Self> {
        Ok(Self {
            pattern: NamePattern::parse(TEMPLATE)?,
            package: NamePattern::parse(package::TEMPLATE)?,
        })
    }

    pub fn task_name(&self, chart: &str) -> String {
        self.pattern.generate(&capitalize(chart))
    }
}

impl TaskRule for UpdateDependenciesRule {
    fn pattern(&self) -> &NamePattern {
        &self.pattern
    }

    fn create_for(&self, key: &str, project: &Project) -> Option<Task> {
        let chart = project.charts.get(&decapitalize(key))?;

        let depends_on = chart
            .dependencies
            .iter()
            .map(|dep| self.package.generate(&capitalize(dep)))
            .collect();

        Some(Task {
            name: self.pattern.generate(key),
            group: HELM_GROUP,
            description: format!("Updates dependencies for the {} chart", chart.name),
            action: Some(TaskAction::UpdateDependencies {
                chart: chart.name.clone(),
            }),
            guard: Guard::Always,
            depends_on,
        })
    }

    fn known_names(&self, project: &Project) -> Vec<String> {
        project
            .charts
            .iter()
            .map(|c| self.task_name(&c.name))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use helmwright_core::Chart;

    #[test]
    fn test_edges_point_at_dependency_package_tasks() {
        let rule = UpdateDependenciesRule::new().unwrap();
        let mut project = Project::default();

        let mut chart = Chart::new("app", ".", "1.0.0");
        chart.dependencies = vec!["common".to_string(), "db".to_string()];
        project.charts.register(chart).unwrap();

        let task = rule.create_for("App", &project).unwrap();
        assert_eq!(task.name, "helmUpdateAppChartDependencies");
        assert_eq!(
            task.depends_on,
            vec!["helmPackageCommonChart", "helmPackageDbChart"]
        );
    }

    #[test]
    fn test_no_dependencies_means_no_edges() {
        let rule = UpdateDependenciesRule::new().unwrap();
        let mut project = Project::default();
        project
            .charts
            .register(Chart::new("app", ".", "1.0.0"))
            .unwrap();

        let task = rule.create_for("App", &project).unwrap();
        assert!(task.depends_on.is_empty());
    }
}
