//! Per-chart packaging rule

use helmwright_core::names::{capitalize, decapitalize};
use helmwright_core::{NamePattern, Project, Result};

use crate::rule::TaskRule;
use crate::task::{Guard, HELM_GROUP, Task, TaskAction};

use super::update_dependencies;

pub const TEMPLATE: &str = "helmPackage<Chart>Chart";

/// Creates `helmPackage<Chart>Chart` tasks
///
/// Packaging depends on the chart's dependency-update task, which in turn
/// pulls in the package tasks of any managed sub-charts.
pub struct PackageChartRule {
    pattern: NamePattern,
    update_dependencies: NamePattern,
}

impl PackageChartRule {
    pub fn new() -> Result<Self> {
        Ok(Self {
            pattern: NamePattern::parse(TEMPLATE)?,
            update_dependencies: NamePattern::parse(update_dependencies::TEMPLATE)?,
        })
    }

    /// Canonical package-task name for a chart key
    pub fn task_name(&self, chart: &str) -> String {
        self.pattern.generate(&capitalize(chart))
    }
}

impl TaskRule for PackageChartRule {
    fn pattern(&self) -> &NamePattern {
        &self.pattern
    }

    fn create_for(&self, key: &str, project: &Project) -> Option<Task> {
        let chart = project.charts.get(&decapitalize(key))?;

        Some(Task {
            name: self.pattern.generate(key),
            group: HELM_GROUP,
            description: format!("Packages the {} chart", chart.name),
            action: Some(TaskAction::PackageChart {
                chart: chart.name.clone(),
            }),
            guard: Guard::Always,
            depends_on: vec![self.update_dependencies.generate(&capitalize(&chart.name))],
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
