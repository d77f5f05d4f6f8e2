//! Per-chart lint rule

use helmwright_core::names::{capitalize, decapitalize};
use helmwright_core::{NamePattern, Project, Result};

use crate::rule::TaskRule;
use crate::task::{Guard, HELM_GROUP, Task, TaskAction};

pub const TEMPLATE: &str = "helmLint<Chart>Chart";

/// Creates `helmLint<Chart>Chart` tasks
pub struct LintChartRule {
    pattern: NamePattern,
}

impl LintChartRule {
    pub fn new() -> Result<Self> {
        Ok(Self {
            pattern: NamePattern::parse(TEMPLATE)?,
        })
    }

    pub fn task_name(&self, chart: &str) -> String {
        self.pattern.generate(&capitalize(chart))
    }
}

impl TaskRule for LintChartRule {
    fn pattern(&self) -> &NamePattern {
        &self.pattern
    }

    fn create_for(&self, key: &str, project: &Project) -> Option<Task> {
        let chart = project.charts.get(&decapitalize(key))?;

        Some(Task {
            name: self.pattern.generate(key),
            group: HELM_GROUP,
            description: format!("Lints the {} chart", chart.name),
            action: Some(TaskAction::LintChart {
                chart: chart.name.clone(),
            }),
            guard: Guard::Always,
            depends_on: Vec::new(),
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
