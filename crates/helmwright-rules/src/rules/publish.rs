//! Publishing rules
//!
//! Two rules cooperate here. `PublishToRepositoryRule` owns the
//! per-repository tasks; its pattern has a single placeholder that captures
//! `<Chart>ChartTo<Repo>` as one key, split on the `ChartTo` literal. That
//! keeps the rule registrable before any repository exists. The aggregate
//! `PublishChartRule` fans out one edge per registered repository using the
//! per-repository pattern, plus an edge to the chart's package task.

use helmwright_core::names::{capitalize, decapitalize};
use helmwright_core::{NamePattern, Project, Result};

use crate::rule::TaskRule;
use crate::task::{Guard, PUBLISH_GROUP, Task, TaskAction};

use super::package;

pub const AGGREGATE_TEMPLATE: &str = "helmPublish<Chart>Chart";
pub const TO_REPOSITORY_TEMPLATE: &str = "helmPublish<Publication>Repository";

/// Separator between the chart and repository segments of a publish key
const CHART_TO: &str = "ChartTo";

/// Creates `helmPublish<Chart>ChartTo<Repo>Repository` tasks
pub struct PublishToRepositoryRule {
    pattern: NamePattern,
    package: NamePattern,
}

impl PublishToRepositoryRule {
    pub fn new() -> Result<Self> {
        Ok(Self {
            pattern: NamePattern::parse(TO_REPOSITORY_TEMPLATE)?,
            package: NamePattern::parse(package::TEMPLATE)?,
        })
    }

    /// Canonical task name for a chart/repository pair
    pub fn task_name(&self, chart: &str, repository: &str) -> String {
        self.pattern.generate(&format!(
            "{}{}{}",
            capitalize(chart),
            CHART_TO,
            capitalize(repository)
        ))
    }
}

impl TaskRule for PublishToRepositoryRule {
    fn pattern(&self) -> &NamePattern {
        &self.pattern
    }

    fn create_for(&self, key: &str, project: &Project) -> Option<Task> {
        let (chart_key, repo_key) = key.split_once(CHART_TO)?;
        if chart_key.is_empty() || repo_key.is_empty() {
            return None;
        }

        let chart = project.charts.get(&decapitalize(chart_key))?;
        let repository = project.repositories.get(&decapitalize(repo_key))?;

        Some(Task {
            name: self.pattern.generate(key),
            group: PUBLISH_GROUP,
            description: format!(
                "Publishes the {} chart to the {} repository",
                chart.name, repository.name
            ),
            action: Some(TaskAction::PublishToRepository {
                chart: chart.name.clone(),
                repository: repository.name.clone(),
            }),
            guard: Guard::PublishEnabled {
                chart: chart.name.clone(),
            },
            depends_on: vec![self.package.generate(&capitalize(&chart.name))],
        })
    }

    fn known_names(&self, project: &Project) -> Vec<String> {
        project
            .charts
            .iter()
            .flat_map(|c| {
                project
                    .repositories
                    .iter()
                    .map(|r| self.task_name(&c.name, &r.name))
            })
            .collect()
    }
}

/// Creates the aggregate `helmPublish<Chart>Chart` tasks
///
/// The repository list is read when the task is created, so repositories
/// registered after this rule still contribute edges; edge targets are only
/// resolved when the graph is walked.
pub struct PublishChartRule {
    pattern: NamePattern,
    package: NamePattern,
    to_repository: NamePattern,
}

impl PublishChartRule {
    pub fn new() -> Result<Self> {
        Ok(Self {
            pattern: NamePattern::parse(AGGREGATE_TEMPLATE)?,
            package: NamePattern::parse(package::TEMPLATE)?,
            to_repository: NamePattern::parse(TO_REPOSITORY_TEMPLATE)?,
        })
    }

    pub fn task_name(&self, chart: &str) -> String {
        self.pattern.generate(&capitalize(chart))
    }
}

impl TaskRule for PublishChartRule {
    fn pattern(&self) -> &NamePattern {
        &self.pattern
    }

    fn create_for(&self, key: &str, project: &Project) -> Option<Task> {
        let chart = project.charts.get(&decapitalize(key))?;

        let mut depends_on = vec![self.package.generate(&capitalize(&chart.name))];
        for repo in project.repositories.iter() {
            depends_on.push(self.to_repository.generate(&format!(
                "{}{}{}",
                capitalize(&chart.name),
                CHART_TO,
                capitalize(&repo.name)
            )));
        }

        Some(Task {
            name: self.pattern.generate(key),
            group: PUBLISH_GROUP,
            description: format!("Publishes the {} chart to all repositories", chart.name),
            action: None,
            guard: Guard::PublishEnabled {
                chart: chart.name.clone(),
            },
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
    use helmwright_core::{Chart, Repository};

    fn project() -> Project {
        let mut project = Project::default();
        project
            .charts
            .register(Chart::new("foo", ".", "1.0.0"))
            .unwrap();
        project
            .repositories
            .register(Repository::new("bar", "https://charts.example.com").unwrap())
            .unwrap();
        project
    }

    #[test]
    fn test_to_repository_splits_key() {
        let rule = PublishToRepositoryRule::new().unwrap();
        let task = rule.create_for("FooChartToBar", &project()).unwrap();

        assert_eq!(task.name, "helmPublishFooChartToBarRepository");
        assert_eq!(
            task.action,
            Some(TaskAction::PublishToRepository {
                chart: "foo".to_string(),
                repository: "bar".to_string(),
            })
        );
        assert_eq!(task.depends_on, vec!["helmPackageFooChart"]);
    }

    #[test]
    fn test_to_repository_declines_unknown_parts() {
        let rule = PublishToRepositoryRule::new().unwrap();
        let p = project();

        assert!(rule.create_for("GhostChartToBar", &p).is_none());
        assert!(rule.create_for("FooChartToGhost", &p).is_none());
        assert!(rule.create_for("FooBar", &p).is_none());
        assert!(rule.create_for("ChartToBar", &p).is_none());
    }

    #[test]
    fn test_aggregate_edges_cover_package_and_repositories() {
        let rule = PublishChartRule::new().unwrap();
        let mut p = project();
        p.repositories
            .register(Repository::new("internal", "https://internal.example.com").unwrap())
            .unwrap();

        let task = rule.create_for("Foo", &p).unwrap();
        assert_eq!(
            task.depends_on,
            vec![
                "helmPackageFooChart",
                "helmPublishFooChartToBarRepository",
                "helmPublishFooChartToInternalRepository",
            ]
        );
        assert_eq!(task.action, None);
        assert_eq!(
            task.guard,
            Guard::PublishEnabled {
                chart: "foo".to_string()
            }
        );
    }

    #[test]
    fn test_aggregate_with_zero_repositories() {
        let rule = PublishChartRule::new().unwrap();
        let mut p = Project::default();
        p.charts.register(Chart::new("foo", ".", "1.0.0")).unwrap();

        let task = rule.create_for("Foo", &p).unwrap();
        assert_eq!(task.depends_on, vec!["helmPackageFooChart"]);
    }

    #[test]
    fn test_task_name_capitalizes_both_keys() {
        let rule = PublishToRepositoryRule::new().unwrap();
        assert_eq!(
            rule.task_name("my-app", "staging"),
            "helmPublishMy-appChartToStagingRepository"
        );
    }
}
