//! Deferred dependency-edge traversal
//!
//! A task records its dependency edges as plain names. Targets are resolved
//! through the engine only when the graph is actually walked, so the order
//! in which charts, repositories, and rules were declared never matters.
//! A missing edge target is `UnresolvedDependency` (the edge was expected
//! to resolve); this is deliberately distinct from the silent non-match a
//! direct request for a nonexistent task gets.

use std::collections::HashSet;
use std::rc::Rc;

use crate::engine::RuleEngine;
use crate::error::{Result, RuleError};
use crate::task::Task;

/// Tasks in dependency order, each task after everything it depends on
#[derive(Debug)]
pub struct ExecutionPlan {
    tasks: Vec<Rc<Task>>,
}

impl ExecutionPlan {
    /// Resolve `root` and every transitively referenced edge target
    ///
    /// Fails with `UnknownTask` if the root itself does not resolve, with
    /// `UnresolvedDependency` for a dead edge, and with `DependencyCycle`
    /// if traversal re-enters a task still on the walk stack.
    pub fn build(engine: &mut RuleEngine, root: &str) -> Result<Self> {
        if engine.resolve(root).is_none() {
            return Err(RuleError::UnknownTask {
                name: root.to_string(),
            });
        }

        let mut plan = Self { tasks: Vec::new() };
        let mut visited = HashSet::new();
        let mut stack = Vec::new();
        plan.visit(engine, root, root, &mut visited, &mut stack)?;
        Ok(plan)
    }

    fn visit(
        &mut self,
        engine: &mut RuleEngine,
        name: &str,
        required_by: &str,
        visited: &mut HashSet<String>,
        stack: &mut Vec<String>,
    ) -> Result<()> {
        if visited.contains(name) {
            return Ok(());
        }
        if stack.iter().any(|s| s == name) {
            let mut chain = stack.clone();
            chain.push(name.to_string());
            return Err(RuleError::DependencyCycle {
                chain: chain.join(" -> "),
            });
        }

        let task = engine
            .resolve(name)
            .ok_or_else(|| RuleError::UnresolvedDependency {
                task: required_by.to_string(),
                dependency: name.to_string(),
            })?;

        stack.push(name.to_string());
        for edge in task.depends_on.clone() {
            self.visit(engine, &edge, name, visited, stack)?;
        }
        stack.pop();

        visited.insert(name.to_string());
        self.tasks.push(task);
        Ok(())
    }

    /// Tasks in execution order; the root is last
    pub fn tasks(&self) -> &[Rc<Task>] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// Render the dependency tree under `root` for display
pub fn render_tree(engine: &mut RuleEngine, root: &str) -> Result<String> {
    // Building the plan first surfaces dead edges and cycles.
    ExecutionPlan::build(engine, root)?;

    let mut lines = vec![root.to_string()];
    render_node(engine, root, "", &mut lines);
    Ok(lines.join("\n"))
}

fn render_node(engine: &mut RuleEngine, name: &str, prefix: &str, lines: &mut Vec<String>) {
    // The plan above already resolved every reachable task.
    let Some(task) = engine.resolve(name) else {
        return;
    };

    let count = task.depends_on.len();
    for (i, edge) in task.depends_on.iter().enumerate() {
        let is_last = i == count - 1;
        let connector = if is_last { "└── " } else { "├── " };
        lines.push(format!("{}{}{}", prefix, connector, edge));

        let child_prefix = format!("{}{}   ", prefix, if is_last { " " } else { "│" });
        render_node(engine, edge, &child_prefix, lines);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::TaskRule;
    use crate::task::{Guard, HELM_GROUP, TaskAction};
    use helmwright_core::{Chart, NamePattern, Project, Repository};

    fn engine_with(charts: &[(&str, &[&str])], repos: &[&str]) -> RuleEngine {
        let mut project = Project::default();
        for (name, deps) in charts {
            let mut chart = Chart::new(*name, ".", "1.0.0");
            chart.dependencies = deps.iter().map(|d| d.to_string()).collect();
            project.charts.register(chart).unwrap();
        }
        for repo in repos {
            project
                .repositories
                .register(Repository::new(*repo, "https://charts.example.com").unwrap())
                .unwrap();
        }
        RuleEngine::with_standard_rules(project).unwrap()
    }

    #[test]
    fn test_plan_orders_dependencies_first() {
        let mut engine = engine_with(&[("foo", &[])], &["bar"]);

        let plan = ExecutionPlan::build(&mut engine, "helmPublishFooChart").unwrap();
        let names: Vec<_> = plan.tasks().iter().map(|t| t.name.as_str()).collect();

        assert_eq!(
            names,
            vec![
                "helmUpdateFooChartDependencies",
                "helmPackageFooChart",
                "helmPublishFooChartToBarRepository",
                "helmPublishFooChart",
            ]
        );
    }

    #[test]
    fn test_plan_deduplicates_shared_edges() {
        // Both the aggregate and the per-repo task depend on packaging;
        // the package task appears exactly once.
        let mut engine = engine_with(&[("foo", &[])], &["bar", "baz"]);

        let plan = ExecutionPlan::build(&mut engine, "helmPublishFooChart").unwrap();
        let package_count = plan
            .tasks()
            .iter()
            .filter(|t| t.name == "helmPackageFooChart")
            .count();
        assert_eq!(package_count, 1);
    }

    #[test]
    fn test_plan_follows_subchart_edges() {
        let mut engine = engine_with(&[("app", &["common"]), ("common", &[])], &[]);

        let plan = ExecutionPlan::build(&mut engine, "helmPackageAppChart").unwrap();
        let names: Vec<_> = plan.tasks().iter().map(|t| t.name.as_str()).collect();

        let common_idx = names
            .iter()
            .position(|n| *n == "helmPackageCommonChart")
            .unwrap();
        let app_idx = names
            .iter()
            .position(|n| *n == "helmPackageAppChart")
            .unwrap();
        assert!(common_idx < app_idx);
    }

    #[test]
    fn test_unknown_root() {
        let mut engine = engine_with(&[("foo", &[])], &[]);

        let err = ExecutionPlan::build(&mut engine, "helmPackageGhostChart").unwrap_err();
        assert!(matches!(err, RuleError::UnknownTask { .. }));
    }

    #[test]
    fn test_dead_edge_is_unresolved_dependency() {
        // app declares a dependency on a chart that was never registered;
        // the edge exists but its target does not resolve.
        let mut engine = engine_with(&[("app", &["ghost"])], &[]);

        let err = ExecutionPlan::build(&mut engine, "helmPackageAppChart").unwrap_err();
        assert!(matches!(
            err,
            RuleError::UnresolvedDependency { ref dependency, .. }
                if dependency == "helmPackageGhostChart"
        ));
    }

    #[test]
    fn test_cycle_is_detected() {
        let mut engine = engine_with(&[("a", &["b"]), ("b", &["a"])], &[]);

        let err = ExecutionPlan::build(&mut engine, "helmPackageAChart").unwrap_err();
        assert!(matches!(err, RuleError::DependencyCycle { .. }));
    }

    /// Rule producing a task that depends on itself
    struct SelfReferentialRule {
        pattern: NamePattern,
    }

    impl TaskRule for SelfReferentialRule {
        fn pattern(&self) -> &NamePattern {
            &self.pattern
        }

        fn create_for(&self, key: &str, _project: &Project) -> Option<Task> {
            let name = self.pattern.generate(key);
            Some(Task {
                name: name.clone(),
                group: HELM_GROUP,
                description: String::new(),
                action: Some(TaskAction::LintChart {
                    chart: key.to_string(),
                }),
                guard: Guard::Always,
                depends_on: vec![name],
            })
        }
    }

    #[test]
    fn test_self_referential_task_does_not_recurse_forever() {
        let mut engine = RuleEngine::new(Project::default());
        engine.add_rule(Box::new(SelfReferentialRule {
            pattern: NamePattern::parse("loop<Name>").unwrap(),
        }));

        let err = ExecutionPlan::build(&mut engine, "loopX").unwrap_err();
        assert!(matches!(err, RuleError::DependencyCycle { .. }));
    }

    #[test]
    fn test_render_tree() {
        let mut engine = engine_with(&[("foo", &[])], &["bar"]);

        let tree = render_tree(&mut engine, "helmPublishFooChart").unwrap();
        assert!(tree.contains("helmPublishFooChart"));
        assert!(tree.contains("helmPublishFooChartToBarRepository"));
        assert!(tree.contains("└── "));
    }
}
