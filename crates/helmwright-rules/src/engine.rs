//! The rule engine: a lazy, memoizing task factory keyed by name
//!
//! Resolution semantics:
//! - A cached name always returns the same `Rc<Task>` instance; rule logic
//!   never runs twice for one name.
//! - Rules are tried in registration order. The first rule whose pattern
//!   structurally matches owns the name: if it declines, the engine returns
//!   nothing rather than falling through, so two differently-scoped rules
//!   can never double-handle a name.
//! - Tasks are only created for names actually requested.

use std::collections::HashMap;
use std::rc::Rc;

use helmwright_core::{Project, Result as CoreResult};
use tracing::debug;

use crate::rule::TaskRule;
use crate::rules::standard_rules;
use crate::task::Task;

/// Ordered rule list plus result cache over a resolved project
pub struct RuleEngine {
    project: Project,
    rules: Vec<Box<dyn TaskRule>>,
    cache: HashMap<String, Rc<Task>>,
}

impl RuleEngine {
    /// Create an engine with no rules
    pub fn new(project: Project) -> Self {
        Self {
            project,
            rules: Vec::new(),
            cache: HashMap::new(),
        }
    }

    /// Create an engine carrying the standard Helmwright rule set
    pub fn with_standard_rules(project: Project) -> CoreResult<Self> {
        let mut engine = Self::new(project);
        engine.rules = standard_rules()?;
        Ok(engine)
    }

    /// Append a rule; registration order is priority order
    pub fn add_rule(&mut self, rule: Box<dyn TaskRule>) {
        self.rules.push(rule);
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    /// Mutable project access for the configuration phase
    pub fn project_mut(&mut self) -> &mut Project {
        &mut self.project
    }

    /// Resolve a name to a task, creating and caching it on first request
    pub fn resolve(&mut self, name: &str) -> Option<Rc<Task>> {
        if let Some(task) = self.cache.get(name) {
            return Some(Rc::clone(task));
        }

        for rule in &self.rules {
            let Some(key) = rule.pattern().match_entire(name) else {
                continue;
            };

            // First structurally-matching rule owns the decision.
            return match rule.create_for(key, &self.project) {
                Some(task) => {
                    debug!(task = name, pattern = %rule.pattern(), "task resolved");
                    let task = Rc::new(task);
                    self.cache.insert(name.to_string(), Rc::clone(&task));
                    Some(task)
                }
                None => {
                    debug!(task = name, pattern = %rule.pattern(), "rule declined");
                    None
                }
            };
        }

        None
    }

    /// Whether a name has already been materialized
    pub fn is_resolved(&self, name: &str) -> bool {
        self.cache.contains_key(name)
    }

    /// All concrete task names the registered rules can currently produce
    pub fn known_task_names(&self) -> Vec<String> {
        self.rules
            .iter()
            .flat_map(|r| r.known_names(&self.project))
            .collect()
    }
}
