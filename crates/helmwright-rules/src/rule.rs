//! The task rule abstraction
//!
//! A rule is a pattern-matching task factory: it decides structurally (via
//! its `NamePattern`) whether a requested name belongs to it, and then
//! either produces a fully configured task or silently declines when the
//! referenced domain object does not exist. Declining is the normal path
//! for "no such chart" and must never be an error.

use helmwright_core::{NamePattern, Project};

use crate::task::Task;

/// A unit of lazy task creation
pub trait TaskRule {
    /// The pattern that decides structural applicability
    fn pattern(&self) -> &NamePattern;

    /// Create the task for a captured key, or decline
    ///
    /// `key` is the placeholder capture from this rule's own pattern. The
    /// registries are read through `project` at call time, so objects
    /// registered after the rule are visible here.
    fn create_for(&self, key: &str, project: &Project) -> Option<Task>;

    /// Whether this rule structurally matches the requested name
    fn applies_to(&self, name: &str) -> bool {
        self.pattern().match_entire(name).is_some()
    }

    /// Concrete names this rule can currently produce, for task listings
    fn known_names(&self, project: &Project) -> Vec<String> {
        let _ = project;
        Vec::new()
    }
}
