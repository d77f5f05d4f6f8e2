//! Helmwright Rules - lazy task resolution for the Helm build-task runner
//!
//! This crate turns requested task names into configured tasks:
//!
//! - **Rules**: pattern-keyed task factories (`helmPackage<Chart>Chart`,
//!   `helmPublish<Chart>Chart`, ...) that look up domain objects at
//!   resolution time and decline silently when they do not exist
//! - **RuleEngine**: ordered first-match-wins rule list with a memoizing
//!   cache; a name resolves to the same task instance every time
//! - **ExecutionPlan**: walks dependency edges lazily through the engine,
//!   producing tasks in execution order
//!
//! Resolution is single-threaded and synchronous; the only mutation is the
//! engine's cache.

pub mod edges;
pub mod engine;
pub mod error;
pub mod rule;
pub mod rules;
pub mod task;

pub use edges::{ExecutionPlan, render_tree};
pub use engine::RuleEngine;
pub use error::{Result, RuleError};
pub use rule::TaskRule;
pub use rules::{
    DownloadClientRule, LintChartRule, PackageChartRule, PublishChartRule,
    PublishToRepositoryRule, UpdateDependenciesRule, standard_rules,
};
pub use task::{Guard, HELM_GROUP, PUBLISH_GROUP, Task, TaskAction};
