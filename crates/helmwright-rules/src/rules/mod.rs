//! Standard rule set
//!
//! One rule per task family. Registration order matters (the engine is
//! first-structural-match-wins), although the standard patterns are
//! mutually disjoint by their suffixes.

mod download;
mod lint;
mod package;
mod publish;
mod update_dependencies;

pub use download::DownloadClientRule;
pub use lint::LintChartRule;
pub use package::PackageChartRule;
pub use publish::{PublishChartRule, PublishToRepositoryRule};
pub use update_dependencies::UpdateDependenciesRule;

use helmwright_core::Result;

use crate::rule::TaskRule;

/// The standard Helmwright rules, in registration order
pub fn standard_rules() -> Result<Vec<Box<dyn TaskRule>>> {
    Ok(vec![
        Box::new(PackageChartRule::new()?),
        Box::new(LintChartRule::new()?),
        Box::new(UpdateDependenciesRule::new()?),
        Box::new(PublishToRepositoryRule::new()?),
        Box::new(PublishChartRule::new()?),
        Box::new(DownloadClientRule::new()?),
    ])
}
