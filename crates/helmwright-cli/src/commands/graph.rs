//! Graph command - print a task's dependency tree

use std::path::Path;

use helmwright_rules::{RuleError, render_tree};

use crate::commands::build_engine;
use crate::error::{CliError, Result};
use crate::suggest::suggest_task;

pub fn run(file: &Path, task: &str) -> Result<()> {
    let mut engine = build_engine(file)?;

    match render_tree(&mut engine, task) {
        Ok(tree) => {
            println!("{}", tree);
            Ok(())
        }
        Err(err @ RuleError::UnknownTask { .. }) => {
            let help = suggest_task(task, &engine.known_task_names());
            Err(CliError::task(err.to_string(), help))
        }
        Err(err) => Err(err.into()),
    }
}
