//! Tasks command - list every resolvable task

use console::style;
use std::collections::BTreeMap;
use std::path::Path;

use crate::commands::build_engine;
use crate::error::Result;

pub fn run(file: &Path) -> Result<()> {
    let mut engine = build_engine(file)?;

    // Group tasks the way build tools list them.
    let mut by_group: BTreeMap<&'static str, Vec<(String, String)>> = BTreeMap::new();
    for name in engine.known_task_names() {
        if let Some(task) = engine.resolve(&name) {
            by_group
                .entry(task.group)
                .or_default()
                .push((task.name.clone(), task.description.clone()));
        }
    }

    if by_group.is_empty() {
        println!("No tasks. Add charts to the project file to get task rules going.");
        return Ok(());
    }

    for (group, tasks) in by_group {
        println!("{}", style(group).bold().underlined());
        for (name, description) in tasks {
            println!("  {} - {}", style(name).green(), description);
        }
        println!();
    }

    Ok(())
}
