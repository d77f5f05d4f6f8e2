//! Run command - resolve a task and execute its plan

use console::style;
use std::path::Path;

use helmwright_core::{ClientConfig, Project};
use helmwright_helm as helm;
use helmwright_repo::Publisher;
use helmwright_rules::{ExecutionPlan, RuleError, Task, TaskAction};

use crate::commands::build_engine;
use crate::error::{CliError, Result};
use crate::suggest::suggest_task;

pub async fn run(file: &Path, task: &str, dry_run: bool) -> Result<()> {
    let mut engine = build_engine(file)?;

    let plan = match ExecutionPlan::build(&mut engine, task) {
        Ok(plan) => plan,
        Err(err @ RuleError::UnknownTask { .. }) => {
            let help = suggest_task(task, &engine.known_task_names());
            return Err(CliError::task(err.to_string(), help));
        }
        Err(err) => return Err(err.into()),
    };

    println!(
        "{} Running {} ({} task(s))",
        style("→").blue(),
        style(task).bold(),
        plan.len()
    );

    for task in plan.tasks() {
        execute(task, engine.project(), dry_run).await?;
    }

    println!("{} Done", style("✓").green().bold());
    Ok(())
}

async fn execute(task: &Task, project: &Project, dry_run: bool) -> Result<()> {
    if !task.guard.evaluate(project) {
        println!(
            "  {} {} (guard disabled)",
            style("-").dim(),
            style(&task.name).dim()
        );
        return Ok(());
    }

    let Some(action) = &task.action else {
        // Lifecycle task: all of its work is in its edges.
        println!("  {} {}", style("✓").green(), task.name);
        return Ok(());
    };

    match action {
        TaskAction::PackageChart { chart } => {
            let chart = lookup_chart(project, chart)?;
            let command = helm::package(&project.helm, chart);
            if dry_run {
                println!("  {} {} [{}]", style("~").yellow(), task.name, command.rendered());
            } else {
                std::fs::create_dir_all(&project.helm.output_dir)?;
                command.run().await?;
                println!("  {} {}", style("✓").green(), task.name);
            }
        }
        TaskAction::LintChart { chart } => {
            let chart = lookup_chart(project, chart)?;
            let command = helm::lint(&project.helm, chart);
            if dry_run {
                println!("  {} {} [{}]", style("~").yellow(), task.name, command.rendered());
            } else {
                command.run().await?;
                println!("  {} {}", style("✓").green(), task.name);
            }
        }
        TaskAction::UpdateDependencies { chart } => {
            let chart = lookup_chart(project, chart)?;
            let command = helm::dependency_update(&project.helm, chart);
            if dry_run {
                println!("  {} {} [{}]", style("~").yellow(), task.name, command.rendered());
            } else {
                command.run().await?;
                println!("  {} {}", style("✓").green(), task.name);
            }
        }
        TaskAction::PublishToRepository { chart, repository } => {
            let chart = lookup_chart(project, chart)?;
            let repo = project.repositories.get(repository).ok_or_else(|| {
                CliError::Config {
                    message: format!("repository not found: {}", repository),
                }
            })?;
            let archive = project.packaged_chart_path(chart);
            if dry_run {
                println!(
                    "  {} {} [upload {} to {}]",
                    style("~").yellow(),
                    task.name,
                    archive.display(),
                    repo.url
                );
            } else {
                Publisher::new().publish(repo, &archive).await?;
                println!("  {} {}", style("✓").green(), task.name);
            }
        }
        TaskAction::DownloadClient { version } => {
            let config = client_config(project, version);
            if dry_run {
                println!(
                    "  {} {} [download helm v{} to {}]",
                    style("~").yellow(),
                    task.name,
                    version,
                    config.destination.display()
                );
            } else {
                helm::download_client(&config).await?;
                println!("  {} {}", style("✓").green(), task.name);
            }
        }
    }

    Ok(())
}

fn lookup_chart<'a>(project: &'a Project, name: &str) -> Result<&'a helmwright_core::Chart> {
    project.charts.get(name).ok_or_else(|| CliError::Config {
        message: format!("chart not found: {}", name),
    })
}

/// Client download settings: the requested version over the project's
/// configured base URL and destination
fn client_config(project: &Project, version: &str) -> ClientConfig {
    match &project.download_client {
        Some(configured) => ClientConfig {
            version: version.to_string(),
            base_url: configured.base_url.clone(),
            destination: configured.destination.clone(),
        },
        None => ClientConfig::for_version(version),
    }
}
