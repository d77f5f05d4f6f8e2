//! Helmwright CLI - the Helm build-task runner

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod error;
mod exit_codes;
mod suggest;

#[derive(Parser)]
#[command(name = "helmwright")]
#[command(author = "Helmwright Contributors")]
#[command(version)]
#[command(about = "Packages, lints, and publishes Helm charts from a project file", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Project file
    #[arg(short = 'f', long = "file", global = true, default_value = helmwright_core::DEFAULT_PROJECT_FILE)]
    file: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// List all tasks the project's rules can produce
    Tasks,

    /// Print a task's dependency tree
    Graph {
        /// Task name, e.g. helmPublishFooChart
        task: String,
    },

    /// Resolve a task and run it with its dependencies
    Run {
        /// Task name, e.g. helmPackageFooChart
        task: String,

        /// Print the commands without executing anything
        #[arg(long)]
        dry_run: bool,
    },

    /// List deployed releases
    Releases {
        /// Restrict to one namespace (default: all namespaces)
        #[arg(short, long)]
        namespace: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    miette::set_panic_hook();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Tasks => commands::tasks::run(&cli.file),
        Commands::Graph { task } => commands::graph::run(&cli.file, &task),
        Commands::Run { task, dry_run } => commands::run::run(&cli.file, &task, dry_run).await,
        Commands::Releases { namespace } => {
            commands::releases::run(&cli.file, namespace.as_deref()).await
        }
    };

    if let Err(err) = result {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}
