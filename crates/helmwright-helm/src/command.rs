//! Helm subprocess invocation
//!
//! The Helm CLI is an opaque collaborator: commands are built from resolved
//! task configuration, executed as a blocking unit of work, and judged by
//! exit code. Stdout is handed back for the caller to parse (JSON for the
//! sub-commands that support `-o json`, plain text otherwise).

use serde::de::DeserializeOwned;
use std::path::Path;
use std::process::Stdio;
use tracing::debug;

use helmwright_core::{Chart, HelmSettings};

use crate::error::{HelmError, Result};

/// Captured output of a finished helm invocation
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

/// A single helm invocation under construction
#[derive(Debug, Clone)]
pub struct HelmCommand {
    executable: String,
    args: Vec<String>,
    extra_args: Vec<String>,
}

impl HelmCommand {
    /// Start building a command for a helm sub-command
    pub fn new(settings: &HelmSettings, subcommand: &str) -> Self {
        Self {
            executable: settings.executable.to_string_lossy().into_owned(),
            args: subcommand.split_whitespace().map(String::from).collect(),
            extra_args: settings.extra_args.clone(),
        }
    }

    /// Append a positional argument
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append a `--flag value` pair
    pub fn flag(mut self, flag: &str, value: impl Into<String>) -> Self {
        self.args.push(flag.to_string());
        self.args.push(value.into());
        self
    }

    /// The full command line, for display and dry runs
    pub fn rendered(&self) -> String {
        let mut parts = vec![self.executable.clone()];
        parts.extend(self.args.iter().cloned());
        parts.extend(self.extra_args.iter().cloned());
        parts.join(" ")
    }

    /// Run the command, failing on a non-zero exit code
    pub async fn run(&self) -> Result<CommandOutput> {
        debug!(command = %self.rendered(), "invoking helm");

        let output = tokio::process::Command::new(&self.executable)
            .args(&self.args)
            .args(&self.extra_args)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => HelmError::ExecutableNotFound {
                    executable: self.executable.clone(),
                },
                _ => HelmError::Io(e),
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        let command = self.args.join(" ");

        if !output.status.success() {
            return match output.status.code() {
                Some(code) => Err(HelmError::CommandFailed {
                    command,
                    code,
                    stderr,
                }),
                None => Err(HelmError::CommandKilled { command }),
            };
        }

        Ok(CommandOutput { stdout, stderr })
    }

    /// Run the command and deserialize its stdout as JSON
    pub async fn run_json<T: DeserializeOwned>(&self) -> Result<T> {
        let output = self.run().await?;
        Ok(serde_json::from_str(&output.stdout)?)
    }
}

/// `helm package <chart> --destination <dir> --version <version>`
pub fn package(settings: &HelmSettings, chart: &Chart) -> HelmCommand {
    HelmCommand::new(settings, "package")
        .arg(chart.source_dir.to_string_lossy())
        .flag("--destination", settings.output_dir.to_string_lossy())
        .flag("--version", &chart.version)
}

/// `helm lint <chart>`
pub fn lint(settings: &HelmSettings, chart: &Chart) -> HelmCommand {
    HelmCommand::new(settings, "lint").arg(chart.source_dir.to_string_lossy())
}

/// `helm dependency update <chart>`
pub fn dependency_update(settings: &HelmSettings, chart: &Chart) -> HelmCommand {
    HelmCommand::new(settings, "dependency update").arg(chart.source_dir.to_string_lossy())
}

/// `helm list -o json`, optionally namespaced
pub fn list_releases(settings: &HelmSettings, namespace: Option<&str>) -> HelmCommand {
    let command = HelmCommand::new(settings, "list").flag("-o", "json");
    match namespace {
        Some(ns) => command.flag("--namespace", ns),
        None => command.arg("--all-namespaces"),
    }
}

/// Settings pointing at an arbitrary executable (test support)
pub fn settings_for_executable(executable: &Path) -> HelmSettings {
    HelmSettings {
        executable: executable.to_path_buf(),
        ..HelmSettings::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::{Path, PathBuf};

    fn echo_settings() -> HelmSettings {
        settings_for_executable(Path::new("echo"))
    }

    #[test]
    fn test_rendered_command_line() {
        let settings = HelmSettings {
            executable: PathBuf::from("helm"),
            output_dir: PathBuf::from("dist/charts"),
            extra_args: vec!["--debug".to_string()],
        };
        let chart = Chart::new("foo", "charts/foo", "1.2.3");

        assert_eq!(
            package(&settings, &chart).rendered(),
            "helm package charts/foo --destination dist/charts --version 1.2.3 --debug"
        );
        assert_eq!(lint(&settings, &chart).rendered(), "helm lint charts/foo --debug");
        assert_eq!(
            dependency_update(&settings, &chart).rendered(),
            "helm dependency update charts/foo --debug"
        );
    }

    #[test]
    fn test_list_releases_arguments() {
        let settings = HelmSettings::default();
        assert_eq!(
            list_releases(&settings, Some("prod")).rendered(),
            "helm list -o json --namespace prod"
        );
        assert_eq!(
            list_releases(&settings, None).rendered(),
            "helm list -o json --all-namespaces"
        );
    }

    #[tokio::test]
    async fn test_run_captures_stdout() {
        let output = HelmCommand::new(&echo_settings(), "version")
            .arg("--short")
            .run()
            .await
            .unwrap();
        assert!(output.stdout.contains("version --short"));
    }

    #[tokio::test]
    async fn test_missing_executable() {
        let settings = settings_for_executable(Path::new("definitely-not-a-real-binary"));
        let err = HelmCommand::new(&settings, "version").run().await.unwrap_err();
        assert!(matches!(err, HelmError::ExecutableNotFound { .. }));
    }

    #[tokio::test]
    async fn test_nonzero_exit_code() {
        let settings = settings_for_executable(Path::new("false"));
        let err = HelmCommand::new(&settings, "anything").run().await.unwrap_err();
        assert!(matches!(err, HelmError::CommandFailed { code: 1, .. }));
    }
}
