//! Integration tests for CLI commands

use std::path::Path;
use std::process::Command;

/// Helper to run helmwright against a project file
fn helmwright(project_file: &Path, args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_helmwright"))
        .arg("--file")
        .arg(project_file)
        .args(args)
        .output()
        .expect("Failed to execute helmwright")
}

fn write_project(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("helmwright.yaml");
    std::fs::write(
        &path,
        r#"
charts:
  - name: foo
    sourceDir: charts/foo
    version: 1.0.0
  - name: internal
    sourceDir: charts/internal
    version: 0.3.0
    publish: false
repositories:
  - name: bar
    url: https://charts.example.com
"#,
    )
    .unwrap();
    path
}

mod tasks_command {
    use super::*;

    #[test]
    fn test_lists_chart_tasks() {
        let dir = tempfile::tempdir().unwrap();
        let project = write_project(&dir);

        let output = helmwright(&project, &["tasks"]);
        assert!(output.status.success());

        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("helmPackageFooChart"));
        assert!(stdout.contains("helmLintFooChart"));
        assert!(stdout.contains("helmPublishFooChartToBarRepository"));
        assert!(stdout.contains("helmPackageInternalChart"));
    }

    #[test]
    fn test_missing_project_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.yaml");

        let output = helmwright(&missing, &["tasks"]);
        assert!(!output.status.success());
        assert_eq!(output.status.code(), Some(2));
    }
}

mod graph_command {
    use super::*;

    #[test]
    fn test_prints_dependency_tree() {
        let dir = tempfile::tempdir().unwrap();
        let project = write_project(&dir);

        let output = helmwright(&project, &["graph", "helmPublishFooChart"]);
        assert!(output.status.success());

        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("helmPublishFooChart"));
        assert!(stdout.contains("helmPublishFooChartToBarRepository"));
        assert!(stdout.contains("helmPackageFooChart"));
    }

    #[test]
    fn test_unknown_task_fails_with_suggestion() {
        let dir = tempfile::tempdir().unwrap();
        let project = write_project(&dir);

        let output = helmwright(&project, &["graph", "helmPackageFoChart"]);
        assert!(!output.status.success());
        assert_eq!(output.status.code(), Some(3));

        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Unknown task"));
        assert!(stderr.contains("helmPackageFooChart"));
    }
}

mod run_command {
    use super::*;

    #[test]
    fn test_dry_run_prints_commands_in_dependency_order() {
        let dir = tempfile::tempdir().unwrap();
        let project = write_project(&dir);

        let output = helmwright(&project, &["run", "helmPackageFooChart", "--dry-run"]);
        assert!(output.status.success());

        let stdout = String::from_utf8_lossy(&output.stdout);
        let dep_cmd = stdout.find("helm dependency update charts/foo").unwrap();
        let pkg_cmd = stdout.find("helm package charts/foo").unwrap();
        assert!(dep_cmd < pkg_cmd);
    }

    #[test]
    fn test_dry_run_skips_guarded_publish() {
        let dir = tempfile::tempdir().unwrap();
        let project = write_project(&dir);

        let output = helmwright(&project, &["run", "helmPublishInternalChart", "--dry-run"]);
        assert!(output.status.success());

        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("guard disabled"));
        assert!(!stdout.contains("upload"));
    }

    #[test]
    fn test_unknown_task_fails() {
        let dir = tempfile::tempdir().unwrap();
        let project = write_project(&dir);

        let output = helmwright(&project, &["run", "helmPackageGhostChart", "--dry-run"]);
        assert!(!output.status.success());
        assert_eq!(output.status.code(), Some(3));
    }
}
