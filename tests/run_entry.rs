// tests/run_entry.rs

mod common;
use crate::common::init_tracing;

use std::path::{Path, PathBuf};

use devprep::cli::CliArgs;
use devprep::errors::DevprepError;

/// Files in `dir` whose name starts with `prefix` and ends in `.txt`.
fn log_files(dir: &Path, prefix: &str) -> Vec<PathBuf> {
    let mut found: Vec<PathBuf> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().path())
        .filter(|p| {
            let name = p.file_name().unwrap().to_string_lossy();
            name.starts_with(prefix) && name.ends_with(".txt")
        })
        .collect();
    found.sort();
    found
}

#[tokio::test]
async fn dry_run_executes_nothing_and_writes_no_log() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("package.json"), "{}").unwrap();

    let args = CliArgs {
        project_root: Some(dir.path().to_path_buf()),
        dry_run: true,
        ..Default::default()
    };

    assert_eq!(devprep::run(args).await.unwrap(), 0);
    assert!(log_files(dir.path(), "devprep_log_").is_empty());
    assert!(!dir.path().join("node_modules").exists());
}

#[tokio::test]
async fn bad_log_prefix_flag_is_a_config_error() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();

    let args = CliArgs {
        project_root: Some(dir.path().to_path_buf()),
        dry_run: true,
        log_prefix: Some("a/b".to_string()),
        ..Default::default()
    };

    assert!(matches!(
        devprep::run(args).await,
        Err(DevprepError::ConfigError(_))
    ));
}

#[tokio::test]
async fn missing_explicit_config_is_a_config_error() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();

    let args = CliArgs {
        project_root: Some(dir.path().to_path_buf()),
        config: Some(dir.path().join("nope.toml")),
        dry_run: true,
        ..Default::default()
    };

    assert!(matches!(
        devprep::run(args).await,
        Err(DevprepError::ConfigError(_))
    ));
}

#[cfg(unix)]
mod with_processes {
    use super::*;

    /// Project whose tools are all `sh`, with lint exiting 2.
    fn sh_project() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("package.json"), "{}").unwrap();
        std::fs::write(
            dir.path().join("Devprep.toml"),
            r#"
[tools]
runtime = "sh"
package_manager = "sh"

[commands]
install = ["sh", "-c", "echo installed"]
lint = ["sh", "-c", "echo lint failed >&2; exit 2"]
format = ["sh", "-c", "exit 0"]
typecheck = ["sh", "-c", "echo typechecked"]
build = ["sh", "-c", "echo built"]
"#,
        )
        .unwrap();
        dir
    }

    fn args(dir: &Path, strict: bool) -> CliArgs {
        CliArgs {
            project_root: Some(dir.to_path_buf()),
            no_editor: true,
            strict,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn step_failure_exits_zero_without_strict() {
        init_tracing();
        let dir = sh_project();

        assert_eq!(devprep::run(args(dir.path(), false)).await.unwrap(), 0);

        let logs = log_files(dir.path(), "devprep_log_");
        assert_eq!(logs.len(), 1);
        let log = std::fs::read_to_string(&logs[0]).unwrap();
        assert!(log.contains("installed\n[exit=0]"));
        assert!(log.contains("lint failed\n[exit=2]"));
        assert!(log.contains("built\n[exit=0]"));
        assert!(!log.contains("typechecked"));
    }

    #[tokio::test]
    async fn step_failure_exits_one_with_strict() {
        init_tracing();
        let dir = sh_project();

        assert_eq!(devprep::run(args(dir.path(), true)).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn log_prefix_flag_names_the_log_file() {
        init_tracing();
        let dir = sh_project();
        let mut args = args(dir.path(), false);
        args.log_prefix = Some("prep".to_string());

        assert_eq!(devprep::run(args).await.unwrap(), 0);
        assert_eq!(log_files(dir.path(), "prep_").len(), 1);
        assert!(log_files(dir.path(), "devprep_log_").is_empty());
    }

    #[tokio::test]
    async fn repeated_runs_create_separate_logs() {
        init_tracing();
        let dir = sh_project();

        devprep::run(args(dir.path(), false)).await.unwrap();
        devprep::run(args(dir.path(), false)).await.unwrap();

        assert_eq!(log_files(dir.path(), "devprep_log_").len(), 2);
    }

    #[tokio::test]
    async fn missing_manifest_exits_one_before_install() {
        init_tracing();
        let dir = sh_project();
        std::fs::remove_file(dir.path().join("package.json")).unwrap();

        assert_eq!(devprep::run(args(dir.path(), false)).await.unwrap(), 1);

        let logs = log_files(dir.path(), "devprep_log_");
        let log = std::fs::read_to_string(&logs[0]).unwrap();
        assert!(log.contains("package.json not found"));
        assert!(!log.contains("[exit="));
    }
}
