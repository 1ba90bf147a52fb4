#![allow(dead_code)]

pub use devprep_test_utils::builders::ConfigFileBuilder;
pub use devprep_test_utils::fake_executor::{FakeExecutor, FakeResolver, Scripted};
pub use devprep_test_utils::init_tracing;

use std::path::{Path, PathBuf};

use devprep::config::ConfigFile;
use devprep::exec::CommandRunner;
use devprep::fs::mock::MockFileSystem;
use devprep::journal::{Console, FileSink, Journal};
use devprep::pipeline::{Plan, RunContext, RunOutcome, run_pipeline};

pub const ROOT: &str = "/project";
pub const LOG: &str = "/project/devprep_log_20261018_120000.txt";

/// Result of a pipeline run against fakes.
pub struct FakeRun {
    pub outcome: RunOutcome,
    pub log: String,
    pub executed: Vec<String>,
    pub write_failures: usize,
}

impl FakeRun {
    /// Number of `[exit=...]` lines in the log.
    pub fn exit_lines(&self) -> Vec<&str> {
        self.log
            .lines()
            .filter(|l| l.starts_with("[exit="))
            .collect()
    }
}

pub fn root() -> PathBuf {
    PathBuf::from(ROOT)
}

/// Mock project directory containing the given files (relative to the root).
pub fn project_with(files: &[&str]) -> MockFileSystem {
    let fs = MockFileSystem::new();
    for file in files {
        fs.add_file(Path::new(ROOT).join(file), "{}");
    }
    fs
}

/// Run the whole pipeline with the fake executor/resolver and an in-memory
/// log file.
pub async fn run_fake(
    cfg: &ConfigFile,
    fs: MockFileSystem,
    executor: FakeExecutor,
    resolver: FakeResolver,
    open_editor: bool,
) -> FakeRun {
    let executed = executor.executed();
    let log_path = PathBuf::from(LOG);

    let journal = Journal::new(
        Box::new(FileSink::new(std::sync::Arc::new(fs.clone()), log_path.clone())),
        Console::Silent,
    );
    let mut runner = CommandRunner::new(executor, resolver, journal, root());

    let plan = Plan::from_config(cfg, &root(), open_editor).unwrap();
    let ctx = RunContext {
        project_root: root(),
        log_path: Some(log_path.clone()),
    };

    let outcome = run_pipeline(&mut runner, &fs, &plan, &ctx).await;

    let log = fs.contents(&log_path).unwrap_or_default();
    let executed = executed.lock().unwrap().clone();

    FakeRun {
        outcome,
        log,
        executed,
        write_failures: runner.journal().write_failures(),
    }
}
