// src/exec/runner.rs

//! Runs one command at a time and records it in the journal.

use std::path::PathBuf;

use tracing::{error, info};

use crate::errors::DevprepError;
use crate::exec::backend::ExecutorBackend;
use crate::exec::command::CommandSpec;
use crate::exec::resolver::ToolResolver;
use crate::journal::Journal;

/// Exit code recorded when a command could not be launched at all.
pub const LAUNCH_FAILURE_EXIT_CODE: i32 = 1;

/// Executes commands sequentially and writes one log block per command:
///
/// ```text
///
/// > npm run build
/// <stdout, trimmed, if any>
/// <stderr, trimmed, if any>
/// [exit=0]
/// ```
#[derive(Debug)]
pub struct CommandRunner<E, R> {
    executor: E,
    resolver: R,
    journal: Journal,
    working_dir: PathBuf,
}

impl<E, R> CommandRunner<E, R>
where
    E: ExecutorBackend,
    R: ToolResolver,
{
    pub fn new(executor: E, resolver: R, journal: Journal, working_dir: PathBuf) -> Self {
        Self {
            executor,
            resolver,
            journal,
            working_dir,
        }
    }

    /// True when `name` resolves to an executable on the search path.
    pub fn tool_available(&self, name: &str) -> bool {
        self.resolver.tool_available(name)
    }

    /// Console + run log.
    pub fn log(&mut self, message: &str) {
        self.journal.log(message);
    }

    /// Run `command` to completion and return its exit code.
    ///
    /// Never fails: a command that cannot be launched is logged and reported
    /// as [`LAUNCH_FAILURE_EXIT_CODE`].
    pub async fn execute(&mut self, command: &CommandSpec) -> i32 {
        self.journal.log(&format!("\n> {command}"));

        match self.executor.run(command, &self.working_dir).await {
            Ok(result) => {
                let stdout = result.stdout.trim();
                if !stdout.is_empty() {
                    self.journal.log(stdout);
                }
                let stderr = result.stderr.trim();
                if !stderr.is_empty() {
                    self.journal.log(stderr);
                }
                self.journal.log(&format!("[exit={}]", result.exit_code));
                info!(cmd = %command, exit_code = result.exit_code, "command finished");
                result.exit_code
            }
            Err(err) => {
                let reason = launch_reason(&err);
                error!(cmd = %command, error = %reason, "command could not be launched");
                self.journal
                    .log(&format!("ERROR: failed to execute '{command}': {reason}"));
                self.journal.log(&format!("[exit={LAUNCH_FAILURE_EXIT_CODE}]"));
                LAUNCH_FAILURE_EXIT_CODE
            }
        }
    }

    pub fn journal(&self) -> &Journal {
        &self.journal
    }
}

/// Full error chain, so the OS reason survives any added context.
fn launch_reason(err: &DevprepError) -> String {
    match err {
        DevprepError::Other(inner) => format!("{inner:#}"),
        other => other.to_string(),
    }
}
