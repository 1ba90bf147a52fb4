// src/exec/backend.rs

//! Pluggable executor backend abstraction.
//!
//! The command runner talks to an `ExecutorBackend` instead of spawning
//! processes itself, so tests can swap in a fake that records commands and
//! returns scripted results.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::process::Stdio;

use anyhow::Context;
use tokio::process::Command;
use tracing::{debug, info};

use crate::errors::Result;
use crate::exec::command::{CommandResult, CommandSpec};

/// Trait abstracting how a command is executed.
pub trait ExecutorBackend: Send {
    /// Run `command` in `cwd` to completion and capture its output.
    ///
    /// A non-zero exit code is a successful `Ok`. `Err` means the command
    /// could not be launched or waited for at all.
    fn run<'a>(
        &'a mut self,
        command: &'a CommandSpec,
        cwd: &'a Path,
    ) -> Pin<Box<dyn Future<Output = Result<CommandResult>> + Send + 'a>>;
}

/// Real executor backend: spawns an OS process with `tokio::process`.
///
/// The program is resolved through `PATH` first so that wrapper scripts such
/// as `npm.cmd` are found on Windows. Stdin is closed; stdout and stderr are
/// captured in full.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealExecutorBackend;

impl RealExecutorBackend {
    pub fn new() -> Self {
        Self
    }
}

impl ExecutorBackend for RealExecutorBackend {
    fn run<'a>(
        &'a mut self,
        command: &'a CommandSpec,
        cwd: &'a Path,
    ) -> Pin<Box<dyn Future<Output = Result<CommandResult>> + Send + 'a>> {
        Box::pin(async move {
            let program = which::which(&command.program)
                .unwrap_or_else(|_| PathBuf::from(&command.program));

            info!(cmd = %command, cwd = %cwd.display(), "starting process");

            let mut cmd = Command::new(&program);
            cmd.args(&command.args)
                .current_dir(cwd)
                .stdin(Stdio::null())
                .stdout(Stdio::piped())
                .stderr(Stdio::piped())
                .kill_on_drop(true);

            let output = cmd
                .output()
                .await
                .with_context(|| format!("spawning process for '{}'", command))?;

            let exit_code = output.status.code().unwrap_or(-1);

            debug!(
                cmd = %command,
                exit_code,
                success = output.status.success(),
                stdout_bytes = output.stdout.len(),
                stderr_bytes = output.stderr.len(),
                "process exited"
            );

            Ok(CommandResult {
                command: command.clone(),
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
                exit_code,
            })
        })
    }
}
