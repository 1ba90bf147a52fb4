// src/pipeline/mod.rs

//! The fixed preparation sequence.
//!
//! 1. log banner, project root and log path
//! 2. open the editor if it is installed (warning otherwise)
//! 3. stop with exit code 1 if the runtime or package manager is missing
//! 4. stop with exit code 1 if the manifest is missing
//! 5. install, lint, format, type-check (only with its config file), build
//! 6. log the completion banner
//!
//! Step exit codes are recorded and never change what runs next.

pub mod steps;

use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::errors::DevprepError;
use crate::exec::{CommandRunner, ExecutorBackend, ToolResolver};
use crate::fs::FileSystem;

pub use steps::{Gate, Plan, Step, StepKind};

pub const START_BANNER: &str = "=== devprep start ===";
pub const DONE_BANNER: &str = "\n=== devprep done ===";
pub const DONE_HINT: &str = "If any step reported errors, open the log file above for details.";

/// Paths reported at the top of the run.
#[derive(Debug, Clone)]
pub struct RunContext {
    pub project_root: PathBuf,
    pub log_path: Option<PathBuf>,
}

/// Exit code of one executed step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepReport {
    pub kind: StepKind,
    pub exit_code: i32,
}

#[derive(Debug)]
pub enum RunStatus {
    /// Every step was attempted.
    Completed,
    /// A fatal precondition stopped the run.
    Aborted(DevprepError),
}

#[derive(Debug)]
pub struct RunOutcome {
    pub status: RunStatus,
    pub reports: Vec<StepReport>,
}

impl RunOutcome {
    /// Process exit code for this run.
    ///
    /// 1 when a precondition stopped the run. Otherwise 0, unless `strict`
    /// is set and a step other than the editor exited non-zero.
    pub fn exit_code(&self, strict: bool) -> i32 {
        match self.status {
            RunStatus::Aborted(_) => 1,
            RunStatus::Completed if strict && self.has_failed_steps() => 1,
            RunStatus::Completed => 0,
        }
    }

    pub fn has_failed_steps(&self) -> bool {
        self.reports
            .iter()
            .any(|r| r.kind != StepKind::Editor && r.exit_code != 0)
    }

    /// Kinds of the steps that were executed, in order.
    pub fn executed(&self) -> Vec<StepKind> {
        self.reports.iter().map(|r| r.kind).collect()
    }
}

/// Run the whole sequence described by `plan`.
pub async fn run_pipeline<E, R>(
    runner: &mut CommandRunner<E, R>,
    fs: &dyn FileSystem,
    plan: &Plan,
    ctx: &RunContext,
) -> RunOutcome
where
    E: ExecutorBackend,
    R: ToolResolver,
{
    let mut reports = Vec::new();

    runner.log(START_BANNER);
    runner.log(&format!("Project: {}", ctx.project_root.display()));
    match &ctx.log_path {
        Some(path) => runner.log(&format!("Log: {}", path.display())),
        None => runner.log("Log: (disabled)"),
    }

    if let Some(editor) = &plan.editor {
        if gate_open(runner, fs, &editor.gate) {
            let exit_code = runner.execute(&editor.command).await;
            reports.push(StepReport {
                kind: StepKind::Editor,
                exit_code,
            });
        } else {
            warn!(editor = %editor.command.program, "editor launcher not found");
            runner.log(&missing_editor_message(&editor.command.program));
        }
    }

    if let Err(err) = check_preconditions(runner, fs, plan) {
        info!(error = %err, "fatal precondition; stopping run");
        return RunOutcome {
            status: RunStatus::Aborted(err),
            reports,
        };
    }

    for step in &plan.steps {
        if !gate_open(runner, fs, &step.gate) {
            debug!(step = %step.kind, gate = ?step.gate, "gate closed; skipping step");
            continue;
        }
        let exit_code = runner.execute(&step.command).await;
        reports.push(StepReport {
            kind: step.kind,
            exit_code,
        });
    }

    runner.log(DONE_BANNER);
    runner.log(DONE_HINT);

    RunOutcome {
        status: RunStatus::Completed,
        reports,
    }
}

fn gate_open<E, R>(runner: &CommandRunner<E, R>, fs: &dyn FileSystem, gate: &Gate) -> bool
where
    E: ExecutorBackend,
    R: ToolResolver,
{
    match gate {
        Gate::Always => true,
        Gate::ToolAvailable(name) => runner.tool_available(name),
        Gate::FileExists(path) => fs.exists(path),
    }
}

/// Checks both fatal preconditions, logging the error line for the first one
/// that fails.
fn check_preconditions<E, R>(
    runner: &mut CommandRunner<E, R>,
    fs: &dyn FileSystem,
    plan: &Plan,
) -> Result<(), DevprepError>
where
    E: ExecutorBackend,
    R: ToolResolver,
{
    let missing: Vec<&str> = plan
        .required_tools
        .iter()
        .filter(|tool| !runner.tool_available(tool))
        .map(String::as_str)
        .collect();

    if !missing.is_empty() {
        let names = missing.join(", ");
        runner.log(&format!(
            "ERROR: required tools not found on PATH: {names}. Install them and try again."
        ));
        return Err(DevprepError::MissingTool(names));
    }

    if !fs.exists(&plan.manifest) {
        let manifest = plan.manifest.display().to_string();
        runner.log(&format!("ERROR: {manifest} not found. Run devprep from the project root."));
        return Err(DevprepError::MissingManifest(manifest));
    }

    Ok(())
}

fn missing_editor_message(editor: &str) -> String {
    let mut msg =
        format!("WARNING: editor launcher '{editor}' not found on PATH; not opening the project.");
    if editor == "code" {
        msg.push_str(" In VS Code run \"Shell Command: Install 'code' command in PATH\".");
    }
    msg
}
