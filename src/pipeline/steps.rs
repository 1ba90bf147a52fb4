// src/pipeline/steps.rs

//! The fixed step list, built from configuration.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::ConfigFile;
use crate::errors::{DevprepError, Result};
use crate::exec::CommandSpec;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKind {
    Editor,
    Install,
    Lint,
    Format,
    TypeCheck,
    Build,
}

impl StepKind {
    pub fn label(self) -> &'static str {
        match self {
            StepKind::Editor => "editor",
            StepKind::Install => "install",
            StepKind::Lint => "lint",
            StepKind::Format => "format",
            StepKind::TypeCheck => "typecheck",
            StepKind::Build => "build",
        }
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Condition checked right before a step would run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gate {
    Always,
    /// Run only if this tool resolves on PATH.
    ToolAvailable(String),
    /// Run only if this file exists.
    FileExists(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub kind: StepKind,
    pub command: CommandSpec,
    pub gate: Gate,
}

/// Everything a run will do, in order.
#[derive(Debug, Clone)]
pub struct Plan {
    /// Opening the editor; `None` when disabled.
    pub editor: Option<Step>,
    /// Tools that must all resolve before any build step runs.
    pub required_tools: Vec<String>,
    /// Manifest that must exist before any build step runs.
    pub manifest: PathBuf,
    /// Install, lint, format, type-check, build.
    pub steps: Vec<Step>,
}

impl Plan {
    /// Build the plan for `project_root`.
    ///
    /// The editor receives the project root as a single UTF-8 argument; a
    /// root that is not valid UTF-8 is passed lossily (`U+FFFD` replacement).
    pub fn from_config(cfg: &ConfigFile, project_root: &Path, open_editor: bool) -> Result<Self> {
        let editor = open_editor.then(|| Step {
            kind: StepKind::Editor,
            command: CommandSpec::new(cfg.tools.editor.clone())
                .arg(project_root.to_string_lossy()),
            gate: Gate::ToolAvailable(cfg.tools.editor.clone()),
        });

        let commands = &cfg.commands;
        let steps = vec![
            step(StepKind::Install, &commands.install, Gate::Always)?,
            step(StepKind::Lint, &commands.lint, Gate::Always)?,
            step(StepKind::Format, &commands.format, Gate::Always)?,
            step(
                StepKind::TypeCheck,
                &commands.typecheck,
                Gate::FileExists(project_root.join(&cfg.project.typecheck_config)),
            )?,
            step(StepKind::Build, &commands.build, Gate::Always)?,
        ];

        Ok(Self {
            editor,
            required_tools: vec![cfg.tools.runtime.clone(), cfg.tools.package_manager.clone()],
            manifest: project_root.join(&cfg.project.manifest),
            steps,
        })
    }
}

fn step(kind: StepKind, argv: &[String], gate: Gate) -> Result<Step> {
    let command = CommandSpec::from_argv(argv).ok_or_else(|| {
        DevprepError::ConfigError(format!("no command configured for step '{kind}'"))
    })?;
    Ok(Step { kind, command, gate })
}
