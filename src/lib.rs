// src/lib.rs

pub mod cli;
pub mod config;
pub mod confirm;
pub mod errors;
pub mod exec;
pub mod fs;
pub mod journal;
pub mod logging;
pub mod pipeline;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::Local;
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::validate::validate_log_prefix;
use crate::config::{ConfigFile, resolve_config};
use crate::errors::Result;
use crate::exec::{CommandRunner, PathResolver, RealExecutorBackend};
use crate::fs::{FileSystem, RealFileSystem};
use crate::journal::{Console, FileSink, Journal, allocate_log_path};
use crate::pipeline::{Gate, Plan, RunContext, run_pipeline};

/// High-level entry point used by `main.rs`. Returns the process exit code.
///
/// This wires together:
/// - the optional acknowledgement prompt
/// - config loading
/// - log file allocation
/// - the real executor and PATH resolver
/// - the step pipeline
pub async fn run(args: CliArgs) -> Result<i32> {
    println!("devprep {}", env!("CARGO_PKG_VERSION"));
    if args.confirm {
        let stdin = std::io::stdin();
        confirm::wait_for_ack(&mut stdin.lock(), &mut std::io::stdout())?;
    }

    let project_root = project_root(args.project_root.as_deref())?;
    let cfg = effective_config(&args, &project_root)?;

    let fs: Arc<dyn FileSystem> = Arc::new(RealFileSystem);
    let started_at = Local::now().naive_local();
    let log_path = allocate_log_path(fs.as_ref(), &project_root, &cfg.log.prefix, started_at);
    debug!(path = %log_path.display(), "allocated log file");

    let plan = Plan::from_config(&cfg, &project_root, !args.no_editor)?;
    let ctx = RunContext {
        project_root: project_root.clone(),
        log_path: Some(log_path.clone()),
    };

    if args.dry_run {
        print_dry_run(&plan, &ctx);
        return Ok(0);
    }

    let journal = Journal::new(
        Box::new(FileSink::new(Arc::clone(&fs), log_path)),
        Console::Stdout,
    );
    let mut runner = CommandRunner::new(
        RealExecutorBackend::new(),
        PathResolver,
        journal,
        project_root,
    );

    let outcome = run_pipeline(&mut runner, fs.as_ref(), &plan, &ctx).await;
    let code = outcome.exit_code(args.strict);

    info!(
        executed = ?outcome.executed(),
        log_write_failures = runner.journal().write_failures(),
        exit_code = code,
        "run finished"
    );

    Ok(code)
}

/// Absolute project root: `--project-root`, or the current directory.
fn project_root(explicit: Option<&Path>) -> Result<PathBuf> {
    let root = match explicit {
        Some(path) => std::path::absolute(path)?,
        None => std::env::current_dir()?,
    };
    Ok(root)
}

/// Config file (or defaults) with CLI overrides applied.
fn effective_config(args: &CliArgs, project_root: &Path) -> Result<ConfigFile> {
    let mut cfg = resolve_config(args.config.as_deref(), project_root)?;
    if let Some(prefix) = &args.log_prefix {
        validate_log_prefix(prefix)?;
        cfg.log.prefix = prefix.clone();
    }
    Ok(cfg)
}

/// Simple dry-run output: print tools, gates and commands.
fn print_dry_run(plan: &Plan, ctx: &RunContext) {
    println!("devprep dry-run");
    println!("  project: {}", ctx.project_root.display());
    if let Some(path) = &ctx.log_path {
        println!("  log: {}", path.display());
    }
    println!("  required tools: {}", plan.required_tools.join(", "));
    println!("  manifest: {}", plan.manifest.display());
    println!();

    let steps: Vec<_> = plan.editor.iter().chain(plan.steps.iter()).collect();
    println!("steps ({}):", steps.len());
    for step in steps {
        println!("  - {}", step.kind);
        println!("      cmd: {}", step.command);
        match &step.gate {
            Gate::Always => {}
            Gate::ToolAvailable(tool) => println!("      only if on PATH: {tool}"),
            Gate::FileExists(path) => println!("      only if exists: {}", path.display()),
        }
    }

    debug!("dry-run complete (no execution)");
}
