// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `devprep`.
#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "devprep",
    version,
    about = "Install, lint, format, type-check and build a front-end project, logging every step.",
    long_about = None
)]
pub struct CliArgs {
    /// Project root to prepare.
    ///
    /// Default: the current working directory.
    #[arg(long, value_name = "PATH")]
    pub project_root: Option<PathBuf>,

    /// Path to the config file (TOML).
    ///
    /// Default: `Devprep.toml` in the project root, if it exists.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Wait for ENTER on the console before doing anything.
    #[arg(long)]
    pub confirm: bool,

    /// Do not open the project in the editor.
    #[arg(long)]
    pub no_editor: bool,

    /// Print the resolved step list, but don't execute any commands.
    #[arg(long)]
    pub dry_run: bool,

    /// Exit with code 1 if any step exited non-zero.
    #[arg(long)]
    pub strict: bool,

    /// Prefix for the log file name (overrides `[log].prefix`).
    #[arg(long, value_name = "PREFIX")]
    pub log_prefix: Option<String>,

    /// Logging level for diagnostics (error, warn, info, debug, trace).
    ///
    /// If omitted, `DEVPREP_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
