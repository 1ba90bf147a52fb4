// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`command`] holds the argument-vector command type and its captured result.
//! - [`resolver`] answers whether a tool is installed (`which`).
//! - [`backend`] provides the `ExecutorBackend` trait and the
//!   `tokio::process` based `RealExecutorBackend`; tests replace it with a
//!   fake.
//! - [`runner`] owns the journal and turns each execution into a log block.

pub mod backend;
pub mod command;
pub mod resolver;
pub mod runner;

pub use backend::{ExecutorBackend, RealExecutorBackend};
pub use command::{CommandResult, CommandSpec};
pub use resolver::{PathResolver, ToolResolver};
pub use runner::{CommandRunner, LAUNCH_FAILURE_EXIT_CODE};
