// src/config/mod.rs

//! Configuration loading and validation for devprep.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config file from disk, or fall back to defaults (`loader.rs`).
//! - Validate tool names, paths and commands (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path, resolve_config};
pub use model::{CommandsSection, ConfigFile, LogSection, ProjectSection, ToolsSection};
pub use validate::validate_config;
