// src/config/validate.rs

use std::path::Path;

use crate::config::model::ConfigFile;
use crate::errors::{DevprepError, Result};

/// Run semantic validation against a loaded configuration.
///
/// This checks:
/// - tool names are not blank
/// - project file paths are relative
/// - the log prefix is usable as a file name component
/// - every command has a program
pub fn validate_config(cfg: &ConfigFile) -> Result<()> {
    validate_tools(cfg)?;
    validate_project(cfg)?;
    validate_log_prefix(&cfg.log.prefix)?;
    validate_commands(cfg)?;
    Ok(())
}

fn validate_tools(cfg: &ConfigFile) -> Result<()> {
    let tools = [
        ("editor", &cfg.tools.editor),
        ("runtime", &cfg.tools.runtime),
        ("package_manager", &cfg.tools.package_manager),
    ];
    for (key, value) in tools {
        if value.trim().is_empty() {
            return Err(DevprepError::ConfigError(format!(
                "[tools].{key} must not be empty"
            )));
        }
    }
    Ok(())
}

fn validate_project(cfg: &ConfigFile) -> Result<()> {
    let files = [
        ("manifest", &cfg.project.manifest),
        ("typecheck_config", &cfg.project.typecheck_config),
    ];
    for (key, value) in files {
        if value.trim().is_empty() {
            return Err(DevprepError::ConfigError(format!(
                "[project].{key} must not be empty"
            )));
        }
        if Path::new(value).is_absolute() {
            return Err(DevprepError::ConfigError(format!(
                "[project].{key} must be relative to the project root (got '{value}')"
            )));
        }
    }
    Ok(())
}

/// The prefix becomes part of a file name inside the project root.
pub fn validate_log_prefix(prefix: &str) -> Result<()> {
    if prefix.trim().is_empty() {
        return Err(DevprepError::ConfigError(
            "log prefix must not be empty".to_string(),
        ));
    }
    if prefix.contains('/') || prefix.contains('\\') {
        return Err(DevprepError::ConfigError(format!(
            "log prefix must not contain path separators (got '{prefix}')"
        )));
    }
    Ok(())
}

fn validate_commands(cfg: &ConfigFile) -> Result<()> {
    let commands = [
        ("install", &cfg.commands.install),
        ("lint", &cfg.commands.lint),
        ("format", &cfg.commands.format),
        ("typecheck", &cfg.commands.typecheck),
        ("build", &cfg.commands.build),
    ];
    for (key, argv) in commands {
        match argv.first() {
            Some(program) if !program.trim().is_empty() => {}
            _ => {
                return Err(DevprepError::ConfigError(format!(
                    "[commands].{key} needs at least a program name"
                )));
            }
        }
    }
    Ok(())
}
