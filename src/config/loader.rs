// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::debug;

use crate::config::model::ConfigFile;
use crate::config::validate::validate_config;
use crate::errors::{DevprepError, Result};

/// Name of the config file looked up in the project root when `--config` is
/// not given.
pub const DEFAULT_CONFIG_FILE: &str = "Devprep.toml";

/// Load a configuration file from a given path and return the raw `ConfigFile`.
///
/// This only performs TOML deserialization; use [`load_and_validate`] for the
/// semantic checks.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("reading config file at {:?}", path))?;

    let config: ConfigFile = toml::from_str(&contents)?;

    Ok(config)
}

/// Load a configuration file from path and run validation.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let config = load_from_path(&path)?;
    validate_config(&config)?;
    Ok(config)
}

/// Resolve the effective configuration for a project.
///
/// - An explicit path must exist.
/// - Otherwise `Devprep.toml` in the project root is used when present.
/// - Otherwise built-in defaults apply.
pub fn resolve_config(explicit: Option<&Path>, project_root: &Path) -> Result<ConfigFile> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(DevprepError::ConfigError(format!(
                "config file not found: {}",
                path.display()
            )));
        }
        return load_and_validate(path);
    }

    let candidate = default_config_path(project_root);
    if candidate.is_file() {
        debug!(path = %candidate.display(), "using project config file");
        return load_and_validate(&candidate);
    }

    debug!("no config file found; using built-in defaults");
    let config = ConfigFile::default();
    validate_config(&config)?;
    Ok(config)
}

/// Default config location for a project root.
pub fn default_config_path(project_root: &Path) -> PathBuf {
    project_root.join(DEFAULT_CONFIG_FILE)
}
