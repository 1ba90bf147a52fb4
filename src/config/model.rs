// src/config/model.rs

use serde::Deserialize;

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// [tools]
/// editor = "code"
/// runtime = "node"
/// package_manager = "npm"
///
/// [project]
/// manifest = "package.json"
/// typecheck_config = "tsconfig.json"
///
/// [log]
/// prefix = "devprep_log"
///
/// [commands]
/// lint = ["npm", "run", "lint", "--", "--fix"]
/// ```
///
/// All sections are optional and default to a Node/npm project layout.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub tools: ToolsSection,

    #[serde(default)]
    pub project: ProjectSection,

    #[serde(default)]
    pub log: LogSection,

    #[serde(default)]
    pub commands: CommandsSection,
}

/// `[tools]` section: executable names looked up on PATH.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolsSection {
    /// Optional editor launcher, called with the project root.
    #[serde(default = "default_editor")]
    pub editor: String,

    /// Required runtime.
    #[serde(default = "default_runtime")]
    pub runtime: String,

    /// Required package manager.
    #[serde(default = "default_package_manager")]
    pub package_manager: String,
}

fn default_editor() -> String {
    "code".to_string()
}

fn default_runtime() -> String {
    "node".to_string()
}

fn default_package_manager() -> String {
    "npm".to_string()
}

impl Default for ToolsSection {
    fn default() -> Self {
        Self {
            editor: default_editor(),
            runtime: default_runtime(),
            package_manager: default_package_manager(),
        }
    }
}

/// `[project]` section: files checked relative to the project root.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectSection {
    /// Must exist, otherwise the run stops before installing anything.
    #[serde(default = "default_manifest")]
    pub manifest: String,

    /// Type-check step only runs when this file exists.
    #[serde(default = "default_typecheck_config")]
    pub typecheck_config: String,
}

fn default_manifest() -> String {
    "package.json".to_string()
}

fn default_typecheck_config() -> String {
    "tsconfig.json".to_string()
}

impl Default for ProjectSection {
    fn default() -> Self {
        Self {
            manifest: default_manifest(),
            typecheck_config: default_typecheck_config(),
        }
    }
}

/// `[log]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogSection {
    /// File name prefix; the start timestamp and `.txt` are appended.
    #[serde(default = "default_log_prefix")]
    pub prefix: String,
}

fn default_log_prefix() -> String {
    "devprep_log".to_string()
}

impl Default for LogSection {
    fn default() -> Self {
        Self {
            prefix: default_log_prefix(),
        }
    }
}

/// `[commands]` section: argument vectors for each step.
///
/// Each entry is `[program, arg, ...]`. Commands are never passed through a
/// shell.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CommandsSection {
    #[serde(default = "default_install")]
    pub install: Vec<String>,

    #[serde(default = "default_lint")]
    pub lint: Vec<String>,

    #[serde(default = "default_format")]
    pub format: Vec<String>,

    #[serde(default = "default_typecheck")]
    pub typecheck: Vec<String>,

    #[serde(default = "default_build")]
    pub build: Vec<String>,
}

fn argv(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|s| s.to_string()).collect()
}

fn default_install() -> Vec<String> {
    argv(&["npm", "install"])
}

fn default_lint() -> Vec<String> {
    argv(&["npm", "run", "lint", "--", "--fix"])
}

fn default_format() -> Vec<String> {
    argv(&["npm", "run", "format"])
}

fn default_typecheck() -> Vec<String> {
    argv(&["npx", "tsc", "--noEmit"])
}

fn default_build() -> Vec<String> {
    argv(&["npm", "run", "build"])
}

impl Default for CommandsSection {
    fn default() -> Self {
        Self {
            install: default_install(),
            lint: default_lint(),
            format: default_format(),
            typecheck: default_typecheck(),
            build: default_build(),
        }
    }
}
