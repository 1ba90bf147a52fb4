#![allow(dead_code)]

use devprep::config::{ConfigFile, validate_config};

/// Builder for `ConfigFile` to simplify test setup.
pub struct ConfigFileBuilder {
    config: ConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: ConfigFile::default(),
        }
    }

    pub fn editor(mut self, name: &str) -> Self {
        self.config.tools.editor = name.to_string();
        self
    }

    pub fn runtime(mut self, name: &str) -> Self {
        self.config.tools.runtime = name.to_string();
        self
    }

    pub fn package_manager(mut self, name: &str) -> Self {
        self.config.tools.package_manager = name.to_string();
        self
    }

    pub fn manifest(mut self, path: &str) -> Self {
        self.config.project.manifest = path.to_string();
        self
    }

    pub fn typecheck_config(mut self, path: &str) -> Self {
        self.config.project.typecheck_config = path.to_string();
        self
    }

    pub fn log_prefix(mut self, prefix: &str) -> Self {
        self.config.log.prefix = prefix.to_string();
        self
    }

    pub fn build_command(mut self, argv: &[&str]) -> Self {
        self.config.commands.build = argv.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn build(self) -> ConfigFile {
        validate_config(&self.config).expect("Failed to build valid config from builder");
        self.config
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}
