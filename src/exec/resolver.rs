// src/exec/resolver.rs

//! Executable lookup on the search path.

use std::fmt::Debug;
use std::path::PathBuf;

use tracing::trace;

/// Answers "is this tool installed?".
///
/// Production code uses [`PathResolver`]; tests provide a fixed set of
/// available tools instead.
pub trait ToolResolver: Send + Sync + Debug {
    /// Full path of the executable `name`, if it can be found.
    fn resolve(&self, name: &str) -> Option<PathBuf>;

    /// True when `name` resolves to an executable. No side effects.
    fn tool_available(&self, name: &str) -> bool {
        self.resolve(name).is_some()
    }
}

/// Looks tools up on `PATH` (with `PATHEXT` handling on Windows).
#[derive(Debug, Clone, Copy, Default)]
pub struct PathResolver;

impl ToolResolver for PathResolver {
    fn resolve(&self, name: &str) -> Option<PathBuf> {
        let found = which::which(name).ok();
        trace!(tool = name, found = ?found, "resolved tool");
        found
    }
}
