use std::collections::{HashMap, HashSet};
use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use devprep::errors::{DevprepError, Result};
use devprep::exec::{CommandResult, CommandSpec, ExecutorBackend, ToolResolver};

/// Scripted behaviour for one command.
#[derive(Debug, Clone)]
pub enum Scripted {
    Exit {
        code: i32,
        stdout: String,
        stderr: String,
    },
    /// Fails like a spawn error: `msg` wrapped in a context layer.
    LaunchError(String),
}

impl Scripted {
    pub fn exit(code: i32) -> Self {
        Scripted::Exit {
            code,
            stdout: String::new(),
            stderr: String::new(),
        }
    }

    pub fn output(code: i32, stdout: &str, stderr: &str) -> Self {
        Scripted::Exit {
            code,
            stdout: stdout.to_string(),
            stderr: stderr.to_string(),
        }
    }
}

/// A fake executor that:
/// - records the text of every command it was asked to run
/// - answers with the scripted result for that command text, or exit 0.
#[derive(Debug, Clone, Default)]
pub struct FakeExecutor {
    scripts: HashMap<String, Scripted>,
    executed: Arc<Mutex<Vec<String>>>,
}

impl FakeExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the result for a command, keyed by its display text
    /// (e.g. `"npm run lint -- --fix"`).
    pub fn script(mut self, command: &str, result: Scripted) -> Self {
        self.scripts.insert(command.to_string(), result);
        self
    }

    /// Shared handle to the list of executed commands.
    pub fn executed(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.executed)
    }
}

impl ExecutorBackend for FakeExecutor {
    fn run<'a>(
        &'a mut self,
        command: &'a CommandSpec,
        _cwd: &'a Path,
    ) -> Pin<Box<dyn Future<Output = Result<CommandResult>> + Send + 'a>> {
        let text = command.to_string();
        self.executed.lock().unwrap().push(text.clone());

        let scripted = self
            .scripts
            .get(&text)
            .cloned()
            .unwrap_or_else(|| Scripted::exit(0));

        Box::pin(async move {
            match scripted {
                Scripted::Exit {
                    code,
                    stdout,
                    stderr,
                } => Ok(CommandResult {
                    command: command.clone(),
                    stdout,
                    stderr,
                    exit_code: code,
                }),
                Scripted::LaunchError(msg) => Err(DevprepError::Other(
                    anyhow::anyhow!(msg).context(format!("spawning process for '{command}'")),
                )),
            }
        })
    }
}

/// Resolver with a fixed set of installed tools.
#[derive(Debug, Clone, Default)]
pub struct FakeResolver {
    tools: HashSet<String>,
}

impl FakeResolver {
    pub fn with_tools(tools: &[&str]) -> Self {
        Self {
            tools: tools.iter().map(|t| t.to_string()).collect(),
        }
    }

    /// `code`, `node` and `npm`.
    pub fn all_default_tools() -> Self {
        Self::with_tools(&["code", "node", "npm"])
    }
}

impl ToolResolver for FakeResolver {
    fn resolve(&self, name: &str) -> Option<PathBuf> {
        self.tools
            .contains(name)
            .then(|| PathBuf::from("/usr/bin").join(name))
    }
}
