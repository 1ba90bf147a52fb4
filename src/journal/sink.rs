// src/journal/sink.rs

//! Destinations for journal lines.

use std::fmt::Debug;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;

use crate::fs::FileSystem;

/// Somewhere the journal can append finished lines to.
pub trait LogSink: Send + Debug {
    /// Append one line. `line` does not carry the trailing newline.
    fn append_line(&self, line: &str) -> Result<()>;

    /// Where the lines end up, if anywhere.
    fn location(&self) -> Option<&Path>;
}

/// Appends to a file, opening and closing it for every line.
#[derive(Debug, Clone)]
pub struct FileSink {
    fs: Arc<dyn FileSystem>,
    path: PathBuf,
}

impl FileSink {
    pub fn new(fs: Arc<dyn FileSystem>, path: PathBuf) -> Self {
        Self { fs, path }
    }
}

impl LogSink for FileSink {
    fn append_line(&self, line: &str) -> Result<()> {
        let mut buf = String::with_capacity(line.len() + 1);
        buf.push_str(line);
        buf.push('\n');
        self.fs.append(&self.path, &buf)
    }

    fn location(&self) -> Option<&Path> {
        Some(&self.path)
    }
}

/// Discards everything. Used when no log file is wanted.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl LogSink for NullSink {
    fn append_line(&self, _line: &str) -> Result<()> {
        Ok(())
    }

    fn location(&self) -> Option<&Path> {
        None
    }
}
