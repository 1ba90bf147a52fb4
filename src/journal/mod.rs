// src/journal/mod.rs

//! The run journal: every line a run produces goes to the console and to a
//! log sink (normally the timestamped log file in the project root).
//!
//! Writing to the sink is best-effort. A failed append never interrupts the
//! run; it is counted, reported once through `tracing::warn!`, and the next
//! line is tried again. [`Journal::write_failures`] exposes the count.
//!
//! Disk-full and permission-denied failures are treated the same way.
//! Whether they should be told apart is still open.

pub mod path;
pub mod sink;

use std::path::Path;

use tracing::{debug, warn};

pub use path::{TIMESTAMP_FORMAT, allocate_log_path};
pub use sink::{FileSink, LogSink, NullSink};

/// Where journal lines are echoed besides the sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Console {
    Stdout,
    Silent,
}

#[derive(Debug)]
pub struct Journal {
    sink: Box<dyn LogSink>,
    console: Console,
    write_failures: usize,
}

impl Journal {
    pub fn new(sink: Box<dyn LogSink>, console: Console) -> Self {
        Self {
            sink,
            console,
            write_failures: 0,
        }
    }

    /// Write `message` plus a newline to the console and append it to the
    /// sink.
    pub fn log(&mut self, message: &str) {
        if self.console == Console::Stdout {
            println!("{message}");
        }

        if let Err(err) = self.sink.append_line(message) {
            self.write_failures += 1;
            if self.write_failures == 1 {
                warn!(
                    location = ?self.sink.location(),
                    error = %err,
                    "failed to write to run log; continuing without it"
                );
            } else {
                debug!(error = %err, failures = self.write_failures, "run log write failed");
            }
        }
    }

    /// Number of lines that could not be written to the sink.
    pub fn write_failures(&self) -> usize {
        self.write_failures
    }

    pub fn location(&self) -> Option<&Path> {
        self.sink.location()
    }
}
