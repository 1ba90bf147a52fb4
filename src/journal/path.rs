// src/journal/path.rs

//! Log file naming.

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use crate::fs::FileSystem;

/// Timestamp layout used in log file names, e.g. `20261018_142530`.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Compute the log file path for a run that started at `started_at`.
///
/// The name is `<prefix>_<timestamp>.txt` inside `project_root`. If a file
/// with that name already exists (two runs within the same second), a
/// numeric suffix is added so an earlier log is never appended to.
///
/// Called once per run; every append of that run reuses the result.
pub fn allocate_log_path(
    fs: &dyn FileSystem,
    project_root: &Path,
    prefix: &str,
    started_at: NaiveDateTime,
) -> PathBuf {
    let stem = format!("{prefix}_{}", started_at.format(TIMESTAMP_FORMAT));

    let first = project_root.join(format!("{stem}.txt"));
    if !fs.exists(&first) {
        return first;
    }

    let mut n: u32 = 1;
    loop {
        let candidate = project_root.join(format!("{stem}_{n}.txt"));
        if !fs.exists(&candidate) {
            return candidate;
        }
        n += 1;
    }
}
