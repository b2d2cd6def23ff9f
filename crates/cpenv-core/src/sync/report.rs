//! Outcome of one archive or restore run

use std::path::PathBuf;

/// A file the run could not process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFailure {
    pub path: PathBuf,
    pub message: String,
}

/// What an archive or restore did, file by file, in processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Snapshot written (archive) or directory restored into (restore)
    pub destination_root: PathBuf,
    /// Destinations written
    pub copied: Vec<PathBuf>,
    /// Destinations left alone because the user declined to overwrite
    pub skipped: Vec<PathBuf>,
    /// Per-file failures that did not stop the run
    pub failed: Vec<FileFailure>,
}

impl SyncReport {
    pub fn new(destination_root: impl Into<PathBuf>) -> Self {
        Self {
            destination_root: destination_root.into(),
            ..Self::default()
        }
    }

    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }

    /// One-line tally, e.g. `2 copied, 1 skipped, 0 failed`.
    pub fn summary(&self) -> String {
        format!(
            "{} copied, {} skipped, {} failed",
            self.copied.len(),
            self.skipped.len(),
            self.failed.len()
        )
    }

    pub(crate) fn record_failure(&mut self, path: impl Into<PathBuf>, error: &dyn std::fmt::Display) {
        self.failed.push(FileFailure {
            path: path.into(),
            message: error.to_string(),
        });
    }
}
