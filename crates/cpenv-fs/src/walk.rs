//! Recursive file enumeration

use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::{Error, Result};

/// Lazy recursive enumeration of the regular files beneath a root.
///
/// Directories are descended into but never yielded. Entries are visited in
/// file-name order so a run's discovery order is stable. Symbolic links are
/// not followed as directories; a link is yielded only when it points at a
/// regular file, and dangling links are skipped.
///
/// Each unreadable entry surfaces as its own [`Error::Traversal`] item and the
/// walk carries on with its siblings, letting callers decide whether one bad
/// path is fatal. [`walk`] is the strict, collect-everything form.
#[derive(Debug, Clone)]
pub struct Walker {
    root: PathBuf,
    skipped: Vec<PathBuf>,
}

impl Walker {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            skipped: Vec::new(),
        }
    }

    /// Prune `dir` from the walk when it lies inside the root.
    ///
    /// Both paths are resolved through symlinks for the comparison only; the
    /// pruned path is re-expressed relative to the root as given, so yielded
    /// paths keep the caller's spelling.
    pub fn skip_nested(mut self, dir: &Path) -> Self {
        let (Ok(root), Ok(dir)) = (dunce::canonicalize(&self.root), dunce::canonicalize(dir)) else {
            return self;
        };
        if let Ok(relative) = dir.strip_prefix(&root)
            && !relative.as_os_str().is_empty()
        {
            tracing::debug!(dir = %dir.display(), "Pruning nested directory from walk");
            self.skipped.push(self.root.join(relative));
        }
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = Result<PathBuf>> + '_ {
        tracing::debug!(root = %self.root.display(), "Walking directory");

        WalkDir::new(&self.root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !self.skipped.iter().any(|s| s == entry.path()))
            .filter_map(|entry| match entry {
                Err(e) => Some(Err(Error::Traversal {
                    path: e.path().unwrap_or(self.root.as_path()).to_path_buf(),
                    message: e.to_string(),
                })),
                Ok(entry) => regular_file(entry).map(Ok),
            })
    }
}

fn regular_file(entry: DirEntry) -> Option<PathBuf> {
    let file_type = entry.file_type();
    if file_type.is_file() {
        return Some(entry.into_path());
    }
    if file_type.is_symlink() {
        match std::fs::metadata(entry.path()) {
            Ok(target) if target.is_file() => return Some(entry.into_path()),
            Ok(_) => tracing::debug!(path = %entry.path().display(), "Skipping link to non-file"),
            Err(e) => {
                tracing::debug!(path = %entry.path().display(), error = %e, "Skipping dangling link")
            }
        }
    }
    None
}

/// Collect every regular file beneath `root`, depth first.
///
/// The walk is strict: the first unreadable directory (or a missing `root`)
/// aborts it with [`Error::Traversal`].
pub fn walk(root: &Path) -> Result<Vec<PathBuf>> {
    let files = Walker::new(root).iter().collect::<Result<Vec<_>>>()?;
    tracing::debug!(root = %root.display(), count = files.len(), "Walk complete");
    Ok(files)
}
