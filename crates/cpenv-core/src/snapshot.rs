//! Timestamped snapshot naming
//!
//! Snapshots are named `<project>-<YYYY-MM-DD_HH-MM-SS>` in local time, which
//! sorts chronologically and is safe on every filesystem.

use std::path::Path;

use chrono::{DateTime, Local, NaiveDateTime};

use crate::{Error, Result};

/// `chrono` format of the snapshot timestamp.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Length of a formatted timestamp.
const TIMESTAMP_LEN: usize = "YYYY-MM-DD_HH-MM-SS".len();

/// Build the snapshot directory name for `project_root` at time `at`.
///
/// Fails with [`Error::InvalidProjectName`] when the root has no base name,
/// as for `/`.
pub fn snapshot_name(project_root: &Path, at: DateTime<Local>) -> Result<String> {
    let project = project_root
        .file_name()
        .map(|name| name.to_string_lossy())
        .filter(|name| !name.is_empty())
        .ok_or_else(|| Error::InvalidProjectName {
            path: project_root.to_path_buf(),
        })?;

    Ok(format!("{}-{}", project, at.format(TIMESTAMP_FORMAT)))
}

/// Split a snapshot name back into project name and timestamp.
///
/// Returns `None` for directories that were not named by [`snapshot_name`].
pub fn parse_snapshot_name(name: &str) -> Option<(&str, NaiveDateTime)> {
    let split = name.len().checked_sub(TIMESTAMP_LEN + 1)?;
    if !name.is_char_boundary(split) {
        return None;
    }
    let (project, rest) = name.split_at(split);
    let timestamp = rest.strip_prefix('-')?;
    if project.is_empty() {
        return None;
    }
    let parsed = NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT).ok()?;
    Some((project, parsed))
}
