//! Atomic I/O operations with file locking

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::constants::TEMP_SUFFIX;
use crate::{Error, NormalizedPath, Result};

/// Hidden sibling of `target` used as the staging file for atomic writes.
///
/// Living in the same directory keeps the final rename on one filesystem.
pub(crate) fn temp_path_for(target: &Path) -> PathBuf {
    let temp_name = format!(
        ".{}.{}.{}",
        target
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id(),
        TEMP_SUFFIX
    );
    target.with_file_name(temp_name)
}

/// Open a fresh staging file and take an exclusive advisory lock on it.
pub(crate) fn open_locked_temp(temp_path: &Path, target: &Path) -> Result<File> {
    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(temp_path)
        .map_err(|e| Error::io(temp_path, e))?;

    file.lock_exclusive().map_err(|_| Error::LockFailed {
        path: target.to_path_buf(),
    })?;

    Ok(file)
}

/// Write content atomically to a file with locking.
///
/// Writes to a temp file, syncs it, then renames it over `path`, so readers
/// see either the old content or the new content and nothing in between.
pub fn write_atomic(path: &NormalizedPath, content: &[u8]) -> Result<()> {
    let native_path = path.to_native();

    if let Some(parent) = native_path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    let temp_path = temp_path_for(&native_path);
    let result = (|| -> Result<()> {
        let mut temp_file = open_locked_temp(&temp_path, &native_path)?;
        temp_file
            .write_all(content)
            .map_err(|e| Error::io(&temp_path, e))?;
        temp_file.sync_all().map_err(|e| Error::io(&temp_path, e))?;
        temp_file.unlock().map_err(|_| Error::LockFailed {
            path: native_path.clone(),
        })?;
        fs::rename(&temp_path, &native_path).map_err(|e| Error::io(&native_path, e))
    })();

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}

/// Read text content from a file.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    fs::read_to_string(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// Write text content to a file atomically.
pub fn write_text(path: &NormalizedPath, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}
