//! Whole-file copy engine
//!
//! A copy streams the source into a locked temp file beside the destination
//! and renames it into place. A failed copy leaves the destination exactly as
//! it was (absent or holding its previous content).

use std::fs::{self, File};
use std::io;
use std::path::Path;

use fs2::FileExt;

use crate::io::{open_locked_temp, temp_path_for};
use crate::{Error, Result};

/// Copy `source` to `destination`, creating missing parent directories and
/// replacing any existing destination content.
///
/// The source's permission bits are carried over. Returns the number of
/// bytes copied. Every failure is reported as [`Error::Copy`] naming both
/// paths.
pub fn copy_file(source: &Path, destination: &Path) -> Result<u64> {
    let mut reader = File::open(source).map_err(|e| Error::copy(source, destination, e))?;
    let permissions = reader
        .metadata()
        .map_err(|e| Error::copy(source, destination, e))?
        .permissions();

    if let Some(parent) = destination.parent()
        && !parent.as_os_str().is_empty()
    {
        tracing::debug!(dir = %parent.display(), "Ensuring destination directory");
        fs::create_dir_all(parent).map_err(|e| Error::copy(source, destination, e))?;
    }

    let temp_path = temp_path_for(destination);
    let result = (|| -> Result<u64> {
        let mut writer = match open_locked_temp(&temp_path, destination) {
            Ok(file) => file,
            Err(Error::Io { source: cause, .. }) => {
                return Err(Error::copy(source, destination, cause));
            }
            Err(other) => return Err(other),
        };
        let bytes =
            io::copy(&mut reader, &mut writer).map_err(|e| Error::copy(source, destination, e))?;
        writer
            .sync_all()
            .map_err(|e| Error::copy(source, destination, e))?;
        writer.unlock().map_err(|_| Error::LockFailed {
            path: destination.to_path_buf(),
        })?;
        drop(writer);
        fs::set_permissions(&temp_path, permissions)
            .map_err(|e| Error::copy(source, destination, e))?;
        fs::rename(&temp_path, destination).map_err(|e| Error::copy(source, destination, e))?;
        Ok(bytes)
    })();

    match &result {
        Ok(bytes) => tracing::debug!(
            source = %source.display(),
            destination = %destination.display(),
            bytes,
            "Copied file"
        ),
        Err(e) => {
            let _ = fs::remove_file(&temp_path);
            tracing::debug!(error = %e, "Copy failed, staging file removed");
        }
    }
    result
}
