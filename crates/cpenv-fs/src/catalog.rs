//! Vault snapshot catalog

use std::fs;
use std::path::Path;

use crate::{Error, Result};

/// One archived snapshot: an immediate subdirectory of the vault.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectEntry {
    /// Directory base name, shown to the user
    pub name: String,
    /// Selection key; currently always equal to `name`
    pub value: String,
}

impl ProjectEntry {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            value: name.clone(),
            name,
        }
    }
}

impl std::fmt::Display for ProjectEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// List the snapshot directories of `vault_root`, sorted by name.
///
/// Plain files in the vault are ignored. Fails with
/// [`Error::VaultNotFound`] when the vault is missing or unreadable, and
/// with [`Error::NoProjectsFound`] when it holds no snapshot directories.
pub fn list_project_entries(vault_root: &Path) -> Result<Vec<ProjectEntry>> {
    let read_dir = fs::read_dir(vault_root).map_err(|e| {
        tracing::debug!(vault = %vault_root.display(), error = %e, "Vault unreadable");
        Error::VaultNotFound {
            path: vault_root.to_path_buf(),
        }
    })?;

    let mut entries = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|e| Error::io(vault_root, e))?;
        let is_dir = entry
            .file_type()
            .map_err(|e| Error::io(entry.path(), e))?
            .is_dir();
        if !is_dir {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        tracing::debug!(%name, "Found snapshot");
        entries.push(ProjectEntry::new(name));
    }

    if entries.is_empty() {
        return Err(Error::NoProjectsFound {
            path: vault_root.to_path_buf(),
        });
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}
