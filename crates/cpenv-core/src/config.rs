//! cpenv configuration
//!
//! A single small file, `<config_dir>/cpenv/cpenv.yaml` by default, naming
//! the vault directory and optionally overriding the classification rules.

use std::path::{Path, PathBuf};

use cpenv_fs::{ClassifierRules, ConfigStore, NormalizedPath};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Directory under the platform config dir holding the config file
pub const CONFIG_DIR_NAME: &str = "cpenv";

/// Default config file name
pub const CONFIG_FILE_NAME: &str = "cpenv.yaml";

/// Vault directory written by `config init`, relative to the home directory
pub const DEFAULT_VAULT_DIR: &str = ".env-files";

/// Contents of the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CpenvConfig {
    /// Vault location: absolute, `~/`-prefixed, or relative to the home directory
    pub vault_dir: String,

    /// Which files a backup picks up
    #[serde(default)]
    pub rules: ClassifierRules,
}

impl Default for CpenvConfig {
    fn default() -> Self {
        Self {
            vault_dir: DEFAULT_VAULT_DIR.to_string(),
            rules: ClassifierRules::default(),
        }
    }
}

impl CpenvConfig {
    /// Load the config at `path`, failing with [`Error::ConfigNotFound`] when
    /// there is no file there.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        tracing::debug!(path = %path.display(), "Loading config");
        Ok(ConfigStore::new().load(&NormalizedPath::new(path))?)
    }

    /// Write the config atomically to `path`.
    pub fn save(&self, path: &Path) -> Result<()> {
        ConfigStore::new().save(&NormalizedPath::new(path), self)?;
        Ok(())
    }

    /// Write a default config to `path`.
    ///
    /// Refuses with [`Error::ConfigExists`] rather than clobbering an existing
    /// file.
    pub fn init(path: &Path) -> Result<Self> {
        if path.exists() {
            return Err(Error::ConfigExists {
                path: path.to_path_buf(),
            });
        }
        let config = Self::default();
        config.save(path)?;
        tracing::debug!(path = %path.display(), "Wrote default config");
        Ok(config)
    }

    /// Absolute vault path, resolving relative values against the user's
    /// home directory.
    pub fn vault_root(&self) -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(Error::DirectoryUnknown { which: "home" })?;
        Ok(self.vault_root_in(&home))
    }

    /// Absolute vault path with relative values resolved against `home`.
    pub fn vault_root_in(&self, home: &Path) -> PathBuf {
        let raw = self.vault_dir.trim();
        if let Some(rest) = raw.strip_prefix("~/") {
            return home.join(rest);
        }
        if raw == "~" {
            return home.to_path_buf();
        }
        let path = Path::new(raw);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            home.join(path)
        }
    }
}

/// The platform-default config file location.
pub fn default_config_path() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
        .ok_or(Error::DirectoryUnknown { which: "config" })
}

/// Load the config and resolve its vault root in one step.
pub fn resolve_vault_root(config_path: &Path) -> Result<(CpenvConfig, PathBuf)> {
    let config = CpenvConfig::load(config_path)?;
    let vault_root = config.vault_root()?;
    tracing::debug!(vault = %vault_root.display(), "Resolved vault root");
    Ok((config, vault_root))
}

/// Create the vault directory if it does not exist yet.
///
/// Returns `true` when a directory was created.
pub fn ensure_vault(vault_root: &Path) -> Result<bool> {
    if vault_root.is_dir() {
        return Ok(false);
    }
    std::fs::create_dir_all(vault_root).map_err(|e| cpenv_fs::Error::io(vault_root, e))?;
    tracing::debug!(vault = %vault_root.display(), "Created vault directory");
    Ok(true)
}
