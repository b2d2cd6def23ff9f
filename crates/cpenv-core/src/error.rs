//! Error types for cpenv-core

use std::path::PathBuf;

/// Result type for cpenv-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in cpenv-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration file not found at expected path
    #[error("Configuration not found at {path}. Run `cpenv config init` first")]
    ConfigNotFound { path: PathBuf },

    /// Configuration file already present when initializing
    #[error("Configuration already exists at {path}. Use `cpenv config edit` to change it")]
    ConfigExists { path: PathBuf },

    /// Neither the home nor the config directory could be determined
    #[error("Could not determine the {which} directory")]
    DirectoryUnknown { which: &'static str },

    /// The project root has no usable base name (e.g. `/`)
    #[error("Cannot derive a project name from {path}")]
    InvalidProjectName { path: PathBuf },

    /// A restore sub-path tried to leave the snapshot
    #[error("Invalid sub-path '{path}': must be relative and stay inside the project")]
    InvalidSubPath { path: PathBuf },

    /// A snapshot with the same name was already written
    #[error("Snapshot already exists at {path}")]
    SnapshotExists { path: PathBuf },

    /// The selection prompt had nothing to offer
    #[error("No options to choose from")]
    NoOptions,

    /// The user cancelled the snapshot selection
    #[error("Selection cancelled")]
    SelectionCancelled,

    /// The user interrupted the operation
    #[error("Operation cancelled")]
    Cancelled,

    /// The user declined the working-directory check
    #[error("Aborted: {path} is not the directory to back up. cd to your project root and retry")]
    NotConfirmed { path: PathBuf },

    /// The interactive prompt itself failed
    #[error("Prompt failed: {message}")]
    Prompt { message: String },

    /// Filesystem error from cpenv-fs
    #[error(transparent)]
    Fs(#[from] cpenv_fs::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether the user asked to stop, as opposed to something failing.
    pub fn is_cancellation(&self) -> bool {
        matches!(self, Self::Cancelled | Self::SelectionCancelled)
    }
}
