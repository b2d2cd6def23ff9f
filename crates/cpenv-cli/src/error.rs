//! Error types for cpenv-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from cpenv-core
    #[error(transparent)]
    Core(#[from] cpenv_core::Error),

    /// Error from cpenv-fs
    #[error(transparent)]
    Fs(#[from] cpenv_fs::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Interactive prompt error
    #[error("Interactive prompt error: {0}")]
    Dialoguer(#[from] dialoguer::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }

    /// Whether the user stopped the operation.
    pub fn is_cancellation(&self) -> bool {
        matches!(self, Self::Core(e) if e.is_cancellation())
    }

    /// Process exit status for this error: 130 for cancellation, else 1.
    pub fn exit_code(&self) -> i32 {
        if self.is_cancellation() { 130 } else { 1 }
    }
}
