//! Per-file conflict resolution for restores

use std::path::Path;

use crate::interact::{Answer, Prompter};
use crate::{Error, Result};

/// What to do with one copy whose destination may already exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictDecision {
    /// Copy, replacing any existing destination content.
    Proceed,
    /// Leave the existing destination untouched.
    Skip,
}

/// How existing destinations are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverwritePolicy {
    /// Ask the user about every existing destination.
    #[default]
    Ask,
    /// Overwrite existing destinations without asking.
    Always,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConflictResolver {
    policy: OverwritePolicy,
}

impl ConflictResolver {
    pub fn new(policy: OverwritePolicy) -> Self {
        Self { policy }
    }

    /// Decide whether the copy to `destination` may go ahead.
    ///
    /// A missing destination proceeds without consulting `prompter`. An
    /// existing one is put to the user as "`display` exists, overwrite?";
    /// "no" skips it, while cancelling the prompt returns
    /// [`Error::Cancelled`] so the whole operation stops.
    pub fn resolve(
        &self,
        destination: &Path,
        display: &str,
        prompter: &mut dyn Prompter,
    ) -> Result<ConflictDecision> {
        if std::fs::symlink_metadata(destination).is_err() {
            return Ok(ConflictDecision::Proceed);
        }

        if self.policy == OverwritePolicy::Always {
            tracing::debug!(destination = %destination.display(), "Overwriting without prompt");
            return Ok(ConflictDecision::Proceed);
        }

        let prompt = format!("{display} already exists. Overwrite?");
        match prompter.ask_yes_no(&prompt)? {
            Answer::Yes => Ok(ConflictDecision::Proceed),
            Answer::No => {
                tracing::debug!(destination = %destination.display(), "User declined overwrite");
                Ok(ConflictDecision::Skip)
            }
            Answer::Cancelled => Err(Error::Cancelled),
        }
    }
}
