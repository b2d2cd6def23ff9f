//! Backup and restore between a project and the vault
//!
//! - **archive**: copy a project's environment files into a fresh
//!   timestamped snapshot directory in the vault
//! - **restore**: copy every file of a chosen snapshot back into a project,
//!   asking before overwriting

mod engine;
mod report;

pub use engine::SyncEngine;
pub use report::{FileFailure, SyncReport};
