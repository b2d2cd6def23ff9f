//! Shared test utilities for the cpenv workspace.
//!
//! A dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`vault`]: [`TestVault`] builder with a project and a vault side by side
//! - [`interact`]: scripted [`ScriptedPrompter`] and [`RecordingReporter`]

pub mod interact;
pub mod vault;

pub use interact::{RecordingReporter, ReportKind, ScriptedPrompter};
pub use vault::TestVault;
