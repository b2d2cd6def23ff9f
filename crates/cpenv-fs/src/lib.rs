//! Filesystem layer for cpenv
//!
//! Everything here touches the disk (or decides what should be touched)
//! without ever talking to the user:
//!
//! - [`classify`]: which discovered files are environment files
//! - [`walk`]: recursive file enumeration
//! - [`catalog`]: the vault's snapshot directories
//! - [`copy`]: whole-file copies that never leave a truncated destination
//! - [`present`]: `{project}` / `{vault}` display paths
//! - [`config`] and [`io`]: format-agnostic config files with atomic writes

pub mod catalog;
pub mod classify;
pub mod config;
pub mod constants;
pub mod copy;
pub mod error;
pub mod io;
pub mod path;
pub mod present;
pub mod walk;

pub use catalog::{ProjectEntry, list_project_entries};
pub use classify::{Classification, ClassifierRules, PathClassifier};
pub use config::ConfigStore;
pub use copy::copy_file;
pub use error::{Error, Result};
pub use path::NormalizedPath;
pub use present::prettify;
pub use walk::{Walker, walk};
