//! Backup and restore orchestration for cpenv
//!
//! Sits between the filesystem layer and the command line:
//!
//! ```text
//!        cpenv-cli
//!            |
//!       cpenv-core   config, prompts, conflict policy, SyncEngine
//!            |
//!        cpenv-fs    walk, classify, copy, present
//! ```
//!
//! # Example
//!
//! ```ignore
//! use cpenv_core::{SyncEngine, config};
//!
//! let (cfg, vault) = config::resolve_vault_root(&config::default_config_path()?)?;
//! let engine = SyncEngine::new(std::env::current_dir()?, vault).with_rules(cfg.rules);
//! engine.confirm_project_root(&mut prompter)?;
//! let report = engine.archive(&mut reporter)?;
//! println!("{}", report.summary());
//! ```

pub mod cancel;
pub mod config;
pub mod error;
pub mod interact;
pub mod resolve;
pub mod snapshot;
pub mod sync;

pub use cancel::CancellationToken;
pub use config::CpenvConfig;
pub use error::{Error, Result};
pub use interact::{Answer, Prompter, Reporter};
pub use resolve::{ConflictDecision, ConflictResolver, OverwritePolicy};
pub use snapshot::{parse_snapshot_name, snapshot_name};
pub use sync::{FileFailure, SyncEngine, SyncReport};
