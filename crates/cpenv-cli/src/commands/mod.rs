//! Command implementations for cpenv-cli

pub mod backup;
pub mod config;
pub mod copy;
pub mod list;
pub mod vault;

pub use backup::run_backup;
pub use config::{run_config_edit, run_config_init, run_config_show};
pub use copy::run_copy;
pub use list::run_list;
pub use vault::run_vault;
