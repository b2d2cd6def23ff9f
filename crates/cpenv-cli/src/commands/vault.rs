//! Vault command: open the vault in the file manager

use colored::Colorize;

use crate::context::AppContext;
use crate::error::Result;
use crate::open::open_in_file_manager;

/// Run the vault command
pub fn run_vault(ctx: &AppContext) -> Result<()> {
    let (_, vault_root) = ctx.load()?;
    if !vault_root.is_dir() {
        return Err(cpenv_fs::Error::VaultNotFound { path: vault_root }.into());
    }

    println!(
        "{} Opening vault: {}",
        "=>".blue().bold(),
        vault_root.display().to_string().cyan()
    );
    open_in_file_manager(&vault_root)
}
