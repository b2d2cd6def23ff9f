//! Configuration commands: init, show, edit

use colored::Colorize;
use cpenv_core::CpenvConfig;
use cpenv_core::config::ensure_vault;

use crate::context::AppContext;
use crate::error::{CliError, Result};
use crate::open::edit_file;

/// Write a default config, then create the vault it points at.
pub fn run_config_init(ctx: &AppContext) -> Result<()> {
    let path = ctx.config_path();
    let config = match CpenvConfig::init(path) {
        Ok(config) => config,
        Err(cpenv_core::Error::ConfigExists { .. }) => {
            return Err(CliError::user(format!(
                "Config already exists at {}. Use `cpenv config edit` to change it.",
                path.display()
            )));
        }
        Err(e) => return Err(e.into()),
    };
    println!(
        "{} Wrote config to {}",
        "OK".green().bold(),
        path.display().to_string().cyan()
    );

    let vault_root = config.vault_root()?;
    if ensure_vault(&vault_root)? {
        println!(
            "{} Created vault at {}",
            "OK".green().bold(),
            vault_root.display().to_string().cyan()
        );
    }
    Ok(())
}

/// Print the config location, the vault and the effective rules.
pub fn run_config_show(ctx: &AppContext) -> Result<()> {
    let (config, vault_root) = ctx.load()?;
    let rules = &config.rules;

    println!("{}", "cpenv Configuration".bold());
    println!();
    println!(
        "  {:<16} {}",
        "Config:".dimmed(),
        ctx.config_path().display()
    );
    println!("  {:<16} {}", "Vault dir:".dimmed(), config.vault_dir);
    let status = if vault_root.is_dir() {
        "".normal()
    } else {
        "(missing)".yellow()
    };
    println!(
        "  {:<16} {} {}",
        "Vault path:".dimmed(),
        vault_root.display(),
        status
    );
    println!();
    println!("  {}:", "Rules".dimmed());
    println!("    {:<16} {}", "include suffix", rules.include_suffix.cyan());
    println!(
        "    {:<16} {}",
        "ignored dirs",
        list_or_none(&rules.ignored_dirs)
    );
    println!(
        "    {:<16} {}",
        "variants",
        list_or_none(&rules.variant_markers)
    );
    Ok(())
}

/// Open the config in the user's editor, check it still parses, and
/// create the vault if it moved somewhere new.
pub fn run_config_edit(ctx: &AppContext) -> Result<()> {
    let path = ctx.config_path();
    if !path.is_file() {
        return Err(cpenv_core::Error::ConfigNotFound {
            path: path.to_path_buf(),
        }
        .into());
    }

    edit_file(path)?;

    let (_, vault_root) = ctx.load()?;
    if ensure_vault(&vault_root)? {
        println!(
            "{} Created vault at {}",
            "OK".green().bold(),
            vault_root.display().to_string().cyan()
        );
    }
    println!("{} Config saved.", "OK".green().bold());
    Ok(())
}

fn list_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "(none)".dimmed().to_string()
    } else {
        items.join(", ").cyan().to_string()
    }
}
