//! List command: the snapshots in the vault

use colored::Colorize;
use cpenv_core::parse_snapshot_name;
use cpenv_fs::list_project_entries;

use crate::context::AppContext;
use crate::error::Result;

/// Run the list command
pub fn run_list(ctx: &AppContext) -> Result<()> {
    let (_, vault_root) = ctx.load()?;

    let entries = match list_project_entries(&vault_root) {
        Ok(entries) => entries,
        Err(cpenv_fs::Error::NoProjectsFound { .. }) => {
            println!("No snapshots in {}", vault_root.display().to_string().cyan());
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    println!("{}", "Snapshots".bold());
    println!();
    for entry in &entries {
        match parse_snapshot_name(&entry.name) {
            Some((project, taken)) => println!(
                "  {:<40} {} {}",
                entry.name.green(),
                project.cyan(),
                taken.format("%Y-%m-%d %H:%M:%S").to_string().dimmed()
            ),
            None => println!("  {}", entry.name),
        }
    }
    println!();
    println!(
        "{} snapshot(s) in {}",
        entries.len(),
        vault_root.display().to_string().cyan()
    );
    Ok(())
}
