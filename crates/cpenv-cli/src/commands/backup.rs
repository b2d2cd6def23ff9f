//! Backup command implementation

use std::path::Path;

use cpenv_core::{Prompter, Reporter, SyncReport};

use crate::context::AppContext;
use crate::error::Result;
use crate::output::{print_summary, step};

/// Snapshot the env files under `project_root` into the vault.
///
/// Unless `yes` is set the user first confirms that `project_root` really is
/// the project root.
pub fn run_backup(
    ctx: &AppContext,
    project_root: &Path,
    yes: bool,
    prompter: &mut dyn Prompter,
    reporter: &mut dyn Reporter,
) -> Result<SyncReport> {
    let engine = ctx.engine(project_root)?;

    if yes {
        tracing::debug!("Skipping project root confirmation");
    } else {
        engine.confirm_project_root(prompter)?;
    }

    step(&format!(
        "Backing up {} to {}",
        project_root.display(),
        engine.vault_root().display()
    ));
    let report = engine.archive(reporter)?;
    print_summary(&report);
    Ok(report)
}
