//! Copy (restore) command implementation

use std::path::Path;

use cpenv_core::{OverwritePolicy, Prompter, Reporter, SyncReport};

use crate::context::AppContext;
use crate::error::Result;
use crate::output::{print_summary, step};

/// Restore a snapshot the user picks into `project_root`, optionally
/// limited to `sub_path`. With `yes` existing files are overwritten without
/// asking.
pub fn run_copy(
    ctx: &AppContext,
    project_root: &Path,
    sub_path: &Path,
    yes: bool,
    prompter: &mut dyn Prompter,
    reporter: &mut dyn Reporter,
) -> Result<SyncReport> {
    let policy = if yes {
        OverwritePolicy::Always
    } else {
        OverwritePolicy::Ask
    };
    let engine = ctx.engine(project_root)?.with_policy(policy);

    let report = engine.restore(sub_path, prompter, reporter)?;
    step(&format!(
        "Restored into {}",
        report.destination_root.display()
    ));
    print_summary(&report);
    Ok(report)
}
