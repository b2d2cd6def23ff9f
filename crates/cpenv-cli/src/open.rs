//! Launching external programs: the file manager and the config editor

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{CliError, Result};

/// Find the full path of a binary on PATH (cross-platform)
fn which(binary: &str) -> Option<PathBuf> {
    let path_var = std::env::var_os("PATH")?;
    let exts = if cfg!(windows) {
        vec![".exe", ".cmd", ".bat", ""]
    } else {
        vec![""]
    };

    for dir in std::env::split_paths(&path_var) {
        for ext in &exts {
            let candidate = dir.join(format!("{}{}", binary, ext));
            if candidate.is_file() {
                return Some(candidate);
            }
        }
    }
    None
}

/// The platform's "open this folder" launcher.
fn file_manager() -> &'static str {
    if cfg!(target_os = "macos") {
        "open"
    } else if cfg!(windows) {
        "explorer"
    } else {
        "xdg-open"
    }
}

/// Open `dir` in the platform file manager without waiting for it.
pub fn open_in_file_manager(dir: &Path) -> Result<()> {
    let launcher = file_manager();
    if which(launcher).is_none() {
        return Err(CliError::user(format!(
            "Cannot open {}: '{}' is not on PATH.",
            dir.display(),
            launcher
        )));
    }

    tracing::debug!(launcher, dir = %dir.display(), "Opening file manager");
    Command::new(launcher)
        .arg(dir)
        .spawn()
        .map_err(|e| CliError::user(format!("Failed to launch '{}': {}", launcher, e)))?;
    Ok(())
}

/// Editor command line from `$VISUAL`, then `$EDITOR`, then the platform
/// fallback. Values may carry arguments, as in `code --wait`.
fn editor_command(visual: Option<String>, editor: Option<String>) -> Vec<String> {
    let configured = [visual, editor]
        .into_iter()
        .flatten()
        .find(|value| !value.trim().is_empty());

    match configured {
        Some(value) => value.split_whitespace().map(str::to_string).collect(),
        None if cfg!(windows) => vec!["notepad".to_string()],
        None => vec!["vi".to_string()],
    }
}

/// Open `file` in the user's editor and wait for it to exit.
pub fn edit_file(file: &Path) -> Result<()> {
    let command = editor_command(
        std::env::var("VISUAL").ok(),
        std::env::var("EDITOR").ok(),
    );
    let Some((program, args)) = command.split_first() else {
        return Err(CliError::user("No editor configured."));
    };

    tracing::debug!(editor = %program, file = %file.display(), "Launching editor");
    let status = Command::new(program)
        .args(args)
        .arg(file)
        .status()
        .map_err(|e| CliError::user(format!("Failed to launch '{}': {}", program, e)))?;

    if !status.success() {
        return Err(CliError::user(format!(
            "Editor '{}' exited with {}",
            program, status
        )));
    }
    Ok(())
}
