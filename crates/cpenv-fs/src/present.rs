//! Human-readable display paths
//!
//! Purely cosmetic: nothing computed here is ever used to read or write a
//! file, so symlink resolution stays out of the real copy paths.

use std::path::{Path, PathBuf};

use crate::NormalizedPath;
use crate::constants::{PROJECT_TOKEN, VAULT_TOKEN};

/// Rewrite `path` relative to the project or vault root.
///
/// All three paths are resolved through symlinks first. A path equal to or
/// beneath `project_root` becomes `{project}` / `{project}/<sub/path>`;
/// otherwise one beneath `vault_root` becomes `{vault}/...`; anything else is
/// returned unchanged. The project root wins when the two overlap.
pub fn prettify(path: &Path, project_root: &Path, vault_root: &Path) -> String {
    let resolved = resolve_lenient(path);

    for (root, token) in [(project_root, PROJECT_TOKEN), (vault_root, VAULT_TOKEN)] {
        let root = resolve_lenient(root);
        if let Ok(relative) = resolved.strip_prefix(&root) {
            let relative = NormalizedPath::new(relative);
            return if relative.as_str().is_empty() {
                token.to_string()
            } else {
                format!("{}/{}", token, relative)
            };
        }
    }

    path.display().to_string()
}

/// Canonicalize the longest existing ancestor of `path` and re-append the
/// rest, so paths that do not exist yet (copy destinations) still resolve.
fn resolve_lenient(path: &Path) -> PathBuf {
    let mut existing = path;
    let mut remainder = Vec::new();
    loop {
        if let Ok(canonical) = dunce::canonicalize(existing) {
            return remainder
                .iter()
                .rev()
                .fold(canonical, |acc: PathBuf, part| acc.join(part));
        }
        match (existing.parent(), existing.file_name()) {
            (Some(parent), Some(name)) => {
                remainder.push(name.to_os_string());
                existing = parent;
            }
            _ => return path.to_path_buf(),
        }
    }
}
