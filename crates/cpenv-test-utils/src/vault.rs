//! [`TestVault`] builder for backup and restore scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use walkdir::WalkDir;

/// A temporary directory holding a project and a vault as siblings:
///
/// ```text
/// <tmp>/<project name>/   project root
/// <tmp>/vault/            vault root
/// ```
///
/// # Example
///
/// ```rust,no_run
/// use cpenv_test_utils::TestVault;
///
/// let tv = TestVault::new("myapp");
/// tv.write_project_file(".env", "A=1");
/// tv.write_snapshot_file("myapp-2024-01-01_12-00-00", ".env", "A=0");
/// tv.assert_project_file_contains(".env", "A=1");
/// ```
pub struct TestVault {
    temp_dir: TempDir,
    project_root: PathBuf,
    vault_root: PathBuf,
}

impl TestVault {
    /// Create the project directory `name` and an empty vault.
    pub fn new(name: &str) -> Self {
        let temp_dir = TempDir::new().unwrap();
        let project_root = temp_dir.path().join(name);
        let vault_root = temp_dir.path().join("vault");
        fs::create_dir_all(&project_root).unwrap();
        fs::create_dir_all(&vault_root).unwrap();
        Self {
            temp_dir,
            project_root,
            vault_root,
        }
    }

    /// Like [`TestVault::new`] but without creating the vault directory.
    pub fn without_vault(name: &str) -> Self {
        let tv = Self::new(name);
        fs::remove_dir(&tv.vault_root).unwrap();
        tv
    }

    /// The temporary directory containing both roots.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn vault_root(&self) -> &Path {
        &self.vault_root
    }

    /// Write `content` to `rel` under the project root, creating parents.
    pub fn write_project_file(&self, rel: &str, content: &str) -> PathBuf {
        write_with_parents(&self.project_root.join(rel), content)
    }

    /// Write `content` to `rel` inside the snapshot `snapshot`.
    pub fn write_snapshot_file(&self, snapshot: &str, rel: &str, content: &str) -> PathBuf {
        write_with_parents(&self.vault_root.join(snapshot).join(rel), content)
    }

    /// Names of the vault's immediate subdirectories, sorted.
    pub fn snapshots(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(&self.vault_root)
            .unwrap()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_dir())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    /// Every regular file under `dir`, as sorted `/`-separated relative paths.
    pub fn files_under(dir: &Path) -> Vec<String> {
        let mut found = collect_files(dir);
        found.sort();
        found
    }

    /// Assert that `rel` under the project root holds exactly `content`.
    ///
    /// # Panics
    /// Panics if the file is missing or differs.
    pub fn assert_project_file_contains(&self, rel: &str, content: &str) {
        let full_path = self.project_root.join(rel);
        let actual = fs::read_to_string(&full_path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", full_path.display()));
        assert_eq!(
            actual,
            content,
            "Unexpected content in {}",
            full_path.display()
        );
    }

    /// Assert that `rel` under the project root does **not** exist.
    pub fn assert_project_file_not_exists(&self, rel: &str) {
        let full_path = self.project_root.join(rel);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }
}

fn write_with_parents(path: &Path, content: &str) -> PathBuf {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
    path.to_path_buf()
}

fn collect_files(dir: &Path) -> Vec<String> {
    WalkDir::new(dir)
        .into_iter()
        .map(|entry| entry.unwrap())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| {
            let rel = entry.path().strip_prefix(dir).unwrap();
            rel.to_string_lossy().replace('\\', "/")
        })
        .collect()
}
