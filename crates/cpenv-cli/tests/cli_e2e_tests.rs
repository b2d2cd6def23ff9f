//! CLI end-to-end tests for the compiled `cpenv` binary.
//!
//! Every run gets its own HOME and CPENV_CONFIG so nothing touches the real
//! user configuration, and stdin is closed so no prompt can block.

use assert_cmd::Command;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A sandbox: fake home, a project dir and a config pointing at a vault.
struct Sandbox {
    temp: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("home")).unwrap();
        fs::create_dir_all(temp.path().join("work/app")).unwrap();
        Self { temp }
    }

    fn home(&self) -> PathBuf {
        self.temp.path().join("home")
    }

    fn project(&self) -> PathBuf {
        self.temp.path().join("work/app")
    }

    fn vault(&self) -> PathBuf {
        self.temp.path().join("vault")
    }

    fn config(&self) -> PathBuf {
        self.temp.path().join("cpenv.yaml")
    }

    fn write_config(&self) {
        fs::write(
            self.config(),
            format!("vault_dir: {}\n", self.vault().display()),
        )
        .unwrap();
    }

    fn cmd(&self, dir: &Path) -> Command {
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("cpenv"));
        cmd.current_dir(dir)
            .env("HOME", self.home())
            .env("CPENV_CONFIG", self.config())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .write_stdin("");
        cmd
    }
}

fn snapshots(vault: &Path) -> Vec<PathBuf> {
    let mut found: Vec<PathBuf> = fs::read_dir(vault)
        .unwrap()
        .map(|e| e.unwrap().path())
        .filter(|p| p.is_dir())
        .collect();
    found.sort();
    found
}

// ============================================================================
// Help and Version
// ============================================================================

#[test]
fn test_help_lists_commands() {
    let sb = Sandbox::new();
    sb.cmd(sb.temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("backup"))
        .stdout(predicate::str::contains("copy"))
        .stdout(predicate::str::contains("vault"));
}

#[test]
fn test_version_subcommand() {
    let sb = Sandbox::new();
    sb.cmd(sb.temp.path())
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_command_prints_hint() {
    let sb = Sandbox::new();
    sb.cmd(sb.temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("cpenv --help"));
}

// ============================================================================
// Config
// ============================================================================

#[test]
fn test_config_init_creates_file_and_vault_in_home() {
    let sb = Sandbox::new();

    sb.cmd(sb.temp.path())
        .args(["config", "init"])
        .assert()
        .success();

    let written = fs::read_to_string(sb.config()).unwrap();
    assert!(written.contains(".env-files"), "got: {written}");
    assert!(sb.home().join(".env-files").is_dir());
}

#[test]
fn test_config_init_twice_fails() {
    let sb = Sandbox::new();
    sb.write_config();

    sb.cmd(sb.temp.path())
        .args(["c", "i"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_config_show_prints_rules() {
    let sb = Sandbox::new();
    sb.write_config();

    sb.cmd(sb.temp.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("node_modules"))
        .stdout(predicate::str::contains(".example"));
}

#[test]
fn test_missing_config_points_to_init() {
    let sb = Sandbox::new();

    sb.cmd(&sb.project())
        .args(["backup", "--yes"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("cpenv config init"));
}

// ============================================================================
// Backup / Copy / List
// ============================================================================

#[test]
fn test_backup_yes_writes_snapshot() {
    let sb = Sandbox::new();
    sb.write_config();
    fs::create_dir_all(sb.vault()).unwrap();
    fs::write(sb.project().join(".env"), "A=1").unwrap();
    fs::write(sb.project().join(".env.example"), "A=").unwrap();

    sb.cmd(&sb.project())
        .args(["bk", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 copied, 0 skipped, 0 failed"));

    let found = snapshots(&sb.vault());
    assert_eq!(found.len(), 1);
    let name = found[0].file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("app-"), "got: {name}");
    assert_eq!(fs::read_to_string(found[0].join(".env")).unwrap(), "A=1");
    assert!(!found[0].join(".env.example").exists());
}

#[test]
fn test_backup_without_vault_fails_cleanly() {
    let sb = Sandbox::new();
    sb.write_config();
    fs::write(sb.project().join(".env"), "A=1").unwrap();

    sb.cmd(&sb.project())
        .args(["backup", "--yes"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Vault"));

    assert!(!sb.vault().exists());
}

#[test]
fn test_copy_from_empty_vault_fails() {
    let sb = Sandbox::new();
    sb.write_config();
    fs::create_dir_all(sb.vault()).unwrap();

    sb.cmd(&sb.project())
        .arg("cp")
        .assert()
        .code(1);
}

#[test]
fn test_list_shows_snapshots() {
    let sb = Sandbox::new();
    sb.write_config();
    fs::create_dir_all(sb.vault().join("app-2024-01-01_00-00-00")).unwrap();

    sb.cmd(sb.temp.path())
        .arg("ls")
        .assert()
        .success()
        .stdout(predicate::str::contains("app-2024-01-01_00-00-00"))
        .stdout(predicate::str::contains("1 snapshot(s)"));
}

#[test]
fn test_config_flag_overrides_env() {
    let sb = Sandbox::new();
    let other = sb.temp.path().join("other.toml");
    fs::write(
        &other,
        format!("vault_dir = '{}'\n", sb.vault().display()),
    )
    .unwrap();
    fs::create_dir_all(sb.vault()).unwrap();

    sb.cmd(sb.temp.path())
        .args(["--config", other.to_str().unwrap(), "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No snapshots"));
}
