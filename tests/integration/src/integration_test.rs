//! End-to-end integration test for the backup/restore round trip
//!
//! Exercises the complete flow: config file -> vault resolution -> archive
//! -> catalog -> restore into a fresh checkout.

use chrono::{Local, TimeZone};
use cpenv_core::config::{self, CpenvConfig};
use cpenv_core::{Answer, SyncEngine};
use cpenv_fs::list_project_entries;
use cpenv_test_utils::{RecordingReporter, ScriptedPrompter, TestVault};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;

#[test]
fn test_full_round_trip_through_config() {
    let tv = TestVault::new("shop");
    tv.write_project_file(".env", "DB=postgres://prod");
    tv.write_project_file("services/api/.env", "PORT=8080");
    tv.write_project_file("services/api/.env.example", "PORT=");
    tv.write_project_file("node_modules/pkg/.env", "IGNORED=1");
    tv.write_project_file("src/main.rs", "fn main() {}");

    let config_path = tv.root().join("cfg/cpenv.yaml");
    let config = CpenvConfig {
        vault_dir: tv.vault_root().display().to_string(),
        ..CpenvConfig::default()
    };
    config.save(&config_path).unwrap();

    let (loaded, vault_root) = config::resolve_vault_root(&config_path).unwrap();
    assert_eq!(loaded, config);
    assert_eq!(vault_root, tv.vault_root());

    let backup = SyncEngine::new(tv.project_root(), &vault_root).with_rules(loaded.rules.clone());
    let mut prompter = ScriptedPrompter::new().answering(&[Answer::Yes]);
    backup.confirm_project_root(&mut prompter).unwrap();
    let archived = backup
        .archive_at(
            &mut RecordingReporter::new(),
            Local.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap(),
        )
        .unwrap();
    assert_eq!(archived.summary(), "2 copied, 0 skipped, 0 failed");

    let entries = list_project_entries(&vault_root).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].name, "shop-2024-06-01_09-00-00");

    // Restore into a fresh checkout that already has one of the files.
    let checkout = tv.root().join("checkout/shop");
    fs::create_dir_all(checkout.join("services/api")).unwrap();
    fs::write(checkout.join("services/api/.env"), "PORT=3000").unwrap();

    let restore = SyncEngine::new(&checkout, &vault_root);
    let mut prompter = ScriptedPrompter::new()
        .selecting("shop-2024-06-01_09-00-00")
        .answering(&[Answer::Yes]);
    let restored = restore
        .restore(Path::new(""), &mut prompter, &mut RecordingReporter::new())
        .unwrap();

    assert_eq!(restored.copied.len(), 2);
    assert!(prompter.is_exhausted());
    assert_eq!(
        fs::read_to_string(checkout.join(".env")).unwrap(),
        "DB=postgres://prod"
    );
    assert_eq!(
        fs::read_to_string(checkout.join("services/api/.env")).unwrap(),
        "PORT=8080"
    );
    assert!(!checkout.join("services/api/.env.example").exists());
    assert!(!checkout.join("node_modules").exists());
}

#[test]
fn test_rules_from_toml_config_drive_backup() {
    let tv = TestVault::new("svc");
    tv.write_project_file("app.secrets", "K=1");
    tv.write_project_file(".env", "E=1");
    tv.write_project_file("target/debug.secrets", "T=1");

    let config_path = tv.root().join("cpenv.toml");
    fs::write(
        &config_path,
        format!(
            "vault_dir = '{}'\n\n[rules]\ninclude_suffix = '.secrets'\nignored_dirs = ['target']\n",
            tv.vault_root().display()
        ),
    )
    .unwrap();

    let (loaded, vault_root) = config::resolve_vault_root(&config_path).unwrap();
    assert_eq!(loaded.rules.variant_markers, vec![".template", ".example"]);

    SyncEngine::new(tv.project_root(), &vault_root)
        .with_rules(loaded.rules)
        .archive_at(
            &mut RecordingReporter::new(),
            Local.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap(),
        )
        .unwrap();

    let snapshot = vault_root.join("svc-2024-06-01_09-00-00");
    assert_eq!(
        TestVault::files_under(&snapshot),
        vec!["app.secrets".to_string()]
    );
}
