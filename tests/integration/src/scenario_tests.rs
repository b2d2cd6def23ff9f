//! Scenario tests for archive and restore
//!
//! Each test sets up a project and a vault as siblings in a temp dir and
//! checks the exact files on disk afterwards.

use chrono::{Local, TimeZone};
use cpenv_core::{Answer, ConflictDecision, ConflictResolver, Error, OverwritePolicy, SyncEngine};
use cpenv_fs::ProjectEntry;
use cpenv_test_utils::{RecordingReporter, ScriptedPrompter, TestVault};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;

const SNAPSHOT: &str = "proj-2024-01-01_00-00-00";

fn restore_all(tv: &TestVault, prompter: &mut ScriptedPrompter) -> cpenv_core::Result<()> {
    SyncEngine::new(tv.project_root(), tv.vault_root())
        .restore_entry(
            &ProjectEntry::new(SNAPSHOT),
            Path::new(""),
            prompter,
            &mut RecordingReporter::new(),
        )
        .map(|_| ())
}

#[test]
fn scenario_a_archive_filters_files() {
    let tv = TestVault::new("p");
    tv.write_project_file("a.env", "A=1");
    tv.write_project_file("a.env.example", "A=");
    tv.write_project_file("b.txt", "b");
    tv.write_project_file("node_modules/c.env", "C=1");

    SyncEngine::new(tv.project_root(), tv.vault_root())
        .archive(&mut RecordingReporter::new())
        .unwrap();

    let snapshots = tv.snapshots();
    assert_eq!(snapshots.len(), 1);
    assert!(snapshots[0].starts_with("p-"), "got: {}", snapshots[0]);
    assert!(cpenv_core::parse_snapshot_name(&snapshots[0]).is_some());
    assert_eq!(
        TestVault::files_under(&tv.vault_root().join(&snapshots[0])),
        vec!["a.env".to_string()]
    );
}

#[test]
fn scenario_b_restore_into_empty_project() {
    let tv = TestVault::new("q");
    tv.write_snapshot_file(SNAPSHOT, "x/secret.env", "S=1\nT=2\n");

    let mut prompter = ScriptedPrompter::new();
    restore_all(&tv, &mut prompter).unwrap();

    tv.assert_project_file_contains("x/secret.env", "S=1\nT=2\n");
    assert!(prompter.questions.is_empty());
}

#[test]
fn scenario_c_conflict_answered_no() {
    let tv = TestVault::new("q");
    tv.write_snapshot_file(SNAPSHOT, "x/secret.env", "FROM=vault");
    tv.write_project_file("x/secret.env", "FROM=project");

    let mut prompter = ScriptedPrompter::new().answering(&[Answer::No]);
    restore_all(&tv, &mut prompter).unwrap();

    tv.assert_project_file_contains("x/secret.env", "FROM=project");
}

#[test]
fn scenario_c_conflict_answered_yes() {
    let tv = TestVault::new("q");
    tv.write_snapshot_file(SNAPSHOT, "x/secret.env", "FROM=vault");
    tv.write_project_file("x/secret.env", "FROM=project");

    let mut prompter = ScriptedPrompter::new().answering(&[Answer::Yes]);
    restore_all(&tv, &mut prompter).unwrap();

    tv.assert_project_file_contains("x/secret.env", "FROM=vault");
}

#[test]
fn scenario_d_missing_vault() {
    let tv = TestVault::without_vault("p");
    tv.write_project_file(".env", "A=1");

    let err = SyncEngine::new(tv.project_root(), tv.vault_root())
        .archive(&mut RecordingReporter::new())
        .unwrap_err();

    assert!(matches!(
        err,
        Error::Fs(cpenv_fs::Error::VaultNotFound { .. })
    ));
    assert!(!tv.vault_root().exists());
}

#[test]
fn snapshots_one_second_apart_are_distinct() {
    let tv = TestVault::new("p");
    tv.write_project_file(".env", "A=1");
    let engine = SyncEngine::new(tv.project_root(), tv.vault_root());

    let first = engine
        .archive_at(
            &mut RecordingReporter::new(),
            Local.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap(),
        )
        .unwrap();
    let second = engine
        .archive_at(
            &mut RecordingReporter::new(),
            Local.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        )
        .unwrap();

    assert_ne!(first.destination_root, second.destination_root);
    assert_eq!(tv.snapshots().len(), 2);
}

#[test]
fn no_conflict_fast_path_never_prompts() {
    let tv = TestVault::new("q");
    let destination = tv.project_root().join("missing.env");

    // Un-scripted: any prompt panics.
    let mut prompter = ScriptedPrompter::new();
    let decision = ConflictResolver::new(OverwritePolicy::Ask)
        .resolve(&destination, "{project}/missing.env", &mut prompter)
        .unwrap();

    assert_eq!(decision, ConflictDecision::Proceed);
}

#[test]
fn round_trip_preserves_binary_content() {
    let tv = TestVault::new("bin");
    let payload: Vec<u8> = (0..=255u8).cycle().take(70_000).collect();
    fs::write(tv.project_root().join("blob.env"), &payload).unwrap();
    fs::write(tv.project_root().join("empty.env"), b"").unwrap();

    let report = SyncEngine::new(tv.project_root(), tv.vault_root())
        .archive(&mut RecordingReporter::new())
        .unwrap();

    assert_eq!(
        fs::read(report.destination_root.join("blob.env")).unwrap(),
        payload
    );
    assert_eq!(
        fs::read(report.destination_root.join("empty.env")).unwrap(),
        Vec::<u8>::new()
    );
}
