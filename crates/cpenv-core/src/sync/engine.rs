//! SyncEngine implementation
//!
//! Straight-line archive and restore runs. Files are processed one at a time
//! in discovery order; a failure on one file is reported and the run moves on,
//! while configuration problems and user cancellation end it.

use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use chrono::{DateTime, Local};
use cpenv_fs::{
    ClassifierRules, PathClassifier, ProjectEntry, Walker, copy_file, list_project_entries,
    prettify,
};

use super::report::SyncReport;
use crate::cancel::CancellationToken;
use crate::interact::{Answer, Prompter, Reporter};
use crate::resolve::{ConflictDecision, ConflictResolver, OverwritePolicy};
use crate::snapshot::snapshot_name;
use crate::{Error, Result};

/// Label shown above the snapshot list on restore
const SELECT_LABEL: &str = "Choose a project to copy from";

/// Moves environment files between one project and the vault.
///
/// The engine holds only read-only inputs; the interactive capabilities are
/// passed to each operation.
#[derive(Debug, Clone)]
pub struct SyncEngine {
    project_root: PathBuf,
    vault_root: PathBuf,
    classifier: PathClassifier,
    resolver: ConflictResolver,
    cancel: CancellationToken,
}

impl SyncEngine {
    /// Create an engine with the default classification rules and the
    /// ask-before-overwrite policy.
    pub fn new(project_root: impl Into<PathBuf>, vault_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            vault_root: vault_root.into(),
            classifier: PathClassifier::default(),
            resolver: ConflictResolver::default(),
            cancel: CancellationToken::new(),
        }
    }

    pub fn with_rules(mut self, rules: ClassifierRules) -> Self {
        self.classifier = PathClassifier::new(rules);
        self
    }

    pub fn with_policy(mut self, policy: OverwritePolicy) -> Self {
        self.resolver = ConflictResolver::new(policy);
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn vault_root(&self) -> &Path {
        &self.vault_root
    }

    /// Display form of `path` relative to the project or vault.
    pub fn display(&self, path: &Path) -> String {
        prettify(path, &self.project_root, &self.vault_root)
    }

    /// Ask the user to confirm the project root before a backup.
    ///
    /// "No" fails with [`Error::NotConfirmed`], cancelling with
    /// [`Error::Cancelled`]; either way nothing has been touched yet.
    pub fn confirm_project_root(&self, prompter: &mut dyn Prompter) -> Result<()> {
        let prompt = format!(
            "Current working directory: {}\nIs this your root directory to perform the backup?",
            self.project_root.display()
        );
        match prompter.ask_yes_no(&prompt)? {
            Answer::Yes => {
                tracing::debug!("Project root confirmed");
                Ok(())
            }
            Answer::No => Err(Error::NotConfirmed {
                path: self.project_root.clone(),
            }),
            Answer::Cancelled => Err(Error::Cancelled),
        }
    }

    /// Snapshot the project's environment files into the vault, stamped now.
    pub fn archive(&self, reporter: &mut dyn Reporter) -> Result<SyncReport> {
        self.archive_at(reporter, Local::now())
    }

    /// Snapshot the project's environment files into the vault as
    /// `<project>-<timestamp of at>`.
    ///
    /// Only files classified as [`cpenv_fs::Classification::Include`] are copied, at
    /// the same relative path. The vault must already exist; nothing is
    /// created when it does not. A run that stops with an error before any
    /// file was copied removes its snapshot directory again.
    pub fn archive_at(&self, reporter: &mut dyn Reporter, at: DateTime<Local>) -> Result<SyncReport> {
        self.require_vault()?;
        let name = snapshot_name(&self.project_root, at)?;
        require_dir(&self.project_root)?;

        let destination_root = self.vault_root.join(&name);
        match fs::create_dir(&destination_root) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return Err(Error::SnapshotExists {
                    path: destination_root,
                });
            }
            Err(e) => return Err(cpenv_fs::Error::io(&destination_root, e).into()),
        }
        tracing::debug!(snapshot = %destination_root.display(), "Created snapshot directory");

        let mut report = SyncReport::new(&destination_root);
        if let Err(e) = self.archive_files(&destination_root, &mut report, reporter) {
            if report.copied.is_empty() {
                self.discard_snapshot(&destination_root);
            }
            return Err(e);
        }

        if report.copied.is_empty() && report.failed.is_empty() {
            reporter.warning(&format!(
                "No environment files found under {}",
                self.display(&self.project_root)
            ));
        }
        Ok(report)
    }

    /// Copy every included file of the project into `destination_root`.
    ///
    /// The cancellation token is checked before each file and once more
    /// after the last, so an interrupt during the final copy still ends
    /// the run as cancelled.
    fn archive_files(
        &self,
        destination_root: &Path,
        report: &mut SyncReport,
        reporter: &mut dyn Reporter,
    ) -> Result<()> {
        let walker = Walker::new(&self.project_root)
            .skip_nested(&self.vault_root)
            .skip_nested(destination_root);

        for item in walker.iter() {
            self.cancel.check()?;

            let source = match item {
                Ok(source) => source,
                Err(e) => {
                    self.record_traversal_error(e, report, reporter);
                    continue;
                }
            };
            let Ok(relative) = source.strip_prefix(&self.project_root) else {
                continue;
            };

            let classification = self.classifier.classify(relative);
            if !classification.is_included() {
                tracing::debug!(path = %relative.display(), ?classification, "Skipping file");
                continue;
            }

            let destination = destination_root.join(relative);
            self.copy_one(&source, &destination, report, reporter);
        }

        self.cancel.check()
    }

    /// Remove a snapshot directory that an aborted run left without any
    /// copied file, so it is never offered for restore.
    fn discard_snapshot(&self, snapshot: &Path) {
        match fs::remove_dir_all(snapshot) {
            Ok(()) => tracing::debug!(snapshot = %snapshot.display(), "Removed empty snapshot"),
            Err(e) => tracing::warn!(
                snapshot = %snapshot.display(),
                error = %e,
                "Cannot remove empty snapshot"
            ),
        }
    }

    /// The vault's snapshots.
    pub fn list_entries(&self) -> Result<Vec<ProjectEntry>> {
        Ok(list_project_entries(&self.vault_root)?)
    }

    /// Let the user pick a snapshot, then restore it (see [`Self::restore_entry`]).
    pub fn restore(
        &self,
        sub_path: &Path,
        prompter: &mut dyn Prompter,
        reporter: &mut dyn Reporter,
    ) -> Result<SyncReport> {
        let entries = self.list_entries()?;
        let options: Vec<String> = entries.iter().map(|e| e.name.clone()).collect();

        let chosen = prompter.select_one(SELECT_LABEL, &options)?;
        let entry = entries
            .into_iter()
            .find(|e| e.value == chosen)
            .ok_or_else(|| Error::Prompt {
                message: format!("'{chosen}' is not one of the offered snapshots"),
            })?;
        tracing::debug!(snapshot = %entry.name, "Snapshot selected");

        self.restore_entry(&entry, sub_path, prompter, reporter)
    }

    /// Copy every file under `<vault>/<entry>/<sub_path>` to
    /// `<project>/<sub_path>`, keeping relative paths.
    ///
    /// No classification is applied. Existing destinations go through the
    /// conflict resolver; cancelling its prompt stops the whole restore.
    pub fn restore_entry(
        &self,
        entry: &ProjectEntry,
        sub_path: &Path,
        prompter: &mut dyn Prompter,
        reporter: &mut dyn Reporter,
    ) -> Result<SyncReport> {
        let sub_path = checked_sub_path(sub_path)?;
        let snapshot_root = join_sub_path(&self.vault_root.join(&entry.name), &sub_path);
        require_dir(&snapshot_root)?;

        let destination_root = join_sub_path(&self.project_root, &sub_path);
        let mut report = SyncReport::new(&destination_root);

        for item in Walker::new(&snapshot_root).iter() {
            self.cancel.check()?;

            let source = match item {
                Ok(source) => source,
                Err(e) => {
                    self.record_traversal_error(e, &mut report, reporter);
                    continue;
                }
            };
            let Ok(relative) = source.strip_prefix(&snapshot_root) else {
                continue;
            };

            let destination = destination_root.join(relative);
            let display = self.display(&destination);
            match self.resolver.resolve(&destination, &display, prompter)? {
                ConflictDecision::Proceed => {
                    self.copy_one(&source, &destination, &mut report, reporter)
                }
                ConflictDecision::Skip => {
                    reporter.warning(&format!("Skipped {display}"));
                    report.skipped.push(destination);
                }
            }
        }

        self.cancel.check()?;
        Ok(report)
    }

    fn require_vault(&self) -> Result<()> {
        if self.vault_root.is_dir() {
            return Ok(());
        }
        Err(cpenv_fs::Error::VaultNotFound {
            path: self.vault_root.clone(),
        }
        .into())
    }

    fn copy_one(
        &self,
        source: &Path,
        destination: &Path,
        report: &mut SyncReport,
        reporter: &mut dyn Reporter,
    ) {
        let from = self.display(source);
        let to = self.display(destination);

        reporter.progress(&format!("Copying {from} to {to}"));
        match copy_file(source, destination) {
            Ok(_) => {
                reporter.success(&format!("Copied {from} to {to}"));
                report.copied.push(destination.to_path_buf());
            }
            Err(e) => {
                tracing::warn!(source = %source.display(), error = %e, "Copy failed");
                reporter.error(&format!("Failed to copy {from} to {to}: {e}"));
                report.record_failure(source, &e);
            }
        }
    }

    fn record_traversal_error(
        &self,
        error: cpenv_fs::Error,
        report: &mut SyncReport,
        reporter: &mut dyn Reporter,
    ) {
        let path = match &error {
            cpenv_fs::Error::Traversal { path, .. } => path.clone(),
            _ => self.project_root.clone(),
        };
        tracing::warn!(path = %path.display(), error = %error, "Traversal failed");
        reporter.error(&format!("Cannot read {}: {error}", self.display(&path)));
        report.record_failure(path, &error);
    }
}

/// Fail with a traversal error unless `path` is a directory.
fn require_dir(path: &Path) -> Result<()> {
    if path.is_dir() {
        return Ok(());
    }
    Err(cpenv_fs::Error::Traversal {
        path: path.to_path_buf(),
        message: "not a directory".into(),
    }
    .into())
}

/// Keep only the normal components of a restore sub-path, rejecting any
/// that would climb out of the snapshot or project.
fn checked_sub_path(sub_path: &Path) -> Result<PathBuf> {
    let mut clean = PathBuf::new();
    for component in sub_path.components() {
        match component {
            Component::Normal(part) => clean.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(Error::InvalidSubPath {
                    path: sub_path.to_path_buf(),
                });
            }
        }
    }
    Ok(clean)
}

/// `root.join(sub_path)` without a trailing separator for an empty sub-path.
fn join_sub_path(root: &Path, sub_path: &Path) -> PathBuf {
    if sub_path.as_os_str().is_empty() {
        root.to_path_buf()
    } else {
        root.join(sub_path)
    }
}
