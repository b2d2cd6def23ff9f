//! Environment-file classification
//!
//! Decides, from the path string alone, whether a discovered file takes part
//! in a sync. No filesystem access happens here.

use std::path::{Component, Path};

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_IGNORED_DIRS, DEFAULT_INCLUDE_SUFFIX, DEFAULT_VARIANT_MARKERS};

/// Outcome of classifying one candidate file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// An environment file that should be copied.
    Include,
    /// Lives under an ignored directory such as `node_modules`.
    ExcludeDirectory,
    /// A `.template` / `.example` placeholder.
    ExcludeVariant,
    /// Not an environment file at all.
    Unmatched,
}

impl Classification {
    pub fn is_included(self) -> bool {
        self == Self::Include
    }
}

/// The rule set a [`PathClassifier`] applies.
///
/// Deserializes from the `rules` table of the cpenv config; any missing key
/// falls back to its default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierRules {
    /// Base-name suffix of an environment file
    pub include_suffix: String,
    /// Directory names that exclude everything beneath them
    pub ignored_dirs: Vec<String>,
    /// Base-name substrings that mark placeholder variants
    pub variant_markers: Vec<String>,
}

impl Default for ClassifierRules {
    fn default() -> Self {
        Self {
            include_suffix: DEFAULT_INCLUDE_SUFFIX.to_string(),
            ignored_dirs: DEFAULT_IGNORED_DIRS.iter().map(|s| s.to_string()).collect(),
            variant_markers: DEFAULT_VARIANT_MARKERS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// Pure classifier over a fixed [`ClassifierRules`].
///
/// Rules are checked in priority order: ignored directory, then variant
/// marker, then include suffix. A `config.env.example` is therefore always
/// [`Classification::ExcludeVariant`], never included.
#[derive(Debug, Clone, Default)]
pub struct PathClassifier {
    rules: ClassifierRules,
}

impl PathClassifier {
    pub fn new(rules: ClassifierRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &ClassifierRules {
        &self.rules
    }

    /// Classify `path`.
    ///
    /// Every directory component of `path` is compared against the ignored
    /// directory names, so callers normally pass a path relative to the root
    /// being walked.
    pub fn classify(&self, path: &Path) -> Classification {
        let base_name = match path.file_name() {
            Some(name) => name.to_string_lossy(),
            None => return Classification::Unmatched,
        };

        if self.in_ignored_dir(path) {
            return Classification::ExcludeDirectory;
        }

        if self
            .rules
            .variant_markers
            .iter()
            .any(|marker| !marker.is_empty() && base_name.contains(marker.as_str()))
        {
            return Classification::ExcludeVariant;
        }

        if !self.rules.include_suffix.is_empty()
            && base_name.ends_with(self.rules.include_suffix.as_str())
        {
            return Classification::Include;
        }

        Classification::Unmatched
    }

    fn in_ignored_dir(&self, path: &Path) -> bool {
        let parent = match path.parent() {
            Some(parent) => parent,
            None => return false,
        };
        parent.components().any(|component| match component {
            Component::Normal(segment) => {
                let segment = segment.to_string_lossy();
                self.rules.ignored_dirs.iter().any(|dir| *dir == segment)
            }
            _ => false,
        })
    }
}
