//! Default rules and display tokens.

/// Suffix identifying an environment file.
pub const DEFAULT_INCLUDE_SUFFIX: &str = ".env";

/// Directory names never descended into for archiving.
pub const DEFAULT_IGNORED_DIRS: &[&str] = &["node_modules"];

/// Base-name markers of checked-in placeholder variants.
pub const DEFAULT_VARIANT_MARKERS: &[&str] = &[".template", ".example"];

/// Display token standing in for the project root.
pub const PROJECT_TOKEN: &str = "{project}";

/// Display token standing in for the vault root.
pub const VAULT_TOKEN: &str = "{vault}";

/// Suffix of the temp files written next to a copy destination.
pub(crate) const TEMP_SUFFIX: &str = "cpenv.tmp";
