//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// cpenv - Back up and restore your projects' .env files
#[derive(Parser, Debug)]
#[command(name = "cpenv")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file to use instead of the default location
    #[arg(long, global = true, env = "CPENV_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Back up the current project's env files into a new vault snapshot
    ///
    /// Run from the project root. Every file ending in `.env` is copied,
    /// except `.template`/`.example` variants and anything in node_modules.
    #[command(visible_alias = "bk")]
    Backup {
        /// Skip the "is this your project root?" confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Copy files from a vault snapshot into the current directory
    ///
    /// Examples:
    ///   cpenv copy               # Restore a whole snapshot
    ///   cpenv copy apps/web      # Restore only apps/web
    ///   cpenv cp --yes           # Overwrite existing files without asking
    #[command(visible_alias = "cp")]
    Copy {
        /// Only restore this directory of the snapshot
        sub_path: Option<PathBuf>,

        /// Overwrite existing files without asking
        #[arg(short, long)]
        yes: bool,
    },

    /// List the snapshots in the vault
    #[command(visible_alias = "ls")]
    List,

    /// Open the vault in the file manager
    #[command(visible_alias = "v")]
    Vault,

    /// Manage the cpenv configuration
    #[command(visible_alias = "c")]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Print the version
    Version,
}

/// Configuration actions
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    /// Write a default configuration and create the vault
    #[command(visible_alias = "i")]
    Init,

    /// Show the configuration and the effective rules
    #[command(visible_alias = "s")]
    Show,

    /// Open the configuration in $VISUAL / $EDITOR
    #[command(visible_alias = "e")]
    Edit,
}
