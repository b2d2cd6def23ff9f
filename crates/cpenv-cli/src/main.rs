//! cpenv CLI
//!
//! Backs up a project's env files into a timestamped vault snapshot and
//! copies them back.

mod cli;
mod commands;
mod context;
mod error;
mod interactive;
mod open;
mod output;

use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use cli::{Cli, Commands, ConfigAction};
use context::AppContext;
use error::Result;
use interactive::DialoguerPrompter;
use output::ConsoleReporter;

fn main() {
    if let Err(e) = run() {
        if e.is_cancellation() {
            eprintln!("{} {}", "cancelled:".yellow().bold(), e);
        } else {
            eprintln!("{}: {}", "error".red().bold(), e);
        }
        std::process::exit(e.exit_code());
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Some(cmd) => execute_command(cmd, cli.config),
        None => {
            println!("{} Back up and restore your .env files", "cpenv".green().bold());
            println!();
            println!("Run {} for available commands.", "cpenv --help".cyan());
            Ok(())
        }
    }
}

/// DEBUG to stderr with `--verbose`, otherwise `RUST_LOG` defaulting to warn.
fn init_tracing(verbose: bool) {
    let installed = if verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
    } else {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
    };

    if installed.is_err() {
        eprintln!("{} tracing already initialized", "warning:".yellow().bold());
    }
    tracing::debug!("Verbose mode enabled");
}

fn execute_command(cmd: Commands, config: Option<PathBuf>) -> Result<()> {
    let ctx = || AppContext::new(config.clone());
    match cmd {
        Commands::Backup { yes } => cmd_backup(&ctx()?, yes),
        Commands::Copy { sub_path, yes } => cmd_copy(&ctx()?, sub_path, yes),
        Commands::List => commands::run_list(&ctx()?),
        Commands::Vault => commands::run_vault(&ctx()?),
        Commands::Config { action } => match action {
            ConfigAction::Init => commands::run_config_init(&ctx()?),
            ConfigAction::Show => commands::run_config_show(&ctx()?),
            ConfigAction::Edit => commands::run_config_edit(&ctx()?),
        },
        Commands::Version => {
            println!("cpenv {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn cmd_backup(ctx: &AppContext, yes: bool) -> Result<()> {
    let cwd = std::env::current_dir()?;
    ctx.watch_interrupts();
    commands::run_backup(
        ctx,
        &cwd,
        yes,
        &mut DialoguerPrompter::new(),
        &mut ConsoleReporter::new(),
    )?;
    Ok(())
}

fn cmd_copy(ctx: &AppContext, sub_path: Option<PathBuf>, yes: bool) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let sub_path = sub_path.unwrap_or_default();
    ctx.watch_interrupts();
    commands::run_copy(
        ctx,
        &cwd,
        &sub_path,
        yes,
        &mut DialoguerPrompter::new(),
        &mut ConsoleReporter::new(),
    )?;
    Ok(())
}
