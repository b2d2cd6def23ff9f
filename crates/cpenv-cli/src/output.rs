//! Terminal output for sync operations

use std::time::Duration;

use colored::Colorize;
use cpenv_core::{Reporter, SyncReport};
use indicatif::{ProgressBar, ProgressStyle};

/// [`Reporter`] printing colored status lines, with a spinner while each
/// copy runs.
#[derive(Default)]
pub struct ConsoleReporter {
    spinner: Option<ProgressBar>,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self::default()
    }

    fn finish_spinner(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }
}

impl Reporter for ConsoleReporter {
    fn progress(&mut self, message: &str) {
        self.finish_spinner();

        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(100));
        self.spinner = Some(spinner);
    }

    fn success(&mut self, message: &str) {
        self.finish_spinner();
        println!("{} {}", "OK".green().bold(), message);
    }

    fn warning(&mut self, message: &str) {
        self.finish_spinner();
        println!("{} {}", "WARN".yellow().bold(), message);
    }

    fn error(&mut self, message: &str) {
        self.finish_spinner();
        eprintln!("{} {}", "ERROR".red().bold(), message);
    }
}

impl Drop for ConsoleReporter {
    fn drop(&mut self) {
        self.finish_spinner();
    }
}

/// Print the one-line outcome of an operation.
pub fn print_summary(report: &SyncReport) {
    let line = report.summary();
    if report.failed.is_empty() {
        println!("{} {}", "=>".blue().bold(), line);
    } else {
        println!("{} {}", "=>".yellow().bold(), line.yellow());
    }
}

/// Print a step header.
pub fn step(message: &str) {
    println!("{} {}", "=>".blue().bold(), message);
}
