//! Interactive prompts for CLI commands
//!
//! Uses dialoguer for terminal-based confirmation and selection.

use std::io::ErrorKind;

use cpenv_core::{Answer, Error, Prompter};
use dialoguer::{Confirm, Select};

/// [`Prompter`] backed by dialoguer.
///
/// Esc, `q` and Ctrl-C all count as cancelling the prompt, never as "no".
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn ask_yes_no(&mut self, prompt: &str) -> cpenv_core::Result<Answer> {
        match Confirm::new().with_prompt(prompt).default(false).interact_opt() {
            Ok(Some(true)) => Ok(Answer::Yes),
            Ok(Some(false)) => Ok(Answer::No),
            Ok(None) => Ok(Answer::Cancelled),
            Err(e) if is_interrupt(&e) => Ok(Answer::Cancelled),
            Err(e) => Err(prompt_error(e)),
        }
    }

    fn select_one(&mut self, label: &str, options: &[String]) -> cpenv_core::Result<String> {
        if options.is_empty() {
            return Err(Error::NoOptions);
        }

        let picked = Select::new()
            .with_prompt(label)
            .items(options)
            .default(0)
            .interact_opt();

        match picked {
            Ok(Some(index)) => options.get(index).cloned().ok_or(Error::SelectionCancelled),
            Ok(None) => Err(Error::SelectionCancelled),
            Err(e) if is_interrupt(&e) => Err(Error::SelectionCancelled),
            Err(e) => Err(prompt_error(e)),
        }
    }
}

/// Ctrl-C inside a raw-mode prompt surfaces as an interrupted read.
fn is_interrupt(error: &dialoguer::Error) -> bool {
    matches!(error, dialoguer::Error::IO(io) if io.kind() == ErrorKind::Interrupted)
}

fn prompt_error(error: dialoguer::Error) -> Error {
    Error::Prompt {
        message: error.to_string(),
    }
}
