//! Capabilities the core needs from the terminal
//!
//! The orchestrator never talks to a terminal directly. The CLI supplies
//! real implementations; tests supply scripted ones.

use crate::Result;

/// Answer to a yes/no question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
    /// The user interrupted the prompt (Esc, Ctrl-C). Never treated as `No`.
    Cancelled,
}

/// Interactive decisions.
pub trait Prompter {
    /// Ask a yes/no question.
    ///
    /// Only a broken prompt is an `Err`; cancellation is [`Answer::Cancelled`].
    fn ask_yes_no(&mut self, prompt: &str) -> Result<Answer>;

    /// Let the user pick one of `options`, returning the chosen string.
    ///
    /// Fails with [`crate::Error::NoOptions`] for an empty list and
    /// [`crate::Error::SelectionCancelled`] when the user backs out.
    fn select_one(&mut self, label: &str, options: &[String]) -> Result<String>;
}

/// User-visible progress output.
///
/// `progress` announces a copy about to start; the next `success` or `error`
/// concludes it.
pub trait Reporter {
    fn progress(&mut self, message: &str);
    fn success(&mut self, message: &str);
    fn warning(&mut self, message: &str);
    fn error(&mut self, message: &str);
}
