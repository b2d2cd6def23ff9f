//! Scripted stand-ins for the terminal capabilities.

use std::collections::VecDeque;

use cpenv_core::{Answer, Error, Prompter, Reporter, Result};

/// Replays queued answers and selections in order.
///
/// Every question asked is recorded in [`ScriptedPrompter::questions`].
/// An un-scripted call panics, so a test also proves no extra prompt was shown.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<Answer>,
    selections: VecDeque<Option<String>>,
    pub questions: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue yes/no answers.
    pub fn answering(mut self, answers: &[Answer]) -> Self {
        self.answers.extend(answers.iter().copied());
        self
    }

    /// Queue a selection by option text.
    pub fn selecting(mut self, option: &str) -> Self {
        self.selections.push_back(Some(option.to_string()));
        self
    }

    /// Queue a cancelled selection.
    pub fn cancelling_selection(mut self) -> Self {
        self.selections.push_back(None);
        self
    }

    /// Whether every scripted response was consumed.
    pub fn is_exhausted(&self) -> bool {
        self.answers.is_empty() && self.selections.is_empty()
    }
}

impl Prompter for ScriptedPrompter {
    fn ask_yes_no(&mut self, prompt: &str) -> Result<Answer> {
        self.questions.push(prompt.to_string());
        Ok(self
            .answers
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected prompt: {prompt}")))
    }

    fn select_one(&mut self, label: &str, options: &[String]) -> Result<String> {
        self.questions.push(label.to_string());
        if options.is_empty() {
            return Err(Error::NoOptions);
        }
        match self.selections.pop_front() {
            Some(Some(choice)) => Ok(choice),
            Some(None) => Err(Error::SelectionCancelled),
            None => panic!("unexpected selection: {label}"),
        }
    }
}

/// Which [`Reporter`] method produced a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Progress,
    Success,
    Warning,
    Error,
}

/// Keeps every reported message in order.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub messages: Vec<(ReportKind, String)>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages of one kind, in order.
    pub fn of(&self, kind: ReportKind) -> Vec<&str> {
        self.messages
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, m)| m.as_str())
            .collect()
    }
}

impl Reporter for RecordingReporter {
    fn progress(&mut self, message: &str) {
        self.messages.push((ReportKind::Progress, message.to_string()));
    }

    fn success(&mut self, message: &str) {
        self.messages.push((ReportKind::Success, message.to_string()));
    }

    fn warning(&mut self, message: &str) {
        self.messages.push((ReportKind::Warning, message.to_string()));
    }

    fn error(&mut self, message: &str) {
        self.messages.push((ReportKind::Error, message.to_string()));
    }
}
