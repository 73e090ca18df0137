//! Scripted `Prompt` test double.

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::domain::AppError;
use crate::ports::Prompt;

/// Prompt double with queued confirm answers and a recorded transcript.
///
/// A confirm without a scripted answer panics, which doubles as the
/// assertion that a flow never prompts.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: RefCell<VecDeque<bool>>,
    transcript: RefCell<Vec<String>>,
}

impl ScriptedPrompt {
    /// Prompt that answers confirms from `answers`, in order.
    pub fn answering(answers: &[bool]) -> Self {
        Self {
            answers: RefCell::new(answers.iter().copied().collect()),
            transcript: RefCell::new(Vec::new()),
        }
    }

    /// Prompt that panics on any confirm.
    pub fn silent() -> Self {
        Self::default()
    }

    /// Everything reported so far, as `channel: message` lines.
    pub fn transcript(&self) -> Vec<String> {
        self.transcript.borrow().clone()
    }

    /// Whether any transcript line contains `needle`.
    pub fn saw(&self, needle: &str) -> bool {
        self.transcript.borrow().iter().any(|line| line.contains(needle))
    }

    fn record(&self, channel: &str, message: &str) {
        self.transcript.borrow_mut().push(format!("{channel}: {message}"));
    }
}

impl Prompt for ScriptedPrompt {
    fn confirm(&self, message: &str) -> Result<bool, AppError> {
        self.record("confirm", message);
        Ok(self
            .answers
            .borrow_mut()
            .pop_front()
            .expect("confirm prompt without a scripted answer"))
    }

    fn info(&self, message: &str) {
        self.record("info", message);
    }

    fn comment(&self, message: &str) {
        self.record("comment", message);
    }

    fn warn(&self, message: &str) {
        self.record("warn", message);
    }

    fn error(&self, message: &str) {
        self.record("error", message);
    }
}
