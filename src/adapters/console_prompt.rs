//! `Prompt` implementation for interactive terminal sessions.

use std::io::{ErrorKind, IsTerminal};

use dialoguer::{Confirm, Error as DialoguerError};

use crate::domain::AppError;
use crate::ports::Prompt;

/// Console prompt adapter.
///
/// Confirmations require an attached terminal; piped sessions decline so a
/// scripted run never blocks and never overwrites without explicit consent.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsolePrompt;

impl Prompt for ConsolePrompt {
    fn confirm(&self, message: &str) -> Result<bool, AppError> {
        if !(std::io::stdin().is_terminal() && std::io::stdout().is_terminal()) {
            return Ok(false);
        }
        match Confirm::new().with_prompt(message).default(false).interact() {
            Ok(answer) => Ok(answer),
            Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(false),
            Err(err) => Err(AppError::from(err)),
        }
    }

    fn info(&self, message: &str) {
        println!("ℹ️ {message}");
    }

    fn comment(&self, message: &str) {
        println!("{message}");
    }

    fn warn(&self, message: &str) {
        println!("⚠️ {message}");
    }

    fn error(&self, message: &str) {
        eprintln!("❌ {message}");
    }
}
