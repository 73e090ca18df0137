//! Interactive prompt collaborator port.

use crate::domain::AppError;

/// Port for operator interaction.
///
/// The informational channels mirror the severities the operator sees
/// (`info` for milestones, `comment` for per-file progress, `warn` for
/// recoverable conditions, `error` for failures); nothing downstream
/// consumes their output.
pub trait Prompt {
    /// Ask a yes/no question. Non-interactive implementations decline.
    fn confirm(&self, message: &str) -> Result<bool, AppError>;

    fn info(&self, message: &str);

    fn comment(&self, message: &str);

    fn warn(&self, message: &str);

    fn error(&self, message: &str);
}
