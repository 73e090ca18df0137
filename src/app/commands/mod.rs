//! Command layer: flag handling and operator-facing flow control.

pub mod init;
pub mod publish;
pub mod unpublish;

use crate::domain::AppError;
use crate::ports::Prompt;

/// Flag algebra shared by publish and unpublish: `--all`, or the absence of
/// any selective flag, selects both operations.
pub(crate) fn selected(all: bool, bootstrap: bool, configs: bool) -> (bool, bool) {
    let everything = all || (!bootstrap && !configs);
    (everything || configs, everything || bootstrap)
}

/// Downgrade recoverable patching preconditions to warnings.
///
/// Missing, unreadable, or unwritable targets and a missing anchor leave
/// the file untouched, so the run continues; anything else bubbles up.
pub(crate) fn warn_recoverable<P: Prompt>(prompt: &P, err: AppError) -> Result<(), AppError> {
    if matches!(
        err,
        AppError::TargetMissing(_)
            | AppError::TargetUnreadable(_)
            | AppError::TargetUnwritable(_)
            | AppError::AnchorNotFound { .. }
    ) {
        prompt.warn(&err.to_string());
        Ok(())
    } else {
        Err(err)
    }
}
