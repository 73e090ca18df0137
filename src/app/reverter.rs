//! Reversion of a published bootstrap hook.

use std::path::Path;

use crate::domain::{AppError, lines};
use crate::ports::Filesystem;

/// Result of the best-effort stub removal path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StubRemoval {
    /// The stub was stripped and its token verified absent.
    Removed,
    /// The identifying token was never present; nothing to remove.
    NotPresent,
    /// The token is still present after removal: the injected text no
    /// longer matches the stub template and must be cleaned up by hand.
    Unconfirmed,
}

/// Restores a target file from its backup, or strips the stub without one.
pub struct Reverter<'a, F: Filesystem> {
    fs: &'a F,
}

impl<'a, F: Filesystem> Reverter<'a, F> {
    pub fn new(fs: &'a F) -> Self {
        Self { fs }
    }

    /// Move `backup` over `target`, restoring it byte for byte.
    ///
    /// The backup entry is consumed; afterwards the locator no longer
    /// lists it.
    pub fn restore(&self, target: &Path, backup: &Path) -> Result<(), AppError> {
        self.fs.rename(backup, target)
    }

    /// Strip the first exact occurrence of `stub` from `target`.
    ///
    /// Best-effort fallback for when no backup exists: it only succeeds if
    /// the injected text was not altered after publication. `token` is the
    /// case-insensitive marker used to detect a prior injection and to
    /// verify the removal afterwards.
    pub fn remove_stub(
        &self,
        target: &Path,
        stub: &str,
        token: &str,
    ) -> Result<StubRemoval, AppError> {
        if !self.fs.exists(target) {
            return Err(AppError::TargetMissing(target.to_path_buf()));
        }
        if !self.fs.is_readable(target) {
            return Err(AppError::TargetUnreadable(target.to_path_buf()));
        }
        if !self.fs.is_writable(target) {
            return Err(AppError::TargetUnwritable(target.to_path_buf()));
        }

        let text = self.fs.read_text(target)?;
        if !contains_ignore_case(&text, token) {
            return Ok(StubRemoval::NotPresent);
        }

        let updated = lines::remove_first_occurrence(&text, stub);
        self.fs.write_text(target, &updated)?;

        // Re-read rather than trust the in-memory copy.
        let verify = self.fs.read_text(target)?;
        if contains_ignore_case(&verify, token) {
            Ok(StubRemoval::Unconfirmed)
        } else {
            Ok(StubRemoval::Removed)
        }
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_ascii_lowercase().contains(&needle.to_ascii_lowercase())
}
