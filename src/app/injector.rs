//! Backup-then-splice injection of the detector hook.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::app::backup::{BackupLocator, backup_path};
use crate::domain::{AppError, anchor, lines};
use crate::ports::Filesystem;

/// Result of an injection attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InjectOutcome {
    /// Stub spliced in; the pre-injection content lives at `backup`.
    Injected { backup: PathBuf },
    /// A backup already exists and `proceed` was not set; nothing was
    /// touched. Whether to push on is the caller's policy decision.
    AlreadyBackedUp { latest: PathBuf },
}

/// Splices a stub block into a target file, backing the file up first.
pub struct Injector<'a, F: Filesystem> {
    fs: &'a F,
}

impl<'a, F: Filesystem> Injector<'a, F> {
    pub fn new(fs: &'a F) -> Self {
        Self { fs }
    }

    /// Insert `stub` immediately before the target's trailing return line.
    ///
    /// Ordering guarantee: the dated backup is written before the target is
    /// touched. On `AnchorNotFound`, permission failures, or a failed backup
    /// write the target is unmodified; after `TargetWriteFailed` the backup
    /// is the recovery path.
    pub fn inject(
        &self,
        target: &Path,
        stub: &str,
        today: NaiveDate,
        proceed: bool,
    ) -> Result<InjectOutcome, AppError> {
        if !proceed {
            if let Some(latest) = BackupLocator::new(self.fs).latest(target)? {
                return Ok(InjectOutcome::AlreadyBackedUp { latest });
            }
        }

        if !self.fs.exists(target) {
            return Err(AppError::TargetMissing(target.to_path_buf()));
        }
        if !self.fs.is_readable(target) {
            return Err(AppError::TargetUnreadable(target.to_path_buf()));
        }
        if !self.fs.is_writable(target) {
            return Err(AppError::TargetUnwritable(target.to_path_buf()));
        }

        let existing = self.fs.read_lines(target)?;
        let at = anchor::find_anchor(&existing, anchor::ANCHOR_WINDOW).ok_or_else(|| {
            AppError::AnchorNotFound {
                path: target.to_path_buf(),
                window: anchor::ANCHOR_WINDOW,
            }
        })?;
        let patched = lines::insert_before(&existing, at, &lines::split_lines(stub));

        let backup = backup_path(target, today);
        self.fs.copy(target, &backup).map_err(|err| AppError::BackupWriteFailed {
            backup: backup.clone(),
            details: err.to_string(),
        })?;
        self.fs.write_lines(target, &patched).map_err(|err| AppError::TargetWriteFailed {
            target: target.to_path_buf(),
            backup: backup.clone(),
            details: err.to_string(),
        })?;

        Ok(InjectOutcome::Injected { backup })
    }
}
