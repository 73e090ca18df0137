//! Dated backups of the bootstrap file.
//!
//! A backup is a full sibling copy named `<target>.<suffix>`. Injection
//! writes a `YYYYMMDD` suffix (one backup per calendar day); the locator
//! also recognizes backups with arbitrary suffixes left by other tools.
//! Backups are never deleted here; restoring consumes one by moving it.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::domain::{AppError, suffixed_path};
use crate::ports::Filesystem;

/// Backup path for an injection performed on `today`: `<target>.<YYYYMMDD>`.
pub fn backup_path(target: &Path, today: NaiveDate) -> PathBuf {
    suffixed_path(target, &today.format("%Y%m%d").to_string())
}

/// Directory entries named `<base>.*`, sorted by name.
pub fn suffixed_entries<F: Filesystem>(fs: &F, base: &Path) -> Result<Vec<PathBuf>, AppError> {
    let dir = parent_dir(base);
    if !fs.exists(&dir) {
        return Ok(Vec::new());
    }
    let Some(name) = base.file_name() else {
        return Ok(Vec::new());
    };
    let prefix = format!("{}.", name.to_string_lossy());
    Ok(fs
        .list_dir(&dir)?
        .into_iter()
        .filter(|entry| {
            entry
                .file_name()
                .is_some_and(|n| n.to_string_lossy().starts_with(&prefix))
        })
        .collect())
}

/// Finds and ranks existing backups of a target file.
pub struct BackupLocator<'a, F: Filesystem> {
    fs: &'a F,
}

impl<'a, F: Filesystem> BackupLocator<'a, F> {
    pub fn new(fs: &'a F) -> Self {
        Self { fs }
    }

    /// All backup candidates for `target`, sorted by name.
    pub fn candidates(&self, target: &Path) -> Result<Vec<PathBuf>, AppError> {
        suffixed_entries(self.fs, target)
    }

    /// The most recently modified backup, or `None` when none exist.
    ///
    /// Ties break to the lexicographically largest name so the choice is
    /// deterministic. Older backups stay on disk as an audit trail.
    pub fn latest(&self, target: &Path) -> Result<Option<PathBuf>, AppError> {
        let candidates = self.candidates(target)?;
        if candidates.len() <= 1 {
            return Ok(candidates.into_iter().next());
        }
        let mut ranked = Vec::with_capacity(candidates.len());
        for path in candidates {
            let time = self.fs.modified(&path)?;
            ranked.push((time, path));
        }
        ranked.sort();
        Ok(ranked.pop().map(|(_, path)| path))
    }
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
