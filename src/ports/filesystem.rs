//! Filesystem collaborator port.
//!
//! Every publish/unpublish operation goes through this trait so the core
//! stays unit-testable against an in-memory implementation. Paths are taken
//! as given; resolution against a project root happens in the caller.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::domain::{AppError, lines};

/// Port for the host filesystem.
pub trait Filesystem {
    /// Check whether a file or directory exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check whether a file can be opened for reading.
    fn is_readable(&self, path: &Path) -> bool;

    /// Check whether a file can be opened for writing.
    fn is_writable(&self, path: &Path) -> bool;

    /// Read a file as UTF-8 text.
    fn read_text(&self, path: &Path) -> Result<String, AppError>;

    /// Write UTF-8 content to a file, creating parent directories as needed.
    fn write_text(&self, path: &Path, content: &str) -> Result<(), AppError>;

    /// Copy a file. The destination is overwritten when present.
    fn copy(&self, src: &Path, dst: &Path) -> Result<(), AppError>;

    /// Move a file, replacing the destination when present.
    fn rename(&self, src: &Path, dst: &Path) -> Result<(), AppError>;

    /// Remove a file.
    fn remove(&self, path: &Path) -> Result<(), AppError>;

    /// List entries in a directory, sorted by name.
    fn list_dir(&self, dir: &Path) -> Result<Vec<PathBuf>, AppError>;

    /// Last modification time of a file.
    fn modified(&self, path: &Path) -> Result<SystemTime, AppError>;

    /// Read a file as lines with their terminators attached.
    fn read_lines(&self, path: &Path) -> Result<Vec<String>, AppError> {
        Ok(lines::split_lines(&self.read_text(path)?))
    }

    /// Write lines (terminators included) back as a single file.
    fn write_lines(&self, path: &Path, content: &[String]) -> Result<(), AppError> {
        self.write_text(path, &lines::join_lines(content))
    }
}
