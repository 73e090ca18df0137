use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for envstrap operations.
///
/// Informational conditions (no backup found, stub not present) are not
/// errors; callers branch on `Option` or outcome enums for those.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// No envstrap.toml found in the project root.
    #[error("No {0} found. Run 'envstrap init' first.")]
    SettingsMissing(String),

    /// envstrap.toml already exists at the target location.
    #[error("{0} already exists")]
    SettingsExists(String),

    /// envstrap.toml could not be parsed.
    #[error("Failed to parse {path}: {source}")]
    SettingsInvalid {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// Target file is missing.
    #[error("{} does not exist", .0.display())]
    TargetMissing(PathBuf),

    /// Target file cannot be opened for reading.
    #[error("{} cannot be read", .0.display())]
    TargetUnreadable(PathBuf),

    /// Target file cannot be opened for writing.
    #[error("{} is not writable", .0.display())]
    TargetUnwritable(PathBuf),

    /// No return statement within the anchor window of the target file.
    #[error("Could not find a return statement in the last {window} lines of {}", .path.display())]
    AnchorNotFound { path: PathBuf, window: usize },

    /// The pre-injection backup could not be written; the target is untouched.
    #[error("Could not back up to {}: {details}", .backup.display())]
    BackupWriteFailed { backup: PathBuf, details: String },

    /// The patched target could not be written; the backup is the recovery path.
    #[error("Could not write {}; restore it from {}: {details}", .target.display(), .backup.display())]
    TargetWriteFailed {
        target: PathBuf,
        backup: PathBuf,
        details: String,
    },

    /// Detector template rendering failed.
    #[error("Failed to render detector script: {0}")]
    Template(#[from] minijinja::Error),
}

impl AppError {
    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::SettingsInvalid { .. } | AppError::Template(_) => io::ErrorKind::InvalidData,
            AppError::SettingsMissing(_)
            | AppError::TargetMissing(_)
            | AppError::AnchorNotFound { .. } => io::ErrorKind::NotFound,
            AppError::SettingsExists(_) => io::ErrorKind::AlreadyExists,
            AppError::TargetUnreadable(_) | AppError::TargetUnwritable(_) => {
                io::ErrorKind::PermissionDenied
            }
            AppError::BackupWriteFailed { .. } | AppError::TargetWriteFailed { .. } => {
                io::ErrorKind::Other
            }
        }
    }
}

impl From<dialoguer::Error> for AppError {
    fn from(value: dialoguer::Error) -> Self {
        AppError::Io(io::Error::other(value.to_string()))
    }
}
