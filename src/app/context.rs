//! Shared context threaded through command execution.

use std::path::{Path, PathBuf};

use crate::domain::{AppError, SETTINGS_FILE, Settings};
use crate::ports::{Filesystem, Prompt};

/// Collaborators and project root for one command invocation.
pub struct AppContext<F: Filesystem, P: Prompt> {
    pub fs: F,
    pub prompt: P,
    root: PathBuf,
}

impl<F: Filesystem, P: Prompt> AppContext<F, P> {
    pub fn new(fs: F, prompt: P, root: PathBuf) -> Self {
        Self { fs, prompt, root }
    }

    /// Resolve a settings-relative path against the project root.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    /// Location of `envstrap.toml` in the project root.
    pub fn settings_path(&self) -> PathBuf {
        self.root.join(SETTINGS_FILE)
    }

    /// Load and parse the project settings.
    pub fn load_settings(&self) -> Result<Settings, AppError> {
        let path = self.settings_path();
        if !self.fs.exists(&path) {
            return Err(AppError::SettingsMissing(SETTINGS_FILE.to_string()));
        }
        Settings::parse(&self.fs.read_text(&path)?, &path)
    }
}
