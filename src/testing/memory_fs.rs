//! In-memory `Filesystem` test double.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::domain::AppError;
use crate::ports::Filesystem;

#[derive(Clone, Debug)]
struct Entry {
    content: String,
    modified: SystemTime,
}

#[derive(Debug, Default)]
struct State {
    files: BTreeMap<PathBuf, Entry>,
    clock: u64,
    failing_writes: Vec<PathBuf>,
    unreadable: Vec<PathBuf>,
    unwritable: Vec<PathBuf>,
}

/// In-memory filesystem with a logical write clock.
///
/// Every successful write advances the clock by one second, so modification
/// ordering in tests follows write ordering; `seed_at` pins explicit times.
#[derive(Clone, Debug, Default)]
pub struct MemoryFs {
    inner: Arc<Mutex<State>>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a file as test setup.
    pub fn seed(&self, path: impl Into<PathBuf>, content: &str) {
        let mut state = self.inner.lock().unwrap();
        state.clock += 1;
        let modified = UNIX_EPOCH + Duration::from_secs(state.clock);
        state.files.insert(path.into(), Entry { content: content.to_string(), modified });
    }

    /// Create a file with an explicit modification time (seconds since epoch).
    pub fn seed_at(&self, path: impl Into<PathBuf>, content: &str, secs: u64) {
        let modified = UNIX_EPOCH + Duration::from_secs(secs);
        self.inner
            .lock()
            .unwrap()
            .files
            .insert(path.into(), Entry { content: content.to_string(), modified });
    }

    /// Current content of a file, if present.
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        self.inner
            .lock()
            .unwrap()
            .files
            .get(path.as_ref())
            .map(|entry| entry.content.clone())
    }

    /// Modification time of a file, if present.
    pub fn modified_of(&self, path: impl AsRef<Path>) -> Option<SystemTime> {
        self.inner.lock().unwrap().files.get(path.as_ref()).map(|entry| entry.modified)
    }

    /// Make every subsequent write to `path` fail.
    pub fn fail_writes_to(&self, path: impl Into<PathBuf>) {
        self.inner.lock().unwrap().failing_writes.push(path.into());
    }

    /// Mark an existing file as unreadable.
    pub fn mark_unreadable(&self, path: impl Into<PathBuf>) {
        self.inner.lock().unwrap().unreadable.push(path.into());
    }

    /// Mark an existing file as read-only.
    pub fn mark_unwritable(&self, path: impl Into<PathBuf>) {
        self.inner.lock().unwrap().unwritable.push(path.into());
    }
}

impl Filesystem for MemoryFs {
    fn exists(&self, path: &Path) -> bool {
        let state = self.inner.lock().unwrap();
        state.files.contains_key(path) || state.files.keys().any(|key| key.starts_with(path))
    }

    fn is_readable(&self, path: &Path) -> bool {
        let state = self.inner.lock().unwrap();
        state.files.contains_key(path) && !state.unreadable.iter().any(|p| p == path)
    }

    fn is_writable(&self, path: &Path) -> bool {
        let state = self.inner.lock().unwrap();
        state.files.contains_key(path) && !state.unwritable.iter().any(|p| p == path)
    }

    fn read_text(&self, path: &Path) -> Result<String, AppError> {
        self.contents(path).ok_or_else(|| {
            AppError::from(io::Error::new(io::ErrorKind::NotFound, "memory file not found"))
        })
    }

    fn write_text(&self, path: &Path, content: &str) -> Result<(), AppError> {
        let mut state = self.inner.lock().unwrap();
        if state.failing_writes.iter().any(|p| p == path) {
            return Err(AppError::from(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "write failure injected",
            )));
        }
        state.clock += 1;
        let modified = UNIX_EPOCH + Duration::from_secs(state.clock);
        state
            .files
            .insert(path.to_path_buf(), Entry { content: content.to_string(), modified });
        Ok(())
    }

    fn copy(&self, src: &Path, dst: &Path) -> Result<(), AppError> {
        let content = self.read_text(src)?;
        self.write_text(dst, &content)
    }

    fn rename(&self, src: &Path, dst: &Path) -> Result<(), AppError> {
        let entry = {
            let mut state = self.inner.lock().unwrap();
            state.files.remove(src).ok_or_else(|| {
                AppError::from(io::Error::new(io::ErrorKind::NotFound, "memory file not found"))
            })?
        };
        self.inner.lock().unwrap().files.insert(dst.to_path_buf(), entry);
        Ok(())
    }

    fn remove(&self, path: &Path) -> Result<(), AppError> {
        self.inner.lock().unwrap().files.remove(path).map(|_| ()).ok_or_else(|| {
            AppError::from(io::Error::new(io::ErrorKind::NotFound, "memory file not found"))
        })
    }

    fn list_dir(&self, dir: &Path) -> Result<Vec<PathBuf>, AppError> {
        let state = self.inner.lock().unwrap();
        Ok(state
            .files
            .keys()
            .filter(|key| key.parent() == Some(dir))
            .cloned()
            .collect())
    }

    fn modified(&self, path: &Path) -> Result<SystemTime, AppError> {
        self.modified_of(path).ok_or_else(|| {
            AppError::from(io::Error::new(io::ErrorKind::NotFound, "memory file not found"))
        })
    }
}
