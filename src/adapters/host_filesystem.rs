//! `Filesystem` implementation backed by `std::fs`.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::domain::AppError;
use crate::ports::Filesystem;

/// Host filesystem adapter.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostFilesystem;

impl Filesystem for HostFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_readable(&self, path: &Path) -> bool {
        fs::File::open(path).is_ok()
    }

    fn is_writable(&self, path: &Path) -> bool {
        OpenOptions::new().append(true).open(path).is_ok()
    }

    fn read_text(&self, path: &Path) -> Result<String, AppError> {
        fs::read_to_string(path).map_err(AppError::from)
    }

    fn write_text(&self, path: &Path, content: &str) -> Result<(), AppError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(AppError::from)?;
            }
        }
        fs::write(path, content).map_err(AppError::from)
    }

    fn copy(&self, src: &Path, dst: &Path) -> Result<(), AppError> {
        fs::copy(src, dst).map(|_| ()).map_err(AppError::from)
    }

    fn rename(&self, src: &Path, dst: &Path) -> Result<(), AppError> {
        fs::rename(src, dst).map_err(AppError::from)
    }

    fn remove(&self, path: &Path) -> Result<(), AppError> {
        fs::remove_file(path).map_err(AppError::from)
    }

    fn list_dir(&self, dir: &Path) -> Result<Vec<PathBuf>, AppError> {
        let entries = fs::read_dir(dir).map_err(AppError::from)?;
        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(AppError::from)?;
            paths.push(entry.path());
        }
        paths.sort();
        Ok(paths)
    }

    fn modified(&self, path: &Path) -> Result<SystemTime, AppError> {
        fs::metadata(path)?.modified().map_err(AppError::from)
    }
}
