//! Per-environment config file materialization.

use std::path::{Path, PathBuf};

use crate::domain::{AppError, env_file};
use crate::ports::{Filesystem, Prompt};

/// What happened to each environment's config file.
#[derive(Debug, Default)]
pub struct MaterializeReport {
    pub created: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
    pub failed: Vec<PathBuf>,
}

/// Copies the env template into one config file per environment name.
pub struct Materializer<'a, F: Filesystem, P: Prompt> {
    fs: &'a F,
    prompt: &'a P,
}

impl<'a, F: Filesystem, P: Prompt> Materializer<'a, F, P> {
    pub fn new(fs: &'a F, prompt: &'a P) -> Self {
        Self { fs, prompt }
    }

    /// Copy `template` to `<template>.<name>` for every environment name.
    ///
    /// The overwrite-all decision is computed once, up front: implied when
    /// no target exists yet, otherwise asked once; declining falls back to
    /// a per-file prompt. Copies are independent, so a failure on one file
    /// is reported and the rest still get processed.
    pub fn materialize(
        &self,
        template: &Path,
        names: &[&str],
    ) -> Result<MaterializeReport, AppError> {
        let targets: Vec<PathBuf> = names.iter().map(|name| env_file(template, name)).collect();

        let any_exist = targets.iter().any(|path| self.fs.exists(path));
        let overwrite_all =
            !any_exist || self.prompt.confirm("Would you like to overwrite all?")?;

        let mut report = MaterializeReport::default();
        for path in targets {
            let display = path.display().to_string();
            if !overwrite_all && !self.prompt.confirm(&format!("Overwrite `{display}`?"))? {
                report.skipped.push(path);
                continue;
            }
            match self.fs.copy(template, &path) {
                Ok(()) => {
                    self.prompt.comment(&format!("Created: {display}"));
                    report.created.push(path);
                }
                Err(err) => {
                    self.prompt.warn(&format!("Could not create {display}: {err}"));
                    report.failed.push(path);
                }
            }
        }
        Ok(report)
    }
}
