//! Project settings loaded from `envstrap.toml`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::AppError;

/// File name of the project settings, looked up in the project root.
pub const SETTINGS_FILE: &str = "envstrap.toml";

/// Settings for a managed project, loaded from `envstrap.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    /// Managed file locations, relative to the project root.
    #[serde(default)]
    pub paths: Paths,
    /// Environment name => hostname that selects it.
    ///
    /// The hostname is carried into the rendered detector script; the
    /// publish/unpublish core only cares about which names exist.
    #[serde(default)]
    pub environments: BTreeMap<String, String>,
}

/// Managed file locations.
#[derive(Debug, Clone, Deserialize)]
pub struct Paths {
    /// Application bootstrap file receiving the detector hook.
    #[serde(default = "default_bootstrap")]
    pub bootstrap: PathBuf,
    /// Location the detector script is published to.
    #[serde(default = "default_detector")]
    pub detector: PathBuf,
    /// Environment template copied into per-environment files.
    #[serde(default = "default_env_template")]
    pub env_template: PathBuf,
}

impl Default for Paths {
    fn default() -> Self {
        Self {
            bootstrap: default_bootstrap(),
            detector: default_detector(),
            env_template: default_env_template(),
        }
    }
}

fn default_bootstrap() -> PathBuf {
    PathBuf::from("bootstrap/app.php")
}

fn default_detector() -> PathBuf {
    PathBuf::from("bootstrap/environment_detector.php")
}

fn default_env_template() -> PathBuf {
    PathBuf::from(".env")
}

impl Settings {
    /// Parse settings from TOML text. `origin` is the path shown in errors.
    pub fn parse(text: &str, origin: &Path) -> Result<Self, AppError> {
        toml::from_str(text).map_err(|source| AppError::SettingsInvalid {
            path: origin.display().to_string(),
            source,
        })
    }
}

/// Per-environment config file path: `<template>.<name>` next to the template.
pub fn env_file(template: &Path, name: &str) -> PathBuf {
    suffixed_path(template, name)
}

/// Sibling path with a dot-joined suffix: `<base>.<suffix>`.
pub fn suffixed_path(base: &Path, suffix: &str) -> PathBuf {
    let file_name = base
        .file_name()
        .map(|value| value.to_string_lossy().into_owned())
        .unwrap_or_default();
    match base.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            parent.join(format!("{file_name}.{suffix}"))
        }
        _ => PathBuf::from(format!("{file_name}.{suffix}")),
    }
}
