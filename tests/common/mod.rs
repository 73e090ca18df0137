//! Shared testing utilities for envstrap CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Bootstrap file used by the CLI exercises; mirrors a framework app.php.
pub const BOOTSTRAP_CONTENT: &str = "<?php\n\n$app = new App();\n\nreturn $app;\n";

/// Testing harness providing an isolated project directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated project directory.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("project");
        fs::create_dir_all(&work_dir).expect("Failed to create test project directory");
        Self { root, work_dir }
    }

    /// Path to the project directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `envstrap` binary.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("envstrap").expect("Failed to locate envstrap binary");
        cmd.current_dir(&self.work_dir);
        cmd
    }

    /// Absolute path of a project-relative file.
    pub fn path(&self, rel: &str) -> PathBuf {
        self.work_dir.join(rel)
    }

    /// Read a project-relative file as text.
    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.path(rel)).unwrap_or_else(|err| panic!("read {rel}: {err}"))
    }

    /// Write `envstrap.toml` with the default paths and the given environments.
    pub fn write_settings(&self, environments: &[&str]) {
        let mut content = String::from("[environments]\n");
        for name in environments {
            content.push_str(&format!("{name} = \"{name}.example.com\"\n"));
        }
        fs::write(self.path("envstrap.toml"), content).expect("write envstrap.toml");
    }

    /// Write the `.env` template.
    pub fn write_env_template(&self, content: &str) {
        fs::write(self.path(".env"), content).expect("write .env");
    }

    /// Write the default bootstrap file.
    pub fn write_bootstrap(&self) {
        self.write_bootstrap_with(BOOTSTRAP_CONTENT);
    }

    /// Write a bootstrap file with custom content.
    pub fn write_bootstrap_with(&self, content: &str) {
        let path = self.path("bootstrap/app.php");
        fs::create_dir_all(path.parent().unwrap()).expect("create bootstrap dir");
        fs::write(path, content).expect("write bootstrap/app.php");
    }

    /// Backup files currently next to the bootstrap file.
    pub fn backups(&self) -> Vec<PathBuf> {
        let dir = self.path("bootstrap");
        let mut found = Vec::new();
        if let Ok(entries) = fs::read_dir(dir) {
            for entry in entries.flatten() {
                let name = entry.file_name().to_string_lossy().into_owned();
                if name.starts_with("app.php.") {
                    found.push(entry.path());
                }
            }
        }
        found.sort();
        found
    }
}
