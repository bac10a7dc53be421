//! Common test utilities for sasswatch integration and scenario tests.
//!
//! - `TestEnv`: temp directory with a `styles/` tree and output paths
//! - `wait_until`: polling helper for asynchronous file effects

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};

use tempfile::TempDir;

pub const MANIFEST_NAME: &str = "_all.scss";

pub struct TestEnv {
    dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("styles")).unwrap();
        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn styles(&self) -> PathBuf {
        self.dir.path().join("styles")
    }

    pub fn manifest(&self) -> PathBuf {
        self.styles().join(MANIFEST_NAME)
    }

    pub fn css(&self) -> PathBuf {
        self.dir.path().join("dist").join("app.css")
    }

    /// Write a file under `styles/`, creating directories. Returns its path.
    pub fn write_source(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.styles().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    pub fn remove_source(&self, relative: &str) -> PathBuf {
        let path = self.styles().join(relative);
        fs::remove_file(&path).unwrap();
        path
    }

    pub fn read(&self, path: &Path) -> Option<String> {
        fs::read_to_string(path).ok()
    }

    pub fn manifest_text(&self) -> String {
        self.read(&self.manifest()).unwrap_or_default()
    }

    pub fn css_text(&self) -> String {
        self.read(&self.css()).unwrap_or_default()
    }
}

/// Import lines of a manifest, in file order.
pub fn import_lines(manifest: &str) -> Vec<String> {
    manifest
        .lines()
        .filter(|l| l.starts_with("@import"))
        .map(str::to_string)
        .collect()
}

/// Poll `check` until it returns true or `timeout` passes.
pub fn wait_until(timeout: Duration, mut check: impl FnMut() -> bool) -> bool {
    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        if check() {
            return true;
        }
        thread::sleep(Duration::from_millis(50));
    }
    check()
}
