//! Isolated package directory for tests.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A package base directory that is removed when dropped.
pub struct TestPackage {
    pub root: TempDir,
}

impl TestPackage {
    pub fn new() -> Self {
        Self {
            root: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Path relative to the package base directory
    pub fn join(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    /// Write `content` to `relative`, creating parent directories.
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dir");
        }
        fs::write(&path, content).expect("write fixture");
        path
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.join(relative)).expect("read file")
    }
}

impl Default for TestPackage {
    fn default() -> Self {
        Self::new()
    }
}
