//! Local File System
//!
//! Atomic writes and hashing for files under a package directory.

use std::io::Write;
use std::path::Path;

use crate::domain::value_objects::ContentHash;

/// Local disk access used by the JSON repositories
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    pub fn new() -> Self {
        Self
    }

    pub fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    /// Write `content` to `path` via a temp file in the same directory and a
    /// rename, so readers never observe a half-written file.
    pub fn write_atomic(&self, path: &Path, content: &[u8]) -> std::io::Result<()> {
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent)?;

        let mut temp = tempfile::NamedTempFile::new_in(parent)?;
        temp.write_all(content)?;
        temp.as_file().sync_all()?;
        temp.persist(path).map_err(|e| e.error)?;
        Ok(())
    }

    pub fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    /// SHA-256 of the file content
    pub fn hash(&self, path: &Path) -> std::io::Result<ContentHash> {
        let content = std::fs::read(path)?;
        Ok(ContentHash::from_bytes(&content))
    }
}
