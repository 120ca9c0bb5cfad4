//! Archiver port - writes assets into the output bundle
//!
//! Concrete archivers (zip, tar, plain directory) live outside this crate.

use std::path::{Path, PathBuf};

/// Archiver operation errors
#[derive(Debug, thiserror::Error)]
pub enum ArchiverError {
    #[error("asset not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

/// Destination for bundled asset files
pub trait Archiver {
    /// Store `base_dir/relative_path` in the bundle under `relative_path`.
    fn write_file(&mut self, base_dir: &Path, relative_path: &Path) -> Result<(), ArchiverError>;
}

impl<A: Archiver + ?Sized> Archiver for &mut A {
    fn write_file(&mut self, base_dir: &Path, relative_path: &Path) -> Result<(), ArchiverError> {
        (**self).write_file(base_dir, relative_path)
    }
}

impl<A: Archiver + ?Sized> Archiver for Box<A> {
    fn write_file(&mut self, base_dir: &Path, relative_path: &Path) -> Result<(), ArchiverError> {
        (**self).write_file(base_dir, relative_path)
    }
}
