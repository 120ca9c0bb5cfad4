//! Manifest and lock repository ports
//!
//! These traits let the package load and save its index and lock without
//! knowing the on-disk format.

use std::path::{Path, PathBuf};

use crate::domain::entities::{Index, IndexLock};

/// Result type for repository operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Repository operation errors
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize {}: {source}", path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(
        "lock file format incompatible: {} has version {found}, this build reads version {expected}",
        path.display()
    )]
    VersionMismatch {
        path: PathBuf,
        found: u32,
        expected: u32,
    },

    #[error("{} is corrupted: {message}", path.display())]
    Corrupted { path: PathBuf, message: String },
}

/// Persistence of the package manifest
pub trait IndexRepository {
    /// Load the manifest stored under `base_dir`
    fn load(&self, base_dir: &Path) -> StoreResult<Index>;

    /// Save the manifest under `base_dir`
    fn save(&self, index: &Index, base_dir: &Path) -> StoreResult<()>;
}

/// Persistence of the dependency lock
pub trait IndexLockRepository {
    /// Load the lock stored under `base_dir`
    fn load(&self, base_dir: &Path) -> StoreResult<IndexLock>;

    /// Save the lock under `base_dir`
    fn save(&self, lock: &IndexLock, base_dir: &Path) -> StoreResult<()>;
}
