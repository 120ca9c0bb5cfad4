//! Package aggregate
//!
//! Owns the manifest, the lock, the entity registry and the base directory,
//! and exposes the read/save lifecycle used by build and publish workflows.
//!
//! Lifecycle: `new` (optionally configured by `PackageOptions`) → `read`
//! (replaces whatever `new` produced) → `save_index` / `save_index_lock`.

use std::path::{Path, PathBuf};

use crate::config::PackageOptions;
use crate::domain::entities::{Dictionaries, EntityRegistry, Index, IndexLock};
use crate::domain::ports::{IndexLockRepository, IndexRepository};
use crate::error::{PackageError, PackageResult};
use crate::infrastructure::repositories::{
    load_dictionaries, JsonIndexLockRepository, JsonIndexRepository,
};

#[derive(Debug)]
pub struct Package {
    index: Index,
    index_lock: IndexLock,
    registry: EntityRegistry,
    base_dir: PathBuf,
}

impl Package {
    /// Create a package rooted at `base_dir` with an empty manifest and lock,
    /// then apply `options`.
    pub fn new(base_dir: impl Into<PathBuf>, options: PackageOptions) -> PackageResult<Self> {
        let mut index = Index::new();
        options.apply(&mut index)?;

        Ok(Self {
            index,
            index_lock: IndexLock::new(),
            registry: EntityRegistry::new(),
            base_dir: base_dir.into(),
        })
    }

    /// Create a new package and write its manifest and empty lock.
    pub fn initialize(base_dir: impl Into<PathBuf>, options: PackageOptions) -> PackageResult<Self> {
        let package = Self::new(base_dir, options)?;
        package.save_index()?;
        package.save_index_lock()?;
        Ok(package)
    }

    /// Open an existing package from disk.
    pub fn open(base_dir: impl Into<PathBuf>) -> PackageResult<Self> {
        let mut package = Self::new(base_dir, PackageOptions::default())?;
        package.read()?;
        Ok(package)
    }

    /// Load manifest and lock from the base directory.
    ///
    /// Both are loaded before either is assigned, so a failure leaves the
    /// package as it was.
    pub fn read(&mut self) -> PackageResult<()> {
        let index = JsonIndexRepository::new()
            .load(&self.base_dir)
            .map_err(PackageError::ReadIndex)?;
        let index_lock = JsonIndexLockRepository::new()
            .load(&self.base_dir)
            .map_err(PackageError::ReadIndexLock)?;

        self.index = index;
        self.index_lock = index_lock;
        Ok(())
    }

    pub fn save_index(&self) -> PackageResult<()> {
        JsonIndexRepository::new()
            .save(&self.index, &self.base_dir)
            .map_err(PackageError::SaveIndex)
    }

    pub fn save_index_lock(&self) -> PackageResult<()> {
        JsonIndexLockRepository::new()
            .save(&self.index_lock, &self.base_dir)
            .map_err(PackageError::SaveIndexLock)
    }

    /// Load every dictionary declared in the manifest, keyed by language.
    pub fn get_dictionaries(&self) -> PackageResult<Dictionaries> {
        load_dictionaries(&self.base_dir, self.index.dictionaries())
    }

    /// Declared dependencies without a pin in the lock
    pub fn unpinned_dependencies(&self) -> Vec<&str> {
        self.index_lock.unpinned(&self.index)
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn index(&self) -> &Index {
        &self.index
    }

    pub fn index_mut(&mut self) -> &mut Index {
        &mut self.index
    }

    pub fn index_lock(&self) -> &IndexLock {
        &self.index_lock
    }

    pub fn index_lock_mut(&mut self) -> &mut IndexLock {
        &mut self.index_lock
    }

    pub fn registry(&self) -> &EntityRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut EntityRegistry {
        &mut self.registry
    }
}
