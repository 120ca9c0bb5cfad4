//! IndexLock entity - pinned dependency closure
//!
//! The lock records, for every resolved dependency, the exact version and
//! where it came from. It is read back verbatim on later runs so builds are
//! reproducible; nothing here resolves versions.
//!
//! `packages` and `sources` are one relation split in two for the file
//! format. Every mutation goes through `pin`/`unpin` so their key sets never
//! drift apart.

use std::collections::BTreeMap;

use crate::domain::entities::Index;
use crate::domain::value_objects::{validate_id, ContentHash};
use crate::error::{PackageError, PackageResult};

/// Well-known lock file name under the package base directory
pub const INDEX_LOCK_FILE_NAME: &str = "index-lock.json";

/// Current lock format version
pub const INDEX_LOCK_VERSION: u32 = 1;

/// Provenance of a pinned dependency
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceInfo {
    /// Resolved source location (URL, VCS reference or local path)
    source: String,
    /// Fingerprint of the fetched package content
    integrity: Option<ContentHash>,
    /// Requirements of the dependency itself: package id -> version
    depends: BTreeMap<String, String>,
}

impl SourceInfo {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            integrity: None,
            depends: BTreeMap::new(),
        }
    }

    pub fn with_integrity(mut self, integrity: ContentHash) -> Self {
        self.integrity = Some(integrity);
        self
    }

    pub fn with_dependency(mut self, id: impl Into<String>, version: impl Into<String>) -> Self {
        self.depends.insert(id.into(), version.into());
        self
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn integrity(&self) -> Option<&ContentHash> {
        self.integrity.as_ref()
    }

    pub fn depends(&self) -> &BTreeMap<String, String> {
        &self.depends
    }
}

/// Pinned dependency snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexLock {
    version: u32,
    packages: BTreeMap<String, String>,
    sources: BTreeMap<String, SourceInfo>,
}

impl Default for IndexLock {
    fn default() -> Self {
        Self::new()
    }
}

impl IndexLock {
    /// Create an empty lock at the current format version
    pub fn new() -> Self {
        Self {
            version: INDEX_LOCK_VERSION,
            packages: BTreeMap::new(),
            sources: BTreeMap::new(),
        }
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    /// Pin a dependency to a resolved version.
    ///
    /// Returns the previously pinned version, if any.
    pub fn pin(
        &mut self,
        id: &str,
        version: impl Into<String>,
        info: SourceInfo,
    ) -> PackageResult<Option<String>> {
        validate_id(id).map_err(|reason| PackageError::InvalidPackageId {
            id: id.to_string(),
            reason,
        })?;
        self.sources.insert(id.to_string(), info);
        Ok(self.packages.insert(id.to_string(), version.into()))
    }

    /// Remove a pin from both maps
    pub fn unpin(&mut self, id: &str) -> Option<(String, SourceInfo)> {
        let version = self.packages.remove(id)?;
        let info = self.sources.remove(id).unwrap_or_default();
        Some((version, info))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.packages.contains_key(id)
    }

    /// Pinned version and provenance of a dependency
    pub fn get(&self, id: &str) -> Option<(&str, &SourceInfo)> {
        let version = self.packages.get(id)?;
        let info = self.sources.get(id)?;
        Some((version.as_str(), info))
    }

    pub fn version_of(&self, id: &str) -> Option<&str> {
        self.packages.get(id).map(String::as_str)
    }

    pub fn source_info(&self, id: &str) -> Option<&SourceInfo> {
        self.sources.get(id)
    }

    /// Pinned packages in id order
    pub fn packages(&self) -> impl Iterator<Item = (&str, &str)> {
        self.packages
            .iter()
            .map(|(id, version)| (id.as_str(), version.as_str()))
    }

    /// Provenance entries in id order
    pub fn sources(&self) -> impl Iterator<Item = (&str, &SourceInfo)> {
        self.sources.iter().map(|(id, info)| (id.as_str(), info))
    }

    /// Direct dependencies declared in `index` that have no pin yet.
    ///
    /// A non-empty result means the caller has to run the resolver before
    /// the lock can be trusted; reading a lock never re-resolves.
    pub fn unpinned<'a>(&self, index: &'a Index) -> Vec<&'a str> {
        index
            .depends()
            .keys()
            .filter(|id| !self.packages.contains_key(id.as_str()))
            .map(String::as_str)
            .collect()
    }

    /// Rebuild a lock from persisted maps, checking that both key sets match
    /// and that every package id validates, as `pin` requires.
    ///
    /// The error names the first offending key.
    pub(crate) fn from_parts(
        version: u32,
        packages: BTreeMap<String, String>,
        sources: BTreeMap<String, SourceInfo>,
    ) -> Result<Self, String> {
        if let Some(id) = packages.keys().find(|id| !sources.contains_key(*id)) {
            return Err(format!("package '{}' has no source info", id));
        }
        if let Some(id) = sources.keys().find(|id| !packages.contains_key(*id)) {
            return Err(format!("source info for '{}' has no pinned version", id));
        }
        for (id, info) in &sources {
            validate_id(id).map_err(|e| format!("package id '{}': {}", id, e))?;
            for dep in info.depends().keys() {
                validate_id(dep)
                    .map_err(|e| format!("dependency '{}' of '{}': {}", dep, id, e))?;
            }
        }

        Ok(Self {
            version,
            packages,
            sources,
        })
    }
}
