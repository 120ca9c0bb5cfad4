//! JSON IndexLock Repository
//!
//! Stores the lock as `index-lock.json` under the package base directory.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::entities::{IndexLock, SourceInfo, INDEX_LOCK_FILE_NAME, INDEX_LOCK_VERSION};
use crate::domain::ports::{IndexLockRepository, StoreError, StoreResult};
use crate::domain::value_objects::ContentHash;
use crate::infrastructure::fs::LocalFs;

/// JSON-based lock repository
pub struct JsonIndexLockRepository {
    fs: LocalFs,
}

impl JsonIndexLockRepository {
    pub fn new() -> Self {
        Self { fs: LocalFs::new() }
    }
}

impl Default for JsonIndexLockRepository {
    fn default() -> Self {
        Self::new()
    }
}

/// JSON representation of a source entry
#[derive(Debug, Clone, Serialize, Deserialize)]
struct JsonSourceInfo {
    source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    integrity: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    depends: BTreeMap<String, String>,
}

/// JSON representation of the lock
#[derive(Debug, Clone, Serialize, Deserialize)]
struct JsonIndexLock {
    version: u32,
    #[serde(default)]
    packages: BTreeMap<String, String>,
    #[serde(default)]
    sources: BTreeMap<String, JsonSourceInfo>,
}

impl IndexLockRepository for JsonIndexLockRepository {
    fn load(&self, base_dir: &Path) -> StoreResult<IndexLock> {
        let path = base_dir.join(INDEX_LOCK_FILE_NAME);
        if !self.fs.exists(&path) {
            return Err(StoreError::NotFound { path });
        }

        let content = self
            .fs
            .read_to_string(&path)
            .map_err(|source| StoreError::Io {
                path: path.clone(),
                source,
            })?;
        let json: JsonIndexLock = serde_json::from_str(&content).map_err(|source| {
            StoreError::Parse {
                path: path.clone(),
                source,
            }
        })?;

        if json.version != INDEX_LOCK_VERSION {
            return Err(StoreError::VersionMismatch {
                path,
                found: json.version,
                expected: INDEX_LOCK_VERSION,
            });
        }

        let mut sources = BTreeMap::new();
        for (id, entry) in json.sources {
            let mut info = SourceInfo::new(entry.source);
            if let Some(integrity) = entry.integrity {
                let hash = ContentHash::parse(&integrity).map_err(|e| StoreError::Corrupted {
                    path: path.clone(),
                    message: format!("integrity of '{}': {}", id, e),
                })?;
                info = info.with_integrity(hash);
            }
            for (dep, version) in entry.depends {
                info = info.with_dependency(dep, version);
            }
            sources.insert(id, info);
        }

        IndexLock::from_parts(json.version, json.packages, sources)
            .map_err(|message| StoreError::Corrupted { path, message })
    }

    fn save(&self, lock: &IndexLock, base_dir: &Path) -> StoreResult<()> {
        let path = base_dir.join(INDEX_LOCK_FILE_NAME);
        let json = JsonIndexLock {
            version: lock.version(),
            packages: lock
                .packages()
                .map(|(id, version)| (id.to_string(), version.to_string()))
                .collect(),
            sources: lock
                .sources()
                .map(|(id, info)| {
                    (
                        id.to_string(),
                        JsonSourceInfo {
                            source: info.source().to_string(),
                            integrity: info.integrity().map(|h| h.to_string()),
                            depends: info.depends().clone(),
                        },
                    )
                })
                .collect(),
        };

        let mut content = serde_json::to_string_pretty(&json).map_err(|source| {
            StoreError::Serialize {
                path: path.clone(),
                source,
            }
        })?;
        content.push('\n');

        self.fs
            .write_atomic(&path, content.as_bytes())
            .map_err(|source| StoreError::Io { path, source })
    }
}
