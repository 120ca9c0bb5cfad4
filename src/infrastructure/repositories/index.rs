//! JSON Index Repository
//!
//! Stores the manifest as `index.json` under the package base directory.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Index, INDEX_FILE_NAME};
use crate::domain::ports::{IndexRepository, StoreError, StoreResult};
use crate::infrastructure::fs::LocalFs;

/// JSON-based manifest repository
pub struct JsonIndexRepository {
    fs: LocalFs,
}

impl JsonIndexRepository {
    pub fn new() -> Self {
        Self { fs: LocalFs::new() }
    }
}

impl Default for JsonIndexRepository {
    fn default() -> Self {
        Self::new()
    }
}

/// JSON representation of the manifest
#[derive(Debug, Clone, Serialize, Deserialize)]
struct JsonIndex {
    #[serde(default)]
    package_id: String,
    #[serde(default)]
    ramlx_version: String,
    #[serde(default)]
    entities: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    dictionaries: Vec<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    depends: BTreeMap<String, String>,
}

impl IndexRepository for JsonIndexRepository {
    fn load(&self, base_dir: &Path) -> StoreResult<Index> {
        let path = base_dir.join(INDEX_FILE_NAME);
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
        let json: JsonIndex = serde_json::from_str(&content).map_err(|source| {
            StoreError::Parse {
                path: path.clone(),
                source,
            }
        })?;

        Index::from_parts(
            json.package_id,
            json.ramlx_version,
            json.entities,
            json.dictionaries,
            json.depends,
        )
        .map_err(|e| StoreError::Corrupted {
            path,
            message: e.to_string(),
        })
    }

    fn save(&self, index: &Index, base_dir: &Path) -> StoreResult<()> {
        let path = base_dir.join(INDEX_FILE_NAME);
        let json = JsonIndex {
            package_id: index.package_id().to_string(),
            ramlx_version: index.ramlx_version().to_string(),
            entities: index.entities().to_vec(),
            dictionaries: index.dictionaries().to_vec(),
            depends: index.depends().clone(),
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
