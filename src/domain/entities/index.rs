//! Index entity - the package manifest
//!
//! Declares the package identity, the ordered list of entity sources, the
//! localisation dictionaries and the direct dependencies. It is a pure data
//! structure; persistence lives in `IndexRepository`.

use std::collections::BTreeMap;

use crate::domain::entities::LangCode;
use crate::domain::value_objects::{validate_id, SafePath};
use crate::error::{PackageError, PackageResult};

/// Well-known manifest file name under the package base directory
pub const INDEX_FILE_NAME: &str = "index.json";

/// The package manifest
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Index {
    package_id: String,
    ramlx_version: String,
    /// Entity source paths in build order
    entities: Vec<String>,
    /// Dictionary file paths; the file stem is the language code
    dictionaries: Vec<String>,
    /// Direct dependencies: package id -> requested version
    depends: BTreeMap<String, String>,
}

impl Index {
    /// Create an empty manifest
    pub fn new() -> Self {
        Self::default()
    }

    pub fn package_id(&self) -> &str {
        &self.package_id
    }

    /// Set the package identifier.
    ///
    /// The id is validated first; on failure the manifest is left unchanged.
    pub fn set_package_id(&mut self, id: &str) -> PackageResult<()> {
        validate_id(id).map_err(|reason| PackageError::InvalidPackageId {
            id: id.to_string(),
            reason,
        })?;
        self.package_id = id.to_string();
        Ok(())
    }

    pub fn ramlx_version(&self) -> &str {
        &self.ramlx_version
    }

    // TODO: check the tag against the RAMLx versions this crate can build once
    // the collector exposes its supported range.
    pub fn set_ramlx_version(&mut self, version: impl Into<String>) {
        self.ramlx_version = version.into();
    }

    pub fn entities(&self) -> &[String] {
        &self.entities
    }

    /// Replace the entity list.
    ///
    /// An empty input is a no-op, not a clearing operation. Duplicates are
    /// rejected without touching the current list.
    pub fn set_entities<I, S>(&mut self, entities: I) -> PackageResult<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entities: Vec<String> = entities.into_iter().map(Into::into).collect();
        if entities.is_empty() {
            return Ok(());
        }
        if let Some(path) = first_duplicate(&entities) {
            return Err(PackageError::DuplicateEntity {
                path: path.to_string(),
            });
        }
        self.entities = entities;
        Ok(())
    }

    /// Append an entity source path, keeping build order.
    pub fn add_entity(&mut self, path: impl Into<String>) -> PackageResult<()> {
        let path = path.into();
        if self.entities.contains(&path) {
            return Err(PackageError::DuplicateEntity { path });
        }
        self.entities.push(path);
        Ok(())
    }

    pub fn dictionaries(&self) -> &[String] {
        &self.dictionaries
    }

    /// Declare a dictionary file.
    ///
    /// Rejects absolute or `..` paths, paths without a file stem, and paths
    /// whose language code is already declared.
    pub fn add_dictionary(&mut self, path: impl Into<String>) -> PackageResult<()> {
        let path = path.into();
        SafePath::new(&path).map_err(|reason| PackageError::DictionaryPathEscape {
            path: path.clone(),
            reason,
        })?;
        let lang = LangCode::from_path(&path)
            .ok_or_else(|| PackageError::InvalidDictionaryName { path: path.clone() })?;
        if self.dictionary_languages().contains_key(&lang) {
            return Err(PackageError::DuplicateDictionary {
                lang: lang.to_string(),
                path,
            });
        }
        self.dictionaries.push(path);
        Ok(())
    }

    /// Declared dictionaries keyed by language code.
    ///
    /// Paths without a stem are skipped; on a stem collision the first
    /// declaration is kept. `Package::get_dictionaries` reports both cases as
    /// errors.
    pub fn dictionary_languages(&self) -> BTreeMap<LangCode, &str> {
        let mut languages = BTreeMap::new();
        for path in &self.dictionaries {
            if let Some(lang) = LangCode::from_path(path) {
                languages.entry(lang).or_insert(path.as_str());
            }
        }
        languages
    }

    pub fn depends(&self) -> &BTreeMap<String, String> {
        &self.depends
    }

    /// Declare a direct dependency. Returns the previously requested version.
    pub fn add_dependency(
        &mut self,
        id: &str,
        version: impl Into<String>,
    ) -> PackageResult<Option<String>> {
        validate_id(id).map_err(|reason| PackageError::InvalidPackageId {
            id: id.to_string(),
            reason,
        })?;
        Ok(self.depends.insert(id.to_string(), version.into()))
    }

    pub fn remove_dependency(&mut self, id: &str) -> Option<String> {
        self.depends.remove(id)
    }

    /// Rebuild a manifest from persisted parts.
    ///
    /// An empty id is allowed (manifest of a package that was never given
    /// one); any other id must validate. Entity and dictionary invariants are
    /// checked the same way as the setters.
    pub(crate) fn from_parts(
        package_id: String,
        ramlx_version: String,
        entities: Vec<String>,
        dictionaries: Vec<String>,
        depends: BTreeMap<String, String>,
    ) -> PackageResult<Self> {
        let mut index = Index::new();
        if !package_id.is_empty() {
            index.set_package_id(&package_id)?;
        }
        index.set_ramlx_version(ramlx_version);
        index.set_entities(entities)?;
        for path in dictionaries {
            index.add_dictionary(path)?;
        }
        for (id, version) in depends {
            index.add_dependency(&id, version)?;
        }
        Ok(index)
    }
}

fn first_duplicate(items: &[String]) -> Option<&str> {
    let mut seen = std::collections::BTreeSet::new();
    items
        .iter()
        .find(|item| !seen.insert(item.as_str()))
        .map(String::as_str)
}
