//! Package initialisation options
//!
//! Each field is validated when it is set, so a constructed
//! `PackageOptions` can always be applied to a fresh manifest.

use crate::domain::entities::Index;
use crate::domain::value_objects::validate_id;
use crate::error::{PackageError, PackageResult};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageOptions {
    id: Option<String>,
    ramlx_version: Option<String>,
    entities: Vec<String>,
}

impl PackageOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the package identifier; fails if it does not validate.
    pub fn with_id(mut self, id: impl Into<String>) -> PackageResult<Self> {
        let id = id.into();
        validate_id(&id).map_err(|reason| PackageError::InvalidPackageId {
            id: id.clone(),
            reason,
        })?;
        self.id = Some(id);
        Ok(self)
    }

    /// Set the RAMLx schema version tag. Not validated.
    pub fn with_ramlx_version(mut self, version: impl Into<String>) -> Self {
        self.ramlx_version = Some(version.into());
        self
    }

    /// Replace the entity list. An empty list keeps the current one.
    pub fn with_entities<I, S>(mut self, entities: I) -> PackageResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut scratch = Index::new();
        scratch.set_entities(entities)?;
        if !scratch.entities().is_empty() {
            self.entities = scratch.entities().to_vec();
        }
        Ok(self)
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn ramlx_version(&self) -> Option<&str> {
        self.ramlx_version.as_deref()
    }

    pub fn entities(&self) -> &[String] {
        &self.entities
    }

    /// Apply to `index` in field order: id, ramlx version, entities.
    pub(crate) fn apply(&self, index: &mut Index) -> PackageResult<()> {
        if let Some(id) = &self.id {
            index.set_package_id(id)?;
        }
        if let Some(version) = &self.ramlx_version {
            index.set_ramlx_version(version.clone());
        }
        index.set_entities(self.entities.iter().cloned())
    }
}
