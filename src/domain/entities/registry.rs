//! Entity registry
//!
//! Exact-match index from CTI identifier to entity. The collector fills it
//! once per build or read cycle; afterwards it is only read. Wildcards and
//! version ranges are resolved by the collector, not here.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::Value;

use crate::domain::entities::Entity;
use crate::domain::value_objects::GJsonPath;
use crate::error::{PackageError, PackageResult};

#[derive(Debug, Clone, Default)]
pub struct EntityRegistry {
    entities: BTreeMap<String, Arc<Entity>>,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry, rejecting duplicate identifiers.
    pub fn from_entities<I>(entities: I) -> PackageResult<Self>
    where
        I: IntoIterator<Item = Arc<Entity>>,
    {
        let mut registry = Self::new();
        for entity in entities {
            registry.insert(entity)?;
        }
        Ok(registry)
    }

    pub fn insert(&mut self, entity: Arc<Entity>) -> PackageResult<()> {
        if self.entities.contains_key(&entity.cti) {
            return Err(PackageError::DuplicateCti {
                cti: entity.cti.clone(),
            });
        }
        self.entities.insert(entity.cti.clone(), entity);
        Ok(())
    }

    pub fn get(&self, cti: &str) -> Option<&Arc<Entity>> {
        self.entities.get(cti)
    }

    /// Value at `path` inside the entity registered as `cti`
    pub fn value_at(&self, cti: &str, path: &GJsonPath) -> Option<&Value> {
        self.get(cti).and_then(|entity| entity.value_at(path))
    }

    pub fn contains(&self, cti: &str) -> bool {
        self.entities.contains_key(cti)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Entities in identifier order
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Entity>> {
        self.entities.values()
    }

    pub fn clear(&mut self) {
        self.entities.clear();
    }
}
