//! Entity - a parsed metadata unit
//!
//! Entities are produced by the external schema collector. This crate only
//! reads them: the registry indexes them and the annotation processor looks
//! up annotated values.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::domain::value_objects::GJsonPath;

/// Marks the annotated value as a base-relative path to a bundled asset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssetAnnotation;

/// Annotations attached to one subpath of an entity's values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Annotations {
    pub asset: Option<AssetAnnotation>,
}

impl Annotations {
    /// Annotations carrying only the asset marker
    pub fn asset() -> Self {
        Self {
            asset: Some(AssetAnnotation),
        }
    }

    pub fn is_asset(&self) -> bool {
        self.asset.is_some()
    }
}

/// A resolved metadata unit identified by its CTI
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub cti: String,
    pub values: Value,
    pub annotations: BTreeMap<GJsonPath, Annotations>,
}

impl Entity {
    pub fn new(cti: impl Into<String>, values: Value) -> Self {
        Self {
            cti: cti.into(),
            values,
            annotations: BTreeMap::new(),
        }
    }

    pub fn with_annotation(mut self, key: impl Into<GJsonPath>, annotations: Annotations) -> Self {
        self.annotations.insert(key.into(), annotations);
        self
    }

    /// Value at `key` inside this entity's values
    pub fn value_at(&self, key: &GJsonPath) -> Option<&Value> {
        key.get_value(&self.values)
    }

    /// Keys whose annotations carry the asset marker, in key order
    pub fn asset_keys(&self) -> impl Iterator<Item = &GJsonPath> {
        self.annotations
            .iter()
            .filter(|(_, a)| a.is_asset())
            .map(|(key, _)| key)
    }
}
