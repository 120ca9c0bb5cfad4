//! Domain Layer
//!
//! Package data model and rules, free of file system access.
//!
//! ## Structure
//!
//! - `entities/` - Index, IndexLock, Entity, EntityRegistry, Dictionaries
//! - `value_objects/` - package ids, GJSON paths, content hashes, safe paths
//! - `ports/` - interfaces implemented by infrastructure or the embedding tool

pub mod entities;
pub mod ports;
pub mod value_objects;
