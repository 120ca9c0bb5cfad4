//! Domain Entities
//!
//! - `Index` - the package manifest
//! - `IndexLock` - pinned dependency closure
//! - `Entity` - a parsed metadata unit and its annotations
//! - `EntityRegistry` - CTI -> entity index
//! - `Dictionaries` - localisation entries keyed by language

mod dictionary;
mod entity;
mod index;
mod index_lock;
mod registry;

pub use dictionary::{Dictionaries, Entry, LangCode};
pub use entity::{Annotations, AssetAnnotation, Entity};
pub use index::{Index, INDEX_FILE_NAME};
pub use index_lock::{IndexLock, SourceInfo, INDEX_LOCK_FILE_NAME, INDEX_LOCK_VERSION};
pub use registry::EntityRegistry;
