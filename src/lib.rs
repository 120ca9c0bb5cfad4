//! ctipkg - CTI metadata package core
//!
//! Keeps a package's manifest (`index.json`) and pinned dependency lock
//! (`index-lock.json`) consistent on disk, indexes parsed entities by CTI,
//! and hands annotated assets to an archiver when a bundle is built.
//!
//! Schema parsing, concrete archivers and dependency resolution live in the
//! tools that embed this crate.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{process_annotation, Package};
pub use config::{PackageOptions, CONFIG_FILE_NAME};
pub use domain::entities::{
    Annotations, AssetAnnotation, Dictionaries, Entity, EntityRegistry, Entry, Index, IndexLock,
    LangCode, SourceInfo, INDEX_FILE_NAME, INDEX_LOCK_FILE_NAME, INDEX_LOCK_VERSION,
};
pub use domain::ports::{Archiver, ArchiverError, DiagnosticEvent, DiagnosticSink, NoopSink};
pub use domain::value_objects::{validate_id, ContentHash, GJsonPath};
pub use error::{PackageError, PackageResult};
pub use infrastructure::{JsonDiagnosticSink, TracingSink};
