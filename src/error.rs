//! Error types for ctipkg
//!
//! Uses `thiserror` for library errors. Port-level failures (`StoreError`,
//! `ArchiverError`) are wrapped with the operation that triggered them.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::{ArchiverError, StoreError};
use crate::domain::value_objects::{PackageIdError, PathError};

/// Result type alias for package operations
pub type PackageResult<T> = Result<T, PackageError>;

/// Main error type for package operations
#[derive(Error, Debug)]
pub enum PackageError {
    /// Package identifier failed format validation
    #[error("validate id '{id}': {reason}")]
    InvalidPackageId { id: String, reason: PackageIdError },

    /// Entity source path listed twice in the manifest
    #[error("duplicate entity '{path}' in manifest")]
    DuplicateEntity { path: String },

    /// Two entities registered under the same CTI identifier
    #[error("duplicate entity identifier '{cti}' in registry")]
    DuplicateCti { cti: String },

    #[error("read index file: {0}")]
    ReadIndex(#[source] StoreError),

    #[error("read index lock: {0}")]
    ReadIndexLock(#[source] StoreError),

    #[error("save index: {0}")]
    SaveIndex(#[source] StoreError),

    #[error("save index lock: {0}")]
    SaveIndexLock(#[source] StoreError),

    #[error("open dictionary file {}: {source}", path.display())]
    OpenDictionary {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("validate dictionary {}: decode dictionary: {source}", path.display())]
    DecodeDictionary {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Dictionary path without a usable file stem
    #[error("dictionary file '{path}' has no language code")]
    InvalidDictionaryName { path: String },

    /// Dictionary path is absolute or leaves the package directory
    #[error("dictionary path '{path}' is not allowed: {reason}")]
    DictionaryPathEscape { path: String, reason: PathError },

    /// Two dictionary files map to the same language code
    #[error("duplicate dictionary for language '{lang}': {path}")]
    DuplicateDictionary { lang: String, path: String },

    /// Asset annotation points at something other than a string
    #[error("asset value at '{key}' in entity '{entity}' is not a string")]
    InvalidAssetValue { entity: String, key: String },

    /// Asset path is absolute or leaves the package directory
    #[error("asset path '{path}' in entity '{entity}' is not allowed: {reason}")]
    AssetPathEscape {
        entity: String,
        path: String,
        reason: PathError,
    },

    #[error("write asset {path}: {source}")]
    WriteAsset {
        path: String,
        #[source]
        source: ArchiverError,
    },

    #[error("read config file {}: {source}", file.display())]
    ReadConfig {
        file: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration file
    #[error("invalid configuration in {}: {message}", file.display())]
    InvalidConfig { file: PathBuf, message: String },
}
