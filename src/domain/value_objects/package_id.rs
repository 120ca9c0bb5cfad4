//! Package Identifier Validation
//!
//! Package identifiers are dot-separated lowercase names such as
//! `acme.widget` or `com.acme.widget`. The first segment acts as the vendor
//! namespace, so at least two segments are required.

use std::fmt;

/// Maximum length of a package identifier in bytes
pub const MAX_PACKAGE_ID_LEN: usize = 128;

/// Error when package identifier validation fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackageIdError {
    /// Identifier is empty
    Empty,
    /// Identifier is longer than `MAX_PACKAGE_ID_LEN`
    TooLong { len: usize },
    /// Identifier has no vendor namespace (single segment)
    MissingNamespace,
    /// Identifier contains `..`, or starts or ends with `.`
    EmptySegment,
    /// Segment does not start with a lowercase ASCII letter
    InvalidSegmentStart { segment: String },
    /// Character outside `[a-z0-9_-]`
    InvalidCharacter { ch: char },
}

impl fmt::Display for PackageIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PackageIdError::Empty => write!(f, "package id is empty"),
            PackageIdError::TooLong { len } => write!(
                f,
                "package id is {} bytes long, maximum is {}",
                len, MAX_PACKAGE_ID_LEN
            ),
            PackageIdError::MissingNamespace => write!(
                f,
                "package id must contain at least two dot-separated segments"
            ),
            PackageIdError::EmptySegment => write!(f, "package id contains an empty segment"),
            PackageIdError::InvalidSegmentStart { segment } => write!(
                f,
                "segment '{}' must start with a lowercase letter",
                segment
            ),
            PackageIdError::InvalidCharacter { ch } => {
                write!(f, "invalid character '{}' in package id", ch.escape_debug())
            }
        }
    }
}

impl std::error::Error for PackageIdError {}

/// Validate a package identifier.
///
/// Rules:
/// - non-empty and at most `MAX_PACKAGE_ID_LEN` bytes
/// - two or more segments separated by `.`
/// - each segment starts with `a-z` and continues with `a-z`, `0-9`, `_` or `-`
pub fn validate_id(id: &str) -> Result<(), PackageIdError> {
    if id.is_empty() {
        return Err(PackageIdError::Empty);
    }
    if id.len() > MAX_PACKAGE_ID_LEN {
        return Err(PackageIdError::TooLong { len: id.len() });
    }

    let segments: Vec<&str> = id.split('.').collect();
    if segments.len() < 2 {
        return Err(PackageIdError::MissingNamespace);
    }

    for segment in segments {
        let mut chars = segment.chars();
        let first = chars.next().ok_or(PackageIdError::EmptySegment)?;
        if !first.is_ascii_lowercase() {
            return Err(PackageIdError::InvalidSegmentStart {
                segment: segment.to_string(),
            });
        }
        if let Some(ch) = chars.find(|c| !is_id_char(*c)) {
            return Err(PackageIdError::InvalidCharacter { ch });
        }
    }

    Ok(())
}

fn is_id_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-'
}
