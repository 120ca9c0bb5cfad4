//! Content Hash Value Object
//!
//! Integrity fingerprint recorded for each pinned dependency in the lock.

use std::fmt;

use sha2::{Digest, Sha256};

/// Error when a persisted hash string is malformed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HashError {
    /// Missing or unsupported algorithm prefix
    UnsupportedAlgorithm(String),
    /// Digest is not 64 lowercase hex characters
    InvalidDigest(String),
}

impl fmt::Display for HashError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HashError::UnsupportedAlgorithm(s) => {
                write!(f, "unsupported hash '{}', expected '{}<hex>'", s, ContentHash::PREFIX)
            }
            HashError::InvalidDigest(s) => write!(f, "invalid sha256 digest '{}'", s),
        }
    }
}

impl std::error::Error for HashError {}

/// SHA-256 content hash with the `sha256:` prefix
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentHash(String);

impl ContentHash {
    /// Prefix for SHA-256 hashes
    pub const PREFIX: &'static str = "sha256:";

    /// Compute SHA-256 of raw bytes
    pub fn from_bytes(content: &[u8]) -> Self {
        let digest = Sha256::digest(content);
        Self(format!("{}{:x}", Self::PREFIX, digest))
    }

    /// Parse a persisted `sha256:<hex>` string
    pub fn parse(s: &str) -> Result<Self, HashError> {
        let hex = s
            .strip_prefix(Self::PREFIX)
            .ok_or_else(|| HashError::UnsupportedAlgorithm(s.to_string()))?;

        let valid = hex.len() == 64
            && hex
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c));
        if !valid {
            return Err(HashError::InvalidDigest(hex.to_string()));
        }

        Ok(Self(s.to_string()))
    }

    /// Get the full hash string with prefix
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get just the hex part without prefix
    pub fn hex(&self) -> &str {
        self.0.strip_prefix(Self::PREFIX).unwrap_or(&self.0)
    }

    /// Check whether `content` hashes to this value
    pub fn verify(&self, content: &[u8]) -> bool {
        *self == Self::from_bytes(content)
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ContentHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
