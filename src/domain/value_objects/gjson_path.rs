//! GJSON-style path into an entity value tree
//!
//! Supports the subset of GJSON syntax used by annotation keys: dot-separated
//! object keys, numeric array indices, and `\.` to escape a literal dot.

use std::fmt;

use serde_json::Value;

/// Path to a value inside an entity's `values` tree
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GJsonPath(String);

impl GJsonPath {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Split into unescaped segments.
    pub fn segments(&self) -> Vec<String> {
        let mut segments = Vec::new();
        let mut current = String::new();
        let mut chars = self.0.chars();

        while let Some(c) = chars.next() {
            match c {
                '\\' => match chars.next() {
                    Some(escaped) => current.push(escaped),
                    None => current.push('\\'),
                },
                '.' => segments.push(std::mem::take(&mut current)),
                _ => current.push(c),
            }
        }
        segments.push(current);
        segments
    }

    /// Resolve this path against `tree`.
    ///
    /// Returns `None` for an empty path or when any segment is missing.
    pub fn get_value<'a>(&self, tree: &'a Value) -> Option<&'a Value> {
        if self.0.is_empty() {
            return None;
        }

        self.segments()
            .iter()
            .try_fold(tree, |node, segment| match node {
                Value::Object(map) => map.get(segment.as_str()),
                Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
                _ => None,
            })
    }
}

impl fmt::Display for GJsonPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for GJsonPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for GJsonPath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}
