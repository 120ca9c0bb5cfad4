//! Localisation dictionaries keyed by language code

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde_json::{Map, Value};

/// Language code derived from a dictionary file stem (`en.json` -> `en`)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LangCode(String);

impl LangCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Language code of a dictionary path, `None` if the path has no stem.
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        path.as_ref()
            .file_stem()
            .map(|stem| Self(stem.to_string_lossy().into_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LangCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One decoded dictionary file
pub type Entry = Map<String, Value>;

/// All dictionaries of a package
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dictionaries {
    pub dictionaries: BTreeMap<LangCode, Entry>,
}

impl Dictionaries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, lang: &str) -> Option<&Entry> {
        self.dictionaries.get(&LangCode::new(lang))
    }

    pub fn languages(&self) -> impl Iterator<Item = &LangCode> {
        self.dictionaries.keys()
    }

    pub fn len(&self) -> usize {
        self.dictionaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dictionaries.is_empty()
    }
}
