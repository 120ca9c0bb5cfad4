//! Dictionary loader
//!
//! Reads the localisation files declared in the manifest. Loading is
//! all-or-nothing: the first unreadable, malformed or colliding file aborts
//! the whole set. Paths must stay inside the package base directory.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::domain::entities::{Dictionaries, Entry, LangCode};
use crate::domain::value_objects::SafePath;
use crate::error::{PackageError, PackageResult};

/// Load every dictionary in `paths` (relative to `base_dir`).
///
/// Each file is opened, decoded and closed before the next one is touched.
pub fn load_dictionaries(base_dir: &Path, paths: &[String]) -> PackageResult<Dictionaries> {
    let mut dictionaries = Dictionaries::new();

    for dict in paths {
        let lang = LangCode::from_path(dict)
            .ok_or_else(|| PackageError::InvalidDictionaryName { path: dict.clone() })?;
        if dictionaries.dictionaries.contains_key(&lang) {
            return Err(PackageError::DuplicateDictionary {
                lang: lang.to_string(),
                path: dict.clone(),
            });
        }

        let relative = SafePath::new(dict).map_err(|reason| PackageError::DictionaryPathEscape {
            path: dict.clone(),
            reason,
        })?;
        let path = base_dir.join(relative.as_path());
        let file = File::open(&path).map_err(|source| PackageError::OpenDictionary {
            path: path.clone(),
            source,
        })?;
        let entry = decode_dictionary(BufReader::new(file))
            .map_err(|source| PackageError::DecodeDictionary { path, source })?;

        dictionaries.dictionaries.insert(lang, entry);
    }

    Ok(dictionaries)
}

/// Decode a single JSON object from `input`.
fn decode_dictionary<R: Read>(input: R) -> serde_json::Result<Entry> {
    serde_json::from_reader(input)
}
