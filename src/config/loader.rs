//! Configuration loading
//!
//! Reads `PackageOptions` from a TOML file and applies `CTIPKG_*`
//! environment overrides.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{PackageError, PackageResult};

use super::options::PackageOptions;

/// Default configuration file name under a package directory
pub const CONFIG_FILE_NAME: &str = "ctipkg.toml";

/// Non-fatal configuration warning (e.g. unknown key).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    package: PackageSection,
}

#[derive(Debug, Default, Deserialize)]
struct PackageSection {
    id: Option<String>,
    ramlx_version: Option<String>,
    #[serde(default)]
    entities: Vec<String>,
}

/// Load options and collect non-fatal warnings.
///
/// Values go through the same validation as the `PackageOptions` builder.
pub fn load_with_warnings(path: &Path) -> PackageResult<(PackageOptions, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|source| PackageError::ReadConfig {
        file: path.to_path_buf(),
        source,
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);
    let file: ConfigFile = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| PackageError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let options = into_options(file.package)?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
                key,
                file: path.to_path_buf(),
            }
        })
        .collect();

    Ok((options, warnings))
}

/// Load `ctipkg.toml` from `base_dir`, or defaults if there is none.
/// Environment overrides are applied in both cases.
pub fn load_or_default(base_dir: &Path) -> PackageResult<(PackageOptions, Vec<ConfigWarning>)> {
    let path = base_dir.join(CONFIG_FILE_NAME);
    let (options, warnings) = if path.exists() {
        load_with_warnings(&path)?
    } else {
        (PackageOptions::default(), Vec::new())
    };
    Ok((with_env_overrides(options)?, warnings))
}

/// Apply environment variable overrides (`CTIPKG_*` prefix)
pub fn with_env_overrides(options: PackageOptions) -> PackageResult<PackageOptions> {
    with_overrides_from(options, |name| std::env::var(name).ok())
}

/// Apply overrides resolved through `lookup` instead of the process environment
pub fn with_overrides_from<F>(mut options: PackageOptions, lookup: F) -> PackageResult<PackageOptions>
where
    F: Fn(&str) -> Option<String>,
{
    // CTIPKG_PACKAGE_ID
    if let Some(id) = lookup("CTIPKG_PACKAGE_ID") {
        options = options.with_id(id)?;
    }

    // CTIPKG_RAMLX_VERSION
    if let Some(version) = lookup("CTIPKG_RAMLX_VERSION") {
        options = options.with_ramlx_version(version);
    }

    Ok(options)
}

fn into_options(section: PackageSection) -> PackageResult<PackageOptions> {
    let mut options = PackageOptions::new();
    if let Some(id) = section.id {
        options = options.with_id(id)?;
    }
    if let Some(version) = section.ramlx_version {
        options = options.with_ramlx_version(version);
    }
    options.with_entities(section.entities)
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &["package", "id", "ramlx_version", "entities"];

    CANDIDATES
        .iter()
        .map(|candidate| (*candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
