#![no_main]

use ctipkg::ContentHash;
use libfuzzer_sys::fuzz_target;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Mirror of the lock file layout (private in main crate)
#[derive(Deserialize)]
struct JsonIndexLock {
    #[allow(dead_code)]
    version: u32,
    #[serde(default)]
    #[allow(dead_code)]
    packages: BTreeMap<String, String>,
    #[serde(default)]
    sources: BTreeMap<String, JsonSourceInfo>,
}

#[derive(Deserialize)]
struct JsonSourceInfo {
    #[allow(dead_code)]
    source: String,
    #[serde(default)]
    integrity: Option<String>,
}

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Lock parsing and integrity validation should never panic
        if let Ok(lock) = serde_json::from_str::<JsonIndexLock>(content) {
            for info in lock.sources.values() {
                if let Some(integrity) = &info.integrity {
                    let _ = ContentHash::parse(integrity);
                }
            }
        }
    }
});
