#![no_main]

use ctipkg::GJsonPath;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Split on the first newline: path, then a JSON document
        let (path, doc) = s.split_once('\n').unwrap_or((s, "{}"));
        if let Ok(tree) = serde_json::from_str::<serde_json::Value>(doc) {
            let _ = GJsonPath::new(path).get_value(&tree);
        }
    }
});
