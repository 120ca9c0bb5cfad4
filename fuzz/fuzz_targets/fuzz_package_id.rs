#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(id) = std::str::from_utf8(data) {
        if ctipkg::validate_id(id).is_ok() {
            assert!(id.contains('.'));
            assert!(id.len() <= ctipkg::domain::value_objects::MAX_PACKAGE_ID_LEN);
        }
    }
});
