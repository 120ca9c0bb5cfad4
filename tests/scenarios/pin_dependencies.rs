//! Scenario: Pinning Dependencies
//!
//! A resolver outside this crate picks versions; the package records them
//! in the lock and later reads them back unchanged.

use crate::common::*;
use ctipkg::domain::ports::StoreError;
use ctipkg::{ContentHash, Package, PackageError, SourceInfo, INDEX_LOCK_FILE_NAME};

/// SCENARIO: declare, pin, save, reopen
#[test]
fn scenario_pins_survive_reopen() {
    let pkg = TestPackage::new();
    pkg.write("index.json", MINIMAL_INDEX);
    pkg.write(INDEX_LOCK_FILE_NAME, MINIMAL_INDEX_LOCK);

    let mut package = Package::open(pkg.path()).unwrap();
    package.index_mut().add_dependency("acme.base", "^1.0").unwrap();
    package.index_mut().add_dependency("acme.icons", "~2.1").unwrap();
    assert_eq!(
        package.unpinned_dependencies(),
        vec!["acme.base", "acme.icons"]
    );

    let archive = b"acme.base 1.4.0 archive";
    package
        .index_lock_mut()
        .pin(
            "acme.base",
            "1.4.0",
            SourceInfo::new("https://packages.example.com/acme.base-1.4.0.zip")
                .with_integrity(ContentHash::from_bytes(archive)),
        )
        .unwrap();
    package
        .index_lock_mut()
        .pin(
            "acme.icons",
            "2.1.3",
            SourceInfo::new("https://packages.example.com/acme.icons-2.1.3.zip")
                .with_dependency("acme.base", "1.4.0"),
        )
        .unwrap();
    package.save_index().unwrap();
    package.save_index_lock().unwrap();

    let reopened = Package::open(pkg.path()).unwrap();
    assert!(reopened.unpinned_dependencies().is_empty());
    assert_eq!(reopened.index_lock().version_of("acme.base"), Some("1.4.0"));

    let info = reopened.index_lock().source_info("acme.base").unwrap();
    assert!(info.integrity().unwrap().verify(archive));

    let icons = reopened.index_lock().source_info("acme.icons").unwrap();
    assert_eq!(icons.depends().get("acme.base").map(String::as_str), Some("1.4.0"));
}

/// SCENARIO: a lock written by a newer tool is refused, not reinterpreted
#[test]
fn scenario_future_lock_version_is_refused() {
    let pkg = TestPackage::new();
    pkg.write("index.json", MINIMAL_INDEX);
    pkg.write(
        INDEX_LOCK_FILE_NAME,
        r#"{ "version": 2, "packages": {}, "sources": {} }"#,
    );

    let err = Package::open(pkg.path()).unwrap_err();
    assert!(matches!(
        err,
        PackageError::ReadIndexLock(StoreError::VersionMismatch {
            found: 2,
            expected: 1,
            ..
        })
    ));
}

/// SCENARIO: a pin without source info is corruption
#[test]
fn scenario_lock_with_mismatched_sections_is_corrupted() {
    let pkg = TestPackage::new();
    pkg.write("index.json", MINIMAL_INDEX);
    pkg.write(
        INDEX_LOCK_FILE_NAME,
        r#"{ "version": 1, "packages": { "acme.base": "1.0.0" }, "sources": {} }"#,
    );

    let err = Package::open(pkg.path()).unwrap_err();
    match err {
        PackageError::ReadIndexLock(StoreError::Corrupted { message, .. }) => {
            assert!(message.contains("acme.base"), "message: {message}");
        }
        other => panic!("expected corrupted lock, got {other}"),
    }
}
