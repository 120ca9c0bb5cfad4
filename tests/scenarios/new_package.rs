//! Scenario: Creating a Package
//!
//! Steps:
//! 1. Resolve options from `ctipkg.toml` and the environment
//! 2. Initialize the package on disk
//! 3. Open it again from a fresh process-like state

use crate::common::*;
use ctipkg::config::{load_or_default, with_overrides_from};
use ctipkg::{
    Package, PackageError, PackageOptions, INDEX_FILE_NAME, INDEX_LOCK_FILE_NAME,
};

/// SCENARIO: initialize with an id and nothing else, then read it back
#[test]
fn scenario_initialize_and_reopen_empty_package() {
    let pkg = TestPackage::new();
    let options = PackageOptions::new().with_id("com.acme.widget").unwrap();

    Package::initialize(pkg.path(), options).unwrap();
    assert!(pkg.join(INDEX_FILE_NAME).exists());
    assert!(pkg.join(INDEX_LOCK_FILE_NAME).exists());

    let mut reopened = Package::new(pkg.path(), PackageOptions::default()).unwrap();
    reopened.read().unwrap();

    assert_eq!(reopened.index().package_id(), "com.acme.widget");
    assert!(reopened.index().entities().is_empty());
    assert!(reopened.index_lock().is_empty());
}

/// SCENARIO: options come from the config file, the environment wins
#[test]
fn scenario_initialize_from_config_file() {
    let pkg = TestPackage::new();
    pkg.write(
        "ctipkg.toml",
        r#"
[package]
id = "com.acme.widget"
ramlx_version = "1.0"
entities = ["entities/widget.raml", "entities/gadget.raml"]
"#,
    );

    let (options, warnings) = load_or_default(pkg.path()).unwrap();
    assert!(warnings.is_empty());

    let options = with_overrides_from(options, |key| match key {
        "CTIPKG_RAMLX_VERSION" => Some("1.1".to_string()),
        _ => None,
    })
    .unwrap();

    let package = Package::initialize(pkg.path(), options).unwrap();
    assert_eq!(package.index().ramlx_version(), "1.1");
    assert_eq!(
        package.index().entities(),
        ["entities/widget.raml", "entities/gadget.raml"]
    );

    let reopened = Package::open(pkg.path()).unwrap();
    assert_eq!(reopened.index(), package.index());
}

/// SCENARIO: a bad identifier never reaches disk
#[test]
fn scenario_invalid_id_is_rejected_before_writing() {
    let pkg = TestPackage::new();

    let err = PackageOptions::new().with_id("Widget").unwrap_err();
    assert!(matches!(err, PackageError::InvalidPackageId { .. }));
    assert!(err.to_string().starts_with("validate id 'Widget': "));

    assert!(!pkg.join(INDEX_FILE_NAME).exists());
}

/// SCENARIO: a hand-edited manifest with duplicate entities is refused
#[test]
fn scenario_hand_edited_duplicate_entities() {
    let pkg = TestPackage::new();
    pkg.write(
        INDEX_FILE_NAME,
        r#"{ "package_id": "com.acme.widget", "entities": ["a.raml", "a.raml"] }"#,
    );
    pkg.write(INDEX_LOCK_FILE_NAME, MINIMAL_INDEX_LOCK);

    let err = Package::open(pkg.path()).unwrap_err();
    assert!(matches!(err, PackageError::ReadIndex(_)));
    assert!(err.to_string().contains("a.raml"));
}
