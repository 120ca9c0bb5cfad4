//! CONTRACT: reading a package never changes what is on disk, and saving
//! an unchanged package reproduces the same bytes.

use crate::common::*;
use ctipkg::{Package, PackageOptions, SourceInfo, INDEX_FILE_NAME, INDEX_LOCK_FILE_NAME};

fn populated(pkg: &TestPackage) {
    let mut package = Package::new(
        pkg.path(),
        PackageOptions::new()
            .with_id("com.acme.widget")
            .unwrap()
            .with_entities(["b.raml", "a.raml"])
            .unwrap(),
    )
    .unwrap();
    package.index_mut().add_dependency("acme.base", "^1.0").unwrap();
    package
        .index_lock_mut()
        .pin("acme.base", "1.2.3", SourceInfo::new("file:///a.zip"))
        .unwrap();
    package.save_index().unwrap();
    package.save_index_lock().unwrap();
}

#[test]
fn contract_open_does_not_rewrite_files() {
    let pkg = TestPackage::new();
    populated(&pkg);
    let index_before = pkg.read(INDEX_FILE_NAME);
    let lock_before = pkg.read(INDEX_LOCK_FILE_NAME);

    let _ = Package::open(pkg.path()).unwrap();

    assert_eq!(pkg.read(INDEX_FILE_NAME), index_before);
    assert_eq!(pkg.read(INDEX_LOCK_FILE_NAME), lock_before);
}

#[test]
fn contract_resave_is_byte_identical() {
    let pkg = TestPackage::new();
    populated(&pkg);
    let index_before = pkg.read(INDEX_FILE_NAME);
    let lock_before = pkg.read(INDEX_LOCK_FILE_NAME);

    let package = Package::open(pkg.path()).unwrap();
    package.save_index().unwrap();
    package.save_index_lock().unwrap();

    assert_eq!(pkg.read(INDEX_FILE_NAME), index_before);
    assert_eq!(pkg.read(INDEX_LOCK_FILE_NAME), lock_before);
}

#[test]
fn contract_entity_order_is_preserved() {
    let pkg = TestPackage::new();
    populated(&pkg);

    let package = Package::open(pkg.path()).unwrap();
    assert_eq!(package.index().entities(), ["b.raml", "a.raml"]);
}
