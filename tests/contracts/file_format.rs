//! CONTRACT: manifest and lock files are pretty JSON with sorted maps and a
//! trailing newline.

use insta::assert_snapshot;

use crate::common::*;
use ctipkg::infrastructure::LocalFs;
use ctipkg::{Package, PackageOptions, SourceInfo, INDEX_FILE_NAME, INDEX_LOCK_FILE_NAME};

#[test]
fn contract_new_package_files() {
    let pkg = TestPackage::new();
    Package::initialize(
        pkg.path(),
        PackageOptions::new().with_id("com.acme.widget").unwrap(),
    )
    .unwrap();

    let index = pkg.read(INDEX_FILE_NAME);
    let lock = pkg.read(INDEX_LOCK_FILE_NAME);
    assert!(index.ends_with("}\n"));
    assert!(lock.ends_with("}\n"));

    assert_snapshot!(index.trim_end(), @r###"
    {
      "package_id": "com.acme.widget",
      "ramlx_version": "",
      "entities": []
    }
    "###);
    assert_snapshot!(lock.trim_end(), @r###"
    {
      "version": 1,
      "packages": {},
      "sources": {}
    }
    "###);
}

#[test]
fn contract_populated_package_files() {
    let pkg = TestPackage::new();
    let mut package = Package::new(
        pkg.path(),
        PackageOptions::new()
            .with_id("com.acme.widget")
            .unwrap()
            .with_ramlx_version("1.0")
            .with_entities(["entities/widget.raml"])
            .unwrap(),
    )
    .unwrap();
    package.index_mut().add_dictionary("dictionaries/en.json").unwrap();
    package.index_mut().add_dependency("acme.icons", "~2.1").unwrap();
    package.index_mut().add_dependency("acme.base", "^1.2").unwrap();
    package
        .index_lock_mut()
        .pin(
            "acme.base",
            "1.4.0",
            SourceInfo::new("https://packages.example.com/acme.base-1.4.0.zip")
                .with_dependency("acme.core", "2.0.0"),
        )
        .unwrap();
    package.save_index().unwrap();
    package.save_index_lock().unwrap();

    assert_snapshot!(pkg.read(INDEX_FILE_NAME).trim_end(), @r###"
    {
      "package_id": "com.acme.widget",
      "ramlx_version": "1.0",
      "entities": [
        "entities/widget.raml"
      ],
      "dictionaries": [
        "dictionaries/en.json"
      ],
      "depends": {
        "acme.base": "^1.2",
        "acme.icons": "~2.1"
      }
    }
    "###);
    assert_snapshot!(pkg.read(INDEX_LOCK_FILE_NAME).trim_end(), @r###"
    {
      "version": 1,
      "packages": {
        "acme.base": "1.4.0"
      },
      "sources": {
        "acme.base": {
          "source": "https://packages.example.com/acme.base-1.4.0.zip",
          "depends": {
            "acme.core": "2.0.0"
          }
        }
      }
    }
    "###);
}

#[test]
fn contract_integrity_is_prefixed_sha256() {
    let pkg = TestPackage::new();
    let archive = pkg.write("archives/acme.base.zip", "");
    let integrity = LocalFs::new().hash(&archive).unwrap();

    let mut package = Package::new(pkg.path(), PackageOptions::default()).unwrap();
    package
        .index_lock_mut()
        .pin(
            "acme.base",
            "1.0.0",
            SourceInfo::new("file:///archives/acme.base.zip").with_integrity(integrity),
        )
        .unwrap();
    package.save_index_lock().unwrap();

    let lock = pkg.read(INDEX_LOCK_FILE_NAME);
    assert!(lock.contains(
        r#""integrity": "sha256:e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855""#
    ));
}

#[test]
fn contract_diagnostics_are_ndjson() {
    use ctipkg::{DiagnosticEvent, DiagnosticSink, JsonDiagnosticSink};
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Buffer(Arc<Mutex<Vec<u8>>>);

    impl Write for Buffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    let buffer = Buffer::default();
    let sink = JsonDiagnosticSink::with_writer(buffer.clone());
    sink.emit(DiagnosticEvent::EmptyAssetPath {
        entity: "cti.acme.widget.v1.0".to_string(),
        key: "icon".to_string(),
    });
    sink.emit(DiagnosticEvent::AssetBundled {
        entity: "cti.acme.widget.v1.0".to_string(),
        path: "img/logo.png".to_string(),
    });

    let output = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
    assert_snapshot!(output.trim_end(), @r###"
    {"entity":"cti.acme.widget.v1.0","event":"empty_asset_path","key":"icon","level":"warning","message":"Empty asset path"}
    {"entity":"cti.acme.widget.v1.0","event":"asset_bundled","level":"info","message":"Asset bundled","path":"img/logo.png"}
    "###);
}
