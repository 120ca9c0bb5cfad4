//! Annotation processing for asset bundling
//!
//! The bundling pass (outside this crate) walks every annotated key of every
//! entity and calls `process_annotation` once per key. Only asset
//! annotations have an effect here.

use std::path::Path;

use serde_json::Value;

use crate::domain::entities::{Annotations, Entity};
use crate::domain::ports::{Archiver, DiagnosticEvent, DiagnosticSink};
use crate::domain::value_objects::{GJsonPath, SafePath};
use crate::error::{PackageError, PackageResult};

/// Handle the annotations attached to `key` of `entity`.
///
/// For an asset annotation the value at `key` is the asset path relative to
/// `base_dir`:
/// - missing, `null` or `""`: warning on `sink`, nothing written
/// - any other string: exactly one `archiver.write_file` call
/// - non-string: `InvalidAssetValue`
pub fn process_annotation<A>(
    base_dir: &Path,
    archiver: &mut A,
    key: &GJsonPath,
    entity: &Entity,
    annotations: &Annotations,
    sink: &dyn DiagnosticSink,
) -> PackageResult<()>
where
    A: Archiver + ?Sized,
{
    if !annotations.is_asset() {
        return Ok(());
    }

    let asset_path = match key.get_value(&entity.values) {
        None | Some(Value::Null) => "",
        Some(Value::String(s)) => s.as_str(),
        Some(_) => {
            return Err(PackageError::InvalidAssetValue {
                entity: entity.cti.clone(),
                key: key.to_string(),
            })
        }
    };

    if asset_path.is_empty() {
        sink.emit(DiagnosticEvent::EmptyAssetPath {
            entity: entity.cti.clone(),
            key: key.to_string(),
        });
        return Ok(());
    }

    let safe = SafePath::new(asset_path).map_err(|reason| PackageError::AssetPathEscape {
        entity: entity.cti.clone(),
        path: asset_path.to_string(),
        reason,
    })?;

    archiver
        .write_file(base_dir, safe.as_path())
        .map_err(|source| PackageError::WriteAsset {
            path: asset_path.to_string(),
            source,
        })?;

    sink.emit(DiagnosticEvent::AssetBundled {
        entity: entity.cti.clone(),
        path: asset_path.to_string(),
    });
    Ok(())
}
