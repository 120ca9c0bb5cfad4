//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod gjson_path;
mod hash;
mod package_id;
mod path;

pub use gjson_path::GJsonPath;
pub use hash::{ContentHash, HashError};
pub use package_id::{validate_id, PackageIdError, MAX_PACKAGE_ID_LEN};
pub use path::{PathError, SafePath};
