//! Application Layer
//!
//! - `package` - the `Package` aggregate and its read/save lifecycle
//! - `annotations` - per-annotation asset handler used by bundling

pub mod annotations;
pub mod package;

pub use annotations::process_annotation;
pub use package::Package;
