//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - local file access with atomic writes
//! - `repositories/` - JSON index/lock repositories, dictionary loading
//! - `events/` - diagnostic sinks

pub mod events;
pub mod fs;
pub mod repositories;

pub use events::{JsonDiagnosticSink, TracingSink};
pub use fs::LocalFs;
pub use repositories::{load_dictionaries, JsonIndexLockRepository, JsonIndexRepository};
