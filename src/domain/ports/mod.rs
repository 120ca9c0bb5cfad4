//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer or embedding applications provide implementations.

pub mod archiver;
pub mod diagnostics;
pub mod store;

pub use archiver::{Archiver, ArchiverError};
pub use diagnostics::{DiagnosticEvent, DiagnosticSink, NoopSink, Severity};
pub use store::{IndexLockRepository, IndexRepository, StoreError, StoreResult};
