//! Diagnostic Sink Implementations
//!
//! - `JsonDiagnosticSink`: NDJSON output for CI/automation
//! - `TracingSink`: structured `tracing` events

mod json;
mod log_sink;

pub use json::JsonDiagnosticSink;
pub use log_sink::TracingSink;
