//! Diagnostic Event Port
//!
//! Structured events emitted while bundling assets. Components take a sink
//! instead of writing to a process-wide logger, so callers choose where
//! diagnostics go and tests can assert on them directly.

/// Event severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Info,
    Warning,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
        }
    }
}

/// Event emitted during asset processing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticEvent {
    /// Asset annotation resolved to an empty path; nothing was bundled
    EmptyAssetPath { entity: String, key: String },

    /// Asset was handed to the archiver successfully
    AssetBundled { entity: String, path: String },
}

impl DiagnosticEvent {
    pub fn severity(&self) -> Severity {
        match self {
            DiagnosticEvent::EmptyAssetPath { .. } => Severity::Warning,
            DiagnosticEvent::AssetBundled { .. } => Severity::Info,
        }
    }

    /// Short human-readable message
    pub fn message(&self) -> &'static str {
        match self {
            DiagnosticEvent::EmptyAssetPath { .. } => "Empty asset path",
            DiagnosticEvent::AssetBundled { .. } => "Asset bundled",
        }
    }
}

/// Trait for receiving diagnostic events
///
/// Implementations:
/// - `NoopSink`: discard everything
/// - `JsonDiagnosticSink`: NDJSON stream
/// - `TracingSink`: forward to `tracing`
pub trait DiagnosticSink: Send + Sync {
    fn emit(&self, event: DiagnosticEvent);
}

/// Sink that drops every event
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn emit(&self, _event: DiagnosticEvent) {}
}
