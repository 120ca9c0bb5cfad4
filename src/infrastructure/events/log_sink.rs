//! Tracing Diagnostic Sink
//!
//! Forwards diagnostic events to `tracing` with structured fields. Installing
//! a subscriber is up to the embedding binary.

use crate::domain::ports::{DiagnosticEvent, DiagnosticSink};

/// Sink that forwards events to the current `tracing` subscriber
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, event: DiagnosticEvent) {
        let message = event.message();
        match event {
            DiagnosticEvent::EmptyAssetPath { entity, key } => {
                tracing::warn!(entity = %entity, key = %key, "{}", message);
            }
            DiagnosticEvent::AssetBundled { entity, path } => {
                tracing::debug!(entity = %entity, path = %path, "{}", message);
            }
        }
    }
}
