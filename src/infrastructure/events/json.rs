//! JSON Diagnostic Sink
//!
//! Outputs diagnostic events as NDJSON for CI/automation consumption.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::{DiagnosticEvent, DiagnosticSink};

/// Event sink that writes one JSON object per line
pub struct JsonDiagnosticSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonDiagnosticSink {
    /// Create a sink writing to stderr
    pub fn stderr() -> Self {
        Self::with_writer(io::stderr())
    }

    /// Create a sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl DiagnosticSink for JsonDiagnosticSink {
    fn emit(&self, event: DiagnosticEvent) {
        let level = event.severity().as_str();
        let message = event.message();
        let json = match event {
            DiagnosticEvent::EmptyAssetPath { entity, key } => serde_json::json!({
                "event": "empty_asset_path",
                "level": level,
                "message": message,
                "entity": entity,
                "key": key,
            }),
            DiagnosticEvent::AssetBundled { entity, path } => serde_json::json!({
                "event": "asset_bundled",
                "level": level,
                "message": message,
                "entity": entity,
                "path": path,
            }),
        };

        self.write_event(json);
    }
}
