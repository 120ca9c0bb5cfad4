//! Test fixtures - reusable package content.

pub const EN_DICTIONARY: &str = r#"{
  "widget.title": "Widget",
  "widget.description": "A small widget"
}
"#;

pub const FR_DICTIONARY: &str = r#"{
  "widget.title": "Gadget",
  "widget.description": "Un petit gadget"
}
"#;

pub const MINIMAL_INDEX: &str = r#"{
  "package_id": "com.acme.widget",
  "ramlx_version": "1.0",
  "entities": ["entities/widget.raml"]
}
"#;

pub const MINIMAL_INDEX_LOCK: &str = r#"{
  "version": 1,
  "packages": {},
  "sources": {}
}
"#;
