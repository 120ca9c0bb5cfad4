//! Configuration module
//!
//! Package options are resolved in this order:
//! 1. Environment variables (`CTIPKG_*`, highest priority)
//! 2. `ctipkg.toml` in the package directory
//! 3. Built-in defaults (lowest priority)

mod loader;
mod options;

pub use loader::{
    load_or_default, load_with_warnings, with_env_overrides, with_overrides_from, ConfigWarning,
    CONFIG_FILE_NAME,
};
pub use options::PackageOptions;
