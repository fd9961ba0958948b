//! Settings loading for meshlint.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use meshlint::config::load_settings;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join(".meshlint.yml"), "default_namespace: bookinfo").unwrap();
//!
//! let settings = load_settings(temp.path(), None).unwrap();
//! assert_eq!(settings.default_namespace, "bookinfo");
//! ```

pub mod loader;
pub mod schema;

pub use loader::{
    discover_settings, load_settings, load_settings_file, parse_settings, SETTINGS_FILE_NAMES,
};
pub use schema::{Settings, SuppressionRule};
