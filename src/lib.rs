//! Meshlint - static analysis for service-mesh configuration.
//!
//! Meshlint loads Kubernetes and Istio manifests into a snapshot, runs a set
//! of analyzers over it, and reports diagnostics that point back at the
//! offending file and line.
//!
//! # Modules
//!
//! - [`analysis`] - Snapshot, analyzer contract, builtin analyzers, and driver
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Settings file loading
//! - [`credentials`] - Client certificates for discovery connections
//! - [`error`] - Error types and result aliases
//! - [`exit`] - Process exit status mapping
//! - [`model`] - Typed resource payloads
//! - [`msg`] - Diagnostic message catalog
//! - [`output`] - Human, JSON, and YAML formatters
//! - [`resource`] - Resource identity, metadata, and schemas
//! - [`source`] - Manifest file loading and origins
//!
//! # Example
//!
//! ```
//! use meshlint::resource::{FullName, Namespace};
//!
//! let default_ns = Namespace::new("bookinfo");
//! assert_eq!(
//!     FullName::short_or_full(&default_ns, "reviews-gw"),
//!     FullName::new("bookinfo", "reviews-gw"),
//! );
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod credentials;
pub mod error;
pub mod exit;
pub mod model;
pub mod msg;
pub mod output;
pub mod resource;
pub mod source;

pub use error::{MeshlintError, Result};
