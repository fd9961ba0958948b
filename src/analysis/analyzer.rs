//! The analyzer contract.
//!
//! - [`Analyzer`] - a validation rule run once per pass
//! - [`AnalyzerMetadata`] - its name, description, and input types
//! - [`AnalyzerError`] - contract violations that abort one analyzer

use serde::Serialize;
use thiserror::Error;

use super::context::Context;
use crate::resource::{FullName, Gvk};

/// Static description of an analyzer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyzerMetadata {
    /// Unique dotted name, e.g. `virtualservice.GatewayAnalyzer`.
    pub name: &'static str,
    pub description: &'static str,
    /// Resource types the analyzer reads.
    pub inputs: Vec<Gvk>,
}

/// Failure of a single analyzer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AnalyzerError {
    /// An instance's payload did not have the shape of its declared type.
    #[error("{analyzer}: resource {resource} does not carry a {expected} payload")]
    PayloadMismatch {
        analyzer: &'static str,
        expected: Gvk,
        resource: FullName,
    },
}

/// A validation rule over a snapshot.
///
/// Analyzers only read through the [`Context`] and write through
/// [`Context::report`]; they never depend on each other's output.
pub trait Analyzer: Send + Sync {
    fn metadata(&self) -> AnalyzerMetadata;

    /// Run the analysis. Diagnostics reported before an error is returned
    /// are kept.
    fn analyze(&self, ctx: &dyn Context) -> Result<(), AnalyzerError>;
}
