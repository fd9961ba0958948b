//! Error types for meshlint operations.
//!
//! This module defines [`MeshlintError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `MeshlintError` for failures that callers classify (see [`ErrorKind`])
//! - Use `anyhow::Error` (via `MeshlintError::Other`) for unexpected errors
//! - "Analysis found issues" is not a tool failure, but it is surfaced as
//!   [`MeshlintError::AnalyzerFoundIssues`] so the binary can pick a distinct
//!   exit status

use std::path::PathBuf;
use thiserror::Error;

use crate::resource::{FullName, Gvk};

/// Broad classification of an error, used for exit status mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed invocation.
    Usage,
    /// Input could not be read, parsed, or translated.
    Data,
    /// Analysis completed and reported issues at or above the failure threshold.
    AnalyzerFoundIssues,
    /// Anything else.
    Unknown,
}

/// Core error type for meshlint operations.
#[derive(Debug, Error)]
pub enum MeshlintError {
    /// The command line could not be interpreted.
    #[error("Invalid usage: {message}")]
    CommandParse { message: String },

    /// A settings file could not be parsed.
    #[error("Failed to parse settings at {path}: {message}")]
    SettingsParse { path: PathBuf, message: String },

    /// A configuration source file could not be parsed.
    #[error("Failed to parse {path}: {message}")]
    FileParse { path: PathBuf, message: String },

    /// Two resources of the same type and cluster share a name.
    #[error("Duplicate {gvk} resource {name}")]
    DuplicateResource { gvk: Gvk, name: FullName },

    /// A resource payload did not match the shape its schema declares.
    #[error("Invalid {gvk} payload for {name}: {message}")]
    InvalidPayload {
        gvk: Gvk,
        name: FullName,
        message: String,
    },

    /// Analysis reported one or more issues.
    #[error("Analyzers found issues when analyzing {count} resource message(s)")]
    AnalyzerFoundIssues { count: usize },

    /// An analyzer aborted.
    #[error("Analyzer {analyzer} failed: {message}")]
    AnalyzerFailed { analyzer: String, message: String },

    /// The secret manager failed to produce a workload certificate.
    #[error("Failed to fetch secret '{resource}': {message}")]
    SecretFetch { resource: String, message: String },

    /// A certificate or key file could not be read.
    #[error("Failed to read {path}: {source}")]
    CertificateRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// PEM content was malformed or empty.
    #[error("Invalid PEM in {origin}: {message}")]
    InvalidPem { origin: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MeshlintError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::CommandParse { .. } => ErrorKind::Usage,
            Self::SettingsParse { .. }
            | Self::FileParse { .. }
            | Self::DuplicateResource { .. }
            | Self::InvalidPayload { .. }
            | Self::InvalidPem { .. } => ErrorKind::Data,
            Self::AnalyzerFoundIssues { .. } => ErrorKind::AnalyzerFoundIssues,
            Self::AnalyzerFailed { .. }
            | Self::SecretFetch { .. }
            | Self::CertificateRead { .. }
            | Self::Io(_)
            | Self::Other(_) => ErrorKind::Unknown,
        }
    }
}

/// Result type alias for meshlint operations.
pub type Result<T> = std::result::Result<T, MeshlintError>;
