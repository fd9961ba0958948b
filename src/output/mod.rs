//! Diagnostic output formatters.
//!
//! Human-readable text (one message per line), JSON, and YAML.

pub mod human;
pub mod json;
pub mod yaml;

use std::io::Write;

use clap::ValueEnum;
use serde::Serialize;

use crate::msg::Diagnostic;

/// Output format for analysis results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
    Yaml,
}

/// Trait for formatting diagnostics.
pub trait DiagnosticFormatter {
    /// Format diagnostics to the given writer.
    fn format<W: Write + ?Sized>(
        &self,
        diagnostics: &[Diagnostic],
        writer: &mut W,
    ) -> std::io::Result<()>;
}

/// Format `diagnostics` in `format`.
pub fn render<W: Write + ?Sized>(
    format: OutputFormat,
    diagnostics: &[Diagnostic],
    writer: &mut W,
) -> std::io::Result<()> {
    match format {
        OutputFormat::Human => HumanFormatter.format(diagnostics, writer),
        OutputFormat::Json => JsonFormatter.format(diagnostics, writer),
        OutputFormat::Yaml => YamlFormatter.format(diagnostics, writer),
    }
}

/// Machine-readable form of one message, shared by JSON and YAML.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct OutputMessage {
    code: &'static str,
    level: String,
    origin: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    reference: Option<String>,
    message: String,
    documentation_url: String,
}

impl From<&Diagnostic> for OutputMessage {
    fn from(d: &Diagnostic) -> Self {
        let m = &d.message;
        Self {
            code: m.code(),
            level: m.level().to_string(),
            origin: m.resource_name(),
            reference: m.reference(),
            message: m.detail(),
            documentation_url: m.documentation_url(),
        }
    }
}

fn output_messages(diagnostics: &[Diagnostic]) -> Vec<OutputMessage> {
    diagnostics.iter().map(OutputMessage::from).collect()
}

pub use human::HumanFormatter;
pub use json::JsonFormatter;
pub use yaml::YamlFormatter;
