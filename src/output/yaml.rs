//! YAML output formatter.

use std::io::Write;

use super::{output_messages, DiagnosticFormatter};
use crate::msg::Diagnostic;

/// Formats diagnostics as a YAML sequence.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlFormatter;

impl DiagnosticFormatter for YamlFormatter {
    fn format<W: Write + ?Sized>(
        &self,
        diagnostics: &[Diagnostic],
        writer: &mut W,
    ) -> std::io::Result<()> {
        let yaml = serde_yaml::to_string(&output_messages(diagnostics))
            .map_err(std::io::Error::other)?;
        writer.write_all(yaml.as_bytes())
    }
}
