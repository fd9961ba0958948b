//! JSON output formatter.

use std::io::Write;

use super::{output_messages, DiagnosticFormatter};
use crate::msg::Diagnostic;

/// Formats diagnostics as a pretty-printed JSON array.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

impl DiagnosticFormatter for JsonFormatter {
    fn format<W: Write + ?Sized>(
        &self,
        diagnostics: &[Diagnostic],
        writer: &mut W,
    ) -> std::io::Result<()> {
        let messages = output_messages(diagnostics);
        serde_json::to_writer_pretty(&mut *writer, &messages)?;
        writeln!(writer)
    }
}
