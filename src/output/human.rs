//! Human-readable output formatter.

use std::io::Write;

use super::DiagnosticFormatter;
use crate::msg::Diagnostic;

/// One rendered message per line.
#[derive(Debug, Clone, Copy, Default)]
pub struct HumanFormatter;

impl DiagnosticFormatter for HumanFormatter {
    fn format<W: Write + ?Sized>(
        &self,
        diagnostics: &[Diagnostic],
        writer: &mut W,
    ) -> std::io::Result<()> {
        for diag in diagnostics {
            writeln!(writer, "{}", diag.message)?;
        }
        Ok(())
    }
}
