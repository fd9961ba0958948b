//! Analyzers command implementation.
//!
//! The `meshlint analyzers` command lists the builtin analyzers.

use std::io::Write;

use crate::analysis::{AnalyzerMetadata, AnalyzerRegistry};
use crate::cli::args::AnalyzersArgs;
use crate::error::Result;

use super::dispatcher::Command;

/// The analyzers command implementation.
pub struct AnalyzersCommand {
    args: AnalyzersArgs,
}

impl AnalyzersCommand {
    pub fn new(args: AnalyzersArgs) -> Self {
        Self { args }
    }
}

impl Command for AnalyzersCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<()> {
        let registry = AnalyzerRegistry::with_builtins();
        let analyzers: Vec<AnalyzerMetadata> = registry.iter().map(|a| a.metadata()).collect();

        if self.args.json {
            serde_json::to_writer_pretty(&mut *out, &analyzers).map_err(anyhow::Error::from)?;
            writeln!(out)?;
            return Ok(());
        }

        for meta in &analyzers {
            writeln!(out, "{}", meta.name)?;
            writeln!(out, "    {}", meta.description)?;
            let inputs: Vec<String> = meta.inputs.iter().map(|g| g.to_string()).collect();
            writeln!(out, "    inputs: {}", inputs.join(", "))?;
        }
        Ok(())
    }
}
