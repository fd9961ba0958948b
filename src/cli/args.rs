//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::msg::Level;
use crate::output::OutputFormat;

/// meshlint - Service mesh configuration analysis.
#[derive(Debug, Parser)]
#[command(name = "meshlint")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to settings file (overrides .meshlint.yml discovery)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Analyze configuration files
    Analyze(AnalyzeArgs),

    /// List available analyzers
    Analyzers(AnalyzersArgs),
}

/// Arguments for the `analyze` command.
#[derive(Debug, Clone, Args)]
pub struct AnalyzeArgs {
    /// Files or directories to analyze
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Human)]
    pub output: OutputFormat,

    /// Suppress messages, e.g. "IST0101=VirtualService default/*"
    #[arg(long = "suppress", value_name = "CODE=RESOURCE")]
    pub suppress: Vec<String>,

    /// Hide messages below this level
    #[arg(long, value_name = "LEVEL")]
    pub output_threshold: Option<Level>,

    /// Fail when a message at or above this level is reported
    #[arg(long, value_name = "LEVEL")]
    pub failure_threshold: Option<Level>,

    /// Namespace for resources that declare none
    #[arg(short, long, env = "MESHLINT_NAMESPACE")]
    pub namespace: Option<String>,

    /// Run analyzers in parallel
    #[arg(long)]
    pub parallel: bool,
}

/// Arguments for the `analyzers` command.
#[derive(Debug, Clone, Default, Args)]
pub struct AnalyzersArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_analyze_with_flags() {
        let cli = Cli::try_parse_from([
            "meshlint",
            "--debug",
            "analyze",
            "a.yaml",
            "dir",
            "-o",
            "json",
            "--suppress",
            "IST0101=*",
            "--failure-threshold",
            "warning",
            "-n",
            "bookinfo",
            "--parallel",
        ])
        .unwrap();
        assert!(cli.debug);
        let Commands::Analyze(args) = cli.command else {
            panic!("expected analyze");
        };
        assert_eq!(args.paths, [PathBuf::from("a.yaml"), PathBuf::from("dir")]);
        assert_eq!(args.output, OutputFormat::Json);
        assert_eq!(args.suppress, ["IST0101=*"]);
        assert_eq!(args.failure_threshold, Some(Level::Warning));
        assert_eq!(args.output_threshold, None);
        assert_eq!(args.namespace.as_deref(), Some("bookinfo"));
        assert!(args.parallel);
    }

    #[test]
    fn analyze_requires_paths() {
        assert!(Cli::try_parse_from(["meshlint", "analyze"]).is_err());
    }

    #[test]
    fn rejects_unknown_level() {
        assert!(Cli::try_parse_from(["meshlint", "analyze", "a.yaml", "--failure-threshold", "fatal"]).is_err());
    }

    #[test]
    fn global_config_after_subcommand() {
        let cli = Cli::try_parse_from(["meshlint", "analyzers", "--config", "s.yml", "--json"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("s.yml")));
        assert!(matches!(cli.command, Commands::Analyzers(AnalyzersArgs { json: true })));
    }
}
