//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::config::load_settings;
use crate::error::Result;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command, writing its report to `out`.
    ///
    /// A command that completes but wants a non-zero exit status returns the
    /// matching error, e.g. `AnalyzerFoundIssues`.
    fn execute(&self, out: &mut dyn Write) -> Result<()>;
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    working_dir: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher that resolves settings from `working_dir`.
    pub fn new(working_dir: PathBuf) -> Self {
        Self { working_dir }
    }

    /// Get the working directory.
    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, out: &mut dyn Write) -> Result<()> {
        match &cli.command {
            Commands::Analyze(args) => {
                let settings = load_settings(&self.working_dir, cli.config.as_deref())?;
                let cmd = super::analyze::AnalyzeCommand::new(settings, args.clone());
                cmd.execute(out)
            }
            Commands::Analyzers(args) => {
                let cmd = super::analyzers::AnalyzersCommand::new(args.clone());
                cmd.execute(out)
            }
        }
    }
}
