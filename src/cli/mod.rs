//! Command-line interface for meshlint.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{AnalyzeArgs, AnalyzersArgs, Cli, Commands};
pub use commands::{Command, CommandDispatcher};
