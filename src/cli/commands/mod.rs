//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and writing their reports.
//!
//! Commands are dispatched via [`CommandDispatcher`], which loads settings
//! and routes CLI subcommands to their implementations.

pub mod analyze;
pub mod analyzers;
pub mod dispatcher;

pub use dispatcher::{Command, CommandDispatcher};
