//! Core functionality for the toolbox
//!
//! Contains the command registry and the line-set operations exposed
//! as subcommands.

pub mod diff;
pub mod registry;

pub use diff::{DiffCommand, DiffReport, diff_lines};
pub use registry::{CommandHandler, CommandOptions, CommandRegistry, CommandSpec};
