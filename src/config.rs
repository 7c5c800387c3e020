//! Configuration management for the toolbox
//!
//! Centralizes runtime options derived from command line arguments.

use crate::cli::Args;
use serde::{Deserialize, Serialize};
use std::env;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Enable debug logging
    pub debug: bool,
    /// Output configuration
    pub output: OutputConfig,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Colorize summary and marker lines
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

impl Config {
    /// Create configuration from command line arguments
    ///
    /// Colors are disabled by `--no-color` or by the `NO_COLOR` convention.
    pub fn from_args(args: &Args) -> Self {
        Self {
            debug: args.debug,
            output: OutputConfig {
                color: !args.no_color && env::var_os("NO_COLOR").is_none(),
            },
        }
    }
}
