//! # Devkit
//!
//! A small developer toolbox exposing line-set utilities as subcommands.
//! Commands register themselves in an explicit registry built at startup
//! and write their reports through a styled output sink, which keeps the
//! dispatch table and the console formatting independently testable.
//!
//! ## Features
//!
//! - Line-set difference between two multi-line text blocks
//! - Explicit command registry with static name and description metadata
//! - Styled console output with optional colors
//! - Professional error handling and logging
//!
//! ## Example
//!
//! ```
//! use devkit_cli::core::diff::diff_lines;
//!
//! let report = diff_lines("x\ny\nz", "y");
//! assert_eq!(report.unique_lines, vec!["x", "z"]);
//! assert_eq!(report.unique_count(), 2);
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod output;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with appropriate verbosity
///
/// Log lines go to stderr so that command reports on stdout stay clean.
pub fn setup_logging(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
