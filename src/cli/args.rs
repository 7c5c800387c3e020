//! Command-line argument parsing and validation

use crate::core::{diff::DiffCommand, registry::CommandOptions};
use clap::{Parser, Subcommand};

/// Devkit - a small developer toolbox for line-set operations
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "devkit")]
pub struct Args {
    /// Enable debug output
    #[arg(long, global = true)]
    pub debug: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute the set difference of two line sets (Windows/Linux/MacOS)
    Diff {
        /// Set A, one multi-line string
        #[arg(short = 'a', value_name = "TEXT")]
        a: Option<String>,

        /// Set B, one multi-line string
        #[arg(short = 'b', value_name = "TEXT")]
        b: Option<String>,
    },
}

impl Command {
    /// Registry name of the selected command
    pub fn name(&self) -> &'static str {
        match self {
            Command::Diff { .. } => DiffCommand::NAME,
        }
    }

    /// Parsed option values for the selected command
    ///
    /// Options left unset on the command line are not recorded, so the
    /// handler decides whether their absence is an error.
    pub fn options(&self) -> CommandOptions {
        match self {
            Command::Diff { a, b } => CommandOptions::new()
                .with_option("a", a.as_deref())
                .with_option("b", b.as_deref()),
        }
    }
}

/// Parse command line arguments
pub fn parse_args() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_diff_with_both_sets() {
        let args = Args::try_parse_from(["devkit", "diff", "-a", "x\ny", "-b", "y"]).unwrap();
        assert!(!args.debug);

        match args.command {
            Command::Diff { a, b } => {
                assert_eq!(a.as_deref(), Some("x\ny"));
                assert_eq!(b.as_deref(), Some("y"));
            }
        }
    }

    #[test]
    fn test_parse_debug_flag() {
        let args = Args::try_parse_from(["devkit", "--debug", "diff"]).unwrap();
        assert!(args.debug);
    }

    #[test]
    fn test_parse_no_color_flag() {
        let args = Args::try_parse_from(["devkit", "diff", "--no-color"]).unwrap();
        assert!(args.no_color);
    }

    #[test]
    fn test_missing_options_parse_as_unset() {
        let args = Args::try_parse_from(["devkit", "diff", "-b", "y"]).unwrap();

        match args.command {
            Command::Diff { a, b } => {
                assert!(a.is_none());
                assert_eq!(b.as_deref(), Some("y"));
            }
        }
    }

    #[test]
    fn test_command_name_matches_registry_name() {
        let args = Args::try_parse_from(["devkit", "diff"]).unwrap();
        assert_eq!(args.command.name(), "diff");
    }

    #[test]
    fn test_options_skip_unset_values() {
        let args = Args::try_parse_from(["devkit", "diff", "-a", "x"]).unwrap();
        let options = args.command.options();

        assert_eq!(options.get("a"), Some("x"));
        assert_eq!(options.get("b"), None);
    }
}
