//! Line-set difference between two text blocks
//!
//! Splitting follows [`str::lines`]: an empty input yields no lines and a
//! trailing line break does not produce a trailing empty line. The
//! difference keeps the first-occurrence order of set A, so output is
//! deterministic across runs.

use crate::{
    core::registry::{CommandHandler, CommandOptions, CommandRegistry, CommandSpec},
    error::Result,
    output::{OutputSink, Style},
};
use std::collections::HashSet;
use tracing::debug;

/// Outcome of a line-set difference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffReport {
    /// Number of lines in set A, duplicates included
    pub a_line_count: usize,
    /// Number of lines in set B, duplicates included
    pub b_line_count: usize,
    /// Lines present in A but absent from B, deduplicated, in
    /// first-occurrence order
    pub unique_lines: Vec<String>,
}

impl DiffReport {
    /// Number of differing lines
    pub fn unique_count(&self) -> usize {
        self.unique_lines.len()
    }

    /// Write the report to an output sink
    ///
    /// Summary and marker lines use the accent style; the differing lines
    /// themselves pass through plain. When nothing differs, only the
    /// counts are written.
    pub fn write_to(&self, sink: &mut dyn OutputSink) -> Result<()> {
        sink.write_line("", Style::Plain)?;
        sink.write_line("Arguments line count", Style::Accent)?;
        sink.write_line(&format!("  -a: {}", self.a_line_count), Style::Accent)?;
        sink.write_line(&format!("  -b: {}", self.b_line_count), Style::Accent)?;
        sink.write_line(
            &format!("list diff count: {}", self.unique_count()),
            Style::Accent,
        )?;

        if self.unique_count() > 0 {
            sink.write_line(">>>", Style::Accent)?;
            for line in &self.unique_lines {
                sink.write_line(line, Style::Plain)?;
            }
            sink.write_line("<<<", Style::Accent)?;
        }

        Ok(())
    }
}

/// Compute the set difference `A - B` over the line sets of two text blocks
///
/// Duplicate lines within either input collapse to a single membership
/// entry; the result lists each differing line once.
pub fn diff_lines(a: &str, b: &str) -> DiffReport {
    let a_line_count = a.lines().count();
    let b_line_count = b.lines().count();

    let b_set: HashSet<&str> = b.lines().collect();
    let mut seen = HashSet::new();
    let mut unique_lines = Vec::new();

    for line in a.lines() {
        if !b_set.contains(line) && seen.insert(line) {
            unique_lines.push(line.to_string());
        }
    }

    DiffReport {
        a_line_count,
        b_line_count,
        unique_lines,
    }
}

/// The `diff` subcommand: report lines present in set A but absent from set B
pub struct DiffCommand;

impl DiffCommand {
    /// Name under which the command is registered
    pub const NAME: &'static str = "diff";

    const DESCRIPTION: &'static str = "Compute the set difference of two line sets";
    const PLATFORMS: &'static str = "Windows/Linux/MacOS";

    /// Register this command in the given registry
    pub fn register(registry: &mut CommandRegistry) -> Result<()> {
        registry.register(Box::new(Self))
    }
}

impl CommandHandler for DiffCommand {
    fn spec(&self) -> CommandSpec {
        CommandSpec {
            name: Self::NAME,
            description: Self::DESCRIPTION,
            platforms: Self::PLATFORMS,
        }
    }

    fn run(&self, options: &CommandOptions, sink: &mut dyn OutputSink) -> Result<()> {
        let a = options.require("a")?;
        let b = options.require("b")?;

        let report = diff_lines(a, b);
        debug!(
            "Computed diff: {} line(s) in -a, {} line(s) in -b, {} unique",
            report.a_line_count,
            report.b_line_count,
            report.unique_count()
        );

        report.write_to(sink)
    }
}
