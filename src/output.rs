//! Styled output sinks
//!
//! Commands write their reports through the [`OutputSink`] trait instead
//! of printing directly, so rendering can be captured in tests and colors
//! can be turned off without touching command logic.

use crate::error::{DevkitError, Result};
use colored::Colorize;
use std::io::{self, Write};

/// Rendering style for a single output line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Content passed through untouched
    Plain,
    /// Summary and marker lines
    Accent,
}

/// Destination for command report lines
pub trait OutputSink {
    /// Write one line with the given style
    fn write_line(&mut self, text: &str, style: Style) -> Result<()>;
}

/// Sink writing styled lines to standard output
#[derive(Debug)]
pub struct ConsoleSink {
    out: io::Stdout,
    color: bool,
}

impl ConsoleSink {
    /// Create a sink writing to stdout, with or without colors
    ///
    /// Even with colors enabled, the `colored` crate suppresses escape
    /// sequences when stdout is not a terminal.
    pub fn new(color: bool) -> Self {
        Self {
            out: io::stdout(),
            color,
        }
    }

    fn render(&self, text: &str, style: Style) -> String {
        if !self.color {
            return text.to_string();
        }

        match style {
            Style::Plain => text.to_string(),
            Style::Accent => text.red().to_string(),
        }
    }
}

impl OutputSink for ConsoleSink {
    fn write_line(&mut self, text: &str, style: Style) -> Result<()> {
        let rendered = self.render(text, style);
        writeln!(self.out, "{rendered}")
            .map_err(|e| DevkitError::output("failed to write to stdout", e))
    }
}

/// Sink collecting styled lines in memory, used by tests
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: Vec<(Style, String)>,
}

impl MemorySink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Captured line texts in write order
    pub fn lines(&self) -> Vec<&str> {
        self.entries.iter().map(|(_, text)| text.as_str()).collect()
    }

    /// Captured lines with their styles
    pub fn entries(&self) -> &[(Style, String)] {
        &self.entries
    }
}

impl OutputSink for MemorySink {
    fn write_line(&mut self, text: &str, style: Style) -> Result<()> {
        self.entries.push((style, text.to_string()));
        Ok(())
    }
}
