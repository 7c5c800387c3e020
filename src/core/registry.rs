//! Command registry and dispatch table
//!
//! Subcommands describe themselves through a [`CommandSpec`] and are held
//! in an explicit [`CommandRegistry`] built at startup. A handler receives
//! its parsed options and an output sink, nothing else; there is no
//! process-wide registry state.

use crate::{
    core::diff::DiffCommand,
    error::{DevkitError, Result},
    output::OutputSink,
};
use std::collections::HashMap;

/// Static metadata describing a registered command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    /// Command name as typed on the command line
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Supported platforms, informational only
    pub platforms: &'static str,
}

/// A command that can be registered and executed
pub trait CommandHandler {
    /// Metadata for this command
    fn spec(&self) -> CommandSpec;

    /// Execute the command with parsed options, writing results to the sink
    fn run(&self, options: &CommandOptions, sink: &mut dyn OutputSink) -> Result<()>;
}

/// String-valued options parsed for a single command invocation
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    values: HashMap<String, String>,
}

impl CommandOptions {
    /// Create an empty option set
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an option value; absent values are not recorded
    pub fn with_option(mut self, key: &str, value: Option<&str>) -> Self {
        if let Some(value) = value {
            self.values.insert(key.to_string(), value.to_string());
        }
        self
    }

    /// Look up an option value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Look up an option value, failing with `InvalidArgument` when unset
    pub fn require(&self, key: &str) -> Result<&str> {
        self.get(key).ok_or_else(|| {
            DevkitError::invalid_argument(format!("missing required option '-{key}'"))
        })
    }
}

/// Dispatch table mapping command names to handlers
pub struct CommandRegistry {
    commands: HashMap<&'static str, Box<dyn CommandHandler>>,
}

impl CommandRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    /// Create a registry with all built-in commands registered
    pub fn with_builtin_commands() -> Result<Self> {
        let mut registry = Self::new();
        DiffCommand::register(&mut registry)?;
        Ok(registry)
    }

    /// Register a command handler under its declared name
    pub fn register(&mut self, handler: Box<dyn CommandHandler>) -> Result<()> {
        let spec = handler.spec();
        if self.commands.contains_key(spec.name) {
            return Err(DevkitError::registry(format!(
                "command '{}' is already registered",
                spec.name
            )));
        }

        self.commands.insert(spec.name, handler);
        Ok(())
    }

    /// Look up a handler by name
    pub fn get(&self, name: &str) -> Option<&dyn CommandHandler> {
        self.commands.get(name).map(|handler| handler.as_ref())
    }

    /// Look up a handler by name, failing with `UnknownCommand` when absent
    pub fn resolve(&self, name: &str) -> Result<&dyn CommandHandler> {
        self.get(name)
            .ok_or_else(|| DevkitError::unknown_command(name))
    }

    /// Metadata for every registered command, sorted by name
    pub fn specs(&self) -> Vec<CommandSpec> {
        let mut specs: Vec<_> = self.commands.values().map(|handler| handler.spec()).collect();
        specs.sort_by_key(|spec| spec.name);
        specs
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
