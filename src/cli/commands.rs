//! Command dispatch for the CLI

use crate::{cli::Command, config::Config, core::registry::CommandRegistry, output::ConsoleSink};
use anyhow::Context;
use tracing::{debug, info, instrument};

/// Execute the appropriate command based on CLI arguments
///
/// Builds the registry, resolves the selected command by name, and runs
/// it against a console sink configured from `config`.
#[instrument(skip(config))]
pub fn execute_command(config: &Config, command: &Command) -> anyhow::Result<()> {
    let registry =
        CommandRegistry::with_builtin_commands().context("Failed to build command registry")?;

    for spec in registry.specs() {
        debug!(
            "Registered command '{}': {} ({})",
            spec.name, spec.description, spec.platforms
        );
    }

    let handler = registry.resolve(command.name())?;
    let mut sink = ConsoleSink::new(config.output.color);

    info!("Running '{}' command", command.name());
    handler.run(&command.options(), &mut sink)?;

    Ok(())
}
