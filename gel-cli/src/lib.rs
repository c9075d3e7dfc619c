//! # GEL CLI Library
//!
//! Command-line front end of GEL (Gabriel's Everything Library).
//! Builds the `gel` parser from the command registry and dispatches to the chosen command.

pub mod cli;
pub mod commands;

use gel_core::{Arguments, CommandOutput, CommandRegistry};

use cli::args::COMMAND_DEST;

/// Dispatch parsed arguments to the command they name
pub fn run(registry: &mut CommandRegistry, arguments: &Arguments) -> anyhow::Result<CommandOutput> {
    let command = arguments
        .get_str(COMMAND_DEST)
        .ok_or_else(|| anyhow::anyhow!("No GEL command given"))?;

    registry.dispatch(command, arguments)
}
