//! # GEL Commands
//!
//! Every module under `gel.commands` is listed here and loaded on first registry access.

pub mod version;

use gel_core::{CommandEntry, CommandRegistry, ModuleTable};

/// Modules making up the `gel.commands` package
pub fn catalog() -> ModuleTable<CommandEntry> {
    ModuleTable::new().with_module("gel.commands.version", version::load)
}

/// Command registry backed by the built-in command catalog
pub fn registry() -> CommandRegistry {
    CommandRegistry::new(catalog())
}
