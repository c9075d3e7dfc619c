//! # Registration
//!
//! Entries, registries and module discovery.
//!
//! Command modules expose a load function; discovery runs those functions in path order so each
//! module registers its commands into the registry passed to it:
//!
//! ```
//! use gel_core::configuration::{CommandConfig, Config};
//! use gel_core::registration::{register_command, CommandEntry, CommandRegistry, ModuleTable};
//! use gel_core::{Arguments, CommandOutput};
//!
//! fn hello_config() -> Box<dyn Config> {
//!     Box::new(CommandConfig::new("hello", "Say hello"))
//! }
//!
//! fn hello(_: &Arguments) -> anyhow::Result<CommandOutput> {
//!     Ok(CommandOutput::Message("hello".to_string()))
//! }
//!
//! let modules = ModuleTable::<CommandEntry>::new().with_module("gel.commands.hello", |registry| {
//!     register_command(registry, "hello", hello_config, hello)?;
//!     Ok(())
//! });
//!
//! let mut registry = CommandRegistry::new(modules);
//! let output = registry.dispatch("hello", &Arguments::new()).unwrap();
//! assert_eq!(output.to_string(), "hello");
//! ```

pub mod command;
pub mod discovery;
pub mod entry;
pub mod registry;

pub use command::{
    register_command, CommandEntry, CommandRegistry, EntryPoint, COMMAND_REGISTRY_ID,
};
pub use discovery::{Module, ModuleSource, ModuleTable};
pub use entry::Entry;
pub use registry::{Registry, GEL_NAMESPACE};
