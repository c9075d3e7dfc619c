//! # GEL Core Library
//!
//! Registration core for GEL (Gabriel's Everything Library).
//!
//! Independently defined commands register themselves, together with their argument parsers, into
//! a command registry. The CLI assembles one parser tree from every registered command and
//! dispatches the parsed arguments to the chosen command's entry point.
//!
//! ## Architecture
//!
//! - **Configuration**: parser-building contract every command supplies
//! - **Registration**: entries, the generic registry and the command registry
//! - **Discovery**: explicit module tables standing in for namespace walking
//! - **Arguments**: flat mapping of parsed arguments handed to entry points

pub mod arguments;
pub mod configuration;
pub mod error;
pub mod output;
pub mod registration;

pub use arguments::Arguments;
pub use configuration::{CommandConfig, Config, ConfigFactory};
pub use error::{RegistrationError, Result};
pub use output::CommandOutput;
pub use registration::{
    register_command, CommandEntry, CommandRegistry, Entry, EntryPoint, Module, ModuleSource,
    ModuleTable, Registry,
};
