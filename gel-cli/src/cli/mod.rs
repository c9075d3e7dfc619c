//! # CLI Module
//!
//! Top-level parser, logging setup and terminal rendering for the `gel` binary.

pub mod args;
pub mod error;
pub mod logging;
pub mod output;

pub use args::{build_cli, LoggingConfig, LoggingLevel};
pub use error::{format_error, print_error};
pub use logging::configure_logger;
pub use output::print_output;
