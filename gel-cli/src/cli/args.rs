//! # GEL Arguments
//!
//! Top-level argument definitions. Command parsers are contributed by the command registry.

use std::fmt;
use std::path::PathBuf;

use clap::{value_parser, Arg, ArgMatches, Command, ValueEnum};

use gel_core::registration::GEL_NAMESPACE;
use gel_core::{CommandRegistry, Result};

/// Program name
pub const PROGRAM_NAME: &str = "gel";

/// Title of the command sub-parser group
pub const COMMAND_TITLE: &str = "gel-command";

/// Key under which the chosen command is stored in the parsed arguments
pub const COMMAND_DEST: &str = "gel_command";

pub const LOGGING_LEVEL: &str = "logging_level";
pub const LOGGING_PATH: &str = "logging_path";
pub const DEFAULT_LOGGING_PATH: &str = "logs";

/// Minimum logging level
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoggingLevel {
    #[value(name = "DEBUG")]
    Debug,
    #[default]
    #[value(name = "INFO")]
    Info,
    #[value(name = "WARNING")]
    Warning,
    #[value(name = "ERROR")]
    Error,
    #[value(name = "CRITICAL")]
    Critical,
    #[value(name = "NOTSET")]
    Notset,
}

impl LoggingLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoggingLevel::Debug => "DEBUG",
            LoggingLevel::Info => "INFO",
            LoggingLevel::Warning => "WARNING",
            LoggingLevel::Error => "ERROR",
            LoggingLevel::Critical => "CRITICAL",
            LoggingLevel::Notset => "NOTSET",
        }
    }

    /// Equivalent `tracing` filter directive
    pub fn directive(&self) -> &'static str {
        match self {
            LoggingLevel::Debug => "debug",
            LoggingLevel::Info => "info",
            LoggingLevel::Warning => "warn",
            LoggingLevel::Error | LoggingLevel::Critical => "error",
            LoggingLevel::Notset => "trace",
        }
    }
}

impl fmt::Display for LoggingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Logging configuration resolved from the command line and environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub level: LoggingLevel,
    pub path: PathBuf,
}

impl LoggingConfig {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            level: matches
                .get_one::<LoggingLevel>(LOGGING_LEVEL)
                .copied()
                .unwrap_or_default(),
            path: matches
                .get_one::<PathBuf>(LOGGING_PATH)
                .cloned()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOGGING_PATH)),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LoggingLevel::default(),
            path: PathBuf::from(DEFAULT_LOGGING_PATH),
        }
    }
}

/// Build the `gel` parser with every `gel` command attached
pub fn build_cli(registry: &mut CommandRegistry) -> Result<Command> {
    let parser = Command::new(PROGRAM_NAME)
        .about("Gabriel's Everything Library")
        .subcommand_value_name(COMMAND_TITLE)
        .subcommand_help_heading(COMMAND_TITLE)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .next_help_heading("Logging")
        .arg(
            Arg::new(LOGGING_LEVEL)
                .long("logging-level")
                .value_name("LEVEL")
                .value_parser(value_parser!(LoggingLevel))
                .default_value(LoggingLevel::Info.as_str())
                .env("GEL_LOGGING_LEVEL")
                .global(true)
                .help("Minimum logging level (DEBUG < INFO < WARNING < ERROR < CRITICAL)"),
        )
        .arg(
            Arg::new(LOGGING_PATH)
                .long("logging-path")
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf))
                .default_value(DEFAULT_LOGGING_PATH)
                .env("GEL_LOGGING_PATH")
                .global(true)
                .help("Directory in which logs will be written"),
        );

    registry.register_parsers(parser, Some(GEL_NAMESPACE))
}
