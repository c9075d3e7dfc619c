//! Data-record configuration for commands.

use clap::Command;

use super::Config;

/// Command configuration assembled from plain fields
#[derive(Debug, Clone)]
pub struct CommandConfig {
    name: String,
    help: String,
    subparser_title: Option<String>,
    subparser_help: Option<String>,
    arguments: fn(Command) -> Command,
}

impl CommandConfig {
    /// Create a configuration declaring no arguments
    pub fn new(name: impl Into<String>, help: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            help: help.into(),
            subparser_title: None,
            subparser_help: None,
            arguments: |parser| parser,
        }
    }

    /// Host a nested sub-command group
    pub fn with_subparser(mut self, title: impl Into<String>, help: Option<&str>) -> Self {
        self.subparser_title = Some(title.into());
        self.subparser_help = help.map(str::to_string);
        self
    }

    /// Set the function declaring this command's arguments
    pub fn with_arguments(mut self, arguments: fn(Command) -> Command) -> Self {
        self.arguments = arguments;
        self
    }
}

impl Config for CommandConfig {
    fn parser_id(&self) -> String {
        self.name.to_lowercase()
    }

    fn parser_help(&self) -> &str {
        &self.help
    }

    fn subparser_title(&self) -> Option<&str> {
        self.subparser_title.as_deref()
    }

    fn subparser_help(&self) -> Option<&str> {
        self.subparser_help.as_deref()
    }

    fn define_arguments(&self, parser: Command) -> Command {
        (self.arguments)(parser)
    }
}
