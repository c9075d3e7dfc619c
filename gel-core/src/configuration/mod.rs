//! # Configuration
//!
//! Parser-building contract every registrable command supplies.
//!
//! A configuration describes one parser node: its id (the sub-command name), its help text, an
//! optional nested sub-command group, and the arguments it declares. Configurations are built
//! directly against their destination [`clap::Command`], so a command's flags land on the node that
//! parses them.

mod command;

pub use command::CommandConfig;

use clap::Command;

use crate::arguments::Arguments;
use crate::error::{RegistrationError, Result};

/// Factory materializing a configuration on demand
pub type ConfigFactory = fn() -> Box<dyn Config>;

/// Parser configuration contract
pub trait Config {
    /// Sub-command name, lowercase
    fn parser_id(&self) -> String;

    /// Description of the parser's purpose
    fn parser_help(&self) -> &str;

    /// Title of the nested sub-command group, if this parser hosts one
    fn subparser_title(&self) -> Option<&str> {
        None
    }

    /// Description of the nested sub-command group
    fn subparser_help(&self) -> Option<&str> {
        None
    }

    /// Key under which the chosen nested sub-command is stored
    fn subparser_dest(&self) -> Option<String> {
        self.subparser_title().map(|title| title.replace('-', "_"))
    }

    /// Declare this parser's arguments and nested sub-commands
    fn define_arguments(&self, parser: Command) -> Command;

    /// Fail fast on missing descriptive fields
    fn validate(&self) -> Result<()> {
        let id = self.parser_id();
        if id.trim().is_empty() {
            return Err(RegistrationError::configuration(
                "parser id must be a non-empty string",
            ));
        }
        if self.parser_help().trim().is_empty() {
            return Err(RegistrationError::configuration(format!(
                "parser '{}' is missing its help text",
                id
            )));
        }
        Ok(())
    }

    /// Describe and populate `parser` in place
    fn populate(&self, parser: Command) -> Command {
        let mut parser = parser.about(self.parser_help().to_string());

        if let Some(title) = self.subparser_title() {
            let heading = match self.subparser_help() {
                Some(help) => format!("{} ({})", title, help),
                None => title.to_string(),
            };
            parser = parser
                .subcommand_value_name(title.to_string())
                .subcommand_help_heading(heading);
        }

        self.define_arguments(parser)
    }

    /// Standalone parser, named after the parser id
    fn parser(&self) -> Result<Command> {
        self.validate()?;
        Ok(self.populate(Command::new(self.parser_id())))
    }

    /// Parse `args` (without the program name) against the standalone parser
    fn parse_arguments(&self, args: &[&str]) -> Result<Arguments> {
        let parser = self.parser()?;
        let argv =
            std::iter::once(self.parser_id()).chain(args.iter().map(|arg| arg.to_string()));
        let matches = parser.clone().try_get_matches_from(argv)?;
        Ok(Arguments::from_matches(&parser, &matches))
    }
}
