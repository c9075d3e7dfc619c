//! # GEL CLI
//!
//! Command-line interface for GEL (Gabriel's Everything Library).

use std::process::ExitCode;

use tracing::{debug, error};

use gel_cli::cli::{self, error::print_warning, LoggingConfig};
use gel_cli::commands;
use gel_core::Arguments;

fn main() -> ExitCode {
    let mut registry = commands::registry();

    let parser = match cli::build_cli(&mut registry) {
        Ok(parser) => parser,
        Err(e) => {
            cli::print_error(&anyhow::Error::from(e));
            return ExitCode::FAILURE;
        }
    };

    let matches = parser.clone().get_matches();

    if let Err(e) = cli::configure_logger(&LoggingConfig::from_matches(&matches)) {
        print_warning(&format!("{:#}", e));
    }

    let arguments = Arguments::from_matches(&parser, &matches);
    debug!(arguments = %arguments, "GEL arguments");

    let code = match gel_cli::run(&mut registry, &arguments) {
        Ok(output) => match cli::print_output(&output) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                error!("Failed to write output: {}", e);
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            error!(severity = "CRITICAL", "Unexpected error: {:?}", e);
            cli::print_error(&e);
            ExitCode::FAILURE
        }
    };

    debug!("Exiting...");
    code
}
