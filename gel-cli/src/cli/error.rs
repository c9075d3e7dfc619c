//! # Error Handling
//!
//! Utilities for formatting and reporting command errors.

use colored::*;

use gel_core::RegistrationError;

/// Suggestions to print alongside an error
pub fn suggestions(error: &anyhow::Error) -> Vec<String> {
    let Some(registration) = error.downcast_ref::<RegistrationError>() else {
        return Vec::new();
    };

    match registration {
        RegistrationError::EntryNotFound { .. } => vec![
            "Run 'gel --help' to list the available commands".to_string(),
        ],
        RegistrationError::DuplicateEntry { .. } => vec![
            "Give every command a unique id".to_string(),
            "Check that no two commands share a parser name".to_string(),
        ],
        RegistrationError::ParserNotConfigured { .. } => vec![
            "Register the command with a parser configuration".to_string(),
        ],
        RegistrationError::EntryPointNotConfigured { .. } => vec![
            "Register the command with an entry point".to_string(),
        ],
        RegistrationError::RegistryNotLoaded { .. } => vec![
            "Load the registry before querying it".to_string(),
        ],
        RegistrationError::Configuration(_) => vec![
            "Every command configuration needs a parser id and help text".to_string(),
        ],
        RegistrationError::Parse(_) => Vec::new(),
    }
}

/// Format an error for display
pub fn format_error(error: &anyhow::Error) -> String {
    let mut output = format!("{} {}\n", "Error:".red().bold(), error);

    let suggestions = suggestions(error);
    if !suggestions.is_empty() {
        output.push_str(&format!("\n{}", "Suggestions:".cyan().bold()));
        for (i, suggestion) in suggestions.iter().enumerate() {
            output.push_str(&format!("\n  {}. {}", i + 1, suggestion));
        }
        output.push('\n');
    }

    let causes: Vec<String> = error.chain().skip(1).map(ToString::to_string).collect();
    if !causes.is_empty() {
        output.push_str(&format!("\n{}", "Details:".yellow()));
        for cause in causes {
            output.push_str(&format!("\n  {}", cause));
        }
        output.push('\n');
    }

    output
}

/// Print an error to stderr
pub fn print_error(error: &anyhow::Error) {
    eprintln!("{}", format_error(error));
}

/// Format a warning message
pub fn format_warning(message: &str) -> String {
    format!("{} {}", "Warning:".yellow().bold(), message)
}

/// Print a warning to stderr
pub fn print_warning(message: &str) {
    eprintln!("{}", format_warning(message));
}
