//! # Registration Entry
//!
//! One registered unit: an id, taxonomy tags and an optional parser configuration.

use std::collections::BTreeSet;

use clap::Command;
use tracing::debug;

use crate::configuration::ConfigFactory;
use crate::error::{RegistrationError, Result};

/// Registration entry contract
pub trait Entry {
    /// Unique key within the owning registry
    fn id(&self) -> &str;

    /// Taxonomy tags
    fn tags(&self) -> &BTreeSet<String>;

    /// Parser configuration factory, if the entry contributes a parser
    fn config(&self) -> Option<ConfigFactory>;

    /// Check tag membership
    fn contains_tag(&self, tag: &str) -> bool {
        let found = self.tags().contains(tag);
        debug!(entry = self.id(), tag, found, "Entry tag queried");
        found
    }

    /// Check that every tag in `tags` is carried by this entry
    fn has_all_tags(&self, tags: &[&str]) -> bool {
        tags.iter().all(|tag| self.tags().contains(*tag))
    }

    /// Build this entry's parser as a new sub-command of `parent`
    ///
    /// The configuration is instantiated fresh, validated, and populated directly on the child node
    /// that `parent` will own, so every flag, default, group and nested sub-command stays intact.
    fn attach_parser(&self, parent: Command) -> Result<Command> {
        let factory = self
            .config()
            .ok_or_else(|| RegistrationError::parser_not_configured(self.id()))?;

        let config = factory();
        config.validate()?;

        let parser_id = config.parser_id();
        if parent.find_subcommand(&parser_id).is_some() {
            return Err(RegistrationError::duplicate_entry(
                parser_id,
                parent.get_name().to_string(),
            ));
        }

        debug!(
            entry = self.id(),
            parser = %parser_id,
            parent = parent.get_name(),
            "Attaching entry parser"
        );

        let child = config.populate(Command::new(parser_id));
        Ok(parent.subcommand(child))
    }
}

/// Join tags for display
pub(crate) fn display_tags(tags: &BTreeSet<String>) -> String {
    tags.iter().map(String::as_str).collect::<Vec<_>>().join(",")
}

/// Capitalize the first character of an id for display
pub(crate) fn capitalize(id: &str) -> String {
    let mut chars = id.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
