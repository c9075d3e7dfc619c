//! # GEL Error Types
//!
//! Centralized error handling for the registration core.

use thiserror::Error;

/// Result type alias for registration operations
pub type Result<T> = std::result::Result<T, RegistrationError>;

/// Errors raised by configurations, entries and registries
#[derive(Error, Debug)]
pub enum RegistrationError {
    /// An entry with the same id is already registered
    #[error("Entry '{entry_id}' is already registered in the {registry_id} registry")]
    DuplicateEntry {
        entry_id: String,
        registry_id: String,
    },

    /// No entry with this id exists after discovery
    #[error("Entry '{entry_id}' is not registered in the {registry_id} registry")]
    EntryNotFound {
        entry_id: String,
        registry_id: String,
    },

    /// Parser attachment requested for an entry without a configuration
    #[error("Entry '{entry_id}' was not registered with a parser configuration")]
    ParserNotConfigured { entry_id: String },

    /// Dispatch requested for an entry without an entry point
    #[error("Entry '{entry_id}' was not registered with an entry point")]
    EntryPointNotConfigured { entry_id: String },

    /// Access before `load_all` on a registry that does not load on demand
    #[error("The {registry_id} registry has not been loaded")]
    RegistryNotLoaded { registry_id: String },

    /// Configuration is missing a required descriptive field
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Standalone argument parsing failed
    #[error("Argument error: {0}")]
    Parse(#[from] clap::Error),
}

impl RegistrationError {
    /// Create a new duplicate entry error
    pub fn duplicate_entry(entry_id: impl Into<String>, registry_id: impl Into<String>) -> Self {
        Self::DuplicateEntry {
            entry_id: entry_id.into(),
            registry_id: registry_id.into(),
        }
    }

    /// Create a new entry not found error
    pub fn entry_not_found(entry_id: impl Into<String>, registry_id: impl Into<String>) -> Self {
        Self::EntryNotFound {
            entry_id: entry_id.into(),
            registry_id: registry_id.into(),
        }
    }

    /// Create a new parser not configured error
    pub fn parser_not_configured(entry_id: impl Into<String>) -> Self {
        Self::ParserNotConfigured {
            entry_id: entry_id.into(),
        }
    }

    /// Create a new entry point not configured error
    pub fn entry_point_not_configured(entry_id: impl Into<String>) -> Self {
        Self::EntryPointNotConfigured {
            entry_id: entry_id.into(),
        }
    }

    /// Create a new registry not loaded error
    pub fn registry_not_loaded(registry_id: impl Into<String>) -> Self {
        Self::RegistryNotLoaded {
            registry_id: registry_id.into(),
        }
    }

    /// Create a new configuration error
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }
}
