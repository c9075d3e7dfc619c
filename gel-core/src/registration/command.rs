//! # Command Registration
//!
//! Command entries, the command registry and the registration helper command modules call.

use std::collections::BTreeSet;
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use clap::Command;
use tracing::debug;

use super::discovery::ModuleSource;
use super::entry::{capitalize, display_tags, Entry};
use super::registry::{Registry, GEL_NAMESPACE};
use crate::arguments::Arguments;
use crate::configuration::ConfigFactory;
use crate::error::{RegistrationError, Result};
use crate::output::CommandOutput;

/// Id of the command registry; discovery scans `gel.commands`
pub const COMMAND_REGISTRY_ID: &str = "commands";

/// Command main process
pub type EntryPoint = Arc<dyn Fn(&Arguments) -> anyhow::Result<CommandOutput> + Send + Sync>;

/// Command registration entry
#[derive(Clone)]
pub struct CommandEntry {
    id: String,
    tags: BTreeSet<String>,
    config: Option<ConfigFactory>,
    entry_point: Option<EntryPoint>,
    namespace: String,
}

impl CommandEntry {
    /// Create an entry with no configuration, entry point or tags
    pub fn new(id: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            tags: BTreeSet::new(),
            config: None,
            entry_point: None,
            namespace: namespace.into(),
        }
    }

    pub fn with_config(mut self, config: ConfigFactory) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_entry_point<F>(mut self, entry_point: F) -> Self
    where
        F: Fn(&Arguments) -> anyhow::Result<CommandOutput> + Send + Sync + 'static,
    {
        self.entry_point = Some(Arc::new(entry_point));
        self
    }

    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Command's main process, if configured
    pub fn entry_point(&self) -> Option<&EntryPoint> {
        self.entry_point.as_ref()
    }

    /// Application the command belongs to
    pub fn namespace(&self) -> &str {
        &self.namespace
    }
}

impl Entry for CommandEntry {
    fn id(&self) -> &str {
        &self.id
    }

    fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    fn config(&self) -> Option<ConfigFactory> {
        self.config
    }
}

impl fmt::Display for CommandEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<{}Entry(tags = {})>",
            capitalize(&self.id),
            display_tags(&self.tags)
        )
    }
}

impl fmt::Debug for CommandEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandEntry")
            .field("id", &self.id)
            .field("tags", &self.tags)
            .field("namespace", &self.namespace)
            .field("config", &self.config.is_some())
            .field("entry_point", &self.entry_point.is_some())
            .finish()
    }
}

/// Command registry
///
/// Dereferences to the underlying [`Registry`] for lookup, listing and registration.
#[derive(Debug)]
pub struct CommandRegistry {
    inner: Registry<CommandEntry>,
}

impl CommandRegistry {
    /// Create the command registry, discovering command modules through `source`
    pub fn new(source: impl ModuleSource<CommandEntry> + 'static) -> Self {
        Self {
            inner: Registry::new(COMMAND_REGISTRY_ID, source),
        }
    }

    /// Wrap an existing registry of command entries
    pub fn from_registry(inner: Registry<CommandEntry>) -> Self {
        Self { inner }
    }

    /// Look up `command_id` and invoke its entry point with `arguments`
    ///
    /// Errors raised by the entry point itself are returned unchanged.
    pub fn dispatch(
        &mut self,
        command_id: &str,
        arguments: &Arguments,
    ) -> anyhow::Result<CommandOutput> {
        let entry = self.inner.get_entry(command_id)?;
        let entry_point = entry
            .entry_point()
            .cloned()
            .ok_or_else(|| RegistrationError::entry_point_not_configured(entry.id()))?;

        debug!(
            registry = self.inner.id(),
            command = command_id,
            arguments = %arguments,
            "Dispatching to command"
        );

        entry_point(arguments)
    }

    /// Attach command parsers under `parent`
    ///
    /// With a `namespace`, only commands attributed to it are attached.
    pub fn register_parsers(
        &mut self,
        parent: Command,
        namespace: Option<&str>,
    ) -> Result<Command> {
        self.inner.attach_parsers(parent, |entry| {
            namespace.map_or(true, |namespace| entry.namespace() == namespace)
        })
    }
}

impl Deref for CommandRegistry {
    type Target = Registry<CommandEntry>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for CommandRegistry {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

impl fmt::Display for CommandRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

/// Register a `gel` command and hand its entry point back unchanged
///
/// Command modules call this from their load function.
pub fn register_command<F>(
    registry: &mut Registry<CommandEntry>,
    id: &str,
    config: ConfigFactory,
    entry_point: F,
) -> Result<F>
where
    F: Fn(&Arguments) -> anyhow::Result<CommandOutput> + Clone + Send + Sync + 'static,
{
    registry.register(
        CommandEntry::new(id, GEL_NAMESPACE)
            .with_config(config)
            .with_entry_point(entry_point.clone()),
    )?;
    Ok(entry_point)
}
