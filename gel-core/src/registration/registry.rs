//! # Registry
//!
//! Keyed, lazily populated collection of entries.
//!
//! Discovery runs at most once per registry: the first access that needs entries imports every
//! module under the `gel.<registry id>` package. A module that fails to load is reported and
//! skipped; a missing package leaves the registry empty but loaded.

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use clap::Command;
use tracing::{debug, warn};

use super::discovery::ModuleSource;
use super::entry::{capitalize, Entry};
use crate::error::{RegistrationError, Result};

/// Root namespace: registry packages live under it and top-level `gel` commands belong to it
pub const GEL_NAMESPACE: &str = "gel";

/// Generic entry registry
pub struct Registry<E: Entry> {
    id: String,
    entries: Vec<E>,
    index: HashMap<String, usize>,
    loaded: bool,
    auto_load: bool,
    imported: BTreeSet<String>,
    source: Box<dyn ModuleSource<E>>,
}

impl<E: Entry> Registry<E> {
    /// Create an empty registry discovering its modules through `source`
    pub fn new(id: impl Into<String>, source: impl ModuleSource<E> + 'static) -> Self {
        Self {
            id: id.into(),
            entries: Vec::new(),
            index: HashMap::new(),
            loaded: false,
            auto_load: true,
            imported: BTreeSet::new(),
            source: Box::new(source),
        }
    }

    /// Choose whether accessors trigger discovery or fail until [`Registry::load_all`] is called
    pub fn with_auto_load(mut self, auto_load: bool) -> Self {
        self.auto_load = auto_load;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Package scanned during discovery
    pub fn package(&self) -> String {
        format!("{}.{}", GEL_NAMESPACE, self.id)
    }

    /// Number of registered entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check registration without triggering discovery
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Registered entries in registration order, without triggering discovery
    pub fn entries(&self) -> impl Iterator<Item = &E> {
        self.entries.iter()
    }

    /// Register an entry
    ///
    /// Ids are never overwritten: a second registration under the same id fails.
    pub fn register(&mut self, entry: E) -> Result<()> {
        if self.index.contains_key(entry.id()) {
            return Err(RegistrationError::duplicate_entry(entry.id(), &self.id));
        }

        debug!(registry = %self.id, entry = entry.id(), "Registering entry");

        self.index.insert(entry.id().to_string(), self.entries.len());
        self.entries.push(entry);
        Ok(())
    }

    /// Look up an entry, discovering modules first if needed
    pub fn get_entry(&mut self, id: &str) -> Result<&E> {
        self.ensure_loaded()?;

        let position = *self
            .index
            .get(id)
            .ok_or_else(|| RegistrationError::entry_not_found(id, &self.id))?;

        debug!(registry = %self.id, entry = id, "Entry queried");
        Ok(&self.entries[position])
    }

    /// List entry ids in registration order
    ///
    /// With a non-empty `filter_by`, only entries carrying every listed tag are returned.
    pub fn list(&mut self, filter_by: &[&str]) -> Result<Vec<String>> {
        self.ensure_loaded()?;

        debug!(registry = %self.id, filter = ?filter_by, "Listing entries");

        Ok(self
            .entries
            .iter()
            .filter(|entry| entry.has_all_tags(filter_by))
            .map(|entry| entry.id().to_string())
            .collect())
    }

    /// Discover and load every module under this registry's package
    ///
    /// No-op once loaded.
    pub fn load_all(&mut self) -> Result<()> {
        if self.loaded {
            return Ok(());
        }

        self.import_all_modules()?;

        debug!(registry = %self.id, entries = self.entries.len(), "Registry has been loaded");
        self.loaded = true;
        Ok(())
    }

    /// Attach the parser of every configured entry under `parent`
    pub fn register_parsers(&mut self, parent: Command) -> Result<Command> {
        self.attach_parsers(parent, |_| true)
    }

    /// Attach the parser of every configured entry accepted by `filter`
    pub(crate) fn attach_parsers<F>(&mut self, parent: Command, filter: F) -> Result<Command>
    where
        F: Fn(&E) -> bool,
    {
        self.ensure_loaded()?;

        let mut parent = parent;
        for entry in self.entries.iter().filter(|&entry| filter(entry)) {
            if entry.config().is_none() {
                continue;
            }
            debug!(registry = %self.id, entry = entry.id(), "Registering arguments");
            parent = entry.attach_parser(parent)?;
        }
        Ok(parent)
    }

    pub(crate) fn ensure_loaded(&mut self) -> Result<()> {
        if self.loaded {
            return Ok(());
        }
        if !self.auto_load {
            return Err(RegistrationError::registry_not_loaded(&self.id));
        }
        self.load_all()
    }

    fn import_all_modules(&mut self) -> Result<()> {
        let package = self.package();

        let mut modules = match self.source.import_package(&package) {
            Ok(modules) => modules,
            Err(e) => {
                warn!(registry = %self.id, package = %package, "Could not import package: {}", e);
                return Ok(());
            }
        };

        debug!(registry = %self.id, package = %package, modules = modules.len(), "Walking package");

        modules.sort_by(|a, b| a.path().cmp(b.path()));

        for module in modules {
            if self.imported.contains(module.path()) {
                continue;
            }

            match module.load(self) {
                Ok(()) => {
                    debug!(registry = %self.id, module = module.path(), "Walk of module complete");
                }
                // Registration errors are never swallowed; the module stays pending
                Err(e) => match e.downcast::<RegistrationError>() {
                    Ok(registration) => return Err(registration),
                    Err(e) => {
                        warn!(
                            registry = %self.id,
                            module = module.path(),
                            "Error importing module: {:#}",
                            e
                        );
                    }
                },
            }

            self.imported.insert(module.path().to_string());
        }

        Ok(())
    }
}

impl<E: Entry> fmt::Display for Registry<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<{}Registry({} entries)>",
            capitalize(&self.id),
            self.entries.len()
        )
    }
}

impl<E: Entry> fmt::Debug for Registry<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("id", &self.id)
            .field("entries", &self.entries.iter().map(Entry::id).collect::<Vec<_>>())
            .field("loaded", &self.loaded)
            .field("imported", &self.imported)
            .finish()
    }
}
