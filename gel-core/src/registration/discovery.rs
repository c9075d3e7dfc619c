//! # Module Discovery
//!
//! Explicit stand-in for walking a package namespace. A [`ModuleSource`] resolves a package name
//! (`gel.commands`) to the modules beneath it; loading a module registers its entries.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use anyhow::anyhow;

use super::entry::Entry;
use super::registry::Registry;

type LoadFn<E> = dyn Fn(&mut Registry<E>) -> anyhow::Result<()> + Send + Sync;

/// One loadable module: a dotted path and the function registering its entries
pub struct Module<E: Entry> {
    path: String,
    load: Arc<LoadFn<E>>,
}

impl<E: Entry> Module<E> {
    pub fn new<F>(path: impl Into<String>, load: F) -> Self
    where
        F: Fn(&mut Registry<E>) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        Self {
            path: path.into(),
            load: Arc::new(load),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Run the module's registrations against `registry`
    pub fn load(&self, registry: &mut Registry<E>) -> anyhow::Result<()> {
        (self.load)(registry)
    }
}

impl<E: Entry> Clone for Module<E> {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            load: Arc::clone(&self.load),
        }
    }
}

impl<E: Entry> fmt::Debug for Module<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Module").field("path", &self.path).finish()
    }
}

/// Resolves package names to their modules
pub trait ModuleSource<E: Entry> {
    /// Every module reachable under `package`, or an error if the package does not exist
    fn import_package(&self, package: &str) -> anyhow::Result<Vec<Module<E>>>;
}

/// Static module table
pub struct ModuleTable<E: Entry> {
    packages: BTreeSet<String>,
    modules: Vec<Module<E>>,
}

impl<E: Entry> ModuleTable<E> {
    pub fn new() -> Self {
        Self {
            packages: BTreeSet::new(),
            modules: Vec::new(),
        }
    }

    /// Declare an empty package
    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.packages.insert(package.into());
        self
    }

    /// Add a module; every ancestor of its dotted path becomes a package
    pub fn with_module<F>(mut self, path: impl Into<String>, load: F) -> Self
    where
        F: Fn(&mut Registry<E>) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        let module = Module::new(path, load);

        let mut segments: Vec<&str> = module.path().split('.').collect();
        segments.pop();
        for depth in 1..=segments.len() {
            self.packages.insert(segments[..depth].join("."));
        }

        self.modules.push(module);
        self
    }
}

impl<E: Entry> Default for ModuleTable<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entry> ModuleSource<E> for ModuleTable<E> {
    fn import_package(&self, package: &str) -> anyhow::Result<Vec<Module<E>>> {
        if !self.packages.contains(package) {
            return Err(anyhow!("No package named '{}'", package));
        }

        let prefix = format!("{}.", package);
        Ok(self
            .modules
            .iter()
            .filter(|module| module.path().starts_with(&prefix))
            .cloned()
            .collect())
    }
}
