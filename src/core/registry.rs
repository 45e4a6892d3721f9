//! The logging-system registry
//!
//! A `Registry` owns every logging system in a process: it is the
//! process-lifetime context that maps system names to their state cells.
//! `define` creates a system exactly once; `declare` hands out further
//! handles to it from anywhere else in the program. Both return shared
//! handles, so a level change through one handle is visible through all of
//! them.
//!
//! The registry lock is only touched by definition and lookup. Call sites
//! hold a handle and never contend on it.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use super::action::Action;
use super::error::{RegistryError, Result};
use super::level::LevelFilter;
use super::system::LogSystem;
use crate::actions::ConsoleAction;

pub struct Registry {
    systems: RwLock<HashMap<String, Arc<LogSystem>>>,
    default_action: Arc<dyn Action>,
}

impl Registry {
    /// Create a registry whose systems write through the default console
    /// action unless defined with an explicit one.
    pub fn new() -> Self {
        Self::with_action(Arc::new(ConsoleAction::new()))
    }

    /// Create a registry with a different default output action.
    pub fn with_action(default_action: Arc<dyn Action>) -> Self {
        Self {
            systems: RwLock::new(HashMap::new()),
            default_action,
        }
    }

    /// Define a logging system, creating its state cell with
    /// `clamped(initial)` as the threshold.
    ///
    /// Each name may be defined exactly once per registry; a second define
    /// fails with [`RegistryError::AlreadyDefined`].
    pub fn define(
        &self,
        name: &str,
        initial: impl Into<LevelFilter>,
    ) -> Result<Arc<LogSystem>> {
        self.define_with_action(name, initial, Arc::clone(&self.default_action))
    }

    /// Define a logging system that writes through its own output action.
    pub fn define_with_action(
        &self,
        name: &str,
        initial: impl Into<LevelFilter>,
        action: Arc<dyn Action>,
    ) -> Result<Arc<LogSystem>> {
        let mut systems = self.systems.write();
        if systems.contains_key(name) {
            return Err(RegistryError::already_defined(name));
        }
        let system = Arc::new(LogSystem::with_action(name, initial, action));
        systems.insert(name.to_string(), Arc::clone(&system));
        Ok(system)
    }

    /// Obtain a handle to an already-defined logging system.
    ///
    /// Fails with [`RegistryError::NotDefined`] when no matching `define`
    /// has happened on this registry.
    pub fn declare(&self, name: &str) -> Result<Arc<LogSystem>> {
        self.systems
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| RegistryError::not_defined(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.systems.read().contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.systems.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.systems.read().is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
