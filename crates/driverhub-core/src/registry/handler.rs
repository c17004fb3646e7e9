//! Handler registry.
//!
//! Binds protocol command names to handler factories. The registry is built
//! once at startup, shared by every dispatch, and may be extended at runtime
//! by administrative commands.

use dashmap::DashMap;
use std::sync::Arc;
use tracing::debug;

use driverhub_protocols::{HandlerFactory, SessionStore};

/// Registry for command handlers.
///
/// Each binding is a single map entry, so a concurrent reader sees either the
/// previous factory or the new one, never a partial update. Lookups clone the
/// factory out of the map; no lock is held while a handler runs.
pub struct HandlerRegistry {
    handlers: DashMap<String, Arc<dyn HandlerFactory>>,
    sessions: Arc<dyn SessionStore>,
}

impl HandlerRegistry {
    /// Create an empty registry bound to a session store.
    pub fn new(sessions: Arc<dyn SessionStore>) -> Self {
        Self {
            handlers: DashMap::new(),
            sessions,
        }
    }

    /// Bind `name` to `factory`, replacing any earlier binding.
    pub fn register<F>(&self, name: impl Into<String>, factory: F)
    where
        F: HandlerFactory + 'static,
    {
        self.register_arc(name, Arc::new(factory));
    }

    /// Bind `name` to a shared factory, replacing any earlier binding.
    pub fn register_arc(&self, name: impl Into<String>, factory: Arc<dyn HandlerFactory>) {
        let name = name.into();
        let replaced = self.handlers.insert(name.clone(), factory).is_some();
        debug!(command = %name, replaced, "Registered handler");
    }

    /// Get the factory bound to `name`.
    pub fn lookup(&self, name: &str) -> Option<Arc<dyn HandlerFactory>> {
        self.handlers.get(name).map(|entry| entry.value().clone())
    }

    /// The session store handed to factories.
    pub fn sessions(&self) -> Arc<dyn SessionStore> {
        self.sessions.clone()
    }

    /// Check if a handler is bound to `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// List all bound command names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .handlers
            .iter()
            .map(|entry| entry.key().clone())
            .collect();
        names.sort();
        names
    }

    /// Get the number of bindings.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

#[cfg(test)]
#[path = "handler_tests.rs"]
mod tests;
