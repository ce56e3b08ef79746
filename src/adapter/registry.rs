//! Named adapter records behind a reader-writer lock.
//!
//! Misses are never errors: configuring or removing a name that was never added does
//! nothing, so a logging call site can't fail its caller over registry state.

use super::{Adapter, AdapterConfig};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

struct AdapterEntry {
    adapter: Arc<dyn Adapter>,
    config: Arc<AdapterConfig>,
}

/// Adapters are shared out as `Arc`s so dispatch can run them after the lock is released.
#[derive(Default)]
pub struct AdapterRegistry {
    entries: RwLock<HashMap<String, AdapterEntry>>,
}

impl AdapterRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts the adapter, replacing any existing entry of the same name.
    pub fn add(&self, name: impl Into<String>, adapter: Arc<dyn Adapter>, config: AdapterConfig) {
        let entry = AdapterEntry {
            adapter,
            config: Arc::new(config),
        };
        self.entries.write().insert(name.into(), entry);
    }

    /// Replaces the configuration wholesale. Unknown names are left alone and no entry
    /// is created; the return value only says whether anything changed.
    pub fn set_config(&self, name: &str, config: AdapterConfig) -> bool {
        self.entries.write().get_mut(name).is_some_and(|entry| {
            entry.config = Arc::new(config);
            true
        })
    }

    /// Returns whether an entry was removed.
    pub fn remove(&self, name: &str) -> bool {
        self.entries.write().remove(name).is_some()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.read().contains_key(name)
    }

    /// Copy of the adapter's current configuration.
    #[must_use]
    pub fn config(&self, name: &str) -> Option<AdapterConfig> {
        self.entries
            .read()
            .get(name)
            .map(|entry| entry.config.as_ref().clone())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Sorted, for stable diagnostics output.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.entries.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Point-in-time view used by dispatch. Adds and removes after this call don't
    /// affect the returned list, and handlers run without holding the lock.
    #[must_use]
    pub fn snapshot(&self) -> Vec<(Arc<dyn Adapter>, Arc<AdapterConfig>)> {
        self.entries
            .read()
            .values()
            .map(|entry| (Arc::clone(&entry.adapter), Arc::clone(&entry.config)))
            .collect()
    }
}
