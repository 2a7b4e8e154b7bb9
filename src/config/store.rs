//! Shared configuration snapshot.
//!
//! Readers take a cheap `Arc` to the snapshot in effect; a reload swaps in a
//! new snapshot without touching the old one.

use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::config::schema::Configuration;

/// Atomically swappable handle to the active configuration.
#[derive(Clone)]
pub struct SharedConfig {
    inner: Arc<ArcSwap<Configuration>>,
}

impl SharedConfig {
    pub fn new(config: Configuration) -> Self {
        Self {
            inner: Arc::new(ArcSwap::from_pointee(config)),
        }
    }

    /// The snapshot in effect right now.
    pub fn snapshot(&self) -> Arc<Configuration> {
        self.inner.load_full()
    }

    /// Replace the active snapshot.
    pub fn replace(&self, config: Configuration) {
        self.inner.store(Arc::new(config));
    }
}

impl Default for SharedConfig {
    fn default() -> Self {
        Self::new(Configuration::default())
    }
}
