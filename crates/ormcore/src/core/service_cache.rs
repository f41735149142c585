//! Per-configuration singleton store for pluggable services.
//!
//! Entries are keyed by a stable string (e.g. `naming_strategy:underscore`)
//! and hold one instance each. There is no eviction and no expiry; the whole
//! store can be cleared with [`ServiceCache::clear`].
//!
//! Construction happens outside the lock. Two callers racing on the same
//! uncached key may both construct an instance; the first one stored wins and
//! both callers receive it.

use std::any::Any;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::error::{OrmError, Result};

type Entry = Box<dyn Any + Send + Sync>;

#[derive(Default)]
pub struct ServiceCache {
    entries: Mutex<HashMap<String, Entry>>,
}

impl ServiceCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached instance for `key`, constructing it with `build`
    /// on first request.
    ///
    /// `T` is usually an `Arc<dyn Trait>`, so the returned clone shares the
    /// cached instance.
    pub fn get_or_try_insert<T, F>(&self, key: &str, build: F) -> Result<T>
    where
        T: Clone + Send + Sync + 'static,
        F: FnOnce() -> Result<T>,
    {
        if let Some(entry) = self.lock().get(key) {
            return downcast::<T>(key, entry);
        }

        let service = build()?;
        debug!("Constructed service '{}'", key);

        let mut entries = self.lock();
        let entry = entries
            .entry(key.to_string())
            .or_insert_with(|| Box::new(service));
        downcast::<T>(key, entry)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.lock().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Drop every cached instance.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Entry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn downcast<T: Clone + 'static>(key: &str, entry: &Entry) -> Result<T> {
    entry
        .downcast_ref::<T>()
        .cloned()
        .ok_or_else(|| OrmError::ServiceType {
            key: key.to_string(),
        })
}

impl std::fmt::Debug for ServiceCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut keys: Vec<String> = self.lock().keys().cloned().collect();
        keys.sort();
        f.debug_struct("ServiceCache").field("keys", &keys).finish()
    }
}
