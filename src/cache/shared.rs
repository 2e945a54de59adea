//! Shared Cache Module
//!
//! Thread-safe handle around a [`CacheStore`], plus the object-safe
//! [`ManagedCache`] view used by the maintenance task and the admin API.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::cache::{CacheConfig, CacheStats, CacheStore, Clock};

// == Shared Cache ==
/// Cloneable handle to one store behind a single exclusive lock.
///
/// Every operation, `get` included, takes the lock for its whole duration,
/// so each call is atomic with respect to every other caller. The lock is
/// never held across an `.await`.
pub struct SharedCache<V> {
    name: &'static str,
    inner: Arc<Mutex<CacheStore<V>>>,
}

impl<V> SharedCache<V> {
    /// Wraps a new store with the given name and configuration.
    pub fn new(name: &'static str, config: CacheConfig, clock: Arc<dyn Clock>) -> Self {
        Self::from_store(name, CacheStore::with_clock(config, clock))
    }

    pub fn from_store(name: &'static str, store: CacheStore<V>) -> Self {
        Self {
            name,
            inner: Arc::new(Mutex::new(store)),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn set(&self, key: impl Into<String>, value: V, weight: u64) {
        self.inner.lock().set(key, value, weight);
    }

    /// Stores an entry with a per-call TTL in seconds.
    pub fn set_with_ttl(&self, key: impl Into<String>, value: V, weight: u64, ttl: u64) {
        self.inner.lock().set_with_ttl(key, value, weight, ttl);
    }

    pub fn delete(&self, key: &str) -> bool {
        self.inner.lock().delete(key)
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    pub fn stats(&self) -> CacheStats {
        self.inner.lock().stats()
    }

    pub fn purge_expired(&self) -> usize {
        self.inner.lock().purge_expired()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn config(&self) -> CacheConfig {
        *self.inner.lock().config()
    }
}

impl<V: Clone> SharedCache<V> {
    pub fn get(&self, key: &str) -> Option<V> {
        self.inner.lock().get(key)
    }
}

impl<V> Clone for SharedCache<V> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<V> fmt::Debug for SharedCache<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedCache")
            .field("name", &self.name)
            .field("config", &self.config())
            .finish_non_exhaustive()
    }
}

// == Managed Cache ==
/// Value-type-erased operations on a named cache.
pub trait ManagedCache: Send + Sync {
    fn name(&self) -> &'static str;
    fn config(&self) -> CacheConfig;
    fn stats(&self) -> CacheStats;
    fn clear(&self);
    fn purge_expired(&self) -> usize;
}

impl<V: Send> ManagedCache for SharedCache<V> {
    fn name(&self) -> &'static str {
        SharedCache::name(self)
    }

    fn config(&self) -> CacheConfig {
        SharedCache::config(self)
    }

    fn stats(&self) -> CacheStats {
        SharedCache::stats(self)
    }

    fn clear(&self) {
        SharedCache::clear(self)
    }

    fn purge_expired(&self) -> usize {
        SharedCache::purge_expired(self)
    }
}
