//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with weighted eviction and TTL
//! expiration.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::cache::clock::system_clock;
use crate::cache::eviction::select_victim;
use crate::cache::{CacheConfig, CacheEntry, CacheStats, Clock, InsertionOrder};

// == Cache Store ==
/// Weight-bounded cache storage with pluggable eviction and TTL support.
///
/// Not synchronized; wrap it in [`SharedCache`](crate::cache::SharedCache)
/// for concurrent use.
#[derive(Debug)]
pub struct CacheStore<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Key insertion order
    order: InsertionOrder,
    /// Performance counters
    stats: CacheStats,
    config: CacheConfig,
    /// Sum of resident entry weights
    current_weight: u64,
    /// Incremented on every insertion or overwrite
    write_seq: u64,
    clock: Arc<dyn Clock>,
}

impl<V> CacheStore<V> {
    // == Constructor ==
    /// Creates a new CacheStore using the system clock.
    pub fn new(config: CacheConfig) -> Self {
        Self::with_clock(config, system_clock())
    }

    /// Creates a new CacheStore reading time from `clock`.
    pub fn with_clock(config: CacheConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: HashMap::new(),
            order: InsertionOrder::new(),
            stats: CacheStats::new(),
            config,
            current_weight: 0,
            write_seq: 0,
            clock,
        }
    }

    // == Set ==
    /// Stores a value under the configured TTL.
    ///
    /// See [`set_with_ttl`](Self::set_with_ttl).
    pub fn set(&mut self, key: impl Into<String>, value: V, weight: u64) {
        let ttl = self.config.ttl;
        self.set_with_ttl(key, value, weight, ttl);
    }

    /// Stores a value with a TTL (seconds) that applies to this entry only.
    ///
    /// While `current_weight + weight` exceeds `max_weight`, evicts one entry
    /// per the configured strategy. The key being written is an eligible
    /// victim like any other. Afterwards an entry still resident under `key`
    /// is replaced: its weight is released, its timestamp and access count
    /// are reset, and it keeps its FIFO position. A key evicted above is
    /// re-inserted at the back of the FIFO order.
    ///
    /// If `weight` alone exceeds `max_weight`, every entry is evicted and the
    /// store holds just this one entry, over budget.
    pub fn set_with_ttl(&mut self, key: impl Into<String>, value: V, weight: u64, ttl: u64) {
        let key = key.into();

        while self.current_weight.saturating_add(weight) > self.config.max_weight {
            let victim = select_victim(self.config.strategy, &self.order, &self.entries).cloned();

            let Some(victim) = victim else {
                warn!(
                    key = %key,
                    weight,
                    max_weight = self.config.max_weight,
                    "Entry heavier than cache budget, storing it alone"
                );
                break;
            };

            if let Some(evicted) = self.remove_entry(&victim) {
                self.stats.record_eviction();
                debug!(
                    key = %victim,
                    weight = evicted.weight,
                    strategy = %self.config.strategy,
                    "Evicted cache entry"
                );
            }
        }

        self.write_seq += 1;
        let entry = CacheEntry::new(value, weight, ttl, self.clock.now_ms(), self.write_seq);

        match self.entries.insert(key.clone(), entry) {
            Some(old) => self.current_weight -= old.weight,
            None => self.order.push(key),
        }
        self.current_weight += weight;
    }

    // == Delete ==
    /// Removes an entry by key, returning whether it existed.
    pub fn delete(&mut self, key: &str) -> bool {
        self.remove_entry(key).is_some()
    }

    // == Clear ==
    /// Removes every entry and resets all counters.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
        self.current_weight = 0;
        self.stats.reset();
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.count = self.entries.len();
        stats.current_weight = self.current_weight;
        stats.max_weight = self.config.max_weight;
        stats
    }

    // == Purge Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed. Hit and miss counters are left
    /// untouched.
    pub fn purge_expired(&mut self) -> usize {
        let now = self.clock.now_ms();
        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired(now))
            .map(|(key, _)| key.clone())
            .collect();

        for key in &expired_keys {
            self.remove_entry(key);
        }

        self.stats.record_expirations(expired_keys.len());
        expired_keys.len()
    }

    // == Accessors ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn current_weight(&self) -> u64 {
        self.current_weight
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Removes an entry from every index and releases its weight.
    fn remove_entry(&mut self, key: &str) -> Option<CacheEntry<V>> {
        let entry = self.entries.remove(key)?;
        self.order.remove(key);
        self.current_weight -= entry.weight;
        Some(entry)
    }
}

impl<V: Clone> CacheStore<V> {
    // == Get ==
    /// Retrieves a value by key.
    ///
    /// A hit bumps the entry's access count. Expired entries are removed and
    /// counted as misses.
    pub fn get(&mut self, key: &str) -> Option<V> {
        let now = self.clock.now_ms();

        match self.entries.get_mut(key) {
            None => {
                self.stats.record_miss();
                return None;
            }
            Some(entry) if !entry.is_expired(now) => {
                entry.touch();
                self.stats.record_hit();
                return Some(entry.value.clone());
            }
            Some(_) => {}
        }

        // Expired: drop it and report a miss
        self.remove_entry(key);
        self.stats.record_expirations(1);
        self.stats.record_miss();
        debug!(key, "Expired cache entry removed on read");
        None
    }
}
