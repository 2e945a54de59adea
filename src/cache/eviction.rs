//! Eviction Module
//!
//! Chooses which entry to evict for each strategy.

use std::collections::HashMap;

use crate::cache::{CacheEntry, EvictionStrategy, InsertionOrder};

// == Select Victim ==
/// Picks the next key to evict, scanning keys in insertion order.
///
/// Returns `None` when the store is empty.
///
/// - LRU: smallest `(inserted_at, write_seq)`
/// - LFU: smallest `access_count`, earliest inserted on ties
/// - FIFO: earliest inserted
pub fn select_victim<'a, V>(
    strategy: EvictionStrategy,
    order: &'a InsertionOrder,
    entries: &HashMap<String, CacheEntry<V>>,
) -> Option<&'a String> {
    let mut candidates = order
        .iter()
        .filter_map(|key| entries.get(key).map(|entry| (key, entry)));

    // min_by_key keeps the first of equal minima
    let victim = match strategy {
        EvictionStrategy::Fifo => candidates.next(),
        EvictionStrategy::Lru => {
            candidates.min_by_key(|(_, entry)| (entry.inserted_at, entry.write_seq))
        }
        EvictionStrategy::Lfu => candidates.min_by_key(|(_, entry)| entry.access_count),
    };

    victim.map(|(key, _)| key)
}
