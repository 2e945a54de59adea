//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check capacity, weight accounting and statistics over
//! random operation sequences.

use proptest::prelude::*;
use std::collections::HashMap;
use std::sync::Arc;

use crate::cache::{CacheConfig, CacheStore, EvictionStrategy, ManualClock};

// == Test Configuration ==
const TEST_TTL: u64 = 10;

// == Strategies ==
/// Small key space so operations collide often
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-h]{1,2}".prop_map(|s| s)
}

fn eviction_strategy() -> impl Strategy<Value = EvictionStrategy> {
    prop_oneof![
        Just(EvictionStrategy::Lru),
        Just(EvictionStrategy::Lfu),
        Just(EvictionStrategy::Fifo),
    ]
}

/// Generates a sequence of cache operations for testing
#[derive(Debug, Clone)]
enum CacheOp {
    Set { key: String, weight: u64 },
    Get { key: String },
    Delete { key: String },
    Advance { ms: u64 },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        4 => (key_strategy(), 0u64..6).prop_map(|(key, weight)| CacheOp::Set { key, weight }),
        3 => key_strategy().prop_map(|key| CacheOp::Get { key }),
        1 => key_strategy().prop_map(|key| CacheOp::Delete { key }),
        1 => (0u64..4_000).prop_map(|ms| CacheOp::Advance { ms }),
    ]
}

fn new_store(strategy: EvictionStrategy, max_weight: u64) -> (CacheStore<u64>, ManualClock) {
    let clock = ManualClock::new(0);
    let store = CacheStore::with_clock(
        CacheConfig::new(TEST_TTL, max_weight, strategy),
        Arc::new(clock.clone()),
    );
    (store, clock)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // After every set the budget holds, unless one oversized entry sits alone.
    #[test]
    fn prop_capacity_enforcement(
        strategy in eviction_strategy(),
        max_weight in 1u64..12,
        ops in prop::collection::vec(cache_op_strategy(), 1..80)
    ) {
        let (mut store, clock) = new_store(strategy, max_weight);

        for op in ops {
            match op {
                CacheOp::Set { key, weight } => {
                    store.set(key, weight, weight);
                    let stats = store.stats();
                    if weight > max_weight {
                        prop_assert_eq!(stats.count, 1, "Oversized entry must be stored alone");
                    } else {
                        prop_assert!(
                            stats.current_weight <= max_weight,
                            "Weight {} exceeds max {}",
                            stats.current_weight,
                            max_weight
                        );
                    }
                }
                CacheOp::Get { key } => {
                    store.get(&key);
                }
                CacheOp::Delete { key } => {
                    store.delete(&key);
                }
                CacheOp::Advance { ms } => clock.advance(ms),
            }
        }
    }

    // current_weight always equals the sum of what is actually stored. Values
    // carry their own weight so the resident sum can be read back through get.
    #[test]
    fn prop_weight_accounting(
        strategy in eviction_strategy(),
        ops in prop::collection::vec(cache_op_strategy(), 1..80)
    ) {
        let (mut store, clock) = new_store(strategy, 10);
        let mut keys: Vec<String> = Vec::new();

        for op in ops {
            match op {
                CacheOp::Set { key, weight } => {
                    keys.push(key.clone());
                    store.set(key, weight, weight);
                }
                CacheOp::Get { key } => {
                    store.get(&key);
                }
                CacheOp::Delete { key } => {
                    store.delete(&key);
                }
                CacheOp::Advance { ms } => clock.advance(ms),
            }

            // Purge first so every remaining entry is readable
            store.purge_expired();
            let weight_before = store.current_weight();
            keys.sort();
            keys.dedup();
            let resident: u64 = keys
                .iter()
                .filter_map(|key| store.get(key))
                .sum();
            prop_assert_eq!(weight_before, resident);
        }
    }

    // Hits and misses match what get actually returned.
    #[test]
    fn prop_statistics_accuracy(
        strategy in eviction_strategy(),
        ops in prop::collection::vec(cache_op_strategy(), 1..80)
    ) {
        let (mut store, clock) = new_store(strategy, 8);
        let mut expected_hits: u64 = 0;
        let mut expected_misses: u64 = 0;

        for op in ops {
            match op {
                CacheOp::Set { key, weight } => store.set(key, weight, weight),
                CacheOp::Get { key } => match store.get(&key) {
                    Some(_) => expected_hits += 1,
                    None => expected_misses += 1,
                },
                CacheOp::Delete { key } => {
                    store.delete(&key);
                }
                CacheOp::Advance { ms } => clock.advance(ms),
            }
        }

        let stats = store.stats();
        prop_assert_eq!(stats.hits, expected_hits, "Hits mismatch");
        prop_assert_eq!(stats.misses, expected_misses, "Misses mismatch");
        prop_assert_eq!(stats.count, store.len(), "Count mismatch");

        let total = expected_hits + expected_misses;
        let expected_rate = if total == 0 { 0.0 } else { expected_hits as f64 / total as f64 };
        prop_assert!((stats.hit_rate() - expected_rate).abs() < 1e-12);
    }

    // With unit weights, FIFO evicts keys in the order they were first inserted,
    // no matter how they were read.
    #[test]
    fn prop_fifo_eviction_order(
        capacity in 1u64..6,
        reads in prop::collection::vec(0usize..12, 0..30),
        total in 2usize..12
    ) {
        let (mut store, _) = new_store(EvictionStrategy::Fifo, capacity);
        let keys: Vec<String> = (0..total).map(|i| format!("k{}", i)).collect();

        for (i, key) in keys.iter().enumerate() {
            for &r in &reads {
                if r < i {
                    store.get(&keys[r]);
                }
            }
            store.set(key.clone(), 1, 1);
        }

        let survivors: HashMap<&str, bool> = keys
            .iter()
            .map(|k| (k.as_str(), store.get(k).is_some()))
            .collect();
        let kept = (capacity as usize).min(total);
        for (i, key) in keys.iter().enumerate() {
            prop_assert_eq!(survivors[key.as_str()], i >= total - kept, "Key {}", key);
        }
    }
}
