//! Cache Module
//!
//! Provides in-memory caching with TTL expiration and weight-bounded
//! LRU, LFU or FIFO eviction.

mod clock;
mod config;
mod entry;
mod eviction;
mod order;
mod shared;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use clock::{system_clock, Clock, ManualClock, SystemClock};
pub use config::{CacheConfig, EvictionStrategy, DEFAULT_MAX_WEIGHT, DEFAULT_TTL_SECS};
pub use entry::CacheEntry;
pub use order::InsertionOrder;
pub use shared::{ManagedCache, SharedCache};
pub use stats::CacheStats;
pub use store::CacheStore;
