//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL and weight.

// == Cache Entry ==
/// Represents a single cache entry with value and metadata.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Insertion or last overwrite timestamp (Unix milliseconds)
    pub inserted_at: u64,
    /// Successful reads plus one for the insertion
    pub access_count: u64,
    /// Contribution to the store's weight budget
    pub weight: u64,
    /// Effective TTL in seconds
    pub ttl: u64,
    /// Store-wide write sequence at insertion, breaks LRU timestamp ties
    pub(crate) write_seq: u64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new cache entry stamped at `now_ms`.
    pub fn new(value: V, weight: u64, ttl: u64, now_ms: u64, write_seq: u64) -> Self {
        Self {
            value,
            inserted_at: now_ms,
            access_count: 1,
            weight,
            ttl,
            write_seq,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired at `now_ms`.
    ///
    /// An entry is expired once its age is strictly greater than its TTL, so
    /// a read at exactly `inserted_at + ttl * 1000` still sees the value.
    pub fn is_expired(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.inserted_at) > self.ttl_ms()
    }

    /// Records a successful read.
    pub fn touch(&mut self) {
        self.access_count = self.access_count.saturating_add(1);
    }

    fn ttl_ms(&self) -> u64 {
        self.ttl.saturating_mul(1000)
    }
}
