//! Scheme Cache
//!
//! Caches scheme records and per-user eligibility results in one store.

use std::sync::Arc;

use serde_json::Value;

use crate::cache::{system_clock, CacheConfig, Clock, EvictionStrategy, SharedCache};

/// Scheme records live for 24 hours.
pub const SCHEME_TTL_SECS: u64 = 24 * 60 * 60;

/// Eligibility results live for 1 hour.
pub const ELIGIBILITY_TTL_SECS: u64 = 60 * 60;

pub const SCHEME_MAX_WEIGHT: u64 = 5000;

/// Name reported in stats and used by the admin API.
pub const SCHEME_CACHE_NAME: &str = "schemes";

// == Keys ==
pub fn scheme_key(id: &str) -> String {
    format!("scheme:{}", id)
}

pub fn eligibility_key(user_id: &str, scheme_id: &str) -> String {
    format!("eligibility:{}:{}", user_id, scheme_id)
}

/// Payload stored in the underlying cache. The key prefix decides which
/// variant a key holds.
#[derive(Debug, Clone)]
pub enum SchemeRecord<S, E> {
    Scheme(S),
    Eligibility(E),
}

// == Scheme Cache ==
/// Scheme and eligibility cache: 24h TTL, weight 5000, LRU.
#[derive(Debug)]
pub struct SchemeCache<S = Value, E = Value> {
    cache: SharedCache<SchemeRecord<S, E>>,
}

impl<S, E> SchemeCache<S, E> {
    pub fn new() -> Self {
        Self::with_clock(system_clock())
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            cache: SharedCache::new(SCHEME_CACHE_NAME, Self::config(), clock),
        }
    }

    /// Default configuration for this cache.
    pub fn config() -> CacheConfig {
        CacheConfig::new(SCHEME_TTL_SECS, SCHEME_MAX_WEIGHT, EvictionStrategy::Lru)
    }

    pub fn set_scheme(&self, id: &str, scheme: S) {
        self.cache.set(scheme_key(id), SchemeRecord::Scheme(scheme), 1);
    }

    /// Stores an eligibility result with the shorter eligibility TTL.
    pub fn set_eligibility_result(&self, user_id: &str, scheme_id: &str, result: E) {
        self.cache.set_with_ttl(
            eligibility_key(user_id, scheme_id),
            SchemeRecord::Eligibility(result),
            1,
            ELIGIBILITY_TTL_SECS,
        );
    }

    /// Underlying store, for stats and maintenance.
    pub fn cache(&self) -> &SharedCache<SchemeRecord<S, E>> {
        &self.cache
    }
}

impl<S: Clone, E: Clone> SchemeCache<S, E> {
    pub fn get_scheme(&self, id: &str) -> Option<S> {
        match self.cache.get(&scheme_key(id))? {
            SchemeRecord::Scheme(scheme) => Some(scheme),
            SchemeRecord::Eligibility(_) => None,
        }
    }

    pub fn get_eligibility_result(&self, user_id: &str, scheme_id: &str) -> Option<E> {
        match self.cache.get(&eligibility_key(user_id, scheme_id))? {
            SchemeRecord::Eligibility(result) => Some(result),
            SchemeRecord::Scheme(_) => None,
        }
    }
}

impl<S, E> Clone for SchemeCache<S, E> {
    fn clone(&self) -> Self {
        Self {
            cache: self.cache.clone(),
        }
    }
}

impl<S, E> Default for SchemeCache<S, E> {
    fn default() -> Self {
        Self::new()
    }
}
