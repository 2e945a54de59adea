//! User Profile Cache

use std::sync::Arc;

use serde_json::Value;

use crate::cache::{system_clock, CacheConfig, Clock, EvictionStrategy, SharedCache};

/// Profiles live for 30 minutes.
pub const PROFILE_TTL_SECS: u64 = 30 * 60;

pub const PROFILE_MAX_WEIGHT: u64 = 10_000;

pub const PROFILE_CACHE_NAME: &str = "profiles";

pub fn profile_key(user_id: &str) -> String {
    format!("profile:{}", user_id)
}

// == Profile Cache ==
/// User-profile cache: 30 min TTL, weight 10000, LRU.
#[derive(Debug)]
pub struct ProfileCache<P = Value> {
    cache: SharedCache<P>,
}

impl<P> ProfileCache<P> {
    pub fn new() -> Self {
        Self::with_clock(system_clock())
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            cache: SharedCache::new(PROFILE_CACHE_NAME, Self::config(), clock),
        }
    }

    pub fn config() -> CacheConfig {
        CacheConfig::new(PROFILE_TTL_SECS, PROFILE_MAX_WEIGHT, EvictionStrategy::Lru)
    }

    pub fn set_user_profile(&self, user_id: &str, profile: P) {
        self.cache.set(profile_key(user_id), profile, 1);
    }

    /// Drops a cached profile, returning whether one was cached.
    pub fn invalidate_user_profile(&self, user_id: &str) -> bool {
        self.cache.delete(&profile_key(user_id))
    }

    pub fn cache(&self) -> &SharedCache<P> {
        &self.cache
    }
}

impl<P: Clone> ProfileCache<P> {
    pub fn get_user_profile(&self, user_id: &str) -> Option<P> {
        self.cache.get(&profile_key(user_id))
    }
}

impl<P> Clone for ProfileCache<P> {
    fn clone(&self) -> Self {
        Self {
            cache: self.cache.clone(),
        }
    }
}

impl<P> Default for ProfileCache<P> {
    fn default() -> Self {
        Self::new()
    }
}
