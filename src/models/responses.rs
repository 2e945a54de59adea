//! Response DTOs for the admin API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::{EvictionStrategy, ManagedCache};

/// Statistics for one managed cache (GET /stats/:name)
#[derive(Debug, Clone, Serialize)]
pub struct CacheStatsResponse {
    /// Cache name
    pub name: String,
    /// Eviction strategy
    pub strategy: EvictionStrategy,
    /// Default TTL in seconds
    pub ttl: u64,
    /// Resident entries
    pub count: usize,
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
    /// Sum of resident weights
    pub current_weight: u64,
    /// Weight budget
    pub max_weight: u64,
    /// Number of evictions
    pub evictions: u64,
    /// Number of expired entries removed
    pub expirations: u64,
}

impl CacheStatsResponse {
    /// Snapshots a managed cache
    pub fn from_cache(cache: &dyn ManagedCache) -> Self {
        let config = cache.config();
        let stats = cache.stats();
        Self {
            name: cache.name().to_string(),
            strategy: config.strategy,
            ttl: config.ttl,
            count: stats.count,
            hits: stats.hits,
            misses: stats.misses,
            hit_rate: stats.hit_rate(),
            current_weight: stats.current_weight,
            max_weight: stats.max_weight,
            evictions: stats.evictions,
            expirations: stats.expirations,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub caches: Vec<CacheStatsResponse>,
}

/// Response body for POST /caches/:name/clear
#[derive(Debug, Clone, Serialize)]
pub struct ClearResponse {
    /// Success message
    pub message: String,
    /// The cache that was cleared
    pub name: String,
}

impl ClearResponse {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            message: format!("Cache '{}' cleared", name),
            name,
        }
    }
}

/// Response body for DELETE /profiles/:user_id
#[derive(Debug, Clone, Serialize)]
pub struct InvalidateResponse {
    pub user_id: String,
    /// Whether a cached profile was removed
    pub invalidated: bool,
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
