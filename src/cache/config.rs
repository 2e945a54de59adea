//! Cache Configuration Module
//!
//! Per-store configuration: TTL, weight budget and eviction strategy.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CacheError;

/// Default TTL in seconds.
pub const DEFAULT_TTL_SECS: u64 = 3600;

/// Default total weight budget.
pub const DEFAULT_MAX_WEIGHT: u64 = 1000;

// == Eviction Strategy ==
/// Policy used to pick a victim when an insertion does not fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvictionStrategy {
    /// Evicts the entry with the oldest insertion or overwrite time.
    #[default]
    Lru,
    /// Evicts the entry with the fewest successful reads.
    Lfu,
    /// Evicts the earliest-inserted entry still present.
    Fifo,
}

impl EvictionStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            EvictionStrategy::Lru => "lru",
            EvictionStrategy::Lfu => "lfu",
            EvictionStrategy::Fifo => "fifo",
        }
    }
}

impl fmt::Display for EvictionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EvictionStrategy {
    type Err = CacheError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lru" => Ok(EvictionStrategy::Lru),
            "lfu" => Ok(EvictionStrategy::Lfu),
            "fifo" => Ok(EvictionStrategy::Fifo),
            other => Err(CacheError::InvalidStrategy(other.to_string())),
        }
    }
}

// == Cache Config ==
/// Configuration for one cache store, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Entry time-to-live in seconds
    pub ttl: u64,
    /// Maximum sum of entry weights
    pub max_weight: u64,
    /// Eviction policy
    pub strategy: EvictionStrategy,
}

impl CacheConfig {
    pub fn new(ttl: u64, max_weight: u64, strategy: EvictionStrategy) -> Self {
        Self {
            ttl,
            max_weight,
            strategy,
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TTL_SECS, DEFAULT_MAX_WEIGHT, EvictionStrategy::Lru)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = CacheConfig::default();
        assert_eq!(config.ttl, 3600);
        assert_eq!(config.max_weight, 1000);
        assert_eq!(config.strategy, EvictionStrategy::Lru);
    }

    #[test]
    fn test_strategy_from_str() {
        assert_eq!("lru".parse::<EvictionStrategy>().unwrap(), EvictionStrategy::Lru);
        assert_eq!("LFU".parse::<EvictionStrategy>().unwrap(), EvictionStrategy::Lfu);
        assert_eq!(" fifo ".parse::<EvictionStrategy>().unwrap(), EvictionStrategy::Fifo);
    }

    #[test]
    fn test_strategy_from_str_rejects_unknown() {
        let result = "random".parse::<EvictionStrategy>();
        assert!(matches!(result, Err(CacheError::InvalidStrategy(name)) if name == "random"));
    }

    #[test]
    fn test_config_deserialize_fills_defaults() {
        let config: CacheConfig = serde_json::from_str(r#"{"strategy":"fifo"}"#).unwrap();
        assert_eq!(config.strategy, EvictionStrategy::Fifo);
        assert_eq!(config.ttl, DEFAULT_TTL_SECS);
        assert_eq!(config.max_weight, DEFAULT_MAX_WEIGHT);
    }

    #[test]
    fn test_strategy_serializes_lowercase() {
        let json = serde_json::to_string(&EvictionStrategy::Lfu).unwrap();
        assert_eq!(json, r#""lfu""#);
        assert_eq!(EvictionStrategy::Fifo.to_string(), "fifo");
    }
}
