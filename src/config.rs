//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.
//! Per-cache TTL, weight and strategy are fixed by each facade.

use std::env;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Background expiry sweep interval in seconds
    pub cleanup_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CLEANUP_INTERVAL` - Expiry sweep frequency in seconds (default: 60)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: env_or("SERVER_PORT", defaults.server_port),
            cleanup_interval: env_or("CLEANUP_INTERVAL", defaults.cleanup_interval),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            cleanup_interval: 60,
        }
    }
}

fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.cleanup_interval, 60);
    }

    #[test]
    fn test_env_or_falls_back() {
        env::remove_var("CACHE_MANAGER_TEST_UNSET");
        env::set_var("CACHE_MANAGER_TEST_BAD", "not-a-number");
        env::set_var("CACHE_MANAGER_TEST_GOOD", "8080");

        assert_eq!(env_or("CACHE_MANAGER_TEST_UNSET", 5u16), 5);
        assert_eq!(env_or("CACHE_MANAGER_TEST_BAD", 5u16), 5);
        assert_eq!(env_or("CACHE_MANAGER_TEST_GOOD", 5u16), 8080);
    }
}
