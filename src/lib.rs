//! Cache Manager - shared in-memory cache layer for backend services
//!
//! Provides a weight- and TTL-bounded generic store with LRU, LFU and FIFO
//! eviction, plus scheme and user-profile facades over it.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod facades;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use cache::{CacheConfig, CacheStore, EvictionStrategy, SharedCache};
pub use config::Config;
pub use error::CacheError;
pub use facades::{ProfileCache, SchemeCache};
pub use tasks::spawn_cleanup_task;
