//! Error types for the cache manager
//!
//! Provides unified error handling using thiserror. Cache lookups never fail;
//! absence is reported as `None`. These errors cover configuration and the
//! admin API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache manager.
#[derive(Error, Debug)]
pub enum CacheError {
    /// No managed cache with this name
    #[error("Cache not found: {0}")]
    NotFound(String),

    /// Eviction strategy name not recognised
    #[error("Invalid eviction strategy: {0} (expected lru, lfu or fifo)")]
    InvalidStrategy(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let status = match &self {
            CacheError::NotFound(_) => StatusCode::NOT_FOUND,
            CacheError::InvalidStrategy(_) => StatusCode::BAD_REQUEST,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache manager.
pub type Result<T> = std::result::Result<T, CacheError>;
