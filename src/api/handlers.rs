//! API Handlers
//!
//! HTTP request handlers for each admin endpoint.

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::info;

use crate::cache::ManagedCache;
use crate::error::{CacheError, Result};
use crate::facades::{ProfileCache, SchemeCache};
use crate::models::{
    CacheStatsResponse, ClearResponse, HealthResponse, InvalidateResponse, StatsResponse,
};

/// Application state shared across all handlers.
///
/// Holds handles to the process-wide facades; clones share the same stores.
#[derive(Clone, Debug)]
pub struct AppState {
    pub schemes: SchemeCache,
    pub profiles: ProfileCache,
}

impl AppState {
    /// Creates a new AppState around the given facades.
    pub fn new(schemes: SchemeCache, profiles: ProfileCache) -> Self {
        Self { schemes, profiles }
    }

    /// Every cache managed by this process.
    pub fn managed_caches(&self) -> Vec<Box<dyn ManagedCache>> {
        vec![
            Box::new(self.schemes.cache().clone()),
            Box::new(self.profiles.cache().clone()),
        ]
    }

    /// Looks up a managed cache by name.
    pub fn find_cache(&self, name: &str) -> Result<Box<dyn ManagedCache>> {
        self.managed_caches()
            .into_iter()
            .find(|cache| cache.name() == name)
            .ok_or_else(|| CacheError::NotFound(name.to_string()))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(SchemeCache::new(), ProfileCache::new())
    }
}

/// Handler for GET /stats
///
/// Returns statistics for every managed cache.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let caches = state
        .managed_caches()
        .iter()
        .map(|cache| CacheStatsResponse::from_cache(cache.as_ref()))
        .collect();

    Json(StatsResponse { caches })
}

/// Handler for GET /stats/:name
pub async fn cache_stats_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<CacheStatsResponse>> {
    let cache = state.find_cache(&name)?;
    Ok(Json(CacheStatsResponse::from_cache(cache.as_ref())))
}

/// Handler for POST /caches/:name/clear
///
/// Empties one cache and resets its counters.
pub async fn clear_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<ClearResponse>> {
    let cache = state.find_cache(&name)?;
    cache.clear();
    info!(cache = %name, "Cache cleared via admin API");

    Ok(Json(ClearResponse::new(name)))
}

/// Handler for DELETE /profiles/:user_id
///
/// Drops a cached user profile so the next read goes to the source of truth.
pub async fn invalidate_profile_handler(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Json<InvalidateResponse> {
    let invalidated = state.profiles.invalidate_user_profile(&user_id);

    Json(InvalidateResponse {
        user_id,
        invalidated,
    })
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_stats_handler_lists_both_caches() {
        let state = AppState::default();

        let response = stats_handler(State(state)).await;
        let names: Vec<&str> = response.caches.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["schemes", "profiles"]);
        assert!(response.caches.iter().all(|c| c.hits == 0 && c.misses == 0));
    }

    #[tokio::test]
    async fn test_cache_stats_handler_unknown_cache() {
        let state = AppState::default();

        let result = cache_stats_handler(State(state), Path("sessions".to_string())).await;
        assert!(matches!(result, Err(CacheError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_clear_handler() {
        let state = AppState::default();
        state.schemes.set_scheme("s1", json!({"id": "s1"}));
        state.profiles.set_user_profile("u1", json!({"id": "u1"}));

        let result = clear_handler(State(state.clone()), Path("schemes".to_string())).await;
        assert!(result.is_ok());

        assert_eq!(state.schemes.get_scheme("s1"), None);
        assert!(state.profiles.get_user_profile("u1").is_some());
    }

    #[tokio::test]
    async fn test_invalidate_profile_handler() {
        let state = AppState::default();
        state.profiles.set_user_profile("u1", json!({"id": "u1"}));

        let response =
            invalidate_profile_handler(State(state.clone()), Path("u1".to_string())).await;
        assert!(response.invalidated);

        let response = invalidate_profile_handler(State(state), Path("u1".to_string())).await;
        assert!(!response.invalidated);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
