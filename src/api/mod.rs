//! API Module
//!
//! HTTP handlers and routing for the cache manager's admin API.
//!
//! # Endpoints
//! - `GET /stats` - Statistics for every cache
//! - `GET /stats/:name` - Statistics for one cache
//! - `POST /caches/:name/clear` - Empty one cache
//! - `DELETE /profiles/:user_id` - Invalidate a cached user profile
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
