//! Cache Facades
//!
//! Domain-named wrappers that fix key namespacing and default configuration
//! over one [`SharedCache`](crate::cache::SharedCache) each.

mod profile;
mod scheme;

pub use profile::{
    profile_key, ProfileCache, PROFILE_CACHE_NAME, PROFILE_MAX_WEIGHT, PROFILE_TTL_SECS,
};
pub use scheme::{
    eligibility_key, scheme_key, SchemeCache, SchemeRecord, ELIGIBILITY_TTL_SECS,
    SCHEME_CACHE_NAME, SCHEME_MAX_WEIGHT, SCHEME_TTL_SECS,
};
