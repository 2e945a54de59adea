//! Expiry Sweep Task
//!
//! Background task that periodically removes expired entries from every
//! managed cache, releasing the weight they hold.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::ManagedCache;

/// Spawns a background task that periodically purges expired cache entries.
///
/// The task runs in an infinite loop, sleeping for the specified interval
/// between runs. Each cache is locked only for its own purge.
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
///
/// # Example
/// ```ignore
/// let state = AppState::default();
/// let cleanup_handle = spawn_cleanup_task(state.managed_caches(), 60);
/// // Later, during shutdown:
/// cleanup_handle.abort();
/// ```
pub fn spawn_cleanup_task(
    caches: Vec<Box<dyn ManagedCache>>,
    cleanup_interval_secs: u64,
) -> JoinHandle<()> {
    // A zero interval would spin
    let interval = Duration::from_secs(cleanup_interval_secs.max(1));

    tokio::spawn(async move {
        info!(
            "Starting expiry sweep over {} caches with interval of {:?}",
            caches.len(),
            interval
        );

        loop {
            tokio::time::sleep(interval).await;

            for cache in &caches {
                let removed = cache.purge_expired();

                if removed > 0 {
                    info!(cache = cache.name(), "Expiry sweep: removed {} expired entries", removed);
                } else {
                    debug!(cache = cache.name(), "Expiry sweep: no expired entries found");
                }
            }
        }
    })
}
