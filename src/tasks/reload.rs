//! File Watch Task
//!
//! Background task that invalidates the record cache when the backing file
//! changes on disk.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::store::RecordStore;

/// Spawns a background task that watches the backing file for changes.
///
/// The task runs in an infinite loop, sleeping for the specified interval
/// between checks. It acquires a write lock on the record store and drops
/// the cached records when the file's mtime moved since the cached load,
/// so the next request re-reads the file.
///
/// # Arguments
/// * `store` - Arc<RwLock<RecordStore>> shared reference to the store
/// * `reload_interval_secs` - Interval in seconds between checks
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
pub fn spawn_reload_task(
    store: Arc<RwLock<RecordStore>>,
    reload_interval_secs: u64,
) -> JoinHandle<()> {
    let interval = Duration::from_secs(reload_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting file-watch task with interval of {} seconds",
            reload_interval_secs
        );

        loop {
            // Sleep for the configured interval
            tokio::time::sleep(interval).await;

            // Acquire write lock and compare mtimes
            let changed = {
                let mut store_guard = store.write().await;
                store_guard.reload_if_changed().await
            };

            if changed {
                info!("Backing file changed on disk, record cache invalidated");
            } else {
                debug!("Backing file unchanged");
            }
        }
    })
}
