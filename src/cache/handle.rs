//! Cache Handle Module
//!
//! Owns the shared store and the reaper task that sweeps it.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::cache::{CacheStats, CacheStore, MAX_INTERVAL};
use crate::error::{PokedexError, Result};
use crate::tasks::spawn_reaper;

// == Cache ==
/// Shared response cache with a background reaper.
///
/// `interval` is both the entry lifetime and the sweep period. Lookups never
/// check age; only a sweep removes entries, so a value may be served for up
/// to nearly two intervals after its insert.
///
/// Share across tasks with `Arc<Cache>`. Dropping the cache stops its reaper.
#[derive(Debug)]
pub struct Cache {
    /// Entry mapping, guarded by a single lock
    store: Arc<Mutex<CacheStore>>,
    /// TTL and sweep period, fixed for the cache's lifetime
    interval: Duration,
    /// Flipped to `true` to stop the reaper
    shutdown_tx: watch::Sender<bool>,
    /// Reaper task, taken on explicit shutdown
    reaper: Option<JoinHandle<()>>,
}

impl Cache {
    // == Constructor ==
    /// Creates an empty cache and starts its reaper on the current tokio runtime.
    ///
    /// # Errors
    /// Returns [`PokedexError::InvalidInterval`] if `interval` is zero.
    /// Intervals above [`MAX_INTERVAL`] are clamped to it.
    ///
    /// # Panics
    /// Panics if called outside a tokio runtime.
    pub fn new(interval: Duration) -> Result<Self> {
        if interval.is_zero() {
            return Err(PokedexError::InvalidInterval);
        }
        if interval > MAX_INTERVAL {
            warn!(
                "Cache interval of {}s exceeds the maximum, clamping to {}s",
                interval.as_secs(),
                MAX_INTERVAL.as_secs()
            );
        }
        let interval = interval.min(MAX_INTERVAL);

        let store = Arc::new(Mutex::new(CacheStore::new()));
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let reaper = spawn_reaper(store.clone(), interval, shutdown_rx);

        debug!(interval_ms = interval.as_millis() as u64, "Cache created");

        Ok(Self {
            store,
            interval,
            shutdown_tx,
            reaper: Some(reaper),
        })
    }

    // == Insert ==
    /// Stores `value` under `key`, overwriting and re-stamping any existing entry.
    pub async fn insert(&self, key: impl Into<String>, value: impl Into<Vec<u8>>) {
        let mut store = self.store.lock().await;
        store.insert(key.into(), value.into());
    }

    // == Lookup ==
    /// Returns the value stored under `key`, or `None` if there is none.
    pub async fn lookup(&self, key: &str) -> Option<Vec<u8>> {
        let mut store = self.store.lock().await;
        store.lookup(key)
    }

    // == Interval ==
    /// Returns the configured interval, after clamping.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    // == Length ==
    /// Returns the current number of entries, including ones awaiting a sweep.
    pub async fn len(&self) -> usize {
        self.store.lock().await.len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.store.lock().await.is_empty()
    }

    // == Stats ==
    /// Returns a snapshot of the cache counters.
    pub async fn stats(&self) -> CacheStats {
        self.store.lock().await.stats()
    }

    // == Shutdown ==
    /// Stops the reaper and waits for it to exit. No sweep runs afterwards.
    pub async fn shutdown(mut self) {
        let _ = self.shutdown_tx.send(true);
        if let Some(reaper) = self.reaper.take() {
            if let Err(err) = reaper.await {
                warn!("Cache reaper ended abnormally: {}", err);
            }
        }
    }
}

impl Drop for Cache {
    fn drop(&mut self) {
        // Reaper may already be gone; nothing to report then.
        let _ = self.shutdown_tx.send(true);
    }
}
