//! Cache Reaper Task
//!
//! Background task that periodically removes cache entries older than the
//! cache interval. It is the only path by which entries leave the store.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::cache::{CacheStore, MAX_INTERVAL};

/// Spawns the reaper for `store`.
///
/// The first sweep happens one full `interval` after this call, then once per
/// `interval`. Each sweep holds the store lock for the whole scan and judges
/// every entry against a single `now`.
///
/// The task exits when `shutdown_rx` observes `true` or its sender is dropped.
/// An `interval` above [`MAX_INTERVAL`] is clamped to it.
///
/// # Arguments
/// * `store` - Shared store also used by foreground insert and lookup
/// * `interval` - Sweep period and entry lifetime; must be non-zero
/// * `shutdown_rx` - Stop signal
///
/// # Example
/// ```ignore
/// let store = Arc::new(Mutex::new(CacheStore::new()));
/// let (shutdown_tx, shutdown_rx) = watch::channel(false);
/// let reaper = spawn_reaper(store.clone(), Duration::from_secs(300), shutdown_rx);
/// // Later:
/// shutdown_tx.send(true).ok();
/// reaper.await.ok();
/// ```
pub fn spawn_reaper(
    store: Arc<Mutex<CacheStore>>,
    interval: Duration,
    mut shutdown_rx: watch::Receiver<bool>,
) -> JoinHandle<()> {
    let interval = interval.min(MAX_INTERVAL);
    let first_tick = Instant::now() + interval;

    tokio::spawn(async move {
        info!(
            "Starting cache reaper with interval of {} ms",
            interval.as_millis()
        );

        let mut ticker = interval_at(first_tick, interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;

                changed = shutdown_rx.changed() => {
                    if changed.is_err() || *shutdown_rx.borrow() {
                        break;
                    }
                }
                _ = ticker.tick() => {
                    let removed = {
                        let mut store_guard = store.lock().await;
                        let now = Instant::now();
                        store_guard.sweep(now, interval)
                    };

                    if removed > 0 {
                        info!("Cache sweep: removed {} expired entries", removed);
                    } else {
                        debug!("Cache sweep: no expired entries found");
                    }
                }
            }
        }

        info!("Cache reaper stopped");
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::sleep;

    const INTERVAL: Duration = Duration::from_millis(100);

    fn shared_store() -> Arc<Mutex<CacheStore>> {
        Arc::new(Mutex::new(CacheStore::new()))
    }

    #[tokio::test(start_paused = true)]
    async fn test_reaper_removes_expired_entries() {
        let store = shared_store();
        store
            .lock()
            .await
            .insert("expire_soon".to_string(), b"value".to_vec());

        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let handle = spawn_reaper(store.clone(), INTERVAL, shutdown_rx);

        sleep(Duration::from_millis(250)).await;

        assert_eq!(store.lock().await.lookup("expire_soon"), None);

        shutdown_tx.send(true).unwrap();
        handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_sweep_waits_one_interval() {
        let store = shared_store();
        store.lock().await.insert("k".to_string(), b"v".to_vec());

        // Already past the interval when the reaper starts
        sleep(Duration::from_millis(150)).await;
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let handle = spawn_reaper(store.clone(), INTERVAL, shutdown_rx);

        sleep(Duration::from_millis(50)).await;
        assert!(store.lock().await.lookup("k").is_some(), "No sweep before the first tick");

        sleep(Duration::from_millis(60)).await;
        assert_eq!(store.lock().await.lookup("k"), None);

        shutdown_tx.send(true).unwrap();
        handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_reaper_preserves_fresh_entries() {
        let store = shared_store();
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let handle = spawn_reaper(store.clone(), Duration::from_secs(3600), shutdown_rx);

        store
            .lock()
            .await
            .insert("long_lived".to_string(), b"value".to_vec());

        sleep(Duration::from_secs(3600) + Duration::from_millis(500)).await;

        assert_eq!(
            store.lock().await.lookup("long_lived"),
            Some(b"value".to_vec()),
            "Entry aged under one interval at the sweep should be kept"
        );

        shutdown_tx.send(true).unwrap();
        handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_sweep_after_shutdown() {
        let store = shared_store();
        store.lock().await.insert("k".to_string(), b"v".to_vec());

        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let handle = spawn_reaper(store.clone(), INTERVAL, shutdown_rx);

        shutdown_tx.send(true).unwrap();
        handle.await.unwrap();

        sleep(Duration::from_millis(500)).await;
        assert_eq!(store.lock().await.lookup("k"), Some(b"v".to_vec()));
    }

    #[tokio::test]
    async fn test_reaper_accepts_max_duration() {
        let store = shared_store();
        store.lock().await.insert("k".to_string(), b"v".to_vec());

        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let handle = spawn_reaper(store.clone(), Duration::MAX, shutdown_rx);

        sleep(Duration::from_millis(10)).await;
        assert!(store.lock().await.lookup("k").is_some());

        shutdown_tx.send(true).unwrap();
        handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_reaper_exits_when_sender_dropped() {
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let handle = spawn_reaper(shared_store(), INTERVAL, shutdown_rx);

        drop(shutdown_tx);

        handle.await.unwrap();
    }
}
