//! Cache Module
//!
//! Time-bounded in-memory cache for catalog responses, keyed by request URL.
//! Entries are opaque byte payloads; a background reaper removes those older
//! than the configured interval.

mod entry;
mod handle;
mod stats;
mod store;


use std::time::Duration;

// Re-export public types
pub use entry::CacheEntry;
pub use handle::Cache;
pub use stats::CacheStats;
pub use store::CacheStore;

// == Public Constants ==
/// Longest interval a cache accepts; larger values are clamped to it.
///
/// Thirty years, far enough out that the reaper effectively never fires.
pub const MAX_INTERVAL: Duration = Duration::from_secs(86_400 * 365 * 30);
