//! Cache Store Module
//!
//! The keyed entry mapping. Callers hold the shared lock around every method;
//! the store itself is plain single-owner data.

use std::collections::HashMap;
use std::time::Duration;

use tokio::time::Instant;

use crate::cache::{CacheEntry, CacheStats};

// == Cache Store ==
/// Mapping from request key to its most recent response.
///
/// Has no size ceiling. Entries leave only through [`CacheStore::sweep`].
#[derive(Debug, Default)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Lookup and sweep counters
    stats: CacheStats,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // == Insert ==
    /// Stores `value` under `key`, replacing any previous entry wholesale.
    ///
    /// The creation time is reset on every insert, overwrite included.
    pub fn insert(&mut self, key: String, value: Vec<u8>) {
        self.insert_at(key, value, Instant::now());
    }

    pub(crate) fn insert_at(&mut self, key: String, value: Vec<u8>, created_at: Instant) {
        self.entries.insert(key, CacheEntry::new(value, created_at));
        self.stats.record_insert();
    }

    // == Lookup ==
    /// Returns a copy of the value stored under `key`.
    ///
    /// Age is not checked here; an entry past its interval stays visible
    /// until the next sweep removes it.
    pub fn lookup(&mut self, key: &str) -> Option<Vec<u8>> {
        match self.entries.get(key) {
            Some(entry) => {
                self.stats.record_hit();
                Some(entry.value.clone())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Sweep ==
    /// Removes every entry whose age at `now` exceeds `interval`.
    ///
    /// All entries are judged against the same `now`. Returns the number removed.
    pub fn sweep(&mut self, now: Instant, interval: Duration) -> usize {
        let before = self.entries.len();
        self.entries
            .retain(|_, entry| !entry.is_expired_at(now, interval));
        let removed = before - self.entries.len();
        self.stats.record_reaped(removed);
        removed
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
