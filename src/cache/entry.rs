//! Cache Entry Module
//!
//! Defines a single cached response and its age arithmetic.

use std::time::Duration;

use tokio::time::Instant;

// == Cache Entry ==
/// One stored response: the opaque payload and when it was last inserted.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The caller's serialized payload, never inspected
    pub value: Vec<u8>,
    /// Time of the most recent insert under this key
    pub created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates an entry stamped with the given instant.
    pub fn new(value: Vec<u8>, created_at: Instant) -> Self {
        Self { value, created_at }
    }

    // == Age ==
    /// Returns how long ago the entry was inserted, relative to `now`.
    ///
    /// An entry stamped after `now` has zero age.
    pub fn age_at(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    // == Is Expired ==
    /// Checks whether the entry is old enough for the reaper to remove.
    ///
    /// Boundary condition: an entry whose age equals `interval` exactly is
    /// still kept; only a strictly greater age qualifies.
    pub fn is_expired_at(&self, now: Instant, interval: Duration) -> bool {
        self.age_at(now) > interval
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_creation() {
        let now = Instant::now();
        let entry = CacheEntry::new(b"payload".to_vec(), now);

        assert_eq!(entry.value, b"payload");
        assert_eq!(entry.age_at(now), Duration::ZERO);
    }

    #[test]
    fn test_entry_accepts_empty_value() {
        let entry = CacheEntry::new(Vec::new(), Instant::now());
        assert!(entry.value.is_empty());
    }

    #[test]
    fn test_age_measured_from_created_at() {
        let created = Instant::now();
        let entry = CacheEntry::new(b"v".to_vec(), created);

        let later = created + Duration::from_millis(250);
        assert_eq!(entry.age_at(later), Duration::from_millis(250));
    }

    #[test]
    fn test_age_saturates_for_earlier_now() {
        let created = Instant::now() + Duration::from_secs(5);
        let entry = CacheEntry::new(b"v".to_vec(), created);

        assert_eq!(entry.age_at(Instant::now()), Duration::ZERO);
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let interval = Duration::from_millis(100);
        let created = Instant::now();
        let entry = CacheEntry::new(b"v".to_vec(), created);

        assert!(
            !entry.is_expired_at(created + interval, interval),
            "Entry aged exactly one interval should be kept"
        );
        assert!(
            entry.is_expired_at(created + interval + Duration::from_millis(1), interval),
            "Entry aged past the interval should be expired"
        );
    }
}
