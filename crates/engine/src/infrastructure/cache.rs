//! TTL-based cache for decoded resources.
//!
//! The fast tier of the resource cache. Expiry is measured against the
//! injected clock so entries promoted from the durable tier keep their
//! original fetch time.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;

use crate::infrastructure::ports::ClockPort;

/// A thread-safe cache with time-to-live expiration.
///
/// Entries at or past the TTL are treated as absent, but are not removed
/// until overwritten or `cleanup_expired()` is called.
pub struct TtlCache<K, V> {
    entries: RwLock<HashMap<K, TtlEntry<V>>>,
    ttl: Duration,
    clock: Arc<dyn ClockPort>,
}

struct TtlEntry<V> {
    value: V,
    inserted_at: DateTime<Utc>,
}

impl<K, V> TtlCache<K, V>
where
    K: Eq + Hash + Clone + Send + Sync,
    V: Clone + Send + Sync,
{
    /// Create a new cache with the specified TTL.
    pub fn new(ttl: Duration, clock: Arc<dyn ClockPort>) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
            clock,
        }
    }

    fn is_fresh(&self, inserted_at: DateTime<Utc>) -> bool {
        self.clock.now() - inserted_at < self.ttl
    }

    /// Insert a value with an explicit timestamp.
    pub async fn insert_at(&self, key: K, value: V, inserted_at: DateTime<Utc>) {
        let entry = TtlEntry { value, inserted_at };
        self.entries.write().await.insert(key, entry);
    }

    /// Get a value if it exists and hasn't expired.
    pub async fn get(&self, key: &K) -> Option<V> {
        let guard = self.entries.read().await;
        guard.get(key).and_then(|entry| {
            if self.is_fresh(entry.inserted_at) {
                Some(entry.value.clone())
            } else {
                None
            }
        })
    }

    /// Remove all expired entries and return the count of removed entries.
    pub async fn cleanup_expired(&self) -> usize {
        let now = self.clock.now();
        let mut guard = self.entries.write().await;
        let before_count = guard.len();
        guard.retain(|_, entry| now - entry.inserted_at < self.ttl);
        before_count - guard.len()
    }
}
