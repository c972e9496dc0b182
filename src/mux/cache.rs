//! TTL cache for successful call results.
//!
//! # Responsibilities
//! - Serve recent successes without recontacting the backend
//! - Evict expired entries lazily on lookup
//!
//! # Design Decisions
//! - Entries are immutable once written and replaced wholesale on refresh
//! - An expired entry is indistinguishable from an absent one
//! - Failures are never cached; only the multiplexer inserts entries
//! - A TTL of zero disables caching entirely

use dashmap::DashMap;
use serde_json::Value;
use std::time::Duration;
use tokio::time::Instant;

use crate::mux::key::CallKey;
use crate::observability::metrics;

/// A cached success and the instant it stops being usable.
#[derive(Debug, Clone)]
struct CacheEntry {
    value: Value,
    expires_at: Instant,
}

/// Process-local TTL cache keyed by call identity.
#[derive(Debug)]
pub struct ResultCache {
    entries: DashMap<CallKey, CacheEntry>,
    ttl: Duration,
}

impl ResultCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
        }
    }

    /// Look up a live entry. Expired entries are removed on the way out.
    pub fn get(&self, key: &CallKey) -> Option<Value> {
        if let Some(entry) = self.entries.get(key) {
            if Instant::now() < entry.expires_at {
                metrics::record_cache_hit();
                return Some(entry.value.clone());
            }
            drop(entry);
            // Re-checked under the shard lock so a concurrent refresh survives.
            self.entries
                .remove_if(key, |_, e| Instant::now() >= e.expires_at);
        }
        metrics::record_cache_miss();
        None
    }

    /// Record a fresh success with expiry `now + TTL`.
    pub fn insert(&self, key: CallKey, value: Value) {
        if self.ttl.is_zero() {
            return;
        }
        let entry = CacheEntry {
            value,
            expires_at: Instant::now() + self.ttl,
        };
        self.entries.insert(key, entry);
        metrics::record_cache_size(self.entries.len());
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn key(name: &str) -> CallKey {
        CallKey::new(name, &json!({}))
    }

    #[tokio::test(start_paused = true)]
    async fn test_hit_within_ttl() {
        let cache = ResultCache::new(Duration::from_millis(60_000));
        cache.insert(key("list_agents"), json!({"count": 1}));

        tokio::time::advance(Duration::from_millis(59_999)).await;
        assert_eq!(cache.get(&key("list_agents")), Some(json!({"count": 1})));
    }

    #[tokio::test(start_paused = true)]
    async fn test_expired_entry_is_absent_and_evicted() {
        let cache = ResultCache::new(Duration::from_millis(1_000));
        cache.insert(key("list_agents"), json!(true));

        tokio::time::advance(Duration::from_millis(1_000)).await;
        assert_eq!(cache.get(&key("list_agents")), None);
        assert_eq!(cache.len(), 0, "expired entry should be lazily evicted");
    }

    #[tokio::test(start_paused = true)]
    async fn test_refresh_replaces_entry() {
        let cache = ResultCache::new(Duration::from_millis(1_000));
        cache.insert(key("status"), json!(1));
        cache.insert(key("status"), json!(2));
        assert_eq!(cache.get(&key("status")), Some(json!(2)));
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_ttl_disables_caching() {
        let cache = ResultCache::new(Duration::ZERO);
        cache.insert(key("status"), json!(1));
        assert_eq!(cache.get(&key("status")), None);
    }
}
