//! Cache configuration.

use std::time::Duration;

/// Configuration for a cache instance.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum number of entries in the cache.
    pub max_capacity: u64,

    /// Time-to-live for cache entries.
    /// After this duration, entries are automatically evicted.
    pub ttl: Option<Duration>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_capacity: 10_000,
            ttl: Some(Duration::from_secs(300)), // 5 minutes
        }
    }
}

impl CacheConfig {
    /// Set max capacity for cache (builder pattern).
    #[must_use]
    pub fn max_capacity(mut self, max_capacity: u64) -> Self {
        self.max_capacity = max_capacity;
        self
    }

    /// Set time-to-live for cache entries.
    #[must_use]
    pub fn ttl(mut self, duration: Duration) -> Self {
        self.ttl = Some(duration);
        self
    }

    /// Config for the whole-catalog snapshot.
    /// A single key, long TTL.
    pub fn catalog_snapshot(ttl: Duration) -> Self {
        Self::default().max_capacity(1).ttl(ttl)
    }

    /// Config for per-user collection snapshots.
    /// One entry per user that recently browsed, short TTL.
    pub fn collection_snapshot(ttl: Duration) -> Self {
        Self::default().max_capacity(10_000).ttl(ttl)
    }
}
