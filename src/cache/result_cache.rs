//! Snapshot cache for inline search results.
//!
//! Two slots:
//! - the whole catalog under one shared key (long TTL)
//! - each user's collection keyed by user id (short TTL)
//!
//! Entries carry their own expiry, checked against the injected [`Clock`].
//! Moka's TTL only bounds memory; freshness is decided here.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::debug;

use super::{CacheConfig, CacheRegistry, Clock, TypedCache};
use crate::database::{Character, UserCollection};

const CATALOG_KEY: &str = "all_characters";

/// A cached value with its expiry instant.
#[derive(Debug, Clone)]
struct Stamped<V> {
    value: V,
    expires_at: Instant,
}

/// Time-bounded cache of catalog and collection snapshots.
#[derive(Debug, Clone)]
pub struct ResultCache {
    clock: Arc<dyn Clock>,
    catalog: TypedCache<&'static str, Stamped<Arc<Vec<Character>>>>,
    collections: TypedCache<i64, Stamped<Arc<UserCollection>>>,
    catalog_ttl: Duration,
    collection_ttl: Duration,
}

impl ResultCache {
    pub fn new(
        registry: &CacheRegistry,
        clock: Arc<dyn Clock>,
        catalog_ttl: Duration,
        collection_ttl: Duration,
    ) -> Self {
        Self {
            clock,
            catalog: registry.get_or_create(
                "inline_catalog",
                CacheConfig::catalog_snapshot(catalog_ttl),
            ),
            collections: registry.get_or_create(
                "inline_collections",
                CacheConfig::collection_snapshot(collection_ttl),
            ),
            catalog_ttl,
            collection_ttl,
        }
    }

    /// Full catalog snapshot, if still fresh.
    pub fn catalog(&self) -> Option<Arc<Vec<Character>>> {
        let entry = self.catalog.get(&CATALOG_KEY)?;
        if self.clock.now() < entry.expires_at {
            debug!("Catalog served from cache ({} characters)", entry.value.len());
            return Some(entry.value);
        }

        self.catalog.invalidate(&CATALOG_KEY);
        None
    }

    /// Replace the catalog snapshot and return the shared copy.
    pub fn store_catalog(&self, characters: Vec<Character>) -> Arc<Vec<Character>> {
        let value = Arc::new(characters);
        self.catalog.insert(
            CATALOG_KEY,
            Stamped {
                value: Arc::clone(&value),
                expires_at: self.clock.now() + self.catalog_ttl,
            },
        );
        value
    }

    /// A user's collection snapshot, if still fresh.
    pub fn collection(&self, user_id: i64) -> Option<Arc<UserCollection>> {
        let entry = self.collections.get(&user_id)?;
        if self.clock.now() < entry.expires_at {
            debug!("Collection {} served from cache", user_id);
            return Some(entry.value);
        }

        self.collections.invalidate(&user_id);
        None
    }

    /// Replace a user's collection snapshot and return the shared copy.
    pub fn store_collection(&self, collection: UserCollection) -> Arc<UserCollection> {
        let user_id = collection.id;
        let value = Arc::new(collection);
        self.collections.insert(
            user_id,
            Stamped {
                value: Arc::clone(&value),
                expires_at: self.clock.now() + self.collection_ttl,
            },
        );
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ManualClock;
    use crate::database::models::character::character;

    fn cache(clock: Arc<ManualClock>) -> ResultCache {
        ResultCache::new(
            &CacheRegistry::new(),
            clock,
            Duration::from_secs(36_000),
            Duration::from_secs(60),
        )
    }

    #[test]
    fn test_catalog_expires_after_ttl() {
        let clock = Arc::new(ManualClock::new());
        let cache = cache(clock.clone());
        assert!(cache.catalog().is_none());

        cache.store_catalog(vec![character("1", "Rem", "Re:Zero")]);
        clock.advance(Duration::from_secs(35_999));
        assert_eq!(cache.catalog().map(|c| c.len()), Some(1));

        clock.advance(Duration::from_secs(1));
        assert!(cache.catalog().is_none());
    }

    #[test]
    fn test_collection_slots_are_per_user() {
        let clock = Arc::new(ManualClock::new());
        let cache = cache(clock.clone());

        cache.store_collection(UserCollection {
            id: 7,
            ..Default::default()
        });
        assert!(cache.collection(7).is_some());
        assert!(cache.collection(8).is_none());

        clock.advance(Duration::from_secs(60));
        assert!(cache.collection(7).is_none());
    }

    #[test]
    fn test_store_overwrites_previous_snapshot() {
        let clock = Arc::new(ManualClock::new());
        let cache = cache(clock);

        cache.store_catalog(vec![character("1", "Rem", "Re:Zero")]);
        cache.store_catalog(vec![]);
        assert_eq!(cache.catalog().map(|c| c.len()), Some(0));
    }
}
