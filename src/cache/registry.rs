//! Cache registry - Central management for all caches.

use std::any::Any;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, info};

use super::{CacheConfig, TypedCache};

/// Central registry for managing multiple typed caches.
///
/// Services create and access their caches by name, so two services
/// asking for the same name share one underlying Moka instance.
///
/// ## Example
///
/// ```rust
/// let registry = CacheRegistry::new();
///
/// let snapshots: TypedCache<i64, Snapshot> =
///     registry.get_or_create("collections", CacheConfig::default());
/// ```
#[derive(Clone)]
pub struct CacheRegistry {
    caches: Arc<RwLock<HashMap<String, CacheEntry>>>,
}

/// Internal cache entry storing type-erased cache.
struct CacheEntry {
    cache: Box<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl CacheEntry {
    /// Downcast to the requested cache type.
    ///
    /// # Panics
    /// Panics if the cache was registered with different key/value types.
    fn typed<K, V>(&self, name: &str) -> TypedCache<K, V>
    where
        K: Hash + Eq + Send + Sync + 'static,
        V: Clone + Send + Sync + 'static,
    {
        match self.cache.downcast_ref::<TypedCache<K, V>>() {
            Some(cache) => cache.clone(),
            None => panic!(
                "Cache '{}' type mismatch: expected {}, got {}",
                name,
                std::any::type_name::<TypedCache<K, V>>(),
                self.type_name
            ),
        }
    }
}

impl CacheRegistry {
    /// Create a new empty cache registry.
    pub fn new() -> Self {
        info!("Cache registry initialized");
        Self {
            caches: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Get an existing cache by name.
    ///
    /// # Panics
    /// Panics if the cache exists but with different types.
    pub fn get<K, V>(&self, name: &str) -> Option<TypedCache<K, V>>
    where
        K: Hash + Eq + Send + Sync + 'static,
        V: Clone + Send + Sync + 'static,
    {
        self.caches.read().get(name).map(|entry| entry.typed(name))
    }

    /// Get an existing cache or create a new one if it doesn't exist.
    pub fn get_or_create<K, V>(&self, name: &str, config: CacheConfig) -> TypedCache<K, V>
    where
        K: Hash + Eq + Send + Sync + 'static,
        V: Clone + Send + Sync + 'static,
    {
        if let Some(cache) = self.get(name) {
            return cache;
        }

        let mut caches = self.caches.write();

        // Another task may have registered it between the read and write lock.
        if let Some(existing) = caches.get(name) {
            return existing.typed(name);
        }

        debug!("Creating cache: {}", name);

        let cache = TypedCache::new(name, config);
        caches.insert(
            name.to_string(),
            CacheEntry {
                cache: Box::new(cache.clone()),
                type_name: std::any::type_name::<TypedCache<K, V>>(),
            },
        );

        cache
    }

    /// Get the number of registered caches.
    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.caches.read().len()
    }

    /// Check if the registry is empty.
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.caches.read().is_empty()
    }
}

impl Default for CacheRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CacheRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let caches = self.caches.read();
        f.debug_struct("CacheRegistry")
            .field("cache_count", &caches.len())
            .field("cache_names", &caches.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_or_create_returns_shared_cache() {
        let registry = CacheRegistry::new();
        assert!(registry.is_empty());

        let first: TypedCache<i64, String> = registry.get_or_create("users", CacheConfig::default());
        first.insert(1, "alice".to_string());

        let second: TypedCache<i64, String> = registry.get_or_create("users", CacheConfig::default());
        assert_eq!(second.get(&1).as_deref(), Some("alice"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_get_missing_is_none() {
        let registry = CacheRegistry::new();
        assert!(registry.get::<i64, String>("missing").is_none());
    }

    #[test]
    #[should_panic(expected = "type mismatch")]
    fn test_type_mismatch_panics() {
        let registry = CacheRegistry::new();
        let _: TypedCache<i64, String> = registry.get_or_create("slot", CacheConfig::default());
        let _: TypedCache<String, u64> = registry.get_or_create("slot", CacheConfig::default());
    }
}
