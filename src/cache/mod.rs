//! Cache module - Moka-backed caches plus the inline result snapshots.
//!
//! ## Architecture
//!
//! - `CacheRegistry` - Central registry holding all named caches
//! - `TypedCache` - Typed wrapper over a Moka cache
//! - `ResultCache` - Catalog and per-user collection snapshots with
//!   clock-checked expiry
//!
//! ## Usage
//!
//! ```rust
//! let registry = CacheRegistry::new();
//! let results = ResultCache::new(&registry, Arc::new(SystemClock), catalog_ttl, collection_ttl);
//!
//! if let Some(catalog) = results.catalog() {
//!     // fresh snapshot
//! }
//! ```

mod clock;
mod config;
mod registry;
mod result_cache;
mod typed;

#[cfg(test)]
pub use clock::ManualClock;
pub use clock::{Clock, SystemClock};
pub use config::CacheConfig;
pub use registry::CacheRegistry;
pub use result_cache::ResultCache;
pub use typed::TypedCache;
