//! In-memory geocode cache using moka.
//!
//! Moka evicts least-recently-used entries automatically once the cache
//! exceeds its capacity; entries optionally expire after a time-to-live.

use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::cache::traits::{normalize_address, BoxFuture, GeocodeCache};
use crate::coord::Coordinate;

/// Default number of addresses kept in memory.
pub const DEFAULT_GEOCODE_CAPACITY: u64 = 256;

/// In-memory geocode cache.
pub struct MemoryGeocodeCache {
    cache: MokaCache<String, Coordinate>,
}

impl MemoryGeocodeCache {
    /// Create a cache holding at most `capacity` addresses.
    ///
    /// # Arguments
    ///
    /// * `capacity` - Maximum number of entries
    /// * `ttl` - Optional time-to-live for entries
    pub fn new(capacity: u64, ttl: Option<Duration>) -> Self {
        let mut builder = MokaCache::builder().max_capacity(capacity);
        if let Some(ttl) = ttl {
            builder = builder.time_to_live(ttl);
        }
        Self {
            cache: builder.build(),
        }
    }

    /// Number of cached entries (approximate until pending tasks run).
    pub fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }
}

impl Default for MemoryGeocodeCache {
    fn default() -> Self {
        Self::new(DEFAULT_GEOCODE_CAPACITY, None)
    }
}

impl GeocodeCache for MemoryGeocodeCache {
    fn get(&self, address: &str) -> BoxFuture<'_, Option<Coordinate>> {
        let key = normalize_address(address);
        Box::pin(async move { self.cache.get(&key).await })
    }

    fn set(&self, address: &str, coordinate: Coordinate) -> BoxFuture<'_, ()> {
        let key = normalize_address(address);
        Box::pin(async move {
            self.cache.insert(key, coordinate).await;
        })
    }
}
