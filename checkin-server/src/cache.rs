//! Caching layer for places provider responses.
//!
//! Upstream nearby searches are the slowest and most rate-limited part of
//! a request, and users poking around a map issue many near-identical
//! queries. We cache whole candidate lists keyed by a snapped query.
//!
//! Grid bucketing (origin coordinates snapped to a ~100 m grid) bounds
//! cache cardinality while keeping entries geographically honest.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::domain::Place;
use crate::places::{NearbyQuery, PlacesError, PlacesProvider};

/// Cache key for nearby searches: (lat cell, lng cell, radius in whole
/// meters, category filter, keyword filter).
type NearbyKey = (i32, i32, u32, Option<String>, Option<String>);

/// Cached candidate list.
type NearbyEntry = Arc<Vec<Place>>;

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,

    /// Grid resolution: cells per degree of latitude/longitude.
    /// 1000 cells per degree is roughly a 111 m grid at the equator.
    pub cells_per_degree: f64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(300),
            max_capacity: 1000,
            cells_per_degree: 1000.0,
        }
    }
}

/// Cache for nearby search responses.
pub struct PlacesCache {
    entries: MokaCache<NearbyKey, NearbyEntry>,
    cells_per_degree: f64,
}

impl PlacesCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let entries = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self {
            entries,
            cells_per_degree: config.cells_per_degree,
        }
    }

    /// Snap a coordinate in degrees to its grid cell.
    fn grid_cell(&self, degrees: f64) -> i32 {
        (degrees * self.cells_per_degree).round() as i32
    }

    /// Build the cache key for a query.
    fn key(&self, query: &NearbyQuery) -> NearbyKey {
        (
            self.grid_cell(query.origin.lat()),
            self.grid_cell(query.origin.lng()),
            query.radius_meters.round() as u32,
            query.kind.clone(),
            query.keyword.clone(),
        )
    }

    /// Get a cached entry.
    pub async fn get(&self, key: &NearbyKey) -> Option<NearbyEntry> {
        self.entries.get(key).await
    }

    /// Insert an entry.
    pub async fn insert(&self, key: NearbyKey, entry: NearbyEntry) {
        self.entries.insert(key, entry).await;
    }

    /// Get cache statistics (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.entries.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.entries.invalidate_all();
    }
}

/// Places provider with caching.
///
/// Wraps any [`PlacesProvider`] and caches candidate lists.
pub struct CachedPlacesClient<P> {
    provider: P,
    cache: PlacesCache,
}

impl<P: PlacesProvider> CachedPlacesClient<P> {
    /// Create a new cached client.
    pub fn new(provider: P, cache_config: &CacheConfig) -> Self {
        Self {
            provider,
            cache: PlacesCache::new(cache_config),
        }
    }

    /// Search for nearby places, using the cache if possible.
    ///
    /// Queries whose origins fall in the same grid cell (with identical
    /// radius and filters) share an entry.
    pub async fn search_nearby(
        &self,
        query: &NearbyQuery,
    ) -> Result<Arc<Vec<Place>>, PlacesError> {
        let key = self.cache.key(query);

        if let Some(cached) = self.cache.get(&key).await {
            return Ok(cached);
        }

        let places = self.provider.search_nearby(query).await?;
        let entry = Arc::new(places);

        self.cache.insert(key, entry.clone()).await;

        Ok(entry)
    }

    /// Access the underlying provider for operations that bypass cache.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Get cache statistics.
    pub fn cache_entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_cache(&self) {
        self.cache.invalidate_all();
    }
}
