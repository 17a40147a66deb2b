//! Provider abstraction for nearby-place search.

use std::future::Future;

use crate::domain::{GeoPoint, Place};

use super::error::PlacesError;

/// Default search radius in meters.
pub const DEFAULT_RADIUS_METERS: f64 = 1500.0;

/// Parameters for a nearby search.
#[derive(Debug, Clone)]
pub struct NearbyQuery {
    /// Search origin.
    pub origin: GeoPoint,

    /// Search radius in meters.
    pub radius_meters: f64,

    /// Optional category filter (e.g. "restaurant").
    pub kind: Option<String>,

    /// Optional free-text keyword filter.
    pub keyword: Option<String>,
}

impl NearbyQuery {
    /// Create a query around an origin with the default radius.
    pub fn new(origin: GeoPoint) -> Self {
        Self {
            origin,
            radius_meters: DEFAULT_RADIUS_METERS,
            kind: None,
            keyword: None,
        }
    }

    /// Set the search radius in meters.
    pub fn with_radius(mut self, meters: f64) -> Self {
        self.radius_meters = meters;
        self
    }

    /// Restrict results to a category.
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Add a keyword filter.
    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }
}

/// An upstream geographic search service.
///
/// One capability: given an origin and filters, return an ordered
/// candidate list. The order is the provider's own relevance judgment;
/// the ranking pipeline uses each candidate's index as its relevance
/// position. Implementations must not truncate below the upstream page
/// size, so the ranker sees the full raw result set.
pub trait PlacesProvider {
    /// Search for places near the query origin.
    fn search_nearby(
        &self,
        query: &NearbyQuery,
    ) -> impl Future<Output = Result<Vec<Place>, PlacesError>> + Send;
}
