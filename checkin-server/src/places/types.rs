//! Wire types for the Google Places Nearby Search API.
//!
//! These mirror the JSON shape of the legacy Nearby Search endpoint.
//! They are deserialization targets only; conversion into domain types
//! happens in [`super::convert`].

use serde::Deserialize;

/// Top-level response from a nearby search request.
#[derive(Debug, Clone, Deserialize)]
pub struct NearbySearchResponse {
    /// Provider status: "OK", "ZERO_RESULTS", "REQUEST_DENIED", ...
    pub status: String,

    /// Candidate places, in the provider's relevance order.
    #[serde(default)]
    pub results: Vec<PlaceResult>,

    /// Human-readable detail accompanying a failure status.
    #[serde(default)]
    pub error_message: Option<String>,
}

/// One candidate place in a nearby search response.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceResult {
    pub place_id: String,
    pub name: String,
    pub geometry: Geometry,

    /// Simplified address ("vicinity" in the legacy API).
    #[serde(default)]
    pub vicinity: Option<String>,

    /// Category tags (e.g. "restaurant", "food").
    #[serde(default)]
    pub types: Vec<String>,
}

/// Geometry block of a place result.
#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    pub location: LatLng,
}

/// A latitude/longitude pair as the provider encodes it.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}
