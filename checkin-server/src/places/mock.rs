//! Mock places provider for testing without API access.
//!
//! Loads fixture places from JSON files and serves nearby searches
//! against them, so the rest of the stack can run without real Google
//! API credentials.

use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Deserialize;

use crate::domain::{GeoPoint, Place, PlaceId, distance_meters};

use super::error::PlacesError;
use super::provider::{NearbyQuery, PlacesProvider};

/// One fixture place as stored on disk.
#[derive(Debug, Deserialize)]
struct MockPlace {
    place_id: String,
    name: String,
    lat: f64,
    lng: f64,
    #[serde(default)]
    address: Option<String>,
    #[serde(default)]
    types: Vec<String>,
}

/// Mock provider that serves fixture data.
///
/// `search_nearby` returns the fixture places within the query radius,
/// preserving fixture order (which stands in for provider relevance).
/// Category and keyword filters are honoured so handler code paths match
/// the real client.
#[derive(Debug, Clone)]
pub struct MockPlacesClient {
    places: Arc<Vec<Place>>,
    calls: Arc<AtomicU64>,
}

impl MockPlacesClient {
    /// Create a mock client by loading every `.json` file in a directory.
    ///
    /// Each file holds a JSON array of places. Files are loaded in
    /// lexicographic order so fixture order is deterministic.
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self, PlacesError> {
        let data_dir = data_dir.as_ref();

        let entries = std::fs::read_dir(data_dir).map_err(|e| PlacesError::ApiError {
            status: 0,
            message: format!("Failed to read mock data directory: {}", e),
        })?;

        let mut paths: Vec<_> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("json")
            })
            .collect();
        paths.sort();

        let mut places = Vec::new();
        for path in paths {
            let json = std::fs::read_to_string(&path).map_err(|e| PlacesError::ApiError {
                status: 0,
                message: format!("Failed to read {:?}: {}", path, e),
            })?;

            let raw: Vec<MockPlace> =
                serde_json::from_str(&json).map_err(|e| PlacesError::ApiError {
                    status: 0,
                    message: format!("Failed to parse {:?}: {}", path, e),
                })?;

            for mock in raw {
                places.push(convert_mock(&mock, &path)?);
            }
        }

        if places.is_empty() {
            return Err(PlacesError::ApiError {
                status: 0,
                message: format!("No mock places found in {:?}", data_dir),
            });
        }

        Ok(Self {
            places: Arc::new(places),
            calls: Arc::new(AtomicU64::new(0)),
        })
    }

    /// Create a mock client directly from places (for tests).
    pub fn from_places(places: Vec<Place>) -> Self {
        Self {
            places: Arc::new(places),
            calls: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Number of searches served so far.
    pub fn call_count(&self) -> u64 {
        self.calls.load(Ordering::Relaxed)
    }
}

fn convert_mock(mock: &MockPlace, path: &Path) -> Result<Place, PlacesError> {
    let id = PlaceId::parse(&mock.place_id).map_err(|e| PlacesError::ApiError {
        status: 0,
        message: format!("Invalid place id in {:?}: {}", path, e),
    })?;

    let location = GeoPoint::new(mock.lat, mock.lng).map_err(|e| PlacesError::ApiError {
        status: 0,
        message: format!("Invalid coordinates in {:?}: {}", path, e),
    })?;

    Ok(Place {
        id,
        name: mock.name.clone(),
        location,
        address: mock.address.clone(),
        kinds: mock.types.clone(),
    })
}

impl PlacesProvider for MockPlacesClient {
    async fn search_nearby(&self, query: &NearbyQuery) -> Result<Vec<Place>, PlacesError> {
        self.calls.fetch_add(1, Ordering::Relaxed);

        let results = self
            .places
            .iter()
            .filter(|p| distance_meters(query.origin, p.location) <= query.radius_meters)
            .filter(|p| match &query.kind {
                Some(kind) => p.kinds.iter().any(|k| k == kind),
                None => true,
            })
            .filter(|p| match &query.keyword {
                Some(keyword) => p.name.to_lowercase().contains(&keyword.to_lowercase()),
                None => true,
            })
            .cloned()
            .collect();

        Ok(results)
    }
}
