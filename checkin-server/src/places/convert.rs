//! Conversion from provider wire types to domain types.

use crate::domain::{GeoPoint, Place, PlaceId};

use super::types::{NearbySearchResponse, PlaceResult};

/// Error converting a wire response into domain types.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConversionError {
    /// Place id was empty or malformed
    #[error("invalid place id in result {index}: {reason}")]
    InvalidPlaceId { index: usize, reason: String },

    /// Coordinates were outside valid geographic ranges
    #[error("invalid coordinates in result {index} ({name}): {reason}")]
    InvalidCoordinates {
        index: usize,
        name: String,
        reason: String,
    },
}

/// Convert a full nearby-search response into domain places.
///
/// Preserves the provider's ordering, which the ranking pipeline uses as
/// the relevance position. The caller has already checked the provider
/// status, so a response passed here is "OK" or "ZERO_RESULTS".
pub fn convert_search_response(
    response: &NearbySearchResponse,
) -> Result<Vec<Place>, ConversionError> {
    response
        .results
        .iter()
        .enumerate()
        .map(|(index, result)| convert_place(result, index))
        .collect()
}

fn convert_place(result: &PlaceResult, index: usize) -> Result<Place, ConversionError> {
    let id = PlaceId::parse(&result.place_id).map_err(|e| ConversionError::InvalidPlaceId {
        index,
        reason: e.to_string(),
    })?;

    let location = GeoPoint::new(result.geometry.location.lat, result.geometry.location.lng)
        .map_err(|e| ConversionError::InvalidCoordinates {
            index,
            name: result.name.clone(),
            reason: e.to_string(),
        })?;

    Ok(Place {
        id,
        name: result.name.clone(),
        location,
        address: result.vicinity.clone(),
        kinds: result.types.clone(),
    })
}
