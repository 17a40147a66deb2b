//! Data transfer objects for web requests and responses.
//!
//! JSON field names are camelCase on the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{CheckIn, format_distance};
use crate::ranking::RankedPlace;

/// Request to search for nearby places.
#[derive(Debug, Deserialize)]
pub struct NearbyRequest {
    /// Search origin latitude in degrees
    pub lat: f64,

    /// Search origin longitude in degrees
    pub lng: f64,

    /// Search radius in meters (defaults to 1500)
    pub radius: Option<f64>,

    /// Optional category filter (e.g. "restaurant")
    #[serde(rename = "type")]
    pub kind: Option<String>,

    /// Optional keyword filter
    pub keyword: Option<String>,
}

/// A ranked place in search results.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceView {
    /// Provider-assigned place id
    pub place_id: String,

    /// Display name
    pub name: String,

    /// Latitude in degrees
    pub lat: f64,

    /// Longitude in degrees
    pub lng: f64,

    /// Street address or vicinity, if known
    pub address: Option<String>,

    /// Provider category tags
    pub types: Vec<String>,

    /// Distance from the search origin in meters
    pub distance_meters: f64,

    /// Human-readable distance ("250m", "1.5km")
    pub distance_display: String,

    /// Hybrid ranking score in [0, 1]
    pub score: f64,
}

impl PlaceView {
    /// Build a view from a ranked place.
    pub fn from_ranked(ranked: &RankedPlace) -> Self {
        Self {
            place_id: ranked.place.id.as_str().to_string(),
            name: ranked.place.name.clone(),
            lat: ranked.place.location.lat(),
            lng: ranked.place.location.lng(),
            address: ranked.place.address.clone(),
            types: ranked.place.kinds.clone(),
            distance_meters: ranked.distance_meters,
            distance_display: format_distance(ranked.distance_meters),
            score: ranked.score,
        }
    }
}

/// Response for nearby search.
#[derive(Debug, Serialize)]
pub struct NearbyResponse {
    /// Ranked places, best first
    pub places: Vec<PlaceView>,
}

/// Request body for creating or replacing a check-in.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInBody {
    /// Provider id of the place
    pub place_id: String,

    /// Place name at check-in time
    pub place_name: String,

    /// Place latitude in degrees
    pub lat: f64,

    /// Place longitude in degrees
    pub lng: f64,

    /// What was ordered (required, at most 100 characters)
    pub dish_text: String,

    /// Optional note (at most 500 characters)
    pub note_text: Option<String>,

    /// When the visit happened (defaults to now)
    pub visit_datetime: Option<DateTime<Utc>>,
}

/// A stored check-in in responses.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInView {
    pub id: String,
    pub place_id: String,
    pub place_name: String,
    pub lat: f64,
    pub lng: f64,
    pub dish_text: String,
    pub note_text: Option<String>,
    pub visit_datetime: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CheckInView {
    /// Build a view from a stored check-in.
    pub fn from_checkin(checkin: &CheckIn) -> Self {
        Self {
            id: checkin.id.to_string(),
            place_id: checkin.place_id.as_str().to_string(),
            place_name: checkin.place_name.clone(),
            lat: checkin.location.lat(),
            lng: checkin.location.lng(),
            dish_text: checkin.dish.as_str().to_string(),
            note_text: checkin.note.as_ref().map(|n| n.as_str().to_string()),
            visit_datetime: checkin.visited_at,
            created_at: checkin.created_at,
            updated_at: checkin.updated_at,
        }
    }
}

/// Response for listing check-ins.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInListResponse {
    pub check_ins: Vec<CheckInView>,
}

/// Response for a successful delete.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}

/// Error payload.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{GeoPoint, Place, PlaceId};

    #[test]
    fn nearby_request_accepts_type_key() {
        let req: NearbyRequest = serde_json::from_str(
            r#"{ "lat": 40.73, "lng": -73.99, "radius": 800, "type": "restaurant" }"#,
        )
        .unwrap();

        assert_eq!(req.lat, 40.73);
        assert_eq!(req.radius, Some(800.0));
        assert_eq!(req.kind.as_deref(), Some("restaurant"));
        assert!(req.keyword.is_none());
    }

    #[test]
    fn checkin_body_is_camel_case() {
        let body: CheckInBody = serde_json::from_str(
            r#"{
                "placeId": "abc",
                "placeName": "Joe's Pizza",
                "lat": 40.73,
                "lng": -73.99,
                "dishText": "Margherita",
                "noteText": "extra basil",
                "visitDatetime": "2026-08-30T12:00:00Z"
            }"#,
        )
        .unwrap();

        assert_eq!(body.place_id, "abc");
        assert_eq!(body.dish_text, "Margherita");
        assert_eq!(body.note_text.as_deref(), Some("extra basil"));
        assert!(body.visit_datetime.is_some());
    }

    #[test]
    fn place_view_serializes_camel_case() {
        let ranked = RankedPlace {
            place: Place {
                id: PlaceId::parse("abc").unwrap(),
                name: "Joe's Pizza".to_string(),
                location: GeoPoint::new(40.73, -73.99).unwrap(),
                address: None,
                kinds: vec!["restaurant".to_string()],
            },
            distance_meters: 250.0,
            score: 0.9,
        };

        let json = serde_json::to_value(PlaceView::from_ranked(&ranked)).unwrap();
        assert_eq!(json["placeId"], "abc");
        assert_eq!(json["distanceMeters"], 250.0);
        assert_eq!(json["distanceDisplay"], "250m");
        assert_eq!(json["score"], 0.9);
    }
}
