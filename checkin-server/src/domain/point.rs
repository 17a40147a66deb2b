//! Geographic point type and great-circle distance.

use std::fmt;

/// Earth's mean radius in meters, used by the haversine formula.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Error returned when constructing a point from invalid coordinates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid coordinate: {reason}")]
pub struct InvalidCoordinate {
    reason: &'static str,
}

/// A validated geographic point.
///
/// Latitude is in `[-90, 90]` degrees and longitude in `[-180, 180]`
/// degrees; both are finite. This type guarantees that any `GeoPoint`
/// value is valid by construction, so downstream code (distance, ranking)
/// never has to re-check ranges.
///
/// # Examples
///
/// ```
/// use checkin_server::domain::GeoPoint;
///
/// let p = GeoPoint::new(51.5074, -0.1278).unwrap();
/// assert_eq!(p.lat(), 51.5074);
///
/// // Out-of-range latitude is rejected
/// assert!(GeoPoint::new(91.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    lat: f64,
    lng: f64,
}

impl GeoPoint {
    /// Construct a point from latitude and longitude in degrees.
    pub fn new(lat: f64, lng: f64) -> Result<Self, InvalidCoordinate> {
        if !lat.is_finite() || !lng.is_finite() {
            return Err(InvalidCoordinate {
                reason: "coordinates must be finite numbers",
            });
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(InvalidCoordinate {
                reason: "latitude must be between -90 and 90",
            });
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(InvalidCoordinate {
                reason: "longitude must be between -180 and 180",
            });
        }
        Ok(Self { lat, lng })
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lng(&self) -> f64 {
        self.lng
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lat, self.lng)
    }
}

/// Great-circle surface distance between two points, in meters.
///
/// Uses the haversine formula over a sphere of [`EARTH_RADIUS_METERS`].
/// Returns exactly 0 for identical points and is symmetric in its
/// arguments.
pub fn distance_meters(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_METERS * h.sqrt().asin()
}

/// Format a distance for display: meters below 1 km, kilometers with one
/// decimal place at or above.
///
/// The branch is chosen after rounding, so a distance like 999.7 m shows
/// as "1.0km" rather than "1000m".
pub fn format_distance(meters: f64) -> String {
    let rounded = meters.round();
    if rounded < 1000.0 {
        format!("{rounded}m")
    } else {
        format!("{:.1}km", meters / 1000.0)
    }
}
