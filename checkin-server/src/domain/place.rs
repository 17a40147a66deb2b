//! Place types.

use std::fmt;

use super::GeoPoint;

/// Error returned when parsing an invalid place identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid place id: {reason}")]
pub struct InvalidPlaceId {
    reason: &'static str,
}

/// An opaque place identifier assigned by the upstream search provider.
///
/// Provider ids are arbitrary non-empty strings; this type only guarantees
/// non-emptiness and the absence of surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlaceId(String);

impl PlaceId {
    /// Parse a place id from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidPlaceId> {
        if s.is_empty() {
            return Err(InvalidPlaceId {
                reason: "must not be empty",
            });
        }
        if s.trim() != s {
            return Err(InvalidPlaceId {
                reason: "must not have surrounding whitespace",
            });
        }
        Ok(PlaceId(s.to_string()))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A place returned by the upstream search provider, prior to ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    /// Provider-assigned identifier.
    pub id: PlaceId,

    /// Display name.
    pub name: String,

    /// Geographic location.
    pub location: GeoPoint,

    /// Street address or vicinity description, if the provider supplied one.
    pub address: Option<String>,

    /// Provider category tags (e.g. "restaurant", "cafe").
    pub kinds: Vec<String>,
}
