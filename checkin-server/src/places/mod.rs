//! Upstream geographic search providers.
//!
//! The server never talks to a specific vendor directly: everything goes
//! through the [`PlacesProvider`] trait, one capability ("given an origin
//! and filters, return an ordered candidate list"). The candidate order
//! is the provider's own relevance judgment and feeds the ranking
//! pipeline as each place's relevance position.

mod convert;
mod error;
mod google;
mod mock;
mod provider;
mod types;

pub use convert::ConversionError;
pub use error::PlacesError;
pub use google::{GooglePlacesClient, GooglePlacesConfig};
pub use mock::MockPlacesClient;
pub use provider::{DEFAULT_RADIUS_METERS, NearbyQuery, PlacesProvider};
pub use types::{Geometry, LatLng, NearbySearchResponse, PlaceResult};
