//! Application state for the web layer.

use std::sync::Arc;

use crate::auth::MemorySessions;
use crate::cache::CachedPlacesClient;
use crate::places::{GooglePlacesClient, PlacesProvider};
use crate::store::MemoryCheckInStore;

/// The provider stack the server runs against.
pub type SharedPlaces = CachedPlacesClient<GooglePlacesClient>;

/// Shared application state.
///
/// Contains all the services needed to handle requests. Generic over the
/// places provider so tests can wire in a mock where `main` wires in the
/// real client.
pub struct AppState<P> {
    /// Cached places provider
    pub places: Arc<CachedPlacesClient<P>>,

    /// Check-in storage
    pub checkins: Arc<MemoryCheckInStore>,

    /// Session verifier
    pub sessions: Arc<MemorySessions>,
}

impl<P> Clone for AppState<P> {
    fn clone(&self) -> Self {
        Self {
            places: self.places.clone(),
            checkins: self.checkins.clone(),
            sessions: self.sessions.clone(),
        }
    }
}

impl<P: PlacesProvider> AppState<P> {
    /// Create a new app state.
    pub fn new(
        places: CachedPlacesClient<P>,
        checkins: MemoryCheckInStore,
        sessions: MemorySessions,
    ) -> Self {
        Self {
            places: Arc::new(places),
            checkins: Arc::new(checkins),
            sessions: Arc::new(sessions),
        }
    }
}
