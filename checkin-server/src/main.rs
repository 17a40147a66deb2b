use std::net::SocketAddr;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use checkin_server::auth::MemorySessions;
use checkin_server::cache::{CacheConfig, CachedPlacesClient};
use checkin_server::domain::UserId;
use checkin_server::places::{GooglePlacesClient, GooglePlacesConfig};
use checkin_server::store::MemoryCheckInStore;
use checkin_server::web::{AppState, SharedPlaces, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Get the Places API key from the environment (fail fast without it)
    let api_key = match std::env::var("GOOGLE_MAPS_API_KEY") {
        Ok(key) if !key.is_empty() => key,
        _ => {
            error!("GOOGLE_MAPS_API_KEY is not set; nearby search cannot work");
            std::process::exit(1);
        }
    };

    // Create the places client
    let places_config = GooglePlacesConfig::new(&api_key);
    let places_client =
        GooglePlacesClient::new(places_config).expect("Failed to create places client");

    // Create cached client
    let cache_config = CacheConfig::default();
    let cached_places: SharedPlaces = CachedPlacesClient::new(places_client, &cache_config);

    // In-memory collaborators; real deployments swap these for external services
    let checkins = MemoryCheckInStore::new();
    let sessions = MemorySessions::new();

    // Optionally mint a development session so the API is usable out of the box
    if let Ok(dev_user) = std::env::var("CHECKIN_DEV_USER") {
        match UserId::parse(&dev_user) {
            Ok(user) => {
                let token = sessions.issue(&user).await;
                info!("dev session for {user}: Bearer {token}");
            }
            Err(e) => warn!("ignoring CHECKIN_DEV_USER: {e}"),
        }
    }

    // Build app state
    let state = AppState::new(cached_places, checkins, sessions);

    // Create router
    let app = create_router(state);

    // Bind and serve
    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    println!("Check-in tracker listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET    /health             - Health check");
    println!("  POST   /api/places/nearby  - Search and rank nearby places");
    println!("  GET    /api/checkins       - List your check-ins");
    println!("  POST   /api/checkins       - Record a check-in");
    println!("  PUT    /api/checkins/:id   - Update a check-in");
    println!("  DELETE /api/checkins/:id   - Delete a check-in");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
