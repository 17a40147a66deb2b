//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use chrono::Utc;
use tracing::{debug, error, warn};

use crate::auth::SessionVerifier;
use crate::domain::{CheckInId, DishText, GeoPoint, NoteText, PlaceId, UserId};
use crate::places::{DEFAULT_RADIUS_METERS, NearbyQuery, PlacesError, PlacesProvider};
use crate::ranking::rank_places;
use crate::store::{CheckInDraft, CheckInStore, StoreError};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router<P>(state: AppState<P>) -> Router
where
    P: PlacesProvider + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health))
        .route("/api/places/nearby", post(nearby_search::<P>))
        .route("/api/checkins", get(list_checkins::<P>).post(create_checkin::<P>))
        .route(
            "/api/checkins/:id",
            put(update_checkin::<P>).delete(delete_checkin::<P>),
        )
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Search nearby places and re-rank them by the hybrid score.
async fn nearby_search<P: PlacesProvider>(
    State(state): State<AppState<P>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, AppError> {
    let user = authenticate(state.sessions.as_ref(), &headers).await?;

    let req: NearbyRequest = parse_json(&body)?;

    let origin = GeoPoint::new(req.lat, req.lng).map_err(|_| AppError::BadRequest {
        message:
            "Invalid coordinates: lat must be between -90 and 90, lng must be between -180 and 180"
                .to_string(),
    })?;

    let radius = req.radius.unwrap_or(DEFAULT_RADIUS_METERS);
    if !radius.is_finite() || radius <= 0.0 {
        return Err(AppError::BadRequest {
            message: "radius must be a positive number of meters".to_string(),
        });
    }

    let mut query = NearbyQuery::new(origin).with_radius(radius);
    if let Some(kind) = req.kind {
        query = query.with_kind(kind);
    }
    if let Some(keyword) = req.keyword {
        query = query.with_keyword(keyword);
    }

    let candidates = state.places.search_nearby(&query).await?;
    let ranked = rank_places(origin, &candidates, radius);

    debug!(
        user = %user,
        candidates = candidates.len(),
        returned = ranked.len(),
        "nearby search ranked"
    );

    let places = ranked.iter().map(PlaceView::from_ranked).collect();
    Ok(Json(NearbyResponse { places }).into_response())
}

/// List the caller's check-ins, most recent visit first.
async fn list_checkins<P: PlacesProvider>(
    State(state): State<AppState<P>>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let user = authenticate(state.sessions.as_ref(), &headers).await?;

    let checkins = state.checkins.list_for_user(&user).await?;
    let check_ins = checkins.iter().map(CheckInView::from_checkin).collect();

    Ok(Json(CheckInListResponse { check_ins }).into_response())
}

/// Record a new check-in.
async fn create_checkin<P: PlacesProvider>(
    State(state): State<AppState<P>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, AppError> {
    let user = authenticate(state.sessions.as_ref(), &headers).await?;

    let body: CheckInBody = parse_json(&body)?;
    let draft = validate_draft(body)?;

    let created = state.checkins.create(&user, draft).await?;

    Ok((StatusCode::CREATED, Json(CheckInView::from_checkin(&created))).into_response())
}

/// Replace an existing check-in.
async fn update_checkin<P: PlacesProvider>(
    State(state): State<AppState<P>>,
    headers: HeaderMap,
    Path(id): Path<u64>,
    body: Bytes,
) -> Result<Response, AppError> {
    let user = authenticate(state.sessions.as_ref(), &headers).await?;

    let body: CheckInBody = parse_json(&body)?;
    let draft = validate_draft(body)?;

    let updated = state.checkins.update(&user, CheckInId(id), draft).await?;

    Ok(Json(CheckInView::from_checkin(&updated)).into_response())
}

/// Delete a check-in.
async fn delete_checkin<P: PlacesProvider>(
    State(state): State<AppState<P>>,
    headers: HeaderMap,
    Path(id): Path<u64>,
) -> Result<Response, AppError> {
    let user = authenticate(state.sessions.as_ref(), &headers).await?;

    state.checkins.delete(&user, CheckInId(id)).await?;

    Ok(Json(DeleteResponse { success: true }).into_response())
}

/// Extract a bearer token from the Authorization header.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .filter(|t| !t.is_empty())
}

/// Resolve the caller's session, or fail with 401.
async fn authenticate<S: SessionVerifier>(
    sessions: &S,
    headers: &HeaderMap,
) -> Result<UserId, AppError> {
    let token = bearer_token(headers).ok_or(AppError::Unauthorized)?;
    sessions.verify(token).await.ok_or(AppError::Unauthorized)
}

/// Parse a JSON body, mapping failures to 400.
fn parse_json<T: serde::de::DeserializeOwned>(body: &Bytes) -> Result<T, AppError> {
    serde_json::from_slice(body).map_err(|e| {
        debug!("JSON parse error: {e}");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })
}

/// Validate a check-in body into a draft the store accepts.
fn validate_draft(body: CheckInBody) -> Result<CheckInDraft, AppError> {
    let place_id = PlaceId::parse(&body.place_id).map_err(|_| AppError::BadRequest {
        message: "placeId is required and must be a non-empty string".to_string(),
    })?;

    if body.place_name.is_empty() {
        return Err(AppError::BadRequest {
            message: "placeName is required and must be a non-empty string".to_string(),
        });
    }

    let location = GeoPoint::new(body.lat, body.lng).map_err(|_| AppError::BadRequest {
        message:
            "Invalid coordinates: lat must be between -90 and 90, lng must be between -180 and 180"
                .to_string(),
    })?;

    let dish = DishText::parse(&body.dish_text).map_err(|e| AppError::BadRequest {
        message: e.to_string(),
    })?;

    let note = body
        .note_text
        .as_deref()
        .map(NoteText::parse)
        .transpose()
        .map_err(|e| AppError::BadRequest {
            message: e.to_string(),
        })?;

    Ok(CheckInDraft {
        place_id,
        place_name: body.place_name,
        location,
        dish,
        note,
        visited_at: body.visit_datetime.unwrap_or_else(Utc::now),
    })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Unauthorized,
    NotFound { message: String },
    Internal { message: String },
}

impl From<PlacesError> for AppError {
    fn from(e: PlacesError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound => AppError::NotFound {
                message: "Check-in not found".to_string(),
            },
            StoreError::Backend(msg) => AppError::Internal { message: msg },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized".to_string()),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        match status {
            StatusCode::INTERNAL_SERVER_ERROR => error!("[{status}] {message}"),
            _ => warn!("[{status}] {message}"),
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::MemorySessions;
    use crate::cache::{CacheConfig, CachedPlacesClient};
    use crate::domain::Place;
    use crate::places::MockPlacesClient;
    use crate::store::MemoryCheckInStore;
    use axum::body::to_bytes;
    use axum::http::HeaderValue;

    fn headers_with(token: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
        );
        headers
    }

    fn body(dish: &str, note: Option<&str>) -> CheckInBody {
        CheckInBody {
            place_id: "place-1".to_string(),
            place_name: "Joe's Pizza".to_string(),
            lat: 40.73,
            lng: -73.99,
            dish_text: dish.to_string(),
            note_text: note.map(|s| s.to_string()),
            visit_datetime: None,
        }
    }

    #[test]
    fn bearer_token_extraction() {
        assert_eq!(bearer_token(&headers_with("abc123")), Some("abc123"));
        assert_eq!(bearer_token(&HeaderMap::new()), None);

        let mut basic = HeaderMap::new();
        basic.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Basic dXNlcjpwYXNz"),
        );
        assert_eq!(bearer_token(&basic), None);

        assert_eq!(bearer_token(&headers_with("")), None);
    }

    #[tokio::test]
    async fn authenticate_accepts_issued_token() {
        let sessions = MemorySessions::new();
        let alice = UserId::parse("alice").unwrap();
        let token = sessions.issue(&alice).await;

        let user = authenticate(&sessions, &headers_with(&token)).await.unwrap();
        assert_eq!(user, alice);
    }

    #[tokio::test]
    async fn authenticate_rejects_unknown_token() {
        let sessions = MemorySessions::new();
        let result = authenticate(&sessions, &headers_with("bogus")).await;
        assert!(matches!(result, Err(AppError::Unauthorized)));
    }

    #[tokio::test]
    async fn authenticate_rejects_missing_header() {
        let sessions = MemorySessions::new();
        let result = authenticate(&sessions, &HeaderMap::new()).await;
        assert!(matches!(result, Err(AppError::Unauthorized)));
    }

    #[test]
    fn valid_draft_passes() {
        let draft = validate_draft(body("Margherita", Some("extra basil"))).unwrap();
        assert_eq!(draft.dish.as_str(), "Margherita");
        assert_eq!(draft.note.unwrap().as_str(), "extra basil");
    }

    #[test]
    fn missing_visit_time_defaults_to_now() {
        let before = Utc::now();
        let draft = validate_draft(body("Margherita", None)).unwrap();
        assert!(draft.visited_at >= before);
    }

    #[test]
    fn over_long_dish_is_rejected() {
        let long = "x".repeat(101);
        let result = validate_draft(body(&long, None));
        assert!(matches!(result, Err(AppError::BadRequest { .. })));
    }

    #[test]
    fn over_long_note_is_rejected() {
        let long = "x".repeat(501);
        let result = validate_draft(body("ok", Some(&long)));
        assert!(matches!(result, Err(AppError::BadRequest { .. })));
    }

    #[test]
    fn bad_coordinates_are_rejected() {
        let mut b = body("ok", None);
        b.lat = 91.0;
        assert!(matches!(validate_draft(b), Err(AppError::BadRequest { .. })));
    }

    #[test]
    fn empty_place_name_is_rejected() {
        let mut b = body("ok", None);
        b.place_name = String::new();
        assert!(matches!(validate_draft(b), Err(AppError::BadRequest { .. })));
    }

    #[test]
    fn error_status_mapping() {
        let resp = AppError::Unauthorized.into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let resp = AppError::BadRequest {
            message: "nope".into(),
        }
        .into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = AppError::NotFound {
            message: "gone".into(),
        }
        .into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn store_not_found_maps_to_404() {
        let err: AppError = StoreError::NotFound.into();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[test]
    fn parse_json_reports_bad_bodies() {
        let result: Result<NearbyRequest, _> = parse_json(&Bytes::from_static(b"not json"));
        assert!(matches!(result, Err(AppError::BadRequest { .. })));
    }

    fn state_with(places: Vec<Place>) -> AppState<MockPlacesClient> {
        AppState::new(
            CachedPlacesClient::new(
                MockPlacesClient::from_places(places),
                &CacheConfig::default(),
            ),
            MemoryCheckInStore::new(),
            MemorySessions::new(),
        )
    }

    async fn session_for(state: &AppState<MockPlacesClient>, user: &str) -> HeaderMap {
        let user = UserId::parse(user).unwrap();
        let token = state.sessions.issue(&user).await;
        headers_with(&token)
    }

    async fn json_body(resp: Response) -> serde_json::Value {
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    /// A place roughly `meters` north of the test origin.
    fn place_at(id: &str, meters: f64) -> Place {
        let lat = 40.7128 + meters / 111_195.0;
        Place {
            id: PlaceId::parse(id).unwrap(),
            name: format!("Place {id}"),
            location: GeoPoint::new(lat, -74.006).unwrap(),
            address: None,
            kinds: vec!["restaurant".to_string()],
        }
    }

    fn checkin_payload(dish: &str) -> Bytes {
        let payload = serde_json::json!({
            "placeId": "place-1",
            "placeName": "Joe's Pizza",
            "lat": 40.73,
            "lng": -73.99,
            "dishText": dish,
        });
        Bytes::from(payload.to_string())
    }

    #[tokio::test]
    async fn create_checkin_returns_201() {
        let state = state_with(Vec::new());
        let headers = session_for(&state, "alice").await;

        let resp = create_checkin(State(state), headers, checkin_payload("Margherita"))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body = json_body(resp).await;
        assert_eq!(body["placeId"], "place-1");
        assert_eq!(body["dishText"], "Margherita");
        assert!(body["visitDatetime"].is_string());
    }

    #[tokio::test]
    async fn handlers_require_a_session() {
        let state = state_with(Vec::new());
        let no_auth = HeaderMap::new();

        let resp = list_checkins(State(state.clone()), no_auth.clone())
            .await
            .into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(json_body(resp).await["error"], "Unauthorized");

        let resp = nearby_search(State(state.clone()), no_auth.clone(), Bytes::new())
            .await
            .into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let resp = delete_checkin(State(state), no_auth, Path(0))
            .await
            .into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn nearby_search_ranks_through_the_handler() {
        // Provider order puts the far place first; proximity should
        // reorder the response
        let state = state_with(vec![place_at("far-relevant", 800.0), place_at("near", 100.0)]);
        let headers = session_for(&state, "alice").await;

        let payload = serde_json::json!({ "lat": 40.7128, "lng": -74.006, "radius": 1000.0 });
        let resp = nearby_search(State(state), headers, Bytes::from(payload.to_string()))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = json_body(resp).await;
        let places = body["places"].as_array().unwrap();
        assert_eq!(places.len(), 2);
        assert_eq!(places[0]["placeId"], "near");
        assert_eq!(places[0]["distanceDisplay"], "100m");
        assert!(
            places[0]["score"].as_f64().unwrap() > places[1]["score"].as_f64().unwrap()
        );
    }

    #[tokio::test]
    async fn nearby_search_rejects_bad_coordinates() {
        let state = state_with(Vec::new());
        let headers = session_for(&state, "alice").await;

        let payload = serde_json::json!({ "lat": 95.0, "lng": 0.0 });
        let resp = nearby_search(State(state), headers, Bytes::from(payload.to_string()))
            .await
            .into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn checkin_crud_through_handlers() {
        let state = state_with(Vec::new());
        let headers = session_for(&state, "alice").await;

        let created = create_checkin(
            State(state.clone()),
            headers.clone(),
            checkin_payload("Ramen"),
        )
        .await
        .unwrap();
        let id: u64 = json_body(created).await["id"]
            .as_str()
            .unwrap()
            .parse()
            .unwrap();

        let listed = list_checkins(State(state.clone()), headers.clone())
            .await
            .unwrap();
        let body = json_body(listed).await;
        assert_eq!(body["checkIns"].as_array().unwrap().len(), 1);

        let deleted = delete_checkin(State(state.clone()), headers.clone(), Path(id))
            .await
            .unwrap();
        assert_eq!(json_body(deleted).await["success"], true);

        let missing = delete_checkin(State(state), headers, Path(id))
            .await
            .into_response();
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    }
}
