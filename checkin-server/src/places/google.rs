//! Google Places HTTP client.
//!
//! Async client for the legacy Nearby Search endpoint. Handles API-key
//! authentication, bounded concurrency, and conversion to domain types.

use std::sync::Arc;

use tokio::sync::Semaphore;
use tracing::debug;

use crate::domain::Place;

use super::convert::convert_search_response;
use super::error::PlacesError;
use super::provider::{NearbyQuery, PlacesProvider};
use super::types::NearbySearchResponse;

/// Default base URL for the Google Places API.
const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place";

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 5;

/// Configuration for the Google Places client.
#[derive(Debug, Clone)]
pub struct GooglePlacesConfig {
    /// API key for authentication
    pub api_key: String,
    /// Base URL for the API (defaults to production)
    pub base_url: String,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl GooglePlacesConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Google Places API client.
///
/// Uses a semaphore to limit concurrent requests and avoid rate limiting.
#[derive(Debug, Clone)]
pub struct GooglePlacesClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    semaphore: Arc<Semaphore>,
}

impl GooglePlacesClient {
    /// Create a new client with the given configuration.
    pub fn new(config: GooglePlacesConfig) -> Result<Self, PlacesError> {
        if config.api_key.is_empty() {
            return Err(PlacesError::NotConfigured(
                "Google Places API key is required".to_string(),
            ));
        }

        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            api_key: config.api_key,
            semaphore: Arc::new(Semaphore::new(config.max_concurrent)),
        })
    }

    async fn nearby_request(&self, query: &NearbyQuery) -> Result<Vec<Place>, PlacesError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| PlacesError::ApiError {
                status: 0,
                message: "Semaphore closed".to_string(),
            })?;

        let url = format!("{}/nearbysearch/json", self.base_url);

        let mut params = vec![
            (
                "location",
                format!("{},{}", query.origin.lat(), query.origin.lng()),
            ),
            ("radius", format!("{}", query.radius_meters)),
            ("key", self.api_key.clone()),
        ];
        if let Some(kind) = &query.kind {
            params.push(("type", kind.clone()));
        }
        if let Some(keyword) = &query.keyword {
            params.push(("keyword", keyword.clone()));
        }

        let response = self.http.get(&url).query(&params).send().await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(PlacesError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(PlacesError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PlacesError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let parsed: NearbySearchResponse =
            serde_json::from_str(&body).map_err(|e| PlacesError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        // The provider signals most failures through the body status,
        // not the HTTP status code
        match parsed.status.as_str() {
            "OK" | "ZERO_RESULTS" => {}
            "OVER_QUERY_LIMIT" => return Err(PlacesError::RateLimited),
            "REQUEST_DENIED" => return Err(PlacesError::Unauthorized),
            other => {
                return Err(PlacesError::ProviderStatus {
                    status: other.to_string(),
                    message: parsed.error_message.clone(),
                });
            }
        }

        debug!(
            results = parsed.results.len(),
            status = %parsed.status,
            "nearby search completed"
        );

        convert_search_response(&parsed).map_err(|e| PlacesError::Json {
            message: e.to_string(),
            body: None,
        })
    }
}

impl PlacesProvider for GooglePlacesClient {
    async fn search_nearby(&self, query: &NearbyQuery) -> Result<Vec<Place>, PlacesError> {
        self.nearby_request(query).await
    }
}
