//! Places provider error types.

use std::fmt;

/// Errors from a places search provider.
#[derive(Debug)]
pub enum PlacesError {
    /// HTTP request failed (network error, timeout, etc.)
    Http(reqwest::Error),

    /// JSON deserialization failed
    Json {
        message: String,
        body: Option<String>,
    },

    /// Provider returned an HTTP error status code
    ApiError { status: u16, message: String },

    /// Provider accepted the request but reported a failure status
    /// in the response body (e.g. "REQUEST_DENIED")
    ProviderStatus { status: String, message: Option<String> },

    /// Rate limited by the provider
    RateLimited,

    /// Invalid or missing API key
    Unauthorized,

    /// Provider not configured (e.g. no API key)
    NotConfigured(String),
}

impl fmt::Display for PlacesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacesError::Http(e) => write!(f, "HTTP error: {e}"),
            PlacesError::Json { message, body } => {
                write!(f, "JSON parse error: {message}")?;
                if let Some(body) = body {
                    write!(f, " (body: {body})")?;
                }
                Ok(())
            }
            PlacesError::ApiError { status, message } => {
                write!(f, "API error {status}: {message}")
            }
            PlacesError::ProviderStatus { status, message } => {
                write!(f, "provider status {status}")?;
                if let Some(message) = message {
                    write!(f, ": {message}")?;
                }
                Ok(())
            }
            PlacesError::RateLimited => write!(f, "rate limited by places provider"),
            PlacesError::Unauthorized => write!(f, "unauthorized (invalid API key)"),
            PlacesError::NotConfigured(msg) => write!(f, "not configured: {msg}"),
        }
    }
}

impl std::error::Error for PlacesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlacesError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for PlacesError {
    fn from(err: reqwest::Error) -> Self {
        PlacesError::Http(err)
    }
}
