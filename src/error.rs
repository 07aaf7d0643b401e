//! Error types for the Bitstamp client library.

use thiserror::Error;

/// The main error type for all Bitstamp client operations.
#[derive(Error, Debug)]
pub enum BitstampError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP request with middleware failed
    #[error("HTTP request failed: {0}")]
    HttpMiddleware(#[from] reqwest_middleware::Error),

    /// Non-200 status returned by the API, with the raw response body
    #[error("Bitstamp error {status}: {body}")]
    Status {
        /// The HTTP status code
        status: u16,
        /// The raw response body, verbatim
        body: String,
    },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Bitstamp API flagged an error in a well-formed response
    #[error("Bitstamp API error: {0}")]
    Api(ApiError),

    /// Authentication error
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Invalid response from the API
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Request timed out waiting for the connection to produce data
    #[error("Request timed out")]
    Timeout,

    /// Missing required credentials
    #[error("Missing credentials: API key, secret and customer ID required for private endpoints")]
    MissingCredentials,
}

/// An application-level error flagged by the Bitstamp API.
///
/// Bitstamp signals failure inside an otherwise successful (HTTP 200)
/// response, either as `{"error": "..."}` or as
/// `{"status": "error", "reason": ...}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// Human-readable reason extracted from the response
    pub reason: String,
    /// The full response body the error was carried in
    pub body: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.reason)
    }
}

impl ApiError {
    /// Create a new API error from a reason and the raw body it came from.
    pub fn new(reason: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
            body: body.into(),
        }
    }

    /// Extract an API error from a parsed response body, if it flags one.
    ///
    /// Returns `None` for bodies that do not carry an error marker.
    pub fn from_body(value: &serde_json::Value, body: &str) -> Option<Self> {
        if let Some(error) = value.get("error") {
            if !error.is_null() {
                let reason = match error.as_str() {
                    Some(s) => s.to_string(),
                    None => error.to_string(),
                };
                return Some(Self::new(reason, body));
            }
        }
        if value.get("status").and_then(|s| s.as_str()) == Some("error") {
            let reason = value
                .get("reason")
                .map(|r| match r.as_str() {
                    Some(s) => s.to_string(),
                    None => r.to_string(),
                })
                .unwrap_or_else(|| "unknown error".to_string());
            return Some(Self::new(reason, body));
        }
        None
    }

    /// Check if this is an invalid nonce error.
    pub fn is_invalid_nonce(&self) -> bool {
        self.reason.contains("Invalid nonce")
    }

    /// Check if this is an invalid signature error.
    pub fn is_invalid_signature(&self) -> bool {
        self.reason.contains("Invalid signature")
    }

    /// Check if this is an API-key permission error.
    pub fn is_permission_denied(&self) -> bool {
        self.reason.contains("API key not found")
            || self.reason.contains("No permission found")
    }
}
