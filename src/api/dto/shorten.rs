//! DTOs for the create-short-URL endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request to shorten a URL.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    /// The original URL to shorten. Defaults to empty so a missing field
    /// reports `MissingUrl` instead of a deserialization error.
    #[serde(default)]
    pub url: String,

    /// Lifetime in minutes. Must be positive when provided; defaults to 30.
    pub validity: Option<i64>,

    /// Optional custom shortcode (1-10 alphanumeric characters).
    pub shortcode: Option<String>,
}

/// Response for a created short URL.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub short_link: String,
    pub expiry: DateTime<Utc>,
}
