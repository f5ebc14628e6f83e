//! Handler for the create-short-URL endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a shortened URL.
///
/// # Endpoint
///
/// `POST /shorturls`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com/some/long/path",
///   "validity": 30,          // optional, minutes
///   "shortcode": "promo1"    // optional custom code
/// }
/// ```
///
/// # Response
///
/// `201 Created` with the constructed short link and expiry:
///
/// ```json
/// {
///   "shortLink": "http://localhost:3000/promo1",
///   "expiry": "2026-01-01T12:30:00Z"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 for missing/invalid URL, validity, or code format; 409 when
/// the shortcode is taken; 500 when generation is exhausted.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let entry = state
        .shortener
        .create_short_url(&payload.url, payload.validity, payload.shortcode)
        .await?;

    let response = ShortenResponse {
        short_link: state.short_link(&entry.shortcode),
        expiry: entry.expires_at,
    };

    Ok((StatusCode::CREATED, Json(response)))
}
