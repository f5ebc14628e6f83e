//! Handler for short URL redirect.

use axum::{
    extract::{ConnectInfo, Path, State},
    http::{HeaderMap, header},
    response::{IntoResponse, Redirect},
};
use std::net::SocketAddr;

use crate::domain::entities::ClickContext;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a shortcode to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Look up the code in the registry
/// 2. Reject expired entries with 410 Gone (no click recorded)
/// 3. Record a click built from `Referer`, `User-Agent`, and the peer
///    address
/// 4. Return 307 Temporary Redirect
///
/// # Errors
///
/// Returns 404 Not Found if the shortcode doesn't exist and 410 Gone when
/// it has expired.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Result<impl IntoResponse, AppError> {
    let context = ClickContext::new(
        headers.get(header::REFERER).and_then(|v| v.to_str().ok()),
        headers
            .get(header::USER_AGENT)
            .and_then(|v| v.to_str().ok()),
        Some(addr.ip().to_string()),
    );

    let destination = state.resolver.resolve(&code, context).await?;

    Ok(Redirect::temporary(&destination))
}
