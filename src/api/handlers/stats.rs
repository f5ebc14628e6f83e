//! Handler for per-code statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Retrieves statistics for a specific shortcode.
///
/// # Endpoint
///
/// `GET /shorturls/{code}`
///
/// # Response
///
/// Entry metadata, total click count, and the full click log in
/// chronological order. Expired entries remain queryable.
///
/// # Errors
///
/// Returns 404 Not Found if the shortcode doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let entry = state.resolver.get_stats(&code).await?;

    Ok(Json(StatsResponse::from(entry)))
}
