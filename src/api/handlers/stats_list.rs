//! Handler for the listing endpoint.

use axum::{Json, extract::State};

use crate::api::dto::stats_list::EntrySummary;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all entries in insertion order.
///
/// # Endpoint
///
/// `GET /shorturls`
///
/// # Response
///
/// Array of entry summaries with constructed short links. No expiry
/// filtering — expired entries are listed too.
pub async fn stats_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<EntrySummary>>, AppError> {
    let entries = state.resolver.list_stats().await?;

    let items = entries
        .into_iter()
        .map(|entry| {
            let short_link = state.short_link(&entry.shortcode);
            EntrySummary::from_entry(entry, short_link)
        })
        .collect();

    Ok(Json(items))
}
