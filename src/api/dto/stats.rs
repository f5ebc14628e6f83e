//! DTOs for per-code statistics.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::clicks::ClickInfo;
use crate::domain::entities::UrlEntry;

/// Detailed statistics for one shortcode.
///
/// Served for expired entries too: expiry gates redirection, not
/// visibility.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub shortcode: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expiry_date: DateTime<Utc>,
    pub total_clicks: u64,
    pub click_data: Vec<ClickInfo>,
}

impl From<UrlEntry> for StatsResponse {
    fn from(entry: UrlEntry) -> Self {
        Self {
            shortcode: entry.shortcode,
            original_url: entry.original_url,
            created_at: entry.created_at,
            expiry_date: entry.expires_at,
            total_clicks: entry.click_count,
            click_data: entry.clicks.into_iter().map(ClickInfo::from).collect(),
        }
    }
}
