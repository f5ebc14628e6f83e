//! DTOs for the listing endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::UrlEntry;

/// Summary of one entry, as returned by the listing endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntrySummary {
    pub shortcode: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expiry_date: DateTime<Utc>,
    pub total_clicks: u64,
    pub short_link: String,
}

impl EntrySummary {
    pub fn from_entry(entry: UrlEntry, short_link: String) -> Self {
        Self {
            shortcode: entry.shortcode,
            original_url: entry.original_url,
            created_at: entry.created_at,
            expiry_date: entry.expires_at,
            total_clicks: entry.click_count,
            short_link,
        }
    }
}
