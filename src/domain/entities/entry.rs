//! Registry entry representing one shortened URL.

use chrono::{DateTime, Utc};

use crate::domain::entities::ClickEvent;

/// A shortened URL with its timestamps and click log.
///
/// The click log is owned exclusively by the entry: events are appended in
/// chronological order and never removed, and `click_count` equals the log
/// length at all times.
#[derive(Debug, Clone)]
pub struct UrlEntry {
    pub shortcode: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub click_count: u64,
    pub clicks: Vec<ClickEvent>,
}

impl UrlEntry {
    /// Creates a fresh entry with an empty click log.
    pub fn new(
        shortcode: String,
        original_url: String,
        created_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            shortcode,
            original_url,
            created_at,
            expires_at,
            click_count: 0,
            clicks: Vec::new(),
        }
    }

    /// Returns true if the entry has passed its expiry time.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Expiry check against an explicit instant.
    ///
    /// An entry is alive strictly before `expires_at`; at the boundary
    /// instant it is already expired.
    pub fn is_expired_at(&self, at: DateTime<Utc>) -> bool {
        at >= self.expires_at
    }

    /// Appends a click to the log and bumps the counter by exactly one.
    pub fn record(&mut self, click: ClickEvent) {
        self.clicks.push(click);
        self.click_count += 1;
        debug_assert_eq!(self.click_count as usize, self.clicks.len());
    }
}
