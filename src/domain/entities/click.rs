//! Click event recorded on a successful resolution.

use chrono::{DateTime, Utc};

/// Source value recorded when the request carried no referrer.
pub const DIRECT_SOURCE: &str = "direct";

/// One recorded resolution of a shortcode.
///
/// Client metadata is optional to handle missing headers gracefully; the
/// referring origin always collapses to [`DIRECT_SOURCE`] when absent.
#[derive(Debug, Clone)]
pub struct ClickEvent {
    pub timestamp: DateTime<Utc>,
    pub source: String,
    pub user_agent: Option<String>,
    pub ip: Option<String>,
}

impl ClickEvent {
    /// Builds a click event from the request context of a resolution.
    pub fn from_context(timestamp: DateTime<Utc>, context: ClickContext) -> Self {
        Self {
            timestamp,
            source: context
                .referer
                .unwrap_or_else(|| DIRECT_SOURCE.to_string()),
            user_agent: context.user_agent,
            ip: context.ip,
        }
    }
}

/// Request metadata captured by the redirect handler.
///
/// Carried from the HTTP boundary into the resolution service so the core
/// never touches headers directly.
#[derive(Debug, Clone, Default)]
pub struct ClickContext {
    pub referer: Option<String>,
    pub user_agent: Option<String>,
    pub ip: Option<String>,
}

impl ClickContext {
    pub fn new(referer: Option<&str>, user_agent: Option<&str>, ip: Option<String>) -> Self {
        Self {
            referer: referer.map(|s| s.to_string()),
            user_agent: user_agent.map(|s| s.to_string()),
            ip,
        }
    }
}
