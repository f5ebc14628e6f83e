use std::sync::Arc;

use crate::application::services::{ResolutionService, ShortenerService};
use crate::domain::log_event::LogSink;
use crate::infrastructure::registry::InMemoryEntryStore;

/// Shared application state injected into all handlers.
#[derive(Clone)]
pub struct AppState {
    pub shortener: Arc<ShortenerService<InMemoryEntryStore>>,
    pub resolver: Arc<ResolutionService<InMemoryEntryStore>>,
    pub base_url: String,
    pub sink: LogSink,
}

impl AppState {
    /// Constructs the full short URL for a code.
    pub fn short_link(&self, code: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), code)
    }
}
