//! Shortcode resolution and statistics service.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::entities::{ClickContext, ClickEvent, UrlEntry};
use crate::domain::log_event::{LogComponent, LogLevel, LogSink};
use crate::domain::repositories::EntryStore;
use crate::error::AppError;

/// Service resolving shortcodes and serving click statistics.
pub struct ResolutionService<S: EntryStore> {
    store: Arc<S>,
    sink: LogSink,
}

impl<S: EntryStore> ResolutionService<S> {
    pub fn new(store: Arc<S>, sink: LogSink) -> Self {
        Self { store, sink }
    }

    /// Resolves a shortcode to its destination URL, recording the click.
    ///
    /// Each lookup ends in one of three states: not found, expired, or
    /// resolved. A click is recorded only on the resolved path — expired
    /// entries are rejected without touching their statistics.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ShortcodeNotFound`] for unknown codes and
    /// [`AppError::UrlExpired`] past the expiry instant.
    pub async fn resolve(&self, code: &str, context: ClickContext) -> Result<String, AppError> {
        let Some(entry) = self.store.find_by_code(code).await? else {
            self.sink.emit(
                LogLevel::Warn,
                LogComponent::Handler,
                "Shortcode not found",
            );
            return Err(AppError::ShortcodeNotFound {
                code: code.to_string(),
            });
        };

        if entry.is_expired() {
            self.sink.emit(
                LogLevel::Warn,
                LogComponent::Handler,
                format!("URL expired: {code}"),
            );
            return Err(AppError::UrlExpired {
                code: code.to_string(),
            });
        }

        let click = ClickEvent::from_context(Utc::now(), context);
        self.store.record_click(code, click).await?;

        self.sink.emit(
            LogLevel::Info,
            LogComponent::Handler,
            format!("Redirect success: {code}"),
        );

        Ok(entry.original_url)
    }

    /// Returns the full entry with its click log.
    ///
    /// Works regardless of expiry: expiry gates redirection, not
    /// visibility.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ShortcodeNotFound`] for unknown codes.
    pub async fn get_stats(&self, code: &str) -> Result<UrlEntry, AppError> {
        let Some(entry) = self.store.find_by_code(code).await? else {
            self.sink.emit(
                LogLevel::Warn,
                LogComponent::Service,
                "Shortcode not found",
            );
            return Err(AppError::ShortcodeNotFound {
                code: code.to_string(),
            });
        };

        self.sink.emit(
            LogLevel::Info,
            LogComponent::Service,
            format!("Stats retrieved: {code}"),
        );

        Ok(entry)
    }

    /// All entries in insertion order, expired ones included.
    pub async fn list_stats(&self) -> Result<Vec<UrlEntry>, AppError> {
        let entries = self.store.list_all().await?;

        self.sink.emit(
            LogLevel::Info,
            LogComponent::Service,
            format!("All URLs retrieved: {}", entries.len()),
        );

        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::click::DIRECT_SOURCE;
    use crate::domain::log_event::LogEvent;
    use crate::domain::repositories::MockEntryStore;
    use chrono::Duration;
    use tokio::sync::mpsc;

    fn test_sink() -> (LogSink, mpsc::Receiver<LogEvent>) {
        let (tx, rx) = mpsc::channel(64);
        (LogSink::new(tx), rx)
    }

    fn live_entry(code: &str, url: &str) -> UrlEntry {
        let now = Utc::now();
        UrlEntry::new(
            code.to_string(),
            url.to_string(),
            now,
            now + Duration::minutes(30),
        )
    }

    fn expired_entry(code: &str, url: &str) -> UrlEntry {
        let now = Utc::now();
        UrlEntry::new(
            code.to_string(),
            url.to_string(),
            now - Duration::hours(2),
            now - Duration::hours(1),
        )
    }

    #[tokio::test]
    async fn test_resolve_records_click_and_returns_destination() {
        let mut store = MockEntryStore::new();
        let entry = live_entry("abc123", "https://example.com/target");
        store
            .expect_find_by_code()
            .withf(|code| code == "abc123")
            .times(1)
            .returning(move |_| Ok(Some(entry.clone())));
        store
            .expect_record_click()
            .withf(|code, click| code == "abc123" && click.source == "https://google.com")
            .times(1)
            .returning(|_, _| Ok(()));

        let (sink, _rx) = test_sink();
        let service = ResolutionService::new(Arc::new(store), sink);

        let context = ClickContext::new(Some("https://google.com"), Some("Mozilla/5.0"), None);
        let destination = service.resolve("abc123", context).await.unwrap();

        assert_eq!(destination, "https://example.com/target");
    }

    #[tokio::test]
    async fn test_resolve_defaults_source_to_direct() {
        let mut store = MockEntryStore::new();
        let entry = live_entry("abc123", "https://example.com");
        store
            .expect_find_by_code()
            .returning(move |_| Ok(Some(entry.clone())));
        store
            .expect_record_click()
            .withf(|_, click| click.source == DIRECT_SOURCE)
            .times(1)
            .returning(|_, _| Ok(()));

        let (sink, _rx) = test_sink();
        let service = ResolutionService::new(Arc::new(store), sink);

        service
            .resolve("abc123", ClickContext::default())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_resolve_not_found() {
        let mut store = MockEntryStore::new();
        store.expect_find_by_code().times(1).returning(|_| Ok(None));
        store.expect_record_click().times(0);

        let (sink, _rx) = test_sink();
        let service = ResolutionService::new(Arc::new(store), sink);

        let result = service
            .resolve("doesnotexist", ClickContext::default())
            .await;
        assert!(matches!(
            result.unwrap_err(),
            AppError::ShortcodeNotFound { code } if code == "doesnotexist"
        ));
    }

    #[tokio::test]
    async fn test_resolve_expired_records_no_click() {
        let mut store = MockEntryStore::new();
        let entry = expired_entry("old123", "https://example.com");
        store
            .expect_find_by_code()
            .returning(move |_| Ok(Some(entry.clone())));
        store.expect_record_click().times(0);

        let (sink, _rx) = test_sink();
        let service = ResolutionService::new(Arc::new(store), sink);

        let result = service.resolve("old123", ClickContext::default()).await;
        assert!(matches!(result.unwrap_err(), AppError::UrlExpired { .. }));
    }

    #[tokio::test]
    async fn test_get_stats_works_for_expired_entries() {
        let mut store = MockEntryStore::new();
        let entry = expired_entry("old123", "https://example.com");
        store
            .expect_find_by_code()
            .returning(move |_| Ok(Some(entry.clone())));

        let (sink, _rx) = test_sink();
        let service = ResolutionService::new(Arc::new(store), sink);

        let stats = service.get_stats("old123").await.unwrap();
        assert_eq!(stats.shortcode, "old123");
        assert_eq!(stats.click_count, 0);
    }

    #[tokio::test]
    async fn test_get_stats_not_found() {
        let mut store = MockEntryStore::new();
        store.expect_find_by_code().times(1).returning(|_| Ok(None));

        let (sink, _rx) = test_sink();
        let service = ResolutionService::new(Arc::new(store), sink);

        let result = service.get_stats("doesnotexist").await;
        assert!(matches!(
            result.unwrap_err(),
            AppError::ShortcodeNotFound { .. }
        ));
    }

    #[tokio::test]
    async fn test_list_stats_passes_order_through() {
        let mut store = MockEntryStore::new();
        let entries = vec![
            live_entry("first1", "https://example.com/1"),
            expired_entry("second", "https://example.com/2"),
            live_entry("third3", "https://example.com/3"),
        ];
        store
            .expect_list_all()
            .times(1)
            .returning(move || Ok(entries.clone()));

        let (sink, _rx) = test_sink();
        let service = ResolutionService::new(Arc::new(store), sink);

        let listed = service.list_stats().await.unwrap();
        assert_eq!(listed.len(), 3);
        assert_eq!(listed[0].shortcode, "first1");
        assert_eq!(listed[1].shortcode, "second");
        assert_eq!(listed[2].shortcode, "third3");
    }

    #[tokio::test]
    async fn test_resolve_expired_emits_warn_event() {
        let mut store = MockEntryStore::new();
        let entry = expired_entry("old123", "https://example.com");
        store
            .expect_find_by_code()
            .returning(move |_| Ok(Some(entry.clone())));

        let (sink, mut rx) = test_sink();
        let service = ResolutionService::new(Arc::new(store), sink);

        let _ = service.resolve("old123", ClickContext::default()).await;

        let event = rx.try_recv().unwrap();
        assert_eq!(event.level, LogLevel::Warn);
        assert_eq!(event.component, LogComponent::Handler);
        assert!(event.message.contains("expired"));
    }
}
