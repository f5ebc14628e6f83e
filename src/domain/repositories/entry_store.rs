//! Repository trait for the shortcode registry.

use crate::domain::entities::{ClickEvent, UrlEntry};
use crate::error::AppError;
use async_trait::async_trait;

/// The registry: the authoritative mapping from shortcode to entry.
///
/// Entries are only ever added — expiry is a derived property checked by
/// callers, never a removal trigger, so expired entries stay queryable for
/// statistics.
///
/// # Implementations
///
/// - [`crate::infrastructure::registry::InMemoryEntryStore`] - in-memory registry
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EntryStore: Send + Sync {
    /// Inserts a new entry.
    ///
    /// The duplicate check and the keyspace mutation form a single atomic
    /// unit: of any concurrent inserts with the same shortcode, exactly one
    /// succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::CodeAlreadyExists`] if the shortcode is present.
    async fn insert(&self, entry: UrlEntry) -> Result<(), AppError>;

    /// Finds an entry by shortcode, expired entries included.
    async fn find_by_code(&self, code: &str) -> Result<Option<UrlEntry>, AppError>;

    /// Read-only uniqueness probe.
    ///
    /// Expired entries count as present — shortcodes are never reused.
    async fn contains(&self, code: &str) -> Result<bool, AppError>;

    /// All entries in insertion order.
    async fn list_all(&self) -> Result<Vec<UrlEntry>, AppError>;

    /// Appends a click to an entry's log and increments its counter.
    ///
    /// The read-modify-write is atomic per entry: concurrent resolutions of
    /// the same shortcode never lose a click.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ShortcodeNotFound`] if the shortcode is absent.
    async fn record_click(&self, code: &str, click: ClickEvent) -> Result<(), AppError>;
}
