//! In-memory registry backend.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::{ClickEvent, UrlEntry};
use crate::domain::repositories::EntryStore;
use crate::error::AppError;

/// Keyspace state guarded by the registry lock.
#[derive(Default)]
struct RegistryInner {
    entries: HashMap<String, UrlEntry>,
    /// Shortcodes in insertion order, for enumeration.
    order: Vec<String>,
}

/// The process-wide in-memory registry.
///
/// A single `RwLock` guards the whole keyspace. `insert` and `record_click`
/// take the write lock, so the duplicate check plus keyspace mutation and
/// the click append plus counter increment are each one critical section.
/// Reads clone entries out under the read lock.
#[derive(Default)]
pub struct InMemoryEntryStore {
    inner: RwLock<RegistryInner>,
}

impl InMemoryEntryStore {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries, live and expired.
    pub async fn len(&self) -> usize {
        self.inner.read().await.order.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl EntryStore for InMemoryEntryStore {
    async fn insert(&self, entry: UrlEntry) -> Result<(), AppError> {
        let mut inner = self.inner.write().await;

        if inner.entries.contains_key(&entry.shortcode) {
            return Err(AppError::CodeAlreadyExists {
                code: entry.shortcode,
            });
        }

        let code = entry.shortcode.clone();
        inner.order.push(code.clone());
        inner.entries.insert(code, entry);
        Ok(())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<UrlEntry>, AppError> {
        Ok(self.inner.read().await.entries.get(code).cloned())
    }

    async fn contains(&self, code: &str) -> Result<bool, AppError> {
        Ok(self.inner.read().await.entries.contains_key(code))
    }

    async fn list_all(&self) -> Result<Vec<UrlEntry>, AppError> {
        let inner = self.inner.read().await;
        Ok(inner
            .order
            .iter()
            .filter_map(|code| inner.entries.get(code))
            .cloned()
            .collect())
    }

    async fn record_click(&self, code: &str, click: ClickEvent) -> Result<(), AppError> {
        let mut inner = self.inner.write().await;

        match inner.entries.get_mut(code) {
            Some(entry) => {
                entry.record(click);
                Ok(())
            }
            None => Err(AppError::ShortcodeNotFound {
                code: code.to_string(),
            }),
        }
    }
}
