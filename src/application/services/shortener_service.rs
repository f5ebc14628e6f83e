//! Short URL creation service.

use std::sync::Arc;

use chrono::{Duration, Utc};

use crate::domain::entities::UrlEntry;
use crate::domain::log_event::{LogComponent, LogLevel, LogSink};
use crate::domain::repositories::EntryStore;
use crate::error::AppError;
use crate::utils::code_generator::{generate_code, validate_custom_code};
use crate::utils::url_validator::validate_web_url;

/// Attempts at drawing a fresh random code before giving up.
const MAX_GENERATION_ATTEMPTS: usize = 10;

/// Service creating registry entries under validated input.
///
/// This is the sole constructor path for registry entries: every entry
/// starts here with a zero click count and an empty log.
pub struct ShortenerService<S: EntryStore> {
    store: Arc<S>,
    sink: LogSink,
    default_validity_minutes: i64,
}

impl<S: EntryStore> ShortenerService<S> {
    pub fn new(store: Arc<S>, sink: LogSink, default_validity_minutes: i64) -> Self {
        Self {
            store,
            sink,
            default_validity_minutes,
        }
    }

    /// Creates a shortened URL.
    ///
    /// Validation runs in a fixed order and stops at the first failure:
    /// missing URL, URL format, validity, then code allocation. The expiry
    /// is exactly `created_at + validity` minutes.
    ///
    /// # Errors
    ///
    /// - [`AppError::MissingUrl`] - empty `url`
    /// - [`AppError::InvalidUrlFormat`] - not an absolute http(s) URL
    /// - [`AppError::InvalidValidity`] - `validity_minutes` below 1
    /// - [`AppError::InvalidCodeFormat`] - malformed custom code
    /// - [`AppError::CodeAlreadyExists`] - custom code taken (expired
    ///   entries included; codes are never reused)
    /// - [`AppError::GenerationExhausted`] - random allocation ran out of
    ///   attempts
    pub async fn create_short_url(
        &self,
        url: &str,
        validity_minutes: Option<i64>,
        custom_code: Option<String>,
    ) -> Result<UrlEntry, AppError> {
        if url.trim().is_empty() {
            self.sink
                .emit(LogLevel::Error, LogComponent::Controller, "Missing URL");
            return Err(AppError::MissingUrl);
        }

        if let Err(err) = validate_web_url(url) {
            self.sink.emit(
                LogLevel::Error,
                LogComponent::Controller,
                "Invalid URL format",
            );
            return Err(err);
        }

        let validity = match validity_minutes {
            Some(minutes) if minutes < 1 => {
                self.sink.emit(
                    LogLevel::Error,
                    LogComponent::Controller,
                    "Invalid validity period",
                );
                return Err(AppError::InvalidValidity { provided: minutes });
            }
            Some(minutes) => minutes,
            None => self.default_validity_minutes,
        };

        let entry = match custom_code {
            Some(custom) => self.insert_with_custom_code(url, validity, custom).await?,
            None => self.insert_with_generated_code(url, validity).await?,
        };

        self.sink.emit(
            LogLevel::Info,
            LogComponent::Service,
            format!("Short URL created: {}", entry.shortcode),
        );

        Ok(entry)
    }

    async fn insert_with_custom_code(
        &self,
        url: &str,
        validity: i64,
        custom: String,
    ) -> Result<UrlEntry, AppError> {
        if let Err(err) = validate_custom_code(&custom) {
            self.sink.emit(
                LogLevel::Error,
                LogComponent::Controller,
                "Invalid custom shortcode",
            );
            return Err(err);
        }

        // Fast-path probe; insert re-checks atomically.
        if self.store.contains(&custom).await? {
            self.sink.emit(
                LogLevel::Error,
                LogComponent::Service,
                format!("Shortcode already exists: {custom}"),
            );
            return Err(AppError::CodeAlreadyExists { code: custom });
        }

        let entry = Self::build_entry(custom, url, validity);
        self.store.insert(entry.clone()).await?;
        Ok(entry)
    }

    /// Draws random codes until one inserts cleanly.
    ///
    /// An insert conflict consumes an attempt: the duplicate check inside
    /// `insert` is the atomic commit point, so two concurrent creations can
    /// never both win the same code.
    async fn insert_with_generated_code(
        &self,
        url: &str,
        validity: i64,
    ) -> Result<UrlEntry, AppError> {
        for _ in 0..MAX_GENERATION_ATTEMPTS {
            let code = generate_code();

            if self.store.contains(&code).await? {
                continue;
            }

            let entry = Self::build_entry(code, url, validity);
            match self.store.insert(entry.clone()).await {
                Ok(()) => return Ok(entry),
                Err(AppError::CodeAlreadyExists { .. }) => continue,
                Err(err) => return Err(err),
            }
        }

        self.sink.emit(
            LogLevel::Error,
            LogComponent::Service,
            "Shortcode generation exhausted",
        );
        Err(AppError::GenerationExhausted)
    }

    fn build_entry(code: String, url: &str, validity_minutes: i64) -> UrlEntry {
        let created_at = Utc::now();
        let expires_at = created_at + Duration::minutes(validity_minutes);
        UrlEntry::new(code, url.to_string(), created_at, expires_at)
    }
}
