//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts.
//!
//! ## Variables
//!
//! All variables are optional:
//!
//! - `LISTEN` - bind address (default: `0.0.0.0:3000`)
//! - `BASE_URL` - public base used to construct short links
//!   (default: `http://localhost:3000`)
//! - `RUST_LOG` - log level (default: `info`)
//! - `LOG_FORMAT` - log format: `text` or `json` (default: `text`)
//! - `EVENT_QUEUE_CAPACITY` - observability sink buffer size
//!   (default: 10000, min: 100)
//! - `DEFAULT_VALIDITY_MINUTES` - lifetime applied when a create request
//!   carries no validity (default: 30)

use anyhow::Result;
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    /// Public base used to construct short links.
    pub base_url: String,
    pub log_level: String,
    pub log_format: String,
    /// Bounded capacity of the observability event channel.
    pub event_queue_capacity: usize,
    /// Lifetime applied when a create request carries no validity.
    pub default_validity_minutes: i64,
}

impl Config {
    /// Loads configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let base_url =
            env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let event_queue_capacity = env::var("EVENT_QUEUE_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10_000);

        let default_validity_minutes = env::var("DEFAULT_VALIDITY_MINUTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        Self {
            listen_addr,
            base_url,
            log_level,
            log_format,
            event_queue_capacity,
            default_validity_minutes,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `event_queue_capacity` is outside 100..=1000000
    /// - `default_validity_minutes` is below 1
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` or `base_url` is malformed
    pub fn validate(&self) -> Result<()> {
        if self.event_queue_capacity < 100 {
            anyhow::bail!(
                "EVENT_QUEUE_CAPACITY must be at least 100, got {}",
                self.event_queue_capacity
            );
        }

        if self.event_queue_capacity > 1_000_000 {
            anyhow::bail!(
                "EVENT_QUEUE_CAPACITY is too large (max: 1000000), got {}",
                self.event_queue_capacity
            );
        }

        if self.default_validity_minutes < 1 {
            anyhow::bail!(
                "DEFAULT_VALIDITY_MINUTES must be at least 1, got {}",
                self.default_validity_minutes
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.base_url
            );
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Event queue capacity: {}", self.event_queue_capacity);
        tracing::info!(
            "  Default validity: {} minutes",
            self.default_validity_minutes
        );
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn base_config() -> Config {
        Config {
            listen_addr: "0.0.0.0:3000".to_string(),
            base_url: "http://localhost:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            event_queue_capacity: 10_000,
            default_validity_minutes: 30,
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = base_config();
        assert!(config.validate().is_ok());

        // Queue capacity bounds
        config.event_queue_capacity = 50;
        assert!(config.validate().is_err());
        config.event_queue_capacity = 2_000_000;
        assert!(config.validate().is_err());
        config.event_queue_capacity = 10_000;

        // Log format
        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());
        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        // Listen address
        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());
        config.listen_addr = "0.0.0.0:3000".to_string();

        // Base URL
        config.base_url = "localhost:3000".to_string();
        assert!(config.validate().is_err());
        config.base_url = "https://snap.example.com".to_string();
        assert!(config.validate().is_ok());

        // Default validity
        config.default_validity_minutes = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("LISTEN");
            env::remove_var("BASE_URL");
            env::remove_var("EVENT_QUEUE_CAPACITY");
            env::remove_var("DEFAULT_VALIDITY_MINUTES");
        }

        let config = Config::from_env();

        assert_eq!(config.listen_addr, "0.0.0.0:3000");
        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.event_queue_capacity, 10_000);
        assert_eq!(config.default_validity_minutes, 30);
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("LISTEN", "127.0.0.1:8080");
            env::set_var("BASE_URL", "https://snap.example.com");
            env::set_var("EVENT_QUEUE_CAPACITY", "500");
            env::set_var("DEFAULT_VALIDITY_MINUTES", "60");
        }

        let config = Config::from_env();

        assert_eq!(config.listen_addr, "127.0.0.1:8080");
        assert_eq!(config.base_url, "https://snap.example.com");
        assert_eq!(config.event_queue_capacity, 500);
        assert_eq!(config.default_validity_minutes, 60);

        // Cleanup
        unsafe {
            env::remove_var("LISTEN");
            env::remove_var("BASE_URL");
            env::remove_var("EVENT_QUEUE_CAPACITY");
            env::remove_var("DEFAULT_VALIDITY_MINUTES");
        }
    }

    #[test]
    #[serial]
    fn test_from_env_ignores_unparsable_numbers() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("EVENT_QUEUE_CAPACITY", "not-a-number");
        }

        let config = Config::from_env();
        assert_eq!(config.event_queue_capacity, 10_000);

        // Cleanup
        unsafe {
            env::remove_var("EVENT_QUEUE_CAPACITY");
        }
    }
}
