//! # snaplink
//!
//! A fast in-memory URL-shortening service built with Axum.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core entities, the registry trait, and the event sink
//! - **Application Layer** ([`application`]) - Shortening and resolution services
//! - **Infrastructure Layer** ([`infrastructure`]) - The in-memory registry backend
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Collision-free shortcode allocation with optional custom codes
//! - Per-entry expiry with 410 Gone semantics on redirect
//! - Click analytics (referrer, user agent, address) recorded atomically
//! - Fire-and-forget structured event sink for an external collector
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional overrides
//! export LISTEN="0.0.0.0:3000"
//! export BASE_URL="http://localhost:3000"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{ResolutionService, ShortenerService};
    pub use crate::domain::entities::{ClickContext, ClickEvent, UrlEntry};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
