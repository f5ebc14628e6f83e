//! Shortening and resolution services.

pub mod resolver_service;
pub mod shortener_service;

pub use resolver_service::ResolutionService;
pub use shortener_service::ShortenerService;
