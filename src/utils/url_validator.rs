//! Target URL validation.
//!
//! The URL is stored exactly as supplied — resolution returns the same
//! string — so validation never rewrites the input.

use url::Url;

use crate::error::AppError;

/// Accepts absolute `http`/`https` URLs and nothing else.
///
/// # Errors
///
/// Returns [`AppError::InvalidUrlFormat`] for malformed or relative URLs
/// and for non-web schemes (`javascript:`, `file:`, ...).
pub fn validate_web_url(input: &str) -> Result<(), AppError> {
    let url = Url::parse(input).map_err(|e| AppError::InvalidUrlFormat {
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(AppError::InvalidUrlFormat {
            reason: format!("unsupported scheme '{other}'"),
        }),
    }
}
