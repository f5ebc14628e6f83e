//! Shortcode generation and custom-code validation.

use std::sync::LazyLock;

use rand::distr::{Alphanumeric, SampleString};
use regex::Regex;

use crate::error::AppError;

/// Length of generated shortcodes.
pub const GENERATED_CODE_LENGTH: usize = 6;

/// Custom codes: 1-10 alphanumeric characters.
static CUSTOM_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{1,10}$").unwrap());

/// Draws a random 6-character alphanumeric shortcode.
///
/// The generator never consults the registry; collision resistance comes
/// from the caller's bounded probe-and-retry loop.
pub fn generate_code() -> String {
    Alphanumeric.sample_string(&mut rand::rng(), GENERATED_CODE_LENGTH)
}

/// Validates a caller-supplied custom shortcode.
///
/// # Errors
///
/// Returns [`AppError::InvalidCodeFormat`] unless the code is 1-10
/// alphanumeric characters.
pub fn validate_custom_code(code: &str) -> Result<(), AppError> {
    if CUSTOM_CODE_REGEX.is_match(code) {
        Ok(())
    } else {
        Err(AppError::InvalidCodeFormat {
            code: code.to_string(),
        })
    }
}
