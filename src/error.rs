use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

/// Errors reported by the shortening and resolution services.
///
/// Every variant is recoverable and carries enough detail to render a
/// user-facing message. [`IntoResponse`] maps each one to its response
/// class; none of them abort the process or affect other requests.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("URL is required")]
    MissingUrl,

    #[error("Invalid URL format")]
    InvalidUrlFormat { reason: String },

    #[error("Validity must be a positive integer (minutes)")]
    InvalidValidity { provided: i64 },

    #[error("Custom shortcode must be alphanumeric and 1-10 characters long")]
    InvalidCodeFormat { code: String },

    #[error("Shortcode already exists")]
    CodeAlreadyExists { code: String },

    #[error("Failed to generate a unique shortcode")]
    GenerationExhausted,

    #[error("Short URL not found")]
    ShortcodeNotFound { code: String },

    #[error("Short URL has expired")]
    UrlExpired { code: String },

    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingUrl
            | AppError::InvalidUrlFormat { .. }
            | AppError::InvalidValidity { .. }
            | AppError::InvalidCodeFormat { .. } => StatusCode::BAD_REQUEST,
            AppError::CodeAlreadyExists { .. } => StatusCode::CONFLICT,
            AppError::ShortcodeNotFound { .. } => StatusCode::NOT_FOUND,
            AppError::UrlExpired { .. } => StatusCode::GONE,
            AppError::GenerationExhausted | AppError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            AppError::MissingUrl => "missing_url",
            AppError::InvalidUrlFormat { .. } => "invalid_url",
            AppError::InvalidValidity { .. } => "invalid_validity",
            AppError::InvalidCodeFormat { .. } => "invalid_code",
            AppError::CodeAlreadyExists { .. } => "code_exists",
            AppError::GenerationExhausted => "generation_exhausted",
            AppError::ShortcodeNotFound { .. } => "not_found",
            AppError::UrlExpired { .. } => "expired",
            AppError::Internal { .. } => "internal_error",
        }
    }

    fn details(&self) -> Value {
        match self {
            AppError::MissingUrl | AppError::Internal { .. } => json!({}),
            AppError::InvalidUrlFormat { reason } => json!({ "reason": reason }),
            AppError::InvalidValidity { provided } => json!({ "provided": provided }),
            AppError::InvalidCodeFormat { code }
            | AppError::CodeAlreadyExists { code }
            | AppError::ShortcodeNotFound { code }
            | AppError::UrlExpired { code } => json!({ "code": code }),
            AppError::GenerationExhausted => json!({ "reason": "Too many collisions" }),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, details = %self.details(), "request failed");
        }

        let body = ErrorBody {
            error: ErrorInfo {
                code: self.error_code(),
                message: self.to_string(),
                details: self.details(),
            },
        };

        (status, Json(body)).into_response()
    }
}
