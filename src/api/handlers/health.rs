//! Handler for the health check endpoint.

use axum::{Json, extract::State, http::StatusCode};
use chrono::Utc;

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::domain::log_event::{LogComponent, LogLevel};
use crate::state::AppState;

/// Returns service health with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: all components healthy
/// - **503 Service Unavailable**: one or more components degraded
///
/// # Components Checked
///
/// 1. **Registry**: enumerates entries
/// 2. **Event queue**: checks the sink channel is open and reports capacity
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    state
        .sink
        .emit(LogLevel::Info, LogComponent::Route, "Health check requested");

    let registry_check = check_registry(&state).await;
    let queue_check = check_event_queue(&state);

    let all_healthy = registry_check.status == "ok" && queue_check.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "OK" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
        checks: HealthChecks {
            registry: registry_check,
            event_queue: queue_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks the registry by enumerating its entries.
async fn check_registry(state: &AppState) -> CheckStatus {
    match state.resolver.list_stats().await {
        Ok(entries) => CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("Entries: {}", entries.len())),
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Registry error: {}", e)),
        },
    }
}

/// Checks that the observability sink is still being drained.
fn check_event_queue(state: &AppState) -> CheckStatus {
    if state.sink.is_closed() {
        CheckStatus {
            status: "error".to_string(),
            message: Some("Event queue is closed".to_string()),
        }
    } else {
        CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("Capacity: {}", state.sink.capacity())),
        }
    }
}
