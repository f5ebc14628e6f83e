//! HTTP server initialization and runtime setup.
//!
//! Builds the registry, spawns the event sink worker, and runs the Axum
//! server lifecycle.

use crate::application::services::{ResolutionService, ShortenerService};
use crate::config::Config;
use crate::domain::log_event::LogSink;
use crate::domain::log_worker::run_log_worker;
use crate::infrastructure::registry::InMemoryEntryStore;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - The in-memory registry (empty at startup)
/// - The observability sink channel and its worker task
/// - The Axum HTTP server
///
/// # Errors
///
/// Returns an error if the listen address is invalid, the bind fails, or a
/// server runtime error occurs.
pub async fn run(config: Config) -> Result<()> {
    let store = Arc::new(InMemoryEntryStore::new());

    let (event_tx, event_rx) = mpsc::channel(config.event_queue_capacity);
    tokio::spawn(run_log_worker(event_rx));
    tracing::info!("Event sink worker started");

    let sink = LogSink::new(event_tx);

    let shortener = Arc::new(ShortenerService::new(
        store.clone(),
        sink.clone(),
        config.default_validity_minutes,
    ));
    let resolver = Arc::new(ResolutionService::new(store, sink.clone()));

    let state = AppState {
        shortener,
        resolver,
        base_url: config.base_url.clone(),
        sink,
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .await?;

    Ok(())
}
