//! Background task draining the observability sink channel.

use tokio::sync::mpsc;

use crate::domain::log_event::{LogEvent, LogLevel};

/// Forwards sink events to the structured logging backend until the channel
/// closes.
///
/// Runs as a spawned task so that emitters never wait on the collector.
pub async fn run_log_worker(mut rx: mpsc::Receiver<LogEvent>) {
    while let Some(event) = rx.recv().await {
        forward(&event);
    }

    tracing::debug!("event sink channel closed, log worker stopping");
}

fn forward(event: &LogEvent) {
    let LogEvent {
        stack,
        level,
        component,
        message,
        timestamp,
    } = event;

    match level {
        LogLevel::Debug => {
            tracing::debug!(target: "event_sink", %stack, %component, %timestamp, "{message}")
        }
        LogLevel::Info => {
            tracing::info!(target: "event_sink", %stack, %component, %timestamp, "{message}")
        }
        LogLevel::Warn => {
            tracing::warn!(target: "event_sink", %stack, %component, %timestamp, "{message}")
        }
        LogLevel::Error | LogLevel::Fatal => {
            tracing::error!(target: "event_sink", %stack, %component, %timestamp, "{message}")
        }
    }
}
