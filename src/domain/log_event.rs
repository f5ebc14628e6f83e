//! Structured events emitted to the observability sink.
//!
//! Core services report notable operations (creation, resolution, failures)
//! as `{stack, level, component, message}` records for an external
//! collector. Emission is strictly fire-and-forget: a full or closed
//! channel drops the record without touching the primary operation.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::mpsc;

/// Severity of a sink event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Fatal => "fatal",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Originating component, in the collector's vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogComponent {
    Controller,
    Handler,
    Repository,
    Route,
    Service,
}

impl LogComponent {
    pub fn as_str(self) -> &'static str {
        match self {
            LogComponent::Controller => "controller",
            LogComponent::Handler => "handler",
            LogComponent::Repository => "repository",
            LogComponent::Route => "route",
            LogComponent::Service => "service",
        }
    }
}

impl fmt::Display for LogComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One record destined for the external collector.
#[derive(Debug, Clone, Serialize)]
pub struct LogEvent {
    pub stack: &'static str,
    pub level: LogLevel,
    pub component: LogComponent,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl LogEvent {
    /// Creates a backend-stack event stamped with the current time.
    pub fn backend(level: LogLevel, component: LogComponent, message: impl Into<String>) -> Self {
        Self {
            stack: "backend",
            level,
            component,
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Cloneable handle used by services to emit sink events.
#[derive(Clone)]
pub struct LogSink {
    tx: mpsc::Sender<LogEvent>,
}

impl LogSink {
    pub fn new(tx: mpsc::Sender<LogEvent>) -> Self {
        Self { tx }
    }

    /// Emits an event without waiting.
    ///
    /// Never blocks and never fails the caller: when the channel is full or
    /// the worker is gone, the record is dropped and only traced locally.
    pub fn emit(&self, level: LogLevel, component: LogComponent, message: impl Into<String>) {
        let event = LogEvent::backend(level, component, message);

        if let Err(err) = self.tx.try_send(event) {
            tracing::trace!("event sink dropped a record: {err}");
        }
    }

    /// Returns true once the draining worker has stopped.
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }

    /// Remaining queue slots, for health reporting.
    pub fn capacity(&self) -> usize {
        self.tx.capacity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_emit_delivers_event() {
        let (tx, mut rx) = mpsc::channel(4);
        let sink = LogSink::new(tx);

        sink.emit(LogLevel::Info, LogComponent::Service, "Short URL created");

        let event = rx.try_recv().unwrap();
        assert_eq!(event.stack, "backend");
        assert_eq!(event.level, LogLevel::Info);
        assert_eq!(event.component, LogComponent::Service);
        assert_eq!(event.message, "Short URL created");
    }

    #[tokio::test]
    async fn test_emit_on_full_channel_drops_silently() {
        let (tx, _rx) = mpsc::channel(1);
        let sink = LogSink::new(tx);

        sink.emit(LogLevel::Info, LogComponent::Service, "first");
        // Channel is full now; the second emit must neither block nor panic.
        sink.emit(LogLevel::Info, LogComponent::Service, "second");
    }

    #[tokio::test]
    async fn test_emit_on_closed_channel_is_swallowed() {
        let (tx, rx) = mpsc::channel(4);
        drop(rx);
        let sink = LogSink::new(tx);

        assert!(sink.is_closed());
        sink.emit(LogLevel::Error, LogComponent::Handler, "late event");
    }

    #[test]
    fn test_level_and_component_names() {
        assert_eq!(LogLevel::Fatal.as_str(), "fatal");
        assert_eq!(LogComponent::Controller.as_str(), "controller");
        assert_eq!(LogLevel::Warn.to_string(), "warn");
    }

    #[test]
    fn test_event_serializes_lowercase() {
        let event = LogEvent::backend(LogLevel::Warn, LogComponent::Handler, "URL expired");
        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["stack"], "backend");
        assert_eq!(json["level"], "warn");
        assert_eq!(json["component"], "handler");
        assert_eq!(json["message"], "URL expired");
    }
}
