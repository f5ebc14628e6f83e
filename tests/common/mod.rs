#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::ConnectInfo;
use chrono::{Duration, Utc};
use tokio::sync::mpsc;

use snaplink::application::services::{ResolutionService, ShortenerService};
use snaplink::domain::entities::UrlEntry;
use snaplink::domain::log_event::{LogEvent, LogSink};
use snaplink::domain::repositories::EntryStore;
use snaplink::infrastructure::registry::InMemoryEntryStore;
use snaplink::state::AppState;

pub const BASE_URL: &str = "http://localhost:3000";

pub fn create_test_state() -> (AppState, Arc<InMemoryEntryStore>, mpsc::Receiver<LogEvent>) {
    let store = Arc::new(InMemoryEntryStore::new());
    let (tx, rx) = mpsc::channel(100);
    let sink = LogSink::new(tx);

    let shortener = Arc::new(ShortenerService::new(store.clone(), sink.clone(), 30));
    let resolver = Arc::new(ResolutionService::new(store.clone(), sink.clone()));

    let state = AppState {
        shortener,
        resolver,
        base_url: BASE_URL.to_string(),
        sink,
    };

    (state, store, rx)
}

pub async fn seed_entry(store: &InMemoryEntryStore, code: &str, url: &str) {
    let now = Utc::now();
    store
        .insert(UrlEntry::new(
            code.to_string(),
            url.to_string(),
            now,
            now + Duration::minutes(30),
        ))
        .await
        .unwrap();
}

pub async fn seed_expired_entry(store: &InMemoryEntryStore, code: &str, url: &str) {
    let now = Utc::now();
    store
        .insert(UrlEntry::new(
            code.to_string(),
            url.to_string(),
            now - Duration::hours(2),
            now - Duration::hours(1),
        ))
        .await
        .unwrap();
}

/// Injects a fixed peer address so `ConnectInfo` extraction works under
/// `TestServer`.
#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> tower::Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = "127.0.0.1:12345".parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}
