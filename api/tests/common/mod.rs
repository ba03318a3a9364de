#![allow(dead_code)]

use std::{
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use axum::{
    Router,
    extract::RawQuery,
    http::{StatusCode, header::CONTENT_TYPE},
    routing::get,
};
use axum_test::TestServer;
use clap::Parser;
use mealbook_api::{
    application::http::server::http_server::{router, state},
    args::Args,
};
use tokio::net::TcpListener;

pub const SEARCH_PATH: &str = "/functions/v1/search-food";

/// Stand-in for the Open Food Facts search endpoint.
pub struct FakeUpstream {
    pub base_url: String,
    calls: Arc<AtomicUsize>,
    queries: Arc<Mutex<Vec<String>>>,
}

impl FakeUpstream {
    pub async fn json(body: serde_json::Value) -> Self {
        Self::spawn(StatusCode::OK, body.to_string(), Duration::ZERO).await
    }

    pub async fn spawn(status: StatusCode, body: String, delay: Duration) -> Self {
        let calls = Arc::new(AtomicUsize::new(0));
        let queries = Arc::new(Mutex::new(Vec::new()));

        let handler_calls = calls.clone();
        let handler_queries = queries.clone();
        let app = Router::new().route(
            "/cgi/search.pl",
            get(move |RawQuery(query): RawQuery| {
                let calls = handler_calls.clone();
                let queries = handler_queries.clone();
                let body = body.clone();
                async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    queries.lock().unwrap().push(query.unwrap_or_default());
                    tokio::time::sleep(delay).await;
                    (status, [(CONTENT_TYPE, "application/json")], body)
                }
            }),
        );

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}/cgi/search.pl", addr),
            calls,
            queries,
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

/// A base url on a port nobody listens on.
pub async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/cgi/search.pl", addr)
}

pub async fn test_app(base_url: &str, timeout_ms: u64) -> TestServer {
    build_app(base_url, timeout_ms, false).await
}

/// Metrics install a process-wide recorder: call at most once per test binary.
pub async fn test_app_with_metrics(base_url: &str) -> TestServer {
    build_app(base_url, 2000, true).await
}

async fn build_app(base_url: &str, timeout_ms: u64, metrics: bool) -> TestServer {
    let timeout = timeout_ms.to_string();
    let metrics = metrics.to_string();
    let args = Args::parse_from([
        "mealbook-api",
        "--server-root-path",
        "",
        "--server-metrics",
        metrics.as_str(),
        "--upstream-base-url",
        base_url,
        "--upstream-timeout-ms",
        timeout.as_str(),
    ]);

    let app_state = state(Arc::new(args)).await.unwrap();
    TestServer::new(router(app_state).unwrap()).unwrap()
}
