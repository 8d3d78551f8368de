//! Shared utilities for integration tests: a scriptable Crawl4AI stand-in
//! and a proxy running on an ephemeral port.

#![allow(dead_code)]

use axum::{extract::State, http::StatusCode, routing::post, Router};
use crawl4ai_proxy::{HttpServer, ProxyConfig, Shutdown};
use serde_json::Value;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

type Responder = dyn Fn(&Value) -> (u16, String) + Send + Sync;

#[derive(Clone)]
struct MockState {
    responder: Arc<Responder>,
    delay: Duration,
    requests: Arc<Mutex<Vec<Value>>>,
    in_flight: Arc<AtomicUsize>,
    max_in_flight: Arc<AtomicUsize>,
}

/// Handle to a running mock backend.
pub struct MockCrawl4ai {
    pub addr: SocketAddr,
    state: MockState,
}

impl MockCrawl4ai {
    pub fn endpoint(&self) -> String {
        format!("http://{}/md", self.addr)
    }

    /// Request bodies received so far, in arrival order.
    pub fn requests(&self) -> Vec<Value> {
        self.state.requests.lock().unwrap().clone()
    }

    /// The `url` field of every request received so far.
    pub fn requested_urls(&self) -> Vec<String> {
        self.requests()
            .iter()
            .map(|r| r["url"].as_str().unwrap_or_default().to_string())
            .collect()
    }

    pub fn max_in_flight(&self) -> usize {
        self.state.max_in_flight.load(Ordering::SeqCst)
    }
}

async fn md_handler(State(state): State<MockState>, body: String) -> (StatusCode, String) {
    let payload: Value = serde_json::from_str(&body).unwrap_or(Value::Null);
    state.requests.lock().unwrap().push(payload.clone());

    let now = state.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
    state.max_in_flight.fetch_max(now, Ordering::SeqCst);
    if !state.delay.is_zero() {
        tokio::time::sleep(state.delay).await;
    }
    state.in_flight.fetch_sub(1, Ordering::SeqCst);

    let (status, body) = (state.responder)(&payload);
    (StatusCode::from_u16(status).unwrap(), body)
}

/// Start a mock Crawl4AI `/md` endpoint. `f` maps each request body to a
/// status code and raw response body.
pub async fn start_mock_crawl4ai<F>(f: F) -> MockCrawl4ai
where
    F: Fn(&Value) -> (u16, String) + Send + Sync + 'static,
{
    start_slow_mock_crawl4ai(Duration::ZERO, f).await
}

/// Same as [`start_mock_crawl4ai`], but every answer is delayed.
pub async fn start_slow_mock_crawl4ai<F>(delay: Duration, f: F) -> MockCrawl4ai
where
    F: Fn(&Value) -> (u16, String) + Send + Sync + 'static,
{
    let state = MockState {
        responder: Arc::new(f),
        delay,
        requests: Arc::new(Mutex::new(Vec::new())),
        in_flight: Arc::new(AtomicUsize::new(0)),
        max_in_flight: Arc::new(AtomicUsize::new(0)),
    };

    let app = Router::new()
        .route("/md", post(md_handler))
        .with_state(state.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    MockCrawl4ai { addr, state }
}

/// Respond with `{"markdown": "<markdown for url>"}`.
pub fn markdown_for(url: &str) -> String {
    format!("# {}", url)
}

pub fn echo_markdown(payload: &Value) -> (u16, String) {
    let url = payload["url"].as_str().unwrap_or_default();
    (200, serde_json::json!({ "markdown": markdown_for(url) }).to_string())
}

/// An address nothing listens on.
pub fn unused_addr() -> SocketAddr {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap()
}

/// A running proxy and its shutdown handle.
pub struct TestProxy {
    pub addr: SocketAddr,
    shutdown: Shutdown,
}

impl TestProxy {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for TestProxy {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

pub async fn start_proxy(endpoint: String) -> TestProxy {
    start_proxy_with(endpoint, 30).await
}

pub async fn start_proxy_with(endpoint: String, timeout_secs: u64) -> TestProxy {
    let mut config = ProxyConfig::default();
    config.crawl4ai.endpoint = endpoint;
    config.crawl4ai.timeout_secs = timeout_secs;

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    config.listener.port = addr.port();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(config);
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    TestProxy { addr, shutdown }
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
