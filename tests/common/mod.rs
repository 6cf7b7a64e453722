//! Shared utilities for integration testing.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Instant;

use axum::extract::Request;
use axum::http::{header, StatusCode};
use axum::Router;
use lingua_client::ClientConfig;
use tokio::net::TcpListener;

/// One request as seen by the mock backend.
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct Recorded {
    pub at: Instant,
    pub method: String,
    pub path: String,
    pub body: serde_json::Value,
    pub request_id: Option<String>,
}

pub type RequestLog = Arc<Mutex<Vec<Recorded>>>;

/// Start a programmable mock backend on an ephemeral port.
///
/// `f` receives the 0-based call number and returns `(status, json body)`.
/// Every request, on any path, is recorded in the returned log.
pub async fn start_programmable_backend<F, Fut>(f: F) -> (SocketAddr, RequestLog)
where
    F: Fn(u32) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let f = Arc::new(f);
    let log: RequestLog = Arc::new(Mutex::new(Vec::new()));
    let calls = Arc::new(AtomicU32::new(0));

    let handler_log = log.clone();
    let handler = move |request: Request| {
        let f = f.clone();
        let log = handler_log.clone();
        let calls = calls.clone();
        async move {
            let (parts, body) = request.into_parts();
            let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap_or_default();
            log.lock().unwrap().push(Recorded {
                at: Instant::now(),
                method: parts.method.to_string(),
                path: parts.uri.path().to_string(),
                body: serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null),
                request_id: parts
                    .headers
                    .get("x-request-id")
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_string),
            });

            let call = calls.fetch_add(1, Ordering::SeqCst);
            let (status, body) = f(call).await;
            (
                StatusCode::from_u16(status).unwrap(),
                [(header::CONTENT_TYPE, "application/json")],
                body,
            )
        }
    };

    let app = Router::new().fallback(handler);
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (addr, log)
}

/// Backend that always answers with the same status and body.
#[allow(dead_code)]
pub async fn start_fixed_backend(status: u16, body: &'static str) -> (SocketAddr, RequestLog) {
    start_programmable_backend(move |_| async move { (status, body.to_string()) }).await
}

/// Address with nothing listening on it.
#[allow(dead_code)]
pub fn closed_port() -> SocketAddr {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

/// Client config pointing at `addr` with short delays for fast tests.
pub fn config_for(addr: SocketAddr) -> ClientConfig {
    let mut config = ClientConfig::default();
    config.api.base_url = format!("http://{}", addr);
    config.api.use_system_proxy = false;
    config.retries.base_delay_ms = 50;
    config.retries.max_delay_ms = 400;
    config.timeouts.request_ms = 2_000;
    config.timeouts.probe_ms = 1_000;
    config
}

#[allow(dead_code)]
pub fn requests(log: &RequestLog) -> Vec<Recorded> {
    log.lock().unwrap().clone()
}

#[allow(dead_code)]
pub const VALID_CONTENT: &str = r#"{
    "content": "Rust is a systems programming language.",
    "title": "About Rust",
    "metadata": {"wordCount": 6, "paragraphCount": 1, "hasImages": false}
}"#;
