//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    body::{Body, Bytes},
    http::Request,
    response::Response,
    Router,
};
use palindrome_messages::config::ServerConfig;
use palindrome_messages::lifecycle::Shutdown;
use palindrome_messages::{HttpServer, InMemoryStore, MessageStore};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Server settings for tests: loopback, ephemeral port, short timeout.
pub fn test_config(timeout_secs: u64) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        timeout_secs,
        ..ServerConfig::default()
    }
}

/// Router over a fresh in-memory store.
#[allow(dead_code)]
pub fn app() -> Router {
    app_with_store(Arc::new(InMemoryStore::new()), 5)
}

/// Router over the given store.
#[allow(dead_code)]
pub fn app_with_store(store: Arc<dyn MessageStore>, timeout_secs: u64) -> Router {
    HttpServer::new(test_config(timeout_secs), store).router()
}

/// A running server bound to an ephemeral loopback port.
#[allow(dead_code)]
pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub handle: JoinHandle<std::io::Result<()>>,
}

#[allow(dead_code)]
impl TestServer {
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

/// Start a real server over `store`.
#[allow(dead_code)]
pub async fn spawn_server(store: Arc<dyn MessageStore>, timeout_secs: u64) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(test_config(timeout_secs), store);
    let server_shutdown = shutdown.subscribe();

    let handle = tokio::spawn(async move { server.run(listener, server_shutdown).await });

    TestServer {
        addr,
        shutdown,
        handle,
    }
}

#[allow(dead_code)]
pub fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[allow(dead_code)]
pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[allow(dead_code)]
pub async fn read_body(response: Response) -> Bytes {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
}

#[allow(dead_code)]
pub async fn read_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&read_body(response).await).unwrap()
}
