//! Metrics collection and exposition.
//!
//! # Metrics
//! - `messages_http_requests_total` (counter): requests by method, status
//! - `messages_http_request_duration_seconds` (histogram): latency by method
//! - `messages_store_size` (gauge): messages held by the in-memory store

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus recorder and its HTTP scrape listener.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    let builder = PrometheusBuilder::new().with_http_listener(addr);

    match builder.install() {
        Ok(_) => {
            tracing::info!(address = %addr, "Prometheus metrics exporter started");
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to start Prometheus metrics exporter");
        }
    }
}

/// Record one handled HTTP request.
pub fn record_request(method: &str, status: u16, start: Instant) {
    let latency = start.elapsed().as_secs_f64();

    counter!(
        "messages_http_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string()
    )
    .increment(1);

    histogram!(
        "messages_http_request_duration_seconds",
        "method" => method.to_string()
    )
    .record(latency);
}

/// Record the number of stored messages.
pub fn record_store_size(size: usize) {
    gauge!("messages_store_size").set(size as f64);
}
