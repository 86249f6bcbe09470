//! Metrics collection and exposition.
//!
//! # Metrics
//! - `products_http_requests_total` (counter): requests by method, status
//! - `products_http_request_duration_seconds` (histogram): latency by method
//! - `products_store_size` (gauge): products currently stored

use axum::{extract::Request, middleware::Next, response::Response};
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::time::Instant;

pub const REQUESTS_TOTAL: &str = "products_http_requests_total";
pub const REQUEST_DURATION: &str = "products_http_request_duration_seconds";
pub const STORE_SIZE: &str = "products_store_size";

/// Start the Prometheus exporter on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint started"),
        Err(e) => tracing::error!(error = %e, "Failed to start metrics endpoint"),
    }
}

/// Record one finished request.
pub fn record_request(method: &str, status: u16, start: Instant) {
    counter!(
        REQUESTS_TOTAL,
        "method" => method.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    histogram!(REQUEST_DURATION, "method" => method.to_string())
        .record(start.elapsed().as_secs_f64());
}

pub fn record_store_size(len: usize) {
    gauge!(STORE_SIZE).set(len as f64);
}

/// Middleware recording count and latency for every request.
pub async fn track_requests(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();

    let response = next.run(request).await;

    record_request(&method, response.status().as_u16(), start);
    response
}
