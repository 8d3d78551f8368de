//! Metrics collection and exposition.
//!
//! # Metrics
//! - `crawl_requests_total` (counter): inbound `/crawl` calls by status
//! - `crawl_request_duration_seconds` (histogram): whole-batch latency
//! - `crawl_urls_requested_total` (counter): URLs received across batches
//! - `crawl_backend_calls_total` (counter): upstream calls by outcome
//!
//! Updates are no-ops until [`init_metrics`] installs the exporter.

use metrics::{counter, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};
use std::net::SocketAddr;
use std::time::Instant;

/// Install the Prometheus recorder and its HTTP scrape listener.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

pub fn record_request(status: u16, start_time: Instant) {
    counter!("crawl_requests_total", "status" => status.to_string()).increment(1);
    histogram!("crawl_request_duration_seconds").record(start_time.elapsed().as_secs_f64());
}

pub fn record_urls(count: usize) {
    counter!("crawl_urls_requested_total").increment(count as u64);
}

pub fn record_backend_call(outcome: &'static str) {
    counter!("crawl_backend_calls_total", "outcome" => outcome).increment(1);
}
