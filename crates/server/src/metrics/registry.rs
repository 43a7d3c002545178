// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use lazy_static::lazy_static;
use prometheus::{
    Counter, CounterVec, Encoder, HistogramOpts, HistogramVec, Opts, Registry, TextEncoder,
    proto::MetricFamily,
};
use std::sync::RwLock;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatherError {
    #[error("metrics not initialized")]
    NotInitialized,

    #[error("failed to encode metrics: {0}")]
    Encode(#[from] prometheus::Error),

    #[error("metrics output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

lazy_static! {
    static ref REGISTRY: RwLock<Option<Registry>> = RwLock::new(None);

    pub static ref HTTP_REQUESTS: Counter = Counter::new(
        "http_requests",
        "Total number of HTTP requests"
    )
    .expect("Failed to create http_requests counter");

    pub static ref HTTP_REQUEST_SUCCESS: Counter = Counter::new(
        "http_request_success",
        "Number of successful HTTP requests"
    )
    .expect("Failed to create http_request_success counter");

    pub static ref HTTP_REQUEST_ERROR: Counter = Counter::new(
        "http_request_error",
        "Number of HTTP request errors"
    )
    .expect("Failed to create http_request_error counter");

    pub static ref REQUEST_DURATION_SECONDS: HistogramVec = HistogramVec::new(
        HistogramOpts::new(
            "request_duration_seconds",
            "Duration of HTTP requests in seconds"
        ).buckets(vec![0.01, 0.05, 0.1, 0.5, 1.0, 2.0, 5.0, 10.0]),
        &["method", "route", "status_code"]
    )
    .expect("Failed to create request_duration_seconds histogram");

    pub static ref RESPONSE_SIZE_BYTES: HistogramVec = HistogramVec::new(
        HistogramOpts::new(
            "response_size_bytes",
            "Size of HTTP responses in bytes"
        ).buckets(vec![100.0, 500.0, 1000.0, 5000.0, 10000.0, 50000.0, 100000.0, 500000.0]),
        &["method", "route", "status_code"]
    )
    .expect("Failed to create response_size_bytes histogram");

    pub static ref NODE_QUERIES: CounterVec = CounterVec::new(
        Opts::new("node_queries", "Store queries relayed to the node"),
        &["query", "outcome"]
    )
    .expect("Failed to create node_queries counter");

    pub static ref TXS_GENERATED: CounterVec = CounterVec::new(
        Opts::new("txs_generated", "Unsigned transactions generated per message type"),
        &["msg_type", "outcome"]
    )
    .expect("Failed to create txs_generated counter");
}

fn outcome(ok: bool) -> &'static str {
    if ok { "ok" } else { "error" }
}

/// Count a relayed store query, `query` being the query route such as `pooldatas`.
pub fn record_query(query: &str, ok: bool) {
    NODE_QUERIES.with_label_values(&[query, outcome(ok)]).inc();
}

/// Count a transaction generation attempt for a message type.
pub fn record_tx(msg_type: &str, ok: bool) {
    TXS_GENERATED.with_label_values(&[msg_type, outcome(ok)]).inc();
}

/// Register every metric under `prefix`. Later calls are no-ops.
pub fn init(prefix: &str) -> Result<(), prometheus::Error> {
    let mut guard = REGISTRY.write().unwrap_or_else(|poisoned| poisoned.into_inner());
    if guard.is_some() {
        return Ok(());
    }

    let registry = Registry::new_custom(Some(prefix.to_string()), None)?;
    registry.register(Box::new(HTTP_REQUESTS.clone()))?;
    registry.register(Box::new(HTTP_REQUEST_SUCCESS.clone()))?;
    registry.register(Box::new(HTTP_REQUEST_ERROR.clone()))?;
    registry.register(Box::new(REQUEST_DURATION_SECONDS.clone()))?;
    registry.register(Box::new(RESPONSE_SIZE_BYTES.clone()))?;
    registry.register(Box::new(NODE_QUERIES.clone()))?;
    registry.register(Box::new(TXS_GENERATED.clone()))?;

    *guard = Some(registry);
    Ok(())
}

/// Gather all metric families from the registry
pub fn gather_metric_families() -> Result<Vec<MetricFamily>, GatherError> {
    let guard = REGISTRY.read().unwrap_or_else(|poisoned| poisoned.into_inner());
    let registry = guard.as_ref().ok_or(GatherError::NotInitialized)?;
    Ok(registry.gather())
}

/// Gather all metrics as Prometheus text format
pub fn gather_metrics() -> Result<String, GatherError> {
    let metric_families = gather_metric_families()?;
    let mut buffer = Vec::new();
    TextEncoder::new().encode(&metric_families, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}
