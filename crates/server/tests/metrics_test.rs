// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use server::metrics;

#[test]
fn test_metrics_initialization() {
    metrics::init("test").unwrap();
    // a second init keeps the first registry
    metrics::init("other").unwrap();

    let metrics_text = metrics::gather_metrics().unwrap();

    // Counters always appear, even with zero values
    assert!(metrics_text.contains("test_http_requests"));
    assert!(metrics_text.contains("test_http_request_success"));
    assert!(metrics_text.contains("test_http_request_error"));
    assert!(!metrics_text.contains("other_"));
}

#[test]
fn test_http_metrics_increment() {
    use server::metrics::registry::{HTTP_REQUEST_ERROR, HTTP_REQUEST_SUCCESS, HTTP_REQUESTS};

    metrics::init("test").unwrap();

    let initial_total = HTTP_REQUESTS.get();
    let initial_success = HTTP_REQUEST_SUCCESS.get();
    let initial_error = HTTP_REQUEST_ERROR.get();

    HTTP_REQUESTS.inc();
    HTTP_REQUEST_SUCCESS.inc();
    HTTP_REQUEST_ERROR.inc();

    assert_eq!(HTTP_REQUESTS.get(), initial_total + 1.0);
    assert_eq!(HTTP_REQUEST_SUCCESS.get(), initial_success + 1.0);
    assert_eq!(HTTP_REQUEST_ERROR.get(), initial_error + 1.0);
}

#[test]
fn test_module_counters() {
    metrics::init("test").unwrap();

    metrics::record_query("pooldatas", true);
    metrics::record_query("poolstruct", false);
    metrics::record_tx("set_pooldata", true);

    let metrics_text = metrics::gather_metrics().unwrap();
    let line = |needle: &str| {
        metrics_text
            .lines()
            .find(|line| line.contains(needle) && !line.starts_with('#'))
            .unwrap_or_default()
            .to_string()
    };
    assert!(line(r#"query="pooldatas""#).starts_with("test_node_queries{"));
    assert!(line(r#"query="poolstruct""#).contains(r#"outcome="error""#));
    assert!(line(r#"msg_type="set_pooldata""#).starts_with("test_txs_generated{"));
}

#[test]
fn test_histogram_metrics() {
    use server::metrics::registry::REQUEST_DURATION_SECONDS;

    metrics::init("test").unwrap();

    REQUEST_DURATION_SECONDS
        .with_label_values(&["GET", "/swapservice/pools", "200"])
        .observe(0.5);
    REQUEST_DURATION_SECONDS
        .with_label_values(&["PUT", "/swapservice/pools", "400"])
        .observe(0.01);

    let metrics_text = metrics::gather_metrics().unwrap();
    assert!(metrics_text.contains("test_request_duration_seconds"));
    assert!(metrics_text.contains("bucket"));
}
