// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use prometheus::proto::{Metric, MetricFamily};
use serde_json::{Value, json};

use crate::utils::error_response;

/// Handler for Prometheus metrics endpoint (text format)
pub async fn get_metrics() -> Response {
    match crate::metrics::gather_metrics() {
        Ok(metrics) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            metrics,
        )
            .into_response(),
        Err(e) => error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to gather metrics: {e}"),
        ),
    }
}

fn metric_value(metric: &Metric) -> Value {
    if metric.has_counter() {
        json!(metric.get_counter().get_value())
    } else if metric.has_histogram() {
        let histogram = metric.get_histogram();
        json!({
            "sample_count": histogram.get_sample_count(),
            "sample_sum": histogram.get_sample_sum(),
        })
    } else {
        Value::Null
    }
}

fn family_to_json(family: &MetricFamily) -> Value {
    json!({
        "name": family.get_name(),
        "help": family.get_help(),
        "type": format!("{:?}", family.get_field_type()),
        "metrics": family.get_metric().iter().map(|metric| {
            json!({
                "labels": metric.get_label().iter().map(|label| {
                    json!({"name": label.get_name(), "value": label.get_value()})
                }).collect::<Vec<_>>(),
                "value": metric_value(metric),
            })
        }).collect::<Vec<_>>(),
    })
}

/// Handler for metrics in JSON format
pub async fn get_metrics_json() -> Response {
    match crate::metrics::gather_metric_families() {
        Ok(families) => {
            let body: Vec<Value> = families.iter().map(family_to_json).collect();
            (StatusCode::OK, axum::Json(body)).into_response()
        }
        Err(e) => error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to gather metrics: {e}"),
        ),
    }
}
