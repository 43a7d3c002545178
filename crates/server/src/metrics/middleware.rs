// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use axum::{
    body::Body,
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};
use http_body_util::BodyExt;
use lazy_static::lazy_static;
use regex::Regex;
use std::time::Instant;

use crate::state::AppState;

use super::registry::{
    HTTP_REQUEST_ERROR, HTTP_REQUEST_SUCCESS, HTTP_REQUESTS, REQUEST_DURATION_SECONDS,
    RESPONSE_SIZE_BYTES,
};

lazy_static! {
    static ref ROUTE_PATTERNS: Vec<(Regex, &'static str)> = vec![
        (
            Regex::new(r"^/([^/]+)/pools/[^/]+/poolstruct$").expect("valid regex"),
            "/$1/pools/{pooldata}/poolstruct",
        ),
        (
            Regex::new(r"^/([^/]+)/pools/[^/]+$").expect("valid regex"),
            "/$1/pools/{pooldata}",
        ),
        (
            Regex::new(r"^/([^/]+)/stake/[^/]+$").expect("valid regex"),
            "/$1/stake/{stakedata}",
        ),
        (
            Regex::new(r"^/([^/]+)/account/[^/]+$").expect("valid regex"),
            "/$1/account/{account}",
        ),
    ];
}

/// Replace path parameters with their names so one label covers every key,
/// e.g. `/swapservice/pools/BTC` becomes `/swapservice/pools/{pooldata}`.
fn normalize_path(path: &str) -> String {
    ROUTE_PATTERNS
        .iter()
        .find(|(re, _)| re.is_match(path))
        .map(|(re, replacement)| re.replace(path, *replacement).into_owned())
        .unwrap_or_else(|| path.to_string())
}

/// Append sorted query parameter names as `?a=<?>&b=<?>`.
fn with_query_params(route: String, query_string: Option<&str>) -> String {
    let Some(query) = query_string.filter(|q| !q.is_empty()) else {
        return route;
    };

    let mut params: Vec<&str> = query
        .split('&')
        .filter_map(|pair| pair.split('=').next())
        .filter(|name| !name.is_empty())
        .collect();
    params.sort_unstable();
    params.dedup();

    let query_params = params
        .iter()
        .map(|name| format!("{name}=<?>"))
        .collect::<Vec<_>>()
        .join("&");
    format!("{route}?{query_params}")
}

/// Metrics middleware for tracking HTTP requests
pub async fn metrics_middleware(
    State(state): State<AppState>,
    matched_path: Option<MatchedPath>,
    req: Request,
    next: Next,
) -> Response {
    let path = req.uri().path();
    if path == "/metrics" || path == "/metrics.json" {
        return next.run(req).await;
    }

    HTTP_REQUESTS.inc();
    let start = Instant::now();

    let method = req.method().to_string();
    let route = matched_path
        .as_ref()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| normalize_path(path));
    let route = if state.config.metrics.include_queryparams {
        with_query_params(route, req.uri().query())
    } else {
        route
    };

    let response = next.run(req).await;

    let duration = start.elapsed().as_secs_f64();
    let status = response.status();
    let status_code = status.as_u16().to_string();

    if status.is_client_error() || status.is_server_error() {
        HTTP_REQUEST_ERROR.inc();
    } else if status.is_success() {
        HTTP_REQUEST_SUCCESS.inc();
    }

    REQUEST_DURATION_SECONDS
        .with_label_values(&[&method, &route, &status_code])
        .observe(duration);

    // Buffer the body to measure it, then hand it back unchanged.
    let (parts, body) = response.into_parts();
    let bytes = body
        .collect()
        .await
        .map(|collected| collected.to_bytes())
        .unwrap_or_default();

    if !bytes.is_empty() {
        RESPONSE_SIZE_BYTES
            .with_label_values(&[&method, &route, &status_code])
            .observe(bytes.len() as f64);
    }

    Response::from_parts(parts, Body::from(bytes))
}
