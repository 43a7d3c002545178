// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

/// Logs one line per request under the `http` target.
///
/// Format: `"METHOD /path?query STATUS DURATIONms"`, for example
/// `"GET /swapservice/pools?indent=true 200 3ms"`. Successful and redirect
/// responses log at DEBUG, client errors at WARN and server errors at ERROR.
pub async fn http_logger_middleware(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let full_path = match req.uri().query() {
        Some(query) => format!("{}?{}", req.uri().path(), query),
        None => req.uri().path().to_string(),
    };
    let start = Instant::now();

    let response = next.run(req).await;

    let duration_ms = start.elapsed().as_millis();
    let status = response.status();
    let status_code = status.as_u16();

    if status.is_server_error() {
        tracing::error!(
            target: "http",
            method = %method,
            path = %full_path,
            status = status_code,
            duration_ms = duration_ms,
            "{} {} {} {}ms", method, full_path, status_code, duration_ms
        );
    } else if status.is_client_error() {
        tracing::warn!(
            target: "http",
            method = %method,
            path = %full_path,
            status = status_code,
            duration_ms = duration_ms,
            "{} {} {} {}ms", method, full_path, status_code, duration_ms
        );
    } else {
        tracing::debug!(
            target: "http",
            method = %method,
            path = %full_path,
            status = status_code,
            duration_ms = duration_ms,
            "{} {} {} {}ms", method, full_path, status_code, duration_ms
        );
    }

    response
}
