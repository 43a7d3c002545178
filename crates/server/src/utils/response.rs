// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Response helpers shared by the module handlers.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};

/// `{"error": message}` with the given status.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(json!({ "error": message.into() }))).into_response()
}

/// Relay raw query output as JSON, pretty-printed when `indent` is set.
///
/// Bytes that are not valid JSON are passed through untouched.
pub fn post_process_response(bytes: Vec<u8>, indent: bool) -> Response {
    let body = if indent {
        serde_json::from_slice::<Value>(&bytes)
            .ok()
            .and_then(|value| serde_json::to_vec_pretty(&value).ok())
            .unwrap_or(bytes)
    } else {
        bytes
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response()
}
