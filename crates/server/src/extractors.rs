// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Custom Axum extractors that return JSON error responses.

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::StatusCode;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::utils::error_response;

/// Message returned for any request body that does not decode.
pub const PARSE_REQUEST_ERROR: &str = "failed to parse request";

/// A wrapper around [`Query<T>`] that returns JSON error responses on rejection.
///
/// Axum's default `Query<T>` returns plain-text errors when deserialization fails
/// (e.g., unknown fields with `deny_unknown_fields`). This extractor converts
/// those rejections to `{"error": "..."}` JSON with 400 Bad Request status.
pub struct JsonQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for JsonQuery<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(JsonQuery(value)),
            Err(rejection) => Err(error_response(StatusCode::BAD_REQUEST, rejection.body_text())),
        }
    }
}

/// JSON request body decoded regardless of the declared content type.
///
/// Any decode failure becomes `400 {"error": "failed to parse request"}`; body
/// read failures such as an exceeded size limit keep their own status.
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;

        serde_json::from_slice(&bytes).map(JsonBody).map_err(|err| {
            tracing::debug!(error = %err, "rejected request body");
            error_response(StatusCode::BAD_REQUEST, PARSE_REQUEST_ERROR)
        })
    }
}

/// Query parameters accepted by the read routes.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IndentParams {
    /// Overrides the configured indent default for this request.
    pub indent: Option<bool>,
}

impl IndentParams {
    pub fn resolve(&self, default: bool) -> bool {
        self.indent.unwrap_or(default)
    }
}
