// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use axum::{Json, Router, extract::State, routing::get};
use utoipa::openapi::OpenApi;

use crate::{openapi, state::AppState};

async fn openapi_json(State(state): State<AppState>) -> Json<OpenApi> {
    Json(openapi::api_doc(&state.config.module.store_name))
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/api-docs/openapi.json", get(openapi_json))
}
