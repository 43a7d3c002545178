// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use axum::extract::{Path, State};
use axum::response::Response;

use super::common::{LookupError, relay_query};
use super::{QUERY_GET_POOL, QUERY_POOL_DATAS, QUERY_POOL_STRUCT};
use crate::extractors::{IndentParams, JsonQuery};
use crate::state::ModuleState;

#[utoipa::path(
    get,
    path = "/swapservice/pools",
    tag = "swapservice",
    summary = "List pools",
    description = "Relays the store's pooldatas query.",
    params(
        ("indent" = Option<bool>, Query, description = "Pretty-print the response")
    ),
    responses(
        (status = 200, description = "Every pool record", body = Object),
        (status = 400, description = "Unknown query parameter"),
        (status = 404, description = "Query failed")
    )
)]
pub async fn get_pools(
    State(state): State<ModuleState>,
    JsonQuery(params): JsonQuery<IndentParams>,
) -> Result<Response, LookupError> {
    relay_query(&state, QUERY_POOL_DATAS, None, params.resolve(state.indent)).await
}

#[utoipa::path(
    get,
    path = "/swapservice/pools/{pooldata}",
    tag = "swapservice",
    summary = "Get pool",
    params(
        ("pooldata" = String, Path, description = "Pool key"),
        ("indent" = Option<bool>, Query, description = "Pretty-print the response")
    ),
    responses(
        (status = 200, description = "Pool record", body = Object),
        (status = 400, description = "Unknown query parameter"),
        (status = 404, description = "Pool not found")
    )
)]
pub async fn get_pool(
    State(state): State<ModuleState>,
    Path(pooldata): Path<String>,
    JsonQuery(params): JsonQuery<IndentParams>,
) -> Result<Response, LookupError> {
    relay_query(&state, QUERY_GET_POOL, Some(&pooldata), params.resolve(state.indent)).await
}

#[utoipa::path(
    get,
    path = "/swapservice/pools/{pooldata}/poolstruct",
    tag = "swapservice",
    summary = "Get pool struct",
    params(
        ("pooldata" = String, Path, description = "Pool key"),
        ("indent" = Option<bool>, Query, description = "Pretty-print the response")
    ),
    responses(
        (status = 200, description = "Pool struct", body = Object),
        (status = 400, description = "Unknown query parameter"),
        (status = 404, description = "Pool not found")
    )
)]
pub async fn get_pool_struct(
    State(state): State<ModuleState>,
    Path(pooldata): Path<String>,
    JsonQuery(params): JsonQuery<IndentParams>,
) -> Result<Response, LookupError> {
    relay_query(&state, QUERY_POOL_STRUCT, Some(&pooldata), params.resolve(state.indent)).await
}
