// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use axum::extract::{Path, State};
use axum::response::Response;

use super::QUERY_STAKE_STRUCT;
use super::common::{LookupError, relay_query};
use crate::extractors::{IndentParams, JsonQuery};
use crate::state::ModuleState;

#[utoipa::path(
    get,
    path = "/swapservice/stake/{stakedata}",
    tag = "swapservice",
    summary = "Get stake",
    params(
        ("stakedata" = String, Path, description = "Stake key"),
        ("indent" = Option<bool>, Query, description = "Pretty-print the response")
    ),
    responses(
        (status = 200, description = "Stake struct", body = Object),
        (status = 400, description = "Unknown query parameter"),
        (status = 404, description = "Stake not found")
    )
)]
pub async fn get_stake(
    State(state): State<ModuleState>,
    Path(stakedata): Path<String>,
    JsonQuery(params): JsonQuery<IndentParams>,
) -> Result<Response, LookupError> {
    relay_query(&state, QUERY_STAKE_STRUCT, Some(&stakedata), params.resolve(state.indent)).await
}
