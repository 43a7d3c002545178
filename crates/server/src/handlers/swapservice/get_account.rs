// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use axum::extract::{Path, State};
use axum::response::Response;

use super::QUERY_ACCOUNT_STRUCT;
use super::common::{LookupError, relay_query};
use crate::extractors::{IndentParams, JsonQuery};
use crate::state::ModuleState;

#[utoipa::path(
    get,
    path = "/swapservice/account/{account}",
    tag = "swapservice",
    summary = "Get account",
    description = "Relays the store's accountstruct query. The key is passed through as given.",
    params(
        ("account" = String, Path, description = "Account key"),
        ("indent" = Option<bool>, Query, description = "Pretty-print the response")
    ),
    responses(
        (status = 200, description = "Account struct", body = Object),
        (status = 400, description = "Unknown query parameter"),
        (status = 404, description = "Account not found")
    )
)]
pub async fn get_account(
    State(state): State<ModuleState>,
    Path(account): Path<String>,
    JsonQuery(params): JsonQuery<IndentParams>,
) -> Result<Response, LookupError> {
    relay_query(&state, QUERY_ACCOUNT_STRUCT, Some(&account), params.resolve(state.indent)).await
}
