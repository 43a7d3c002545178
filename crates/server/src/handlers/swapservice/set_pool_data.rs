// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use axum::extract::State;
use serde::Deserialize;

use super::common::{WriteError, generate_tx, prepare};
use crate::client::GeneratedTx;
use crate::extractors::JsonBody;
use crate::state::ModuleState;
use crate::types::{BaseReq, MsgSetPoolData};

/// Body of `PUT /<store>/pools`.
///
/// Legacy clients also send `balance_atom` and `balance_token`; those are
/// accepted and ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SetPoolDataReq {
    pub base_req: BaseReq,
    pub token_name: String,
    pub ticker: String,
}

#[utoipa::path(
    put,
    path = "/swapservice/pools",
    tag = "swapservice",
    summary = "Set pool data",
    description = "Build an unsigned transaction registering or updating a pool. The signer in base_req becomes the pool owner.",
    request_body(content = Object, description = "base_req, token_name and ticker"),
    responses(
        (status = 200, description = "Unsigned StdTx, or a gas estimate when base_req.simulate is set", body = Object),
        (status = 400, description = "Malformed body, invalid message or gas settings"),
        (status = 401, description = "Missing chain id or invalid from address"),
        (status = 402, description = "Invalid fees or gas prices"),
        (status = 500, description = "Gas simulation failed")
    )
)]
pub async fn set_pool_data(
    State(state): State<ModuleState>,
    JsonBody(req): JsonBody<SetPoolDataReq>,
) -> Result<GeneratedTx, WriteError> {
    let SetPoolDataReq {
        base_req,
        token_name,
        ticker,
    } = req;

    let (base_req, msg) = prepare(&state, base_req, |base_req| {
        MsgSetPoolData::new(token_name, ticker, base_req.from.clone()).into()
    })?;

    generate_tx(&state, &base_req, msg).await
}
