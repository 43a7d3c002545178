// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use axum::extract::State;
use serde::Deserialize;

use super::common::{WriteError, generate_tx, prepare};
use crate::client::GeneratedTx;
use crate::extractors::JsonBody;
use crate::state::ModuleState;
use crate::types::{BaseReq, MsgSetStakeData};

/// Body of `PUT /<store>/stake`. Amounts are decimal strings.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SetStakeDataReq {
    pub base_req: BaseReq,
    pub name: String,
    pub ticker: String,
    pub atom_amount: String,
    pub token_amount: String,
}

#[utoipa::path(
    put,
    path = "/swapservice/stake",
    tag = "swapservice",
    summary = "Set stake data",
    description = "Build an unsigned transaction staking atoms and tokens into a pool on behalf of the base_req signer.",
    request_body(content = Object, description = "base_req, name, ticker, atom_amount and token_amount"),
    responses(
        (status = 200, description = "Unsigned StdTx, or a gas estimate when base_req.simulate is set", body = Object),
        (status = 400, description = "Malformed body, invalid message or gas settings"),
        (status = 401, description = "Missing chain id or invalid from address"),
        (status = 402, description = "Invalid fees or gas prices"),
        (status = 500, description = "Gas simulation failed")
    )
)]
pub async fn set_stake_data(
    State(state): State<ModuleState>,
    JsonBody(req): JsonBody<SetStakeDataReq>,
) -> Result<GeneratedTx, WriteError> {
    let SetStakeDataReq {
        base_req,
        name,
        ticker,
        atom_amount,
        token_amount,
    } = req;

    let (base_req, msg) = prepare(&state, base_req, |base_req| {
        MsgSetStakeData::new(name, ticker, atom_amount, token_amount, base_req.from.clone()).into()
    })?;

    generate_tx(&state, &base_req, msg).await
}
