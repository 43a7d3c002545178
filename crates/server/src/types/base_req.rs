// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! The base request envelope carried by every write request.

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, DisplayFromStr, PickFirst, serde_as};
use thiserror::Error;

use super::address::decode_account_address;
use super::coin::{Coin, DecCoin, coins_are_valid, coins_are_zero};

/// Signer, chain and fee metadata needed to build a transaction.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseReq {
    pub from: String,
    pub memo: String,
    pub chain_id: String,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub account_number: u64,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub sequence: u64,
    #[serde_as(as = "DefaultOnNull")]
    pub fees: Vec<Coin>,
    #[serde_as(as = "DefaultOnNull")]
    pub gas_prices: Vec<DecCoin>,
    pub gas: String,
    pub gas_adjustment: String,
    pub simulate: bool,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BaseReqError {
    #[error("chain-id required but not specified")]
    MissingChainId,

    #[error("cannot provide both fees and gas prices")]
    FeesAndGasPrices,

    #[error("invalid fees or gas prices provided")]
    InvalidFees,

    #[error("invalid from address: {0}")]
    InvalidFrom(String),
}

impl BaseReqError {
    pub fn status(&self) -> StatusCode {
        match self {
            BaseReqError::MissingChainId | BaseReqError::InvalidFrom(_) => {
                StatusCode::UNAUTHORIZED
            }
            BaseReqError::FeesAndGasPrices => StatusCode::BAD_REQUEST,
            BaseReqError::InvalidFees => StatusCode::PAYMENT_REQUIRED,
        }
    }
}

impl BaseReq {
    /// Trim surrounding whitespace from the free-form string fields.
    pub fn sanitize(self) -> Self {
        Self {
            from: self.from.trim().to_string(),
            memo: self.memo.trim().to_string(),
            chain_id: self.chain_id.trim().to_string(),
            gas: self.gas.trim().to_string(),
            gas_adjustment: self.gas_adjustment.trim().to_string(),
            ..self
        }
    }

    /// Check the envelope carries what is needed to build a transaction.
    ///
    /// Chain and fee checks are skipped for simulation requests; the signer
    /// address is always checked against `account_prefix`.
    pub fn validate_basic(&self, account_prefix: &str) -> Result<(), BaseReqError> {
        if !self.simulate {
            if self.chain_id.is_empty() {
                return Err(BaseReqError::MissingChainId);
            }
            if !coins_are_zero(&self.fees) && !coins_are_zero(&self.gas_prices) {
                return Err(BaseReqError::FeesAndGasPrices);
            }
            if !coins_are_valid(&self.fees) && !coins_are_valid(&self.gas_prices) {
                return Err(BaseReqError::InvalidFees);
            }
        }

        decode_account_address(&self.from, account_prefix)
            .map_err(|_| BaseReqError::InvalidFrom(self.from.clone()))?;

        Ok(())
    }
}
