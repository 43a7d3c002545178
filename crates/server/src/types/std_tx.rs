// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Unsigned standard transaction returned to callers for offline signing.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};

use super::coin::Coin;
use super::msgs::Msg;

/// Gas limit used when the request does not set one.
pub const DEFAULT_GAS: u64 = 200_000;

#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StdFee {
    pub amount: Vec<Coin>,
    #[serde_as(as = "DisplayFromStr")]
    pub gas: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StdSignature {
    pub pub_key: Option<serde_json::Value>,
    pub signature: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StdTx {
    pub msg: Vec<Msg>,
    pub fee: StdFee,
    pub signatures: Option<Vec<StdSignature>>,
    pub memo: String,
}

impl StdTx {
    /// A transaction with no signatures yet.
    pub fn unsigned(msg: Vec<Msg>, fee: StdFee, memo: String) -> Self {
        Self {
            msg,
            fee,
            signatures: None,
            memo,
        }
    }
}

/// Amino JSON envelope of a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Tx {
    #[serde(rename = "cosmos-sdk/StdTx")]
    Std(StdTx),
}

/// Everything a signer commits to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StdSignMsg {
    pub chain_id: String,
    pub account_number: u64,
    pub sequence: u64,
    pub fee: StdFee,
    pub msgs: Vec<Msg>,
    pub memo: String,
}

impl From<StdSignMsg> for Tx {
    fn from(sign_msg: StdSignMsg) -> Self {
        Tx::Std(StdTx::unsigned(sign_msg.msgs, sign_msg.fee, sign_msg.memo))
    }
}
