// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Messages of the swapservice module.
//!
//! Messages serialize in the amino JSON shape the chain expects inside a
//! `StdTx`: `{"type": "swapservice/MsgSetPoolData", "value": {...}}`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::coin::{AmountParseError, Dec};

/// Router key of the module, also the prefix of every message type name.
pub const MODULE_NAME: &str = "swapservice";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MsgError {
    #[error("{0} cannot be empty")]
    EmptyField(&'static str),

    #[error("invalid {field}: {source}")]
    InvalidAmount {
        field: &'static str,
        #[source]
        source: AmountParseError,
    },
}

fn require(field: &'static str, value: &str) -> Result<(), MsgError> {
    if value.is_empty() {
        return Err(MsgError::EmptyField(field));
    }
    Ok(())
}

fn require_amount(field: &'static str, value: &str) -> Result<(), MsgError> {
    require(field, value)?;
    value
        .parse::<Dec>()
        .map(|_| ())
        .map_err(|source| MsgError::InvalidAmount { field, source })
}

/// Register or update the data of a liquidity pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgSetPoolData {
    pub token_name: String,
    pub ticker: String,
    pub owner: String,
}

impl MsgSetPoolData {
    pub fn new(
        token_name: impl Into<String>,
        ticker: impl Into<String>,
        owner: impl Into<String>,
    ) -> Self {
        Self {
            token_name: token_name.into(),
            ticker: ticker.into(),
            owner: owner.into(),
        }
    }

    pub fn validate_basic(&self) -> Result<(), MsgError> {
        require("owner", &self.owner)?;
        require("token_name", &self.token_name)?;
        require("ticker", &self.ticker)?;
        Ok(())
    }
}

/// Record a stake of atoms and tokens into a pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgSetStakeData {
    pub name: String,
    pub ticker: String,
    pub atom_amount: String,
    pub token_amount: String,
    pub owner: String,
}

impl MsgSetStakeData {
    pub fn new(
        name: impl Into<String>,
        ticker: impl Into<String>,
        atom_amount: impl Into<String>,
        token_amount: impl Into<String>,
        owner: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            ticker: ticker.into(),
            atom_amount: atom_amount.into(),
            token_amount: token_amount.into(),
            owner: owner.into(),
        }
    }

    pub fn validate_basic(&self) -> Result<(), MsgError> {
        require("owner", &self.owner)?;
        require("name", &self.name)?;
        require("ticker", &self.ticker)?;
        require_amount("atom_amount", &self.atom_amount)?;
        require_amount("token_amount", &self.token_amount)?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Msg {
    #[serde(rename = "swapservice/MsgSetPoolData")]
    SetPoolData(MsgSetPoolData),
    #[serde(rename = "swapservice/MsgSetStakeData")]
    SetStakeData(MsgSetStakeData),
}

impl Msg {
    pub fn route(&self) -> &'static str {
        MODULE_NAME
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Msg::SetPoolData(_) => "set_pooldata",
            Msg::SetStakeData(_) => "set_stakedata",
        }
    }

    pub fn validate_basic(&self) -> Result<(), MsgError> {
        match self {
            Msg::SetPoolData(msg) => msg.validate_basic(),
            Msg::SetStakeData(msg) => msg.validate_basic(),
        }
    }

    /// Addresses that must sign a transaction carrying this message.
    pub fn signers(&self) -> Vec<&str> {
        match self {
            Msg::SetPoolData(msg) => vec![msg.owner.as_str()],
            Msg::SetStakeData(msg) => vec![msg.owner.as_str()],
        }
    }
}

impl From<MsgSetPoolData> for Msg {
    fn from(msg: MsgSetPoolData) -> Self {
        Msg::SetPoolData(msg)
    }
}

impl From<MsgSetStakeData> for Msg {
    fn from(msg: MsgSetStakeData) -> Self {
        Msg::SetStakeData(msg)
    }
}
