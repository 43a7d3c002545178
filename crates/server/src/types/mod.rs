// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Domain types shared by the handlers and the client collaborators.

pub mod address;
pub mod base_req;
pub mod coin;
pub mod msgs;
pub mod std_tx;

pub use base_req::{BaseReq, BaseReqError};
pub use coin::{Coin, Dec, DecCoin, Int};
pub use msgs::{MODULE_NAME, Msg, MsgError, MsgSetPoolData, MsgSetStakeData};
pub use std_tx::{DEFAULT_GAS, StdFee, StdSignMsg, StdTx, Tx};
