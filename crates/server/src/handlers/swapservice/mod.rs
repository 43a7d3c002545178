// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! REST handlers of the swapservice module.
//!
//! Write routes turn a JSON request into an unsigned transaction; read routes
//! relay `custom/<store>/...` queries from the node.

mod common;
pub mod get_account;
pub mod get_pools;
pub mod get_stake;
pub mod set_pool_data;
pub mod set_stake_data;

#[cfg(test)]
pub(crate) mod test_support;

pub use common::{LookupError, WriteError, query_path};
pub use get_account::get_account;
pub use get_pools::{get_pool, get_pool_struct, get_pools};
pub use get_stake::get_stake;
pub use set_pool_data::{SetPoolDataReq, set_pool_data};
pub use set_stake_data::{SetStakeDataReq, set_stake_data};

/// Query route listing every pool.
pub const QUERY_POOL_DATAS: &str = "pooldatas";
/// Query route resolving one pool by key.
pub const QUERY_GET_POOL: &str = "getpool";
pub const QUERY_POOL_STRUCT: &str = "poolstruct";
pub const QUERY_STAKE_STRUCT: &str = "stakestruct";
pub const QUERY_ACCOUNT_STRUCT: &str = "accountstruct";
