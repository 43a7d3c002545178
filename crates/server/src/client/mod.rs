// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! External collaborators of the REST handlers: the node's query engine and
//! the unsigned transaction generator.

pub mod query;
pub mod tx;

pub use query::{AbciQueryClient, QueryClient, QueryError};
pub use tx::{GeneratedTx, StdTxGenerator, TxError, TxGenerator};
