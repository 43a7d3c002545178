// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod docs;
pub mod health;
pub mod metrics;
pub mod registry;
pub mod root;
pub mod swapservice;

pub use registry::{RegisterRoute, RouteInfo, RouteRegistry};
