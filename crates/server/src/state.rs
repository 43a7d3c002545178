// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use std::sync::Arc;
use std::time::Duration;

use config::SwapServiceConfig;
use thiserror::Error;

use crate::client::{AbciQueryClient, QueryClient, StdTxGenerator, TxGenerator};
use crate::routes::RouteRegistry;

#[derive(Debug, Error)]
pub enum StateError {
    #[error("Failed to create node client for {url}: {source}")]
    NodeClient {
        url: String,
        #[source]
        source: jsonrpsee::core::ClientError,
    },
}

/// Process-wide state shared by every route.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<SwapServiceConfig>,
    pub query_client: Arc<dyn QueryClient>,
    pub tx_generator: Arc<dyn TxGenerator>,
    pub route_registry: RouteRegistry,
}

impl AppState {
    /// Build the state with collaborators talking to the configured node.
    pub fn new(config: SwapServiceConfig) -> Result<Self, StateError> {
        let query_client = AbciQueryClient::new(
            &config.node.url,
            Duration::from_secs(config.node.timeout_secs),
        )
        .map_err(|source| StateError::NodeClient {
            url: config.node.url.clone(),
            source,
        })?;

        Ok(Self::with_clients(config, Arc::new(query_client)))
    }

    /// Build the state around an existing query client; transactions are
    /// generated with the standard generator on top of it.
    pub fn with_clients(config: SwapServiceConfig, query_client: Arc<dyn QueryClient>) -> Self {
        let tx_generator = Arc::new(StdTxGenerator::new(query_client.clone()));
        Self {
            config: Arc::new(config),
            query_client,
            tx_generator,
            route_registry: RouteRegistry::new(),
        }
    }

    pub fn module_state(&self) -> ModuleState {
        ModuleState {
            store_name: self.config.module.store_name.clone(),
            indent: self.config.module.indent,
            account_prefix: self.config.module.account_prefix.clone(),
            query: self.query_client.clone(),
            tx_generator: self.tx_generator.clone(),
        }
    }
}

/// What the swapservice handlers need: the store they serve and the two
/// collaborators.
#[derive(Clone)]
pub struct ModuleState {
    pub store_name: String,
    pub indent: bool,
    pub account_prefix: String,
    pub query: Arc<dyn QueryClient>,
    pub tx_generator: Arc<dyn TxGenerator>,
}
