// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::ConfigError;

#[derive(Debug, Clone)]
pub struct NodeConfig {
    /// Tendermint RPC endpoint of the node serving ABCI queries
    ///
    /// Env: SWAP_NODE_URL
    /// Valid schemes: http://, https://
    /// Default: http://127.0.0.1:26657
    pub url: String,

    /// Timeout for a single query to the node, in seconds
    ///
    /// Env: SWAP_NODE_TIMEOUT_SECS
    /// Default: 10
    pub timeout_secs: u64,
}

pub(crate) fn default_url() -> String {
    "http://127.0.0.1:26657".to_string()
}

pub(crate) fn default_timeout_secs() -> u64 {
    10
}

impl NodeConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.url.is_empty() {
            return Err(ConfigError::ValidateError(
                "Node URL cannot be empty".to_string(),
            ));
        }

        let parsed = url::Url::parse(&self.url)
            .map_err(|e| ConfigError::ValidateError(format!("Invalid URL '{}': {}", self.url, e)))?;

        match parsed.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(ConfigError::ValidateError(format!(
                    "Invalid URL scheme '{}'. Must be http:// or https://",
                    scheme
                )));
            }
        }

        if self.timeout_secs == 0 {
            return Err(ConfigError::ValidateError(
                "Node timeout cannot be 0".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}
