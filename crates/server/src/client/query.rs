// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Read access to the node's application state through ABCI queries.

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use jsonrpsee::core::ClientError;
use jsonrpsee::core::client::ClientT;
use jsonrpsee::core::params::ObjectParams;
use jsonrpsee::http_client::{HttpClient, HttpClientBuilder};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("RPC request failed: {0}")]
    Rpc(#[from] ClientError),

    #[error("{log}")]
    Abci {
        code: u32,
        codespace: String,
        log: String,
    },

    #[error("Failed to decode query response value: {0}")]
    InvalidValue(#[from] base64::DecodeError),

    #[error("Failed to encode query parameters: {0}")]
    Params(#[from] serde_json::Error),
}

/// Something that can answer application queries such as `custom/<store>/pooldatas`.
#[async_trait]
pub trait QueryClient: Send + Sync {
    /// Run the query at `path` with optional raw `data` and return the raw response value.
    async fn query_with_data(&self, path: &str, data: Option<&[u8]>) -> Result<Vec<u8>, QueryError>;
}

#[derive(Debug, Deserialize)]
struct AbciQueryResult {
    response: AbciQueryResponse,
}

#[derive(Debug, Deserialize)]
struct AbciQueryResponse {
    #[serde(default)]
    code: u32,
    #[serde(default)]
    log: String,
    #[serde(default)]
    codespace: String,
    #[serde(default)]
    value: Option<String>,
}

impl AbciQueryResponse {
    fn into_value(self) -> Result<Vec<u8>, QueryError> {
        if self.code != 0 {
            return Err(QueryError::Abci {
                code: self.code,
                codespace: self.codespace,
                log: self.log,
            });
        }

        match self.value {
            Some(value) if !value.is_empty() => Ok(BASE64.decode(value)?),
            _ => Ok(Vec::new()),
        }
    }
}

/// [`QueryClient`] backed by Tendermint's `abci_query` JSON-RPC method.
#[derive(Clone)]
pub struct AbciQueryClient {
    client: HttpClient,
}

impl AbciQueryClient {
    pub fn new(url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let client = HttpClientBuilder::default()
            .request_timeout(timeout)
            .build(url)?;
        Ok(Self { client })
    }
}

#[async_trait]
impl QueryClient for AbciQueryClient {
    async fn query_with_data(&self, path: &str, data: Option<&[u8]>) -> Result<Vec<u8>, QueryError> {
        let mut params = ObjectParams::new();
        params.insert("path", path)?;
        params.insert("data", hex::encode(data.unwrap_or_default()))?;
        params.insert("height", "0")?;
        params.insert("prove", false)?;

        tracing::debug!(path = %path, "abci_query");

        let result: AbciQueryResult = self.client.request("abci_query", params).await?;
        result.response.into_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(json: &str) -> AbciQueryResponse {
        serde_json::from_str::<AbciQueryResult>(json).unwrap().response
    }

    #[test]
    fn test_successful_response_is_base64_decoded() {
        let value = response(
            r#"{"response":{"code":0,"log":"","info":"","index":"0","key":null,"value":"eyJ0aWNrZXIiOiJCVEMifQ==","proof":null,"height":"42","codespace":""}}"#,
        )
        .into_value()
        .unwrap();
        assert_eq!(value, br#"{"ticker":"BTC"}"#.to_vec());
    }

    #[test]
    fn test_null_value_is_empty() {
        let value = response(r#"{"response":{"code":0,"value":null}}"#)
            .into_value()
            .unwrap();
        assert!(value.is_empty());
    }

    #[test]
    fn test_nonzero_code_carries_log() {
        let err = response(
            r#"{"response":{"code":6,"log":"unknown request: pool BTC does not exist","codespace":"sdk"}}"#,
        )
        .into_value()
        .unwrap_err();
        assert!(matches!(err, QueryError::Abci { code: 6, .. }));
        assert_eq!(err.to_string(), "unknown request: pool BTC does not exist");
    }

    #[test]
    fn test_invalid_base64() {
        let err = response(r#"{"response":{"code":0,"value":"!!!"}}"#)
            .into_value()
            .unwrap_err();
        assert!(matches!(err, QueryError::InvalidValue(_)));
    }
}
