// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use bech32::{Bech32, Hrp};
use config::SwapServiceConfig;
use http_body_util::BodyExt;
use server::app::create_app;
use server::client::{QueryClient, QueryError};
use server::state::AppState;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

/// Node answering from a fixed table, with simulation support.
#[derive(Default)]
pub struct FakeNode {
    records: HashMap<String, Vec<u8>>,
    gas_used: Option<u64>,
    pub queried: Mutex<Vec<String>>,
}

impl FakeNode {
    pub fn with(mut self, path: &str, value: &str) -> Self {
        self.records.insert(path.to_string(), value.as_bytes().to_vec());
        self
    }

    pub fn simulating(mut self, gas_used: u64) -> Self {
        self.gas_used = Some(gas_used);
        self
    }
}

#[async_trait]
impl QueryClient for FakeNode {
    async fn query_with_data(&self, path: &str, _data: Option<&[u8]>) -> Result<Vec<u8>, QueryError> {
        self.queried.lock().unwrap().push(path.to_string());
        if path == "/app/simulate" {
            if let Some(gas) = self.gas_used {
                return Ok(format!(r#"{{"gas_used":{gas}}}"#).into_bytes());
            }
        }
        self.records.get(path).cloned().ok_or_else(|| QueryError::Abci {
            code: 6,
            codespace: "sdk".to_string(),
            log: format!("unknown request: {path}"),
        })
    }
}

pub fn address(seed: u8) -> String {
    bech32::encode::<Bech32>(Hrp::parse("cosmos").unwrap(), &[seed; 20]).unwrap()
}

pub fn pools_node() -> FakeNode {
    FakeNode::default()
        .with("custom/swapservice/pooldatas", r#"[{"ticker":"BTC","token_name":"Bitcoin"}]"#)
        .with("custom/swapservice/getpool/BTC", r#"{"ticker":"BTC","token_name":"Bitcoin"}"#)
        .with("custom/swapservice/poolstruct/BTC", r#"{"balance_atom":"10","balance_token":"2"}"#)
        .with("custom/swapservice/stakestruct/s1", r#"{"atom_amount":"5"}"#)
        .with("custom/swapservice/accountstruct/alice", r#"{"name":"alice"}"#)
}

pub fn state(config: SwapServiceConfig, node: Arc<FakeNode>) -> AppState {
    AppState::with_clients(config, node)
}

pub async fn send(state: AppState, method: &str, uri: &str, body: &str) -> (StatusCode, String) {
    let response = create_app(state)
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8_lossy(&body).to_string())
}
