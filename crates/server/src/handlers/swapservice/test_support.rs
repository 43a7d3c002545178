// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! In-memory collaborators for handler tests.

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

use crate::client::{GeneratedTx, QueryClient, QueryError, TxError, TxGenerator};
use crate::state::ModuleState;
use crate::types::{BaseReq, Msg, StdFee, StdSignMsg, Tx};

/// Node holding a fixed set of query results.
#[derive(Default)]
pub struct FakeNode {
    records: HashMap<String, Vec<u8>>,
    pub queried: Mutex<Vec<String>>,
}

impl FakeNode {
    pub fn with(mut self, path: &str, value: &str) -> Self {
        self.records.insert(path.to_string(), value.as_bytes().to_vec());
        self
    }
}

#[async_trait]
impl QueryClient for FakeNode {
    async fn query_with_data(&self, path: &str, _data: Option<&[u8]>) -> Result<Vec<u8>, QueryError> {
        self.queried.lock().unwrap().push(path.to_string());
        self.records
            .get(path)
            .cloned()
            .ok_or_else(|| QueryError::Abci {
                code: 6,
                codespace: "sdk".to_string(),
                log: format!("unknown request: {path} does not exist"),
            })
    }
}

/// Generator that records every call and echoes the messages back unsigned.
#[derive(Default)]
pub struct RecordingGenerator {
    pub calls: Mutex<Vec<(BaseReq, Vec<Msg>)>>,
}

#[async_trait]
impl TxGenerator for RecordingGenerator {
    async fn generate(&self, base_req: &BaseReq, msgs: Vec<Msg>) -> Result<GeneratedTx, TxError> {
        self.calls
            .lock()
            .unwrap()
            .push((base_req.clone(), msgs.clone()));
        Ok(GeneratedTx::Unsigned(Tx::from(StdSignMsg {
            chain_id: base_req.chain_id.clone(),
            account_number: base_req.account_number,
            sequence: base_req.sequence,
            fee: StdFee {
                amount: Vec::new(),
                gas: 200_000,
            },
            msgs,
            memo: base_req.memo.clone(),
        })))
    }
}

pub fn module_state(node: Arc<FakeNode>, generator: Arc<RecordingGenerator>) -> ModuleState {
    ModuleState {
        store_name: "swapservice".to_string(),
        indent: false,
        account_prefix: "cosmos".to_string(),
        query: node,
        tx_generator: generator,
    }
}

pub async fn send(app: Router, method: &str, uri: &str, body: &str) -> (StatusCode, String) {
    let response = app
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
