// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::client::{GeneratedTx, QueryError, TxError};
use crate::metrics;
use crate::state::ModuleState;
use crate::types::{BaseReq, BaseReqError, Msg, MsgError};
use crate::utils::{error_response, post_process_response};

/// Failures of the write routes.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error(transparent)]
    BaseReq(#[from] BaseReqError),

    #[error(transparent)]
    Msg(#[from] MsgError),

    #[error(transparent)]
    Tx(#[from] TxError),
}

impl WriteError {
    pub fn status(&self) -> StatusCode {
        match self {
            WriteError::BaseReq(err) => err.status(),
            WriteError::Msg(_) => StatusCode::BAD_REQUEST,
            WriteError::Tx(err) => err.status(),
        }
    }
}

impl IntoResponse for WriteError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "transaction generation failed");
        }
        error_response(status, self.to_string())
    }
}

/// A store query the node could not answer.
#[derive(Debug, Error)]
#[error("{source}")]
pub struct LookupError {
    pub path: String,
    #[source]
    pub source: QueryError,
}

impl IntoResponse for LookupError {
    fn into_response(self) -> Response {
        tracing::debug!(path = %self.path, error = %self.source, "store query failed");
        error_response(StatusCode::NOT_FOUND, self.to_string())
    }
}

/// `custom/<store>/<route>[/<key>]`
pub fn query_path(store_name: &str, route: &str, key: Option<&str>) -> String {
    match key {
        Some(key) => format!("custom/{store_name}/{route}/{key}"),
        None => format!("custom/{store_name}/{route}"),
    }
}

pub(super) async fn relay_query(
    state: &ModuleState,
    route: &str,
    key: Option<&str>,
    indent: bool,
) -> Result<Response, LookupError> {
    let path = query_path(&state.store_name, route, key);
    let result = state.query.query_with_data(&path, None).await;
    metrics::record_query(route, result.is_ok());

    let bytes = result.map_err(|source| LookupError { path, source })?;
    Ok(post_process_response(bytes, indent))
}

/// Check the envelope, then build and validate the module message from it.
pub(super) fn prepare<F>(
    state: &ModuleState,
    base_req: BaseReq,
    build: F,
) -> Result<(BaseReq, Msg), WriteError>
where
    F: FnOnce(&BaseReq) -> Msg,
{
    let base_req = base_req.sanitize();
    base_req.validate_basic(&state.account_prefix)?;

    let msg = build(&base_req);
    msg.validate_basic()?;
    Ok((base_req, msg))
}

pub(super) async fn generate_tx(
    state: &ModuleState,
    base_req: &BaseReq,
    msg: Msg,
) -> Result<GeneratedTx, WriteError> {
    let msg_type = msg.type_name();
    let result = state.tx_generator.generate(base_req, vec![msg]).await;
    metrics::record_tx(msg_type, result.is_ok());
    Ok(result?)
}
