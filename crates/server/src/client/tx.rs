// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Generation of unsigned standard transactions.
//!
//! Mirrors what the chain's own light client does for REST callers: resolve
//! the gas limit (optionally by simulating against the node), derive fees
//! from gas prices, and return the unsigned transaction as amino JSON.

use async_trait::async_trait;
use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;
use serde_with::{DisplayFromStr, PickFirst, serde_as};
use std::num::ParseFloatError;
use std::sync::Arc;
use thiserror::Error;

use super::query::{QueryClient, QueryError};
use crate::types::coin::{Coin, DecCoin, coins_are_zero};
use crate::types::{BaseReq, DEFAULT_GAS, Msg, StdFee, StdSignMsg, StdTx, Tx};

/// Gas adjustment applied to simulated gas when the request does not set one.
pub const DEFAULT_GAS_ADJUSTMENT: f64 = 1.0;

/// Query path the node serves transaction simulation on.
pub const SIMULATE_PATH: &str = "/app/simulate";

const GAS_AUTO: &str = "auto";

#[derive(Debug, Error)]
pub enum TxError {
    #[error("{source}")]
    InvalidGasAdjustmentFormat {
        value: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("gas must be either integer or auto")]
    InvalidGas(String),

    #[error("invalid gas adjustment")]
    NegativeGasAdjustment,

    #[error("chain ID required but not specified")]
    MissingChainId,

    #[error("cannot provide both fees and gas prices")]
    FeesAndGasPrices,

    #[error("fee amount overflows for gas {0}")]
    FeeOverflow(u64),

    #[error("failed to simulate transaction: {0}")]
    Simulation(#[source] QueryError),

    #[error("failed to parse simulation response: {0}")]
    SimulationResponse(#[source] serde_json::Error),

    #[error("failed to encode transaction: {0}")]
    Encode(#[source] serde_json::Error),
}

impl TxError {
    pub fn status(&self) -> StatusCode {
        match self {
            TxError::Simulation(_) | TxError::SimulationResponse(_) | TxError::Encode(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

/// Output of a transaction generation request.
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratedTx {
    /// The unsigned transaction, ready for offline signing.
    Unsigned(Tx),
    /// Only a gas estimate was requested.
    Simulation { gas_estimate: u64 },
}

impl IntoResponse for GeneratedTx {
    fn into_response(self) -> Response {
        match self {
            GeneratedTx::Unsigned(tx) => match serde_json::to_vec(&tx) {
                Ok(body) => (
                    StatusCode::OK,
                    [(header::CONTENT_TYPE, "application/json")],
                    body,
                )
                    .into_response(),
                Err(err) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": TxError::Encode(err).to_string() })),
                )
                    .into_response(),
            },
            GeneratedTx::Simulation { gas_estimate } => (
                StatusCode::OK,
                Json(json!({ "gas_estimate": gas_estimate.to_string() })),
            )
                .into_response(),
        }
    }
}

/// Builds unsigned transactions from a base request and module messages.
#[async_trait]
pub trait TxGenerator: Send + Sync {
    async fn generate(&self, base_req: &BaseReq, msgs: Vec<Msg>) -> Result<GeneratedTx, TxError>;
}

/// Parse the `gas` field: empty means the default limit, `auto` asks for
/// simulation.
pub fn parse_gas(gas: &str) -> Result<(bool, u64), TxError> {
    match gas {
        "" => Ok((false, DEFAULT_GAS)),
        GAS_AUTO => Ok((true, DEFAULT_GAS)),
        other => other
            .parse::<u64>()
            .map(|limit| (false, limit))
            .map_err(|_| TxError::InvalidGas(other.to_string())),
    }
}

pub fn parse_gas_adjustment(value: &str) -> Result<f64, TxError> {
    if value.is_empty() {
        return Ok(DEFAULT_GAS_ADJUSTMENT);
    }
    value
        .parse::<f64>()
        .map_err(|source| TxError::InvalidGasAdjustmentFormat {
            value: value.to_string(),
            source,
        })
}

/// Fees to attach for `gas`: explicit fees, or `ceil(price * gas)` per gas price.
pub fn compute_fees(fees: &[Coin], gas_prices: &[DecCoin], gas: u64) -> Result<Vec<Coin>, TxError> {
    if coins_are_zero(gas_prices) {
        return Ok(fees.to_vec());
    }
    if !coins_are_zero(fees) {
        return Err(TxError::FeesAndGasPrices);
    }

    gas_prices
        .iter()
        .map(|price| {
            price
                .amount
                .checked_mul_int(gas)
                .map(|total| Coin::new(price.denom.clone(), total.ceil()))
                .ok_or(TxError::FeeOverflow(gas))
        })
        .collect()
}

#[serde_as]
#[derive(Debug, Deserialize)]
struct SimulateResponse {
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    gas_used: u64,
}

/// Default [`TxGenerator`], simulating through a [`QueryClient`] when asked to.
pub struct StdTxGenerator {
    query: Arc<dyn QueryClient>,
}

impl StdTxGenerator {
    pub fn new(query: Arc<dyn QueryClient>) -> Self {
        Self { query }
    }

    async fn estimate_gas(
        &self,
        base_req: &BaseReq,
        msgs: &[Msg],
        gas: u64,
        adjustment: f64,
    ) -> Result<u64, TxError> {
        let fee = StdFee {
            amount: compute_fees(&base_req.fees, &base_req.gas_prices, gas)?,
            gas,
        };
        let sim_tx = Tx::Std(StdTx::unsigned(msgs.to_vec(), fee, base_req.memo.clone()));
        let tx_bytes = serde_json::to_vec(&sim_tx).map_err(TxError::Encode)?;

        let raw = self
            .query
            .query_with_data(SIMULATE_PATH, Some(&tx_bytes))
            .await
            .map_err(TxError::Simulation)?;
        let response: SimulateResponse =
            serde_json::from_slice(&raw).map_err(TxError::SimulationResponse)?;

        let adjusted = (adjustment * response.gas_used as f64) as u64;
        tracing::debug!(
            estimate = response.gas_used,
            adjusted = adjusted,
            "simulated transaction gas"
        );
        Ok(adjusted)
    }
}

#[async_trait]
impl TxGenerator for StdTxGenerator {
    async fn generate(&self, base_req: &BaseReq, msgs: Vec<Msg>) -> Result<GeneratedTx, TxError> {
        let adjustment = parse_gas_adjustment(&base_req.gas_adjustment)?;
        let (simulate_and_execute, mut gas) = parse_gas(&base_req.gas)?;

        if base_req.simulate || simulate_and_execute {
            if adjustment < 0.0 {
                return Err(TxError::NegativeGasAdjustment);
            }

            gas = self.estimate_gas(base_req, &msgs, gas, adjustment).await?;

            if base_req.simulate {
                return Ok(GeneratedTx::Simulation { gas_estimate: gas });
            }
        }

        if base_req.chain_id.is_empty() {
            return Err(TxError::MissingChainId);
        }

        let sign_msg = StdSignMsg {
            chain_id: base_req.chain_id.clone(),
            account_number: base_req.account_number,
            sequence: base_req.sequence,
            fee: StdFee {
                amount: compute_fees(&base_req.fees, &base_req.gas_prices, gas)?,
                gas,
            },
            msgs,
            memo: base_req.memo.clone(),
        };

        Ok(GeneratedTx::Unsigned(Tx::from(sign_msg)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::coin::Int;
    use crate::types::msgs::MsgSetPoolData;
    use std::sync::Mutex;

    /// Records simulation requests and answers with a fixed gas figure.
    struct SimulatingNode {
        gas_used: Option<u64>,
        calls: Mutex<Vec<(String, Vec<u8>)>>,
    }

    impl SimulatingNode {
        fn new(gas_used: Option<u64>) -> Arc<Self> {
            Arc::new(Self {
                gas_used,
                calls: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl QueryClient for SimulatingNode {
        async fn query_with_data(
            &self,
            path: &str,
            data: Option<&[u8]>,
        ) -> Result<Vec<u8>, QueryError> {
            self.calls
                .lock()
                .unwrap()
                .push((path.to_string(), data.unwrap_or_default().to_vec()));
            match self.gas_used {
                Some(gas) => Ok(format!(r#"{{"gas_used":"{gas}"}}"#).into_bytes()),
                None => Err(QueryError::Abci {
                    code: 1,
                    codespace: "sdk".to_string(),
                    log: "out of gas".to_string(),
                }),
            }
        }
    }

    fn base_req() -> BaseReq {
        BaseReq {
            from: "cosmos1owner".to_string(),
            chain_id: "swapchain".to_string(),
            account_number: 7,
            sequence: 3,
            ..Default::default()
        }
    }

    fn msgs() -> Vec<Msg> {
        vec![MsgSetPoolData::new("Bitcoin", "BTC", "cosmos1owner").into()]
    }

    fn unsigned(generated: GeneratedTx) -> StdTx {
        match generated {
            GeneratedTx::Unsigned(Tx::Std(tx)) => tx,
            other => panic!("expected unsigned tx, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_gas() {
        assert_eq!(parse_gas("").unwrap(), (false, DEFAULT_GAS));
        assert_eq!(parse_gas("auto").unwrap(), (true, DEFAULT_GAS));
        assert_eq!(parse_gas("50000").unwrap(), (false, 50_000));
        let err = parse_gas("lots").unwrap_err();
        assert_eq!(err.to_string(), "gas must be either integer or auto");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_parse_gas_adjustment() {
        assert_eq!(parse_gas_adjustment("").unwrap(), DEFAULT_GAS_ADJUSTMENT);
        assert_eq!(parse_gas_adjustment("1.5").unwrap(), 1.5);
        assert!(matches!(
            parse_gas_adjustment("high"),
            Err(TxError::InvalidGasAdjustmentFormat { .. })
        ));
    }

    #[test]
    fn test_compute_fees_from_gas_prices() {
        let prices = vec![DecCoin {
            denom: "uatom".to_string(),
            amount: "0.025".parse().unwrap(),
        }];
        let fees = compute_fees(&[], &prices, 100_001).unwrap();
        assert_eq!(fees, vec![Coin::new("uatom", Int::from(2501))]);
    }

    #[test]
    fn test_compute_fees_conflict() {
        let fees = vec![Coin::new("uatom", Int::from(1))];
        let prices = vec![DecCoin {
            denom: "uatom".to_string(),
            amount: "0.025".parse().unwrap(),
        }];
        assert!(matches!(
            compute_fees(&fees, &prices, 10),
            Err(TxError::FeesAndGasPrices)
        ));
    }

    #[tokio::test]
    async fn test_generate_unsigned_with_defaults() {
        let node = SimulatingNode::new(Some(1));
        let generator = StdTxGenerator::new(node.clone());

        let tx = unsigned(generator.generate(&base_req(), msgs()).await.unwrap());
        assert_eq!(tx.msg, msgs());
        assert_eq!(tx.fee.gas, DEFAULT_GAS);
        assert!(tx.fee.amount.is_empty());
        assert!(tx.signatures.is_none());
        assert!(node.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_generate_auto_gas_simulates_and_adjusts() {
        let node = SimulatingNode::new(Some(40_000));
        let generator = StdTxGenerator::new(node.clone());
        let req = BaseReq {
            gas: "auto".to_string(),
            gas_adjustment: "1.5".to_string(),
            ..base_req()
        };

        let tx = unsigned(generator.generate(&req, msgs()).await.unwrap());
        assert_eq!(tx.fee.gas, 60_000);

        let calls = node.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, SIMULATE_PATH);
        let sim_tx: serde_json::Value = serde_json::from_slice(&calls[0].1).unwrap();
        assert_eq!(sim_tx["type"], "cosmos-sdk/StdTx");
    }

    #[tokio::test]
    async fn test_generate_simulate_only() {
        let node = SimulatingNode::new(Some(12_345));
        let generator = StdTxGenerator::new(node);
        let req = BaseReq {
            simulate: true,
            chain_id: String::new(),
            ..base_req()
        };

        let generated = generator.generate(&req, msgs()).await.unwrap();
        assert_eq!(generated, GeneratedTx::Simulation { gas_estimate: 12_345 });
    }

    #[tokio::test]
    async fn test_generate_simulation_failure_is_server_error() {
        let generator = StdTxGenerator::new(SimulatingNode::new(None));
        let req = BaseReq {
            gas: "auto".to_string(),
            ..base_req()
        };

        let err = generator.generate(&req, msgs()).await.unwrap_err();
        assert!(matches!(err, TxError::Simulation(_)));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_generate_negative_adjustment() {
        let generator = StdTxGenerator::new(SimulatingNode::new(Some(1)));
        let req = BaseReq {
            gas: "auto".to_string(),
            gas_adjustment: "-1".to_string(),
            ..base_req()
        };

        let err = generator.generate(&req, msgs()).await.unwrap_err();
        assert!(matches!(err, TxError::NegativeGasAdjustment));
    }

    #[tokio::test]
    async fn test_generate_requires_chain_id() {
        let generator = StdTxGenerator::new(SimulatingNode::new(Some(1)));
        let req = BaseReq {
            chain_id: String::new(),
            ..base_req()
        };

        let err = generator.generate(&req, msgs()).await.unwrap_err();
        assert_eq!(err.to_string(), "chain ID required but not specified");
    }
}
