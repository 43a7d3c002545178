// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Bech32 account address checks.

use thiserror::Error;

/// Length in bytes of an account address payload.
pub const ADDRESS_LEN: usize = 20;

#[derive(Debug, Error)]
pub enum AddressError {
    #[error("address is empty")]
    Empty,

    #[error("invalid bech32 address: {0}")]
    Bech32(#[from] bech32::DecodeError),

    #[error("invalid address prefix: expected {expected}, got {actual}")]
    WrongPrefix { expected: String, actual: String },

    #[error("invalid address length: expected {ADDRESS_LEN} bytes, got {0}")]
    WrongLength(usize),
}

/// Decode a bech32 account address and return its raw bytes.
pub fn decode_account_address(address: &str, prefix: &str) -> Result<Vec<u8>, AddressError> {
    if address.is_empty() {
        return Err(AddressError::Empty);
    }

    let (hrp, data) = bech32::decode(address)?;

    if !hrp.as_str().eq_ignore_ascii_case(prefix) {
        return Err(AddressError::WrongPrefix {
            expected: prefix.to_string(),
            actual: hrp.as_str().to_string(),
        });
    }

    if data.len() != ADDRESS_LEN {
        return Err(AddressError::WrongLength(data.len()));
    }

    Ok(data)
}
