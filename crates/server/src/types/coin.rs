// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Token amounts as they appear in transaction fees.
//!
//! Integer amounts are unsigned 256-bit values serialized as decimal strings.
//! Decimal amounts are fixed point with 18 fractional digits, matching the
//! precision the chain uses for gas prices.

use lazy_static::lazy_static;
use primitive_types::U256;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of fractional digits carried by [`Dec`].
pub const DEC_PRECISION: usize = 18;

lazy_static! {
    static ref DENOM_REGEX: Regex =
        Regex::new(r"^[a-z][a-z0-9]{2,15}$").expect("denomination regex is valid");
    static ref DEC_ONE: U256 = U256::exp10(DEC_PRECISION);
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountParseError {
    #[error("amount is empty")]
    Empty,

    #[error("invalid amount '{0}'")]
    Invalid(String),

    #[error("too many decimal places in '{0}', at most {DEC_PRECISION} are allowed")]
    TooPrecise(String),

    #[error("amount '{0}' is out of range")]
    Overflow(String),
}

/// Unsigned integer amount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Int(pub U256);

impl Int {
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl From<u64> for Int {
    fn from(value: u64) -> Self {
        Self(U256::from(value))
    }
}

impl FromStr for Int {
    type Err = AmountParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(AmountParseError::Empty);
        }
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AmountParseError::Invalid(s.to_string()));
        }
        U256::from_dec_str(s)
            .map(Int)
            .map_err(|_| AmountParseError::Overflow(s.to_string()))
    }
}

impl fmt::Display for Int {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Non-negative fixed point decimal with [`DEC_PRECISION`] fractional digits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Dec(U256);

impl Dec {
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Multiply by an integer, `None` on overflow.
    pub fn checked_mul_int(self, rhs: u64) -> Option<Dec> {
        self.0.checked_mul(U256::from(rhs)).map(Dec)
    }

    /// Round up to the nearest integer.
    pub fn ceil(self) -> Int {
        let (quotient, remainder) = self.0.div_mod(*DEC_ONE);
        if remainder.is_zero() {
            Int(quotient)
        } else {
            Int(quotient + U256::one())
        }
    }
}

impl From<Int> for Dec {
    fn from(value: Int) -> Self {
        Dec(value.0.saturating_mul(*DEC_ONE))
    }
}

impl FromStr for Dec {
    type Err = AmountParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(AmountParseError::Empty);
        }

        let (int_part, frac_part) = match s.split_once('.') {
            Some((int_part, frac_part)) => (int_part, frac_part),
            None => (s, ""),
        };

        let is_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if int_part.is_empty() || !is_digits(int_part) || !is_digits(frac_part) {
            return Err(AmountParseError::Invalid(s.to_string()));
        }
        if s.contains('.') && frac_part.is_empty() {
            return Err(AmountParseError::Invalid(s.to_string()));
        }
        if frac_part.len() > DEC_PRECISION {
            return Err(AmountParseError::TooPrecise(s.to_string()));
        }

        let overflow = || AmountParseError::Overflow(s.to_string());
        let int_value = U256::from_dec_str(int_part).map_err(|_| overflow())?;
        let frac_value = if frac_part.is_empty() {
            U256::zero()
        } else {
            U256::from_dec_str(frac_part).map_err(|_| overflow())?
                * U256::exp10(DEC_PRECISION - frac_part.len())
        };

        int_value
            .checked_mul(*DEC_ONE)
            .and_then(|scaled| scaled.checked_add(frac_value))
            .map(Dec)
            .ok_or_else(overflow)
    }
}

impl fmt::Display for Dec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (int_part, frac_part) = self.0.div_mod(*DEC_ONE);
        write!(
            f,
            "{}.{:0>width$}",
            int_part,
            frac_part.to_string(),
            width = DEC_PRECISION
        )
    }
}

/// Whether `denom` is a valid coin denomination.
pub fn is_valid_denom(denom: &str) -> bool {
    DENOM_REGEX.is_match(denom)
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    pub denom: String,
    #[serde_as(as = "DisplayFromStr")]
    pub amount: Int,
}

impl Coin {
    pub fn new(denom: impl Into<String>, amount: Int) -> Self {
        Self {
            denom: denom.into(),
            amount,
        }
    }
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecCoin {
    pub denom: String,
    #[serde_as(as = "DisplayFromStr")]
    pub amount: Dec,
}

/// Common view over [`Coin`] and [`DecCoin`] for set-level validation.
pub trait Denominated {
    fn denom(&self) -> &str;
    fn is_positive(&self) -> bool;
    fn is_zero(&self) -> bool;
}

impl Denominated for Coin {
    fn denom(&self) -> &str {
        &self.denom
    }
    fn is_positive(&self) -> bool {
        !self.amount.is_zero()
    }
    fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }
}

impl Denominated for DecCoin {
    fn denom(&self) -> &str {
        &self.denom
    }
    fn is_positive(&self) -> bool {
        !self.amount.is_zero()
    }
    fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }
}

/// A coin set is valid when every denomination is well formed, every amount is
/// positive, and denominations are sorted and unique. The empty set is valid.
pub fn coins_are_valid<C: Denominated>(coins: &[C]) -> bool {
    let all_valid = coins
        .iter()
        .all(|coin| is_valid_denom(coin.denom()) && coin.is_positive());
    let sorted_unique = coins.windows(2).all(|pair| pair[0].denom() < pair[1].denom());
    all_valid && sorted_unique
}

/// True when the set holds no non-zero amount.
pub fn coins_are_zero<C: Denominated>(coins: &[C]) -> bool {
    coins.iter().all(Denominated::is_zero)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Dec {
        s.parse().unwrap()
    }

    #[test]
    fn test_dec_parse_and_display() {
        assert_eq!(dec("0.025").to_string(), "0.025000000000000000");
        assert_eq!(dec("12").to_string(), "12.000000000000000000");
        assert_eq!(
            dec("1.000000000000000001").to_string(),
            "1.000000000000000001"
        );
    }

    #[test]
    fn test_dec_parse_rejects_malformed() {
        assert_eq!("".parse::<Dec>(), Err(AmountParseError::Empty));
        for input in ["-1", "1.", ".5", "1.2.3", "abc", "1e5", " 1"] {
            assert!(
                matches!(input.parse::<Dec>(), Err(AmountParseError::Invalid(_))),
                "{input:?} should be invalid"
            );
        }
        assert!(matches!(
            "0.0000000000000000001".parse::<Dec>(),
            Err(AmountParseError::TooPrecise(_))
        ));
    }

    #[test]
    fn test_dec_ceil() {
        assert_eq!(dec("2.0").ceil(), Int::from(2));
        assert_eq!(dec("2.000000000000000001").ceil(), Int::from(3));
        assert_eq!(dec("0.4").ceil(), Int::from(1));
        assert_eq!(dec("0").ceil(), Int::from(0));
    }

    #[test]
    fn test_gas_price_times_gas() {
        let fee = dec("0.025").checked_mul_int(200_000).unwrap().ceil();
        assert_eq!(fee, Int::from(5000));

        let fee = dec("0.0000001").checked_mul_int(3).unwrap().ceil();
        assert_eq!(fee, Int::from(1));
    }

    #[test]
    fn test_int_parse_is_decimal() {
        assert_eq!("10".parse::<Int>().unwrap(), Int::from(10));
        assert!("0x10".parse::<Int>().is_err());
        assert!("-5".parse::<Int>().is_err());
    }

    #[test]
    fn test_coin_json_uses_string_amounts() {
        let coin: Coin = serde_json::from_str(r#"{"denom":"uatom","amount":"150"}"#).unwrap();
        assert_eq!(coin, Coin::new("uatom", Int::from(150)));
        assert_eq!(
            serde_json::to_string(&coin).unwrap(),
            r#"{"denom":"uatom","amount":"150"}"#
        );

        let price: DecCoin =
            serde_json::from_str(r#"{"denom":"uatom","amount":"0.5"}"#).unwrap();
        assert_eq!(price.amount, dec("0.5"));
    }

    #[test]
    fn test_coins_validity() {
        let empty: Vec<Coin> = Vec::new();
        assert!(coins_are_valid(&empty));
        assert!(coins_are_zero(&empty));

        let ok = vec![Coin::new("atom", Int::from(1)), Coin::new("rune", Int::from(2))];
        assert!(coins_are_valid(&ok));
        assert!(!coins_are_zero(&ok));

        let unsorted = vec![Coin::new("rune", Int::from(1)), Coin::new("atom", Int::from(2))];
        assert!(!coins_are_valid(&unsorted));

        let duplicate = vec![Coin::new("atom", Int::from(1)), Coin::new("atom", Int::from(2))];
        assert!(!coins_are_valid(&duplicate));

        let zero = vec![Coin::new("atom", Int::from(0))];
        assert!(!coins_are_valid(&zero));
        assert!(coins_are_zero(&zero));

        let bad_denom = vec![Coin::new("A", Int::from(1))];
        assert!(!coins_are_valid(&bad_denom));
    }
}
