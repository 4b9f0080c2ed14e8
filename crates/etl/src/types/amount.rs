//! Fixed-point amounts.
//!
//! Ledger amounts are integers counted in stroops, 10^-7 of one unit. They are
//! rendered as exact decimals with seven fractional digits; no binary floating
//! point is involved at any step.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of stroops in one unit of an asset
pub const STROOPS_PER_UNIT: i64 = 10_000_000;

/// Fractional digits of the canonical decimal form
pub const DECIMAL_PLACES: usize = 7;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AmountParseError {
    #[error("Invalid amount '{0}'")]
    Invalid(String),

    #[error("Amount '{0}' has more than 7 fractional digits")]
    TooPrecise(String),

    #[error("Amount '{0}' does not fit in 64 bits of stroops")]
    Overflow(String),
}

/// An amount in stroops, displayed as its exact decimal value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(i64);

impl Amount {
    pub const ZERO: Amount = Amount(0);

    pub const fn from_stroops(stroops: i64) -> Self {
        Self(stroops)
    }

    pub const fn stroops(self) -> i64 {
        self.0
    }
}

impl From<i64> for Amount {
    fn from(stroops: i64) -> Self {
        Self(stroops)
    }
}

/// Format: optional "-", integral part, ".", exactly seven fractional digits
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let magnitude = self.0.unsigned_abs();
        let unit = STROOPS_PER_UNIT as u64;
        write!(
            f,
            "{}{}.{:0width$}",
            sign,
            magnitude / unit,
            magnitude % unit,
            width = DECIMAL_PLACES
        )
    }
}

impl FromStr for Amount {
    type Err = AmountParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AmountParseError::Invalid(s.to_string());
        let overflow = || AmountParseError::Overflow(s.to_string());

        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let (whole, frac) = digits.split_once('.').unwrap_or((digits, ""));

        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        if !frac.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        if frac.len() > DECIMAL_PLACES {
            return Err(AmountParseError::TooPrecise(s.to_string()));
        }

        let whole: i128 = whole.parse().map_err(|_| overflow())?;
        let frac_value: i128 = if frac.is_empty() {
            0
        } else {
            let padded = format!("{:0<width$}", frac, width = DECIMAL_PLACES);
            padded.parse().map_err(|_| invalid())?
        };

        let magnitude = whole
            .checked_mul(STROOPS_PER_UNIT as i128)
            .and_then(|w| w.checked_add(frac_value))
            .ok_or_else(overflow)?;
        let stroops = if negative { -magnitude } else { magnitude };

        i64::try_from(stroops).map(Amount).map_err(|_| overflow())
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
