// Copyright (C) 2026 Stellar ETL Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Value wrappers with controlled text representation.
//!
//! Every amount, price and raw byte string that reaches an output record goes
//! through one of these types, so its rendering is defined in one place.

pub mod amount;
pub mod bytes;
pub mod price;

pub use amount::{Amount, AmountParseError, DECIMAL_PLACES, STROOPS_PER_UNIT};
pub use bytes::HexBytes;
pub use price::Price;
