// Copyright (C) 2026 Stellar ETL Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Operation-level ETL for Stellar ledgers.
//!
//! [`transform::transform_operation`] turns one decoded [`ledger::Operation`]
//! into a flat [`transform::OperationRecord`] ready for analytical storage.

pub mod export;
pub mod ledger;
pub mod logging;
pub mod transform;
pub mod types;
pub mod utils;
