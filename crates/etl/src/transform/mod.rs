// Copyright (C) 2026 Stellar ETL Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Operation transform engine.
//!
//! Turns one decoded operation, with its enclosing transaction and position,
//! into a flat [`OperationRecord`]. The transform is a pure function of its
//! arguments: it keeps no state between calls and performs no I/O.

pub mod asset;
pub mod claimable;
pub mod context;
pub mod details;
pub mod error;
pub mod flags;
pub mod ledger_key;
pub mod operation;
pub mod output;
pub mod sponsorship;

pub use asset::{AssetSlot, AssetTriplet};
pub use context::OperationContext;
pub use details::extract_operation_details;
pub use error::{DetailsError, TransformError};
pub use flags::{FlagSet, NamedFlag, decompose_flags};
pub use operation::{transform_ledger, transform_operation, transform_transaction};
pub use output::{ClaimantOutput, Details, OperationRecord, PathAsset};
pub use sponsorship::{SponsorshipMatch, find_initiating_begin_sponsoring};
