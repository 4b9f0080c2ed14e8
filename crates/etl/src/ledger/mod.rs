// Copyright (C) 2026 Stellar ETL Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Decoded ledger model.
//!
//! These are the structures handed to the transform by the wire decoder: a
//! ledger, its applied transactions, their operations and the per-operation
//! execution results. They deserialize from JSON so exports can run from files
//! produced by the decoder.

pub mod account;
pub mod asset;
pub mod claim;
pub mod ledger_key;
pub mod operation;
pub mod result;
pub mod transaction;

pub use account::{AccountId, MuxedAccount, SignerKey};
pub use asset::{AlphaNum, Asset, AssetCode, TrustLineAsset};
pub use claim::{ClaimPredicate, ClaimableBalanceId, Claimant, ClaimantV0};
pub use ledger_key::{LedgerEntryType, LedgerKey};
pub use operation::{
    AllowTrustOp, BeginSponsoringFutureReservesOp, BumpSequenceOp, ChangeTrustOp,
    ClaimClaimableBalanceOp, ClawbackClaimableBalanceOp, ClawbackOp, CreateAccountOp,
    CreateClaimableBalanceOp, CreatePassiveSellOfferOp, ManageBuyOfferOp, ManageDataOp,
    ManageSellOfferOp, Operation, OperationBody, OperationType, PathPaymentStrictReceiveOp,
    PathPaymentStrictSendOp, PaymentOp, RevokeSponsorshipOp, SetOptionsOp, SetTrustLineFlagsOp,
    Signer,
};
pub use result::{
    ClaimAtom, OperationResult, OperationResultTr, PathPaymentResult, PathPaymentSuccess,
    SimplePaymentResult,
};
pub use transaction::{
    Ledger, LedgerTransaction, TransactionEnvelope, TransactionResult, TransactionResultCode,
};
