//! Per-kind detail extraction.
//!
//! `extract_operation_details` resolves the decoded tag to an
//! [`OperationType`], checks the body holds the matching payload and hands it
//! to the extractor for that kind. Every extractor is a pure function from the
//! payload (plus the operation's context) to a fresh [`Details`].

use base64::Engine;
use base64::prelude::BASE64_STANDARD;
use tracing::debug;

use super::asset::{AssetSlot, AssetTriplet, canonical_asset_string, transform_path};
use super::claimable::{balance_id_hex, transform_claimants};
use super::context::{OperationContext, operation_source};
use super::error::DetailsError;
use super::flags::{
    ACCOUNT_FLAGS, AUTHORIZED, AUTHORIZED_TO_MAINTAIN_LIABILITIES, TRUST_LINE_FLAGS,
    decompose_flags,
};
use super::ledger_key::revoke_sponsorship_details;
use super::output::Details;
use super::sponsorship::find_initiating_begin_sponsoring;
use crate::ledger::{
    AllowTrustOp, Asset, BeginSponsoringFutureReservesOp, BumpSequenceOp, ChangeTrustOp,
    ClaimClaimableBalanceOp, ClawbackClaimableBalanceOp, ClawbackOp, CreateAccountOp,
    CreateClaimableBalanceOp, CreatePassiveSellOfferOp, LedgerTransaction, ManageBuyOfferOp,
    ManageDataOp, ManageSellOfferOp, MuxedAccount, Operation, OperationBody, OperationResult,
    OperationResultTr, OperationType, PathPaymentStrictReceiveOp,
    PathPaymentStrictSendOp, PaymentOp, SetOptionsOp, SetTrustLineFlagsOp,
};
use crate::types::{Amount, Price};

/// Borrows the payload of the expected variant or fails with a schema mismatch.
macro_rules! payload {
    ($body:expr, $variant:ident) => {
        match $body {
            OperationBody::$variant(op) => op,
            _ => {
                return Err(DetailsError::SchemaMismatch {
                    expected: OperationType::$variant,
                });
            }
        }
    };
}

/// Checks a payload-free body is the expected variant.
macro_rules! marker {
    ($body:expr, $variant:ident) => {
        if !matches!($body, OperationBody::$variant) {
            return Err(DetailsError::SchemaMismatch {
                expected: OperationType::$variant,
            });
        }
    };
}

// ================================================================================================
// Dispatch
// ================================================================================================

pub fn extract_operation_details(
    operation: &Operation,
    transaction: &LedgerTransaction,
    context: &OperationContext<'_>,
) -> Result<Details, DetailsError> {
    let operation_type = OperationType::from_tag(operation.type_tag)
        .ok_or(DetailsError::UnsupportedOperationType(operation.type_tag))?;

    debug!(
        operation_index = context.operation_index,
        operation_id = context.operation_id,
        operation_type = %operation_type,
        "Extracting operation details"
    );

    let body = &operation.body;
    let index = context.operation_index as usize;
    match operation_type {
        OperationType::CreateAccount => create_account(payload!(body, CreateAccount), context),
        OperationType::Payment => payment(payload!(body, Payment), context),
        OperationType::PathPaymentStrictReceive => path_payment_strict_receive(
            payload!(body, PathPaymentStrictReceive),
            index,
            transaction,
            context,
        ),
        OperationType::PathPaymentStrictSend => path_payment_strict_send(
            payload!(body, PathPaymentStrictSend),
            index,
            transaction,
            context,
        ),
        OperationType::ManageBuyOffer => manage_buy_offer(payload!(body, ManageBuyOffer)),
        OperationType::ManageSellOffer => manage_sell_offer(payload!(body, ManageSellOffer)),
        OperationType::CreatePassiveSellOffer => {
            create_passive_sell_offer(payload!(body, CreatePassiveSellOffer))
        }
        OperationType::SetOptions => set_options(payload!(body, SetOptions)),
        OperationType::ChangeTrust => change_trust(payload!(body, ChangeTrust), context),
        OperationType::AllowTrust => allow_trust(payload!(body, AllowTrust), context),
        OperationType::AccountMerge => account_merge(payload!(body, AccountMerge), context),
        OperationType::Inflation => {
            marker!(body, Inflation);
            Ok(Details::default())
        }
        OperationType::ManageData => Ok(manage_data(payload!(body, ManageData))),
        OperationType::BumpSequence => Ok(bump_sequence(payload!(body, BumpSequence))),
        OperationType::CreateClaimableBalance => {
            create_claimable_balance(payload!(body, CreateClaimableBalance))
        }
        OperationType::ClaimClaimableBalance => {
            claim_claimable_balance(payload!(body, ClaimClaimableBalance), context)
        }
        OperationType::BeginSponsoringFutureReserves => {
            begin_sponsoring_future_reserves(payload!(body, BeginSponsoringFutureReserves))
        }
        OperationType::EndSponsoringFutureReserves => {
            marker!(body, EndSponsoringFutureReserves);
            end_sponsoring_future_reserves(operation, index, transaction)
        }
        OperationType::RevokeSponsorship => {
            revoke_sponsorship_details(payload!(body, RevokeSponsorship))
        }
        OperationType::Clawback => clawback(payload!(body, Clawback)),
        OperationType::ClawbackClaimableBalance => {
            clawback_claimable_balance(payload!(body, ClawbackClaimableBalance))
        }
        OperationType::SetTrustLineFlags => set_trust_line_flags(payload!(body, SetTrustLineFlags)),
        OperationType::LiquidityPoolDeposit
        | OperationType::LiquidityPoolWithdraw
        | OperationType::InvokeHostFunction
        | OperationType::ExtendFootprintTtl
        | OperationType::RestoreFootprint => {
            Err(DetailsError::UnsupportedOperationType(operation.type_tag))
        }
    }
}

// ================================================================================================
// Shared helpers
// ================================================================================================

fn muxed_address(account: &MuxedAccount, field: &'static str) -> Result<String, DetailsError> {
    account.address().map_err(DetailsError::address(field))
}

/// Float approximation plus the exact pair
fn price_fields(price: Price) -> Result<(f64, Price), DetailsError> {
    let approximation = price.approximate().ok_or(DetailsError::MalformedPrice {
        n: price.n,
        d: price.d,
    })?;
    Ok((approximation, price))
}

/// Result body of an applied operation; only read for successful transactions.
fn operation_result_tr<'a>(
    transaction: &'a LedgerTransaction,
    index: usize,
    operation_type: OperationType,
) -> Result<&'a OperationResultTr, DetailsError> {
    transaction
        .result
        .operation_result(index)
        .and_then(OperationResult::inner)
        .ok_or(DetailsError::MissingExecutionResult { operation_type })
}

// ================================================================================================
// Payments
// ================================================================================================

fn create_account(
    op: &CreateAccountOp,
    context: &OperationContext<'_>,
) -> Result<Details, DetailsError> {
    Ok(Details {
        funder: context.source_address.clone(),
        account: op
            .destination
            .address()
            .map_err(DetailsError::address("destination"))?,
        starting_balance: Amount::from_stroops(op.starting_balance),
        ..Default::default()
    })
}

fn payment(op: &PaymentOp, context: &OperationContext<'_>) -> Result<Details, DetailsError> {
    let details = Details {
        from: context.source_address.clone(),
        to: muxed_address(&op.destination, "destination")?,
        amount: Amount::from_stroops(op.amount),
        ..Default::default()
    };
    Ok(details.with_asset(AssetSlot::Unprefixed, AssetTriplet::from_asset(&op.asset)?))
}

fn path_payment_strict_receive(
    op: &PathPaymentStrictReceiveOp,
    index: usize,
    transaction: &LedgerTransaction,
    context: &OperationContext<'_>,
) -> Result<Details, DetailsError> {
    let source_amount = if transaction.successful() {
        let operation_type = OperationType::PathPaymentStrictReceive;
        match operation_result_tr(transaction, index, operation_type)? {
            OperationResultTr::PathPaymentStrictReceive(result) => result
                .send_amount()
                .map(Amount::from_stroops)
                .ok_or(DetailsError::MalformedExecutionResult { operation_type })?,
            _ => {
                return Err(DetailsError::SchemaMismatch {
                    expected: operation_type,
                });
            }
        }
    } else {
        Amount::ZERO
    };

    let details = Details {
        from: context.source_address.clone(),
        to: muxed_address(&op.destination, "destination")?,
        amount: Amount::from_stroops(op.dest_amount),
        source_max: Amount::from_stroops(op.send_max),
        source_amount,
        path: transform_path(&op.path)?,
        ..Default::default()
    };
    Ok(details
        .with_asset(AssetSlot::Unprefixed, AssetTriplet::from_asset(&op.dest_asset)?)
        .with_asset(AssetSlot::Source, AssetTriplet::from_asset(&op.send_asset)?))
}

fn path_payment_strict_send(
    op: &PathPaymentStrictSendOp,
    index: usize,
    transaction: &LedgerTransaction,
    context: &OperationContext<'_>,
) -> Result<Details, DetailsError> {
    let amount = if transaction.successful() {
        let operation_type = OperationType::PathPaymentStrictSend;
        match operation_result_tr(transaction, index, operation_type)? {
            OperationResultTr::PathPaymentStrictSend(result) => {
                Amount::from_stroops(result.dest_amount())
            }
            _ => {
                return Err(DetailsError::SchemaMismatch {
                    expected: operation_type,
                });
            }
        }
    } else {
        Amount::ZERO
    };

    let details = Details {
        from: context.source_address.clone(),
        to: muxed_address(&op.destination, "destination")?,
        amount,
        source_amount: Amount::from_stroops(op.send_amount),
        destination_min: Amount::from_stroops(op.dest_min).to_string(),
        path: transform_path(&op.path)?,
        ..Default::default()
    };
    Ok(details
        .with_asset(AssetSlot::Unprefixed, AssetTriplet::from_asset(&op.dest_asset)?)
        .with_asset(AssetSlot::Source, AssetTriplet::from_asset(&op.send_asset)?))
}

// ================================================================================================
// Offers
// ================================================================================================

fn offer_details(
    offer_id: i64,
    amount: i64,
    price: Price,
    buying: &Asset,
    selling: &Asset,
) -> Result<Details, DetailsError> {
    let (price, price_r) = price_fields(price)?;
    let details = Details {
        offer_id,
        amount: Amount::from_stroops(amount),
        price,
        price_r,
        ..Default::default()
    };
    Ok(details
        .with_asset(AssetSlot::Buying, AssetTriplet::from_asset(buying)?)
        .with_asset(AssetSlot::Selling, AssetTriplet::from_asset(selling)?))
}

fn manage_buy_offer(op: &ManageBuyOfferOp) -> Result<Details, DetailsError> {
    offer_details(op.offer_id, op.buy_amount, op.price, &op.buying, &op.selling)
}

fn manage_sell_offer(op: &ManageSellOfferOp) -> Result<Details, DetailsError> {
    offer_details(op.offer_id, op.amount, op.price, &op.buying, &op.selling)
}

fn create_passive_sell_offer(op: &CreatePassiveSellOfferOp) -> Result<Details, DetailsError> {
    offer_details(0, op.amount, op.price, &op.buying, &op.selling)
}

// ================================================================================================
// Accounts and trustlines
// ================================================================================================

fn set_options(op: &SetOptionsOp) -> Result<Details, DetailsError> {
    let mut details = Details {
        inflation_dest: match &op.inflation_dest {
            Some(account) => account
                .address()
                .map_err(DetailsError::address("inflation destination"))?,
            None => String::new(),
        },
        master_key_weight: op.master_weight.unwrap_or_default(),
        low_threshold: op.low_threshold.unwrap_or_default(),
        med_threshold: op.med_threshold.unwrap_or_default(),
        high_threshold: op.high_threshold.unwrap_or_default(),
        home_domain: op.home_domain.clone().unwrap_or_default(),
        ..Default::default()
    };

    if let Some(signer) = &op.signer {
        details.signer_key = signer
            .key
            .address()
            .map_err(DetailsError::address("signer key"))?;
        details.signer_weight = signer.weight;
    }
    if let Some(mask) = op.set_flags.filter(|mask| *mask > 0) {
        details = details.with_set_flags(decompose_flags(mask, &ACCOUNT_FLAGS));
    }
    if let Some(mask) = op.clear_flags.filter(|mask| *mask > 0) {
        details = details.with_clear_flags(decompose_flags(mask, &ACCOUNT_FLAGS));
    }
    Ok(details)
}

fn change_trust(op: &ChangeTrustOp, context: &OperationContext<'_>) -> Result<Details, DetailsError> {
    let asset = AssetTriplet::from_asset(&op.line)?;
    let details = Details {
        trustor: context.source_address.clone(),
        trustee: asset.issuer.clone(),
        limit: Amount::from_stroops(op.limit),
        ..Default::default()
    };
    Ok(details.with_asset(AssetSlot::Unprefixed, asset))
}

fn allow_trust(op: &AllowTrustOp, context: &OperationContext<'_>) -> Result<Details, DetailsError> {
    let asset = op.asset.to_asset(context.source.account_id());
    let details = Details {
        trustee: context.source_address.clone(),
        trustor: op
            .trustor
            .address()
            .map_err(DetailsError::address("trustor"))?,
        authorize: AUTHORIZED.is_set(op.authorize),
        authorize_to_maintain_liabilities: AUTHORIZED_TO_MAINTAIN_LIABILITIES.is_set(op.authorize),
        ..Default::default()
    };
    Ok(details.with_asset(AssetSlot::Unprefixed, AssetTriplet::from_asset(&asset)?))
}

fn account_merge(
    destination: &MuxedAccount,
    context: &OperationContext<'_>,
) -> Result<Details, DetailsError> {
    Ok(Details {
        account: context.source_address.clone(),
        into: muxed_address(destination, "destination")?,
        ..Default::default()
    })
}

fn manage_data(op: &ManageDataOp) -> Details {
    Details {
        name: op.data_name.clone(),
        value: op
            .data_value
            .as_ref()
            .map(|value| BASE64_STANDARD.encode(value.as_bytes()))
            .unwrap_or_default(),
        ..Default::default()
    }
}

fn bump_sequence(op: &BumpSequenceOp) -> Details {
    Details {
        bump_to: op.bump_to.to_string(),
        ..Default::default()
    }
}

fn set_trust_line_flags(op: &SetTrustLineFlagsOp) -> Result<Details, DetailsError> {
    let mut details = Details {
        trustor: op
            .trustor
            .address()
            .map_err(DetailsError::address("trustor"))?,
        ..Default::default()
    }
    .with_asset(AssetSlot::Unprefixed, AssetTriplet::from_asset(&op.asset)?);

    if op.set_flags > 0 {
        details = details.with_set_flags(decompose_flags(op.set_flags, &TRUST_LINE_FLAGS));
    }
    if op.clear_flags > 0 {
        details = details.with_clear_flags(decompose_flags(op.clear_flags, &TRUST_LINE_FLAGS));
    }
    Ok(details)
}

// ================================================================================================
// Claimable balances and sponsorship
// ================================================================================================

fn create_claimable_balance(op: &CreateClaimableBalanceOp) -> Result<Details, DetailsError> {
    Ok(Details {
        asset_code: canonical_asset_string(&op.asset)?,
        amount: Amount::from_stroops(op.amount),
        claimants: transform_claimants(&op.claimants)?,
        ..Default::default()
    })
}

fn claim_claimable_balance(
    op: &ClaimClaimableBalanceOp,
    context: &OperationContext<'_>,
) -> Result<Details, DetailsError> {
    Ok(Details {
        balance_id: balance_id_hex(&op.balance_id)?,
        account: context.source_address.clone(),
        ..Default::default()
    })
}

fn clawback_claimable_balance(op: &ClawbackClaimableBalanceOp) -> Result<Details, DetailsError> {
    Ok(Details {
        balance_id: balance_id_hex(&op.balance_id)?,
        ..Default::default()
    })
}

fn begin_sponsoring_future_reserves(
    op: &BeginSponsoringFutureReservesOp,
) -> Result<Details, DetailsError> {
    Ok(Details {
        sponsored_id: op
            .sponsored_id
            .address()
            .map_err(DetailsError::address("sponsored account"))?,
        ..Default::default()
    })
}

fn end_sponsoring_future_reserves(
    operation: &Operation,
    index: usize,
    transaction: &LedgerTransaction,
) -> Result<Details, DetailsError> {
    let begin_sponsor = match find_initiating_begin_sponsoring(operation, index, transaction) {
        Some(found) => muxed_address(
            operation_source(found.operation, transaction),
            "begin sponsor",
        )?,
        None => String::new(),
    };
    Ok(Details {
        begin_sponsor,
        ..Default::default()
    })
}

fn clawback(op: &ClawbackOp) -> Result<Details, DetailsError> {
    let details = Details {
        from: muxed_address(&op.from, "clawback account")?,
        amount: Amount::from_stroops(op.amount),
        ..Default::default()
    };
    Ok(details.with_asset(AssetSlot::Unprefixed, AssetTriplet::from_asset(&op.asset)?))
}
