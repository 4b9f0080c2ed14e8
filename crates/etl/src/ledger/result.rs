//! Execution results of applied operations.

use serde::{Deserialize, Serialize};

use super::{AccountId, Asset, OperationType};
use crate::types::HexBytes;

/// One offer or pool crossed while executing a path payment.
///
/// Sold/bought are from the point of view of the offer owner (or pool), so
/// `asset_bought` is what the paying account sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimAtom {
    OrderBook {
        seller_id: AccountId,
        offer_id: i64,
        asset_sold: Asset,
        amount_sold: i64,
        asset_bought: Asset,
        amount_bought: i64,
    },
    LiquidityPool {
        liquidity_pool_id: HexBytes,
        asset_sold: Asset,
        amount_sold: i64,
        asset_bought: Asset,
        amount_bought: i64,
    },
}

impl ClaimAtom {
    pub fn asset_bought(&self) -> &Asset {
        match self {
            ClaimAtom::OrderBook { asset_bought, .. }
            | ClaimAtom::LiquidityPool { asset_bought, .. } => asset_bought,
        }
    }

    pub fn amount_bought(&self) -> i64 {
        match self {
            ClaimAtom::OrderBook { amount_bought, .. }
            | ClaimAtom::LiquidityPool { amount_bought, .. } => *amount_bought,
        }
    }
}

/// Final hop of a path payment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimplePaymentResult {
    pub destination: AccountId,
    pub asset: Asset,
    pub amount: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathPaymentSuccess {
    #[serde(default)]
    pub offers: Vec<ClaimAtom>,
    pub last: SimplePaymentResult,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathPaymentResult {
    Success(PathPaymentSuccess),
    /// Any non-success result code
    Failure(i32),
}

impl PathPaymentResult {
    /// Amount the source actually sent in a strict-receive payment.
    ///
    /// With no offers crossed the payment was direct and the sent amount is
    /// the delivered one. Otherwise it is the total bought by the leading run
    /// of offers that took the send asset.
    ///
    /// `None` when that total does not fit in an i64.
    pub fn send_amount(&self) -> Option<i64> {
        let PathPaymentResult::Success(success) = self else {
            return Some(0);
        };
        let Some(first) = success.offers.first() else {
            return Some(success.last.amount);
        };

        let send_asset = first.asset_bought();
        success
            .offers
            .iter()
            .take_while(|offer| offer.asset_bought() == send_asset)
            .map(ClaimAtom::amount_bought)
            .try_fold(0i64, i64::checked_add)
    }

    /// Amount delivered to the destination in a strict-send payment
    pub fn dest_amount(&self) -> i64 {
        match self {
            PathPaymentResult::Success(success) => success.last.amount,
            PathPaymentResult::Failure(_) => 0,
        }
    }
}

/// Operation-specific part of an applied operation's result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationResultTr {
    PathPaymentStrictReceive(PathPaymentResult),
    PathPaymentStrictSend(PathPaymentResult),
    /// Result of a kind whose payload is never read
    Other(i32),
}

impl OperationResultTr {
    pub fn operation_type(&self) -> Option<OperationType> {
        match self {
            OperationResultTr::PathPaymentStrictReceive(_) => {
                Some(OperationType::PathPaymentStrictReceive)
            }
            OperationResultTr::PathPaymentStrictSend(_) => Some(OperationType::PathPaymentStrictSend),
            OperationResultTr::Other(tag) => OperationType::from_tag(*tag),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationResult {
    OpInner(OperationResultTr),
    OpBadAuth,
    OpNoAccount,
    OpNotSupported,
    OpTooManySubentries,
    OpExceededWorkLimit,
    OpTooManySponsoring,
}

impl OperationResult {
    pub fn inner(&self) -> Option<&OperationResultTr> {
        match self {
            OperationResult::OpInner(tr) => Some(tr),
            _ => None,
        }
    }
}
