//! Decoded operations.
//!
//! An [`Operation`] keeps the raw type tag next to the decoded payload. The two
//! normally agree; keeping both lets the transform report a corrupt or unknown
//! tag, or a payload that does not belong to its tag, instead of trusting
//! whichever one it happens to look at.

use serde::{Deserialize, Serialize};

use super::{AccountId, Asset, AssetCode, ClaimableBalanceId, Claimant, LedgerKey, MuxedAccount, SignerKey};
use crate::types::{HexBytes, Price};

/// Wire discriminants of every operation kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(i32)]
pub enum OperationType {
    CreateAccount = 0,
    Payment = 1,
    PathPaymentStrictReceive = 2,
    ManageSellOffer = 3,
    CreatePassiveSellOffer = 4,
    SetOptions = 5,
    ChangeTrust = 6,
    AllowTrust = 7,
    AccountMerge = 8,
    Inflation = 9,
    ManageData = 10,
    BumpSequence = 11,
    ManageBuyOffer = 12,
    PathPaymentStrictSend = 13,
    CreateClaimableBalance = 14,
    ClaimClaimableBalance = 15,
    BeginSponsoringFutureReserves = 16,
    EndSponsoringFutureReserves = 17,
    RevokeSponsorship = 18,
    Clawback = 19,
    ClawbackClaimableBalance = 20,
    SetTrustLineFlags = 21,
    LiquidityPoolDeposit = 22,
    LiquidityPoolWithdraw = 23,
    InvokeHostFunction = 24,
    ExtendFootprintTtl = 25,
    RestoreFootprint = 26,
}

impl OperationType {
    pub const ALL: [OperationType; 27] = [
        OperationType::CreateAccount,
        OperationType::Payment,
        OperationType::PathPaymentStrictReceive,
        OperationType::ManageSellOffer,
        OperationType::CreatePassiveSellOffer,
        OperationType::SetOptions,
        OperationType::ChangeTrust,
        OperationType::AllowTrust,
        OperationType::AccountMerge,
        OperationType::Inflation,
        OperationType::ManageData,
        OperationType::BumpSequence,
        OperationType::ManageBuyOffer,
        OperationType::PathPaymentStrictSend,
        OperationType::CreateClaimableBalance,
        OperationType::ClaimClaimableBalance,
        OperationType::BeginSponsoringFutureReserves,
        OperationType::EndSponsoringFutureReserves,
        OperationType::RevokeSponsorship,
        OperationType::Clawback,
        OperationType::ClawbackClaimableBalance,
        OperationType::SetTrustLineFlags,
        OperationType::LiquidityPoolDeposit,
        OperationType::LiquidityPoolWithdraw,
        OperationType::InvokeHostFunction,
        OperationType::ExtendFootprintTtl,
        OperationType::RestoreFootprint,
    ];

    pub fn from_tag(tag: i32) -> Option<Self> {
        usize::try_from(tag)
            .ok()
            .and_then(|i| Self::ALL.get(i))
            .copied()
    }

    pub fn tag(self) -> i32 {
        self as i32
    }

    pub fn name(self) -> &'static str {
        match self {
            OperationType::CreateAccount => "create_account",
            OperationType::Payment => "payment",
            OperationType::PathPaymentStrictReceive => "path_payment_strict_receive",
            OperationType::ManageSellOffer => "manage_sell_offer",
            OperationType::CreatePassiveSellOffer => "create_passive_sell_offer",
            OperationType::SetOptions => "set_options",
            OperationType::ChangeTrust => "change_trust",
            OperationType::AllowTrust => "allow_trust",
            OperationType::AccountMerge => "account_merge",
            OperationType::Inflation => "inflation",
            OperationType::ManageData => "manage_data",
            OperationType::BumpSequence => "bump_sequence",
            OperationType::ManageBuyOffer => "manage_buy_offer",
            OperationType::PathPaymentStrictSend => "path_payment_strict_send",
            OperationType::CreateClaimableBalance => "create_claimable_balance",
            OperationType::ClaimClaimableBalance => "claim_claimable_balance",
            OperationType::BeginSponsoringFutureReserves => "begin_sponsoring_future_reserves",
            OperationType::EndSponsoringFutureReserves => "end_sponsoring_future_reserves",
            OperationType::RevokeSponsorship => "revoke_sponsorship",
            OperationType::Clawback => "clawback",
            OperationType::ClawbackClaimableBalance => "clawback_claimable_balance",
            OperationType::SetTrustLineFlags => "set_trust_line_flags",
            OperationType::LiquidityPoolDeposit => "liquidity_pool_deposit",
            OperationType::LiquidityPoolWithdraw => "liquidity_pool_withdraw",
            OperationType::InvokeHostFunction => "invoke_host_function",
            OperationType::ExtendFootprintTtl => "extend_footprint_ttl",
            OperationType::RestoreFootprint => "restore_footprint",
        }
    }
}

impl std::fmt::Display for OperationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ================================================================================================
// Payloads
// ================================================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAccountOp {
    pub destination: AccountId,
    pub starting_balance: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentOp {
    pub destination: MuxedAccount,
    pub asset: Asset,
    pub amount: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathPaymentStrictReceiveOp {
    pub send_asset: Asset,
    pub send_max: i64,
    pub destination: MuxedAccount,
    pub dest_asset: Asset,
    pub dest_amount: i64,
    #[serde(default)]
    pub path: Vec<Asset>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathPaymentStrictSendOp {
    pub send_asset: Asset,
    pub send_amount: i64,
    pub destination: MuxedAccount,
    pub dest_asset: Asset,
    pub dest_min: i64,
    #[serde(default)]
    pub path: Vec<Asset>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManageSellOfferOp {
    pub selling: Asset,
    pub buying: Asset,
    pub amount: i64,
    pub price: Price,
    pub offer_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManageBuyOfferOp {
    pub selling: Asset,
    pub buying: Asset,
    pub buy_amount: i64,
    pub price: Price,
    pub offer_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePassiveSellOfferOp {
    pub selling: Asset,
    pub buying: Asset,
    pub amount: i64,
    pub price: Price,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signer {
    pub key: SignerKey,
    pub weight: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetOptionsOp {
    pub inflation_dest: Option<AccountId>,
    pub clear_flags: Option<u32>,
    pub set_flags: Option<u32>,
    pub master_weight: Option<u32>,
    pub low_threshold: Option<u32>,
    pub med_threshold: Option<u32>,
    pub high_threshold: Option<u32>,
    pub home_domain: Option<String>,
    pub signer: Option<Signer>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeTrustOp {
    pub line: Asset,
    pub limit: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowTrustOp {
    pub trustor: AccountId,
    pub asset: AssetCode,
    /// Trustline authorization bits to apply
    pub authorize: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManageDataOp {
    pub data_name: String,
    /// `None` deletes the entry
    #[serde(default)]
    pub data_value: Option<HexBytes>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BumpSequenceOp {
    pub bump_to: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateClaimableBalanceOp {
    pub asset: Asset,
    pub amount: i64,
    pub claimants: Vec<Claimant>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimClaimableBalanceOp {
    pub balance_id: ClaimableBalanceId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeginSponsoringFutureReservesOp {
    pub sponsored_id: AccountId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevokeSponsorshipOp {
    LedgerEntry(LedgerKey),
    Signer {
        account_id: AccountId,
        signer_key: SignerKey,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClawbackOp {
    pub asset: Asset,
    pub from: MuxedAccount,
    pub amount: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClawbackClaimableBalanceOp {
    pub balance_id: ClaimableBalanceId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetTrustLineFlagsOp {
    pub trustor: AccountId,
    pub asset: Asset,
    #[serde(default)]
    pub clear_flags: u32,
    #[serde(default)]
    pub set_flags: u32,
}

// ================================================================================================
// Operation
// ================================================================================================

/// Decoded operation payload.
///
/// Soroban and liquidity-pool kinds are recognised but carried without their
/// payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationBody {
    CreateAccount(CreateAccountOp),
    Payment(PaymentOp),
    PathPaymentStrictReceive(PathPaymentStrictReceiveOp),
    ManageSellOffer(ManageSellOfferOp),
    CreatePassiveSellOffer(CreatePassiveSellOfferOp),
    SetOptions(SetOptionsOp),
    ChangeTrust(ChangeTrustOp),
    AllowTrust(AllowTrustOp),
    AccountMerge(MuxedAccount),
    Inflation,
    ManageData(ManageDataOp),
    BumpSequence(BumpSequenceOp),
    ManageBuyOffer(ManageBuyOfferOp),
    PathPaymentStrictSend(PathPaymentStrictSendOp),
    CreateClaimableBalance(CreateClaimableBalanceOp),
    ClaimClaimableBalance(ClaimClaimableBalanceOp),
    BeginSponsoringFutureReserves(BeginSponsoringFutureReservesOp),
    EndSponsoringFutureReserves,
    RevokeSponsorship(RevokeSponsorshipOp),
    Clawback(ClawbackOp),
    ClawbackClaimableBalance(ClawbackClaimableBalanceOp),
    SetTrustLineFlags(SetTrustLineFlagsOp),
    LiquidityPoolDeposit,
    LiquidityPoolWithdraw,
    InvokeHostFunction,
    ExtendFootprintTtl,
    RestoreFootprint,
}

impl OperationBody {
    /// The kind this payload belongs to
    pub fn operation_type(&self) -> OperationType {
        match self {
            OperationBody::CreateAccount(_) => OperationType::CreateAccount,
            OperationBody::Payment(_) => OperationType::Payment,
            OperationBody::PathPaymentStrictReceive(_) => OperationType::PathPaymentStrictReceive,
            OperationBody::ManageSellOffer(_) => OperationType::ManageSellOffer,
            OperationBody::CreatePassiveSellOffer(_) => OperationType::CreatePassiveSellOffer,
            OperationBody::SetOptions(_) => OperationType::SetOptions,
            OperationBody::ChangeTrust(_) => OperationType::ChangeTrust,
            OperationBody::AllowTrust(_) => OperationType::AllowTrust,
            OperationBody::AccountMerge(_) => OperationType::AccountMerge,
            OperationBody::Inflation => OperationType::Inflation,
            OperationBody::ManageData(_) => OperationType::ManageData,
            OperationBody::BumpSequence(_) => OperationType::BumpSequence,
            OperationBody::ManageBuyOffer(_) => OperationType::ManageBuyOffer,
            OperationBody::PathPaymentStrictSend(_) => OperationType::PathPaymentStrictSend,
            OperationBody::CreateClaimableBalance(_) => OperationType::CreateClaimableBalance,
            OperationBody::ClaimClaimableBalance(_) => OperationType::ClaimClaimableBalance,
            OperationBody::BeginSponsoringFutureReserves(_) => {
                OperationType::BeginSponsoringFutureReserves
            }
            OperationBody::EndSponsoringFutureReserves => {
                OperationType::EndSponsoringFutureReserves
            }
            OperationBody::RevokeSponsorship(_) => OperationType::RevokeSponsorship,
            OperationBody::Clawback(_) => OperationType::Clawback,
            OperationBody::ClawbackClaimableBalance(_) => OperationType::ClawbackClaimableBalance,
            OperationBody::SetTrustLineFlags(_) => OperationType::SetTrustLineFlags,
            OperationBody::LiquidityPoolDeposit => OperationType::LiquidityPoolDeposit,
            OperationBody::LiquidityPoolWithdraw => OperationType::LiquidityPoolWithdraw,
            OperationBody::InvokeHostFunction => OperationType::InvokeHostFunction,
            OperationBody::ExtendFootprintTtl => OperationType::ExtendFootprintTtl,
            OperationBody::RestoreFootprint => OperationType::RestoreFootprint,
        }
    }

    pub fn as_begin_sponsoring_future_reserves(&self) -> Option<&BeginSponsoringFutureReservesOp> {
        match self {
            OperationBody::BeginSponsoringFutureReserves(op) => Some(op),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    /// Explicit source; the transaction source applies when absent
    #[serde(default)]
    pub source_account: Option<MuxedAccount>,
    /// Raw decoded discriminant
    #[serde(rename = "type")]
    pub type_tag: i32,
    pub body: OperationBody,
}

impl Operation {
    /// Operation whose tag is taken from its payload
    pub fn new(source_account: Option<MuxedAccount>, body: OperationBody) -> Self {
        Self {
            source_account,
            type_tag: body.operation_type().tag(),
            body,
        }
    }
}
