use serde::{Deserialize, Serialize};

use super::{AccountId, ClaimableBalanceId, TrustLineAsset};
use crate::types::HexBytes;

/// Ledger entry kinds of the current wire format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LedgerEntryType {
    Account,
    Trustline,
    Offer,
    Data,
    ClaimableBalance,
    LiquidityPool,
    ContractData,
    ContractCode,
    ConfigSetting,
    Ttl,
}

impl LedgerEntryType {
    pub fn name(self) -> &'static str {
        match self {
            LedgerEntryType::Account => "account",
            LedgerEntryType::Trustline => "trustline",
            LedgerEntryType::Offer => "offer",
            LedgerEntryType::Data => "data",
            LedgerEntryType::ClaimableBalance => "claimable_balance",
            LedgerEntryType::LiquidityPool => "liquidity_pool",
            LedgerEntryType::ContractData => "contract_data",
            LedgerEntryType::ContractCode => "contract_code",
            LedgerEntryType::ConfigSetting => "config_setting",
            LedgerEntryType::Ttl => "ttl",
        }
    }
}

/// Key of a ledger entry.
///
/// Contract, config and TTL keys are carried without their payload: nothing
/// downstream reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LedgerKey {
    Account {
        account_id: AccountId,
    },
    Trustline {
        account_id: AccountId,
        asset: TrustLineAsset,
    },
    Offer {
        seller_id: AccountId,
        offer_id: i64,
    },
    Data {
        account_id: AccountId,
        data_name: String,
    },
    ClaimableBalance {
        balance_id: ClaimableBalanceId,
    },
    LiquidityPool {
        liquidity_pool_id: HexBytes,
    },
    ContractData,
    ContractCode,
    ConfigSetting,
    Ttl,
}

impl LedgerKey {
    pub fn entry_type(&self) -> LedgerEntryType {
        match self {
            LedgerKey::Account { .. } => LedgerEntryType::Account,
            LedgerKey::Trustline { .. } => LedgerEntryType::Trustline,
            LedgerKey::Offer { .. } => LedgerEntryType::Offer,
            LedgerKey::Data { .. } => LedgerEntryType::Data,
            LedgerKey::ClaimableBalance { .. } => LedgerEntryType::ClaimableBalance,
            LedgerKey::LiquidityPool { .. } => LedgerEntryType::LiquidityPool,
            LedgerKey::ContractData => LedgerEntryType::ContractData,
            LedgerKey::ContractCode => LedgerEntryType::ContractCode,
            LedgerKey::ConfigSetting => LedgerEntryType::ConfigSetting,
            LedgerKey::Ttl => LedgerEntryType::Ttl,
        }
    }
}
