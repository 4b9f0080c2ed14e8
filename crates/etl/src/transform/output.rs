//! Output record shapes.
//!
//! `Details` is a single flat record holding the union of every field any
//! operation kind fills. Every key is serialized on every record so the
//! downstream schema stays stable; fields that do not apply to a kind keep
//! their zero value.

use serde::{Deserialize, Serialize};

use crate::ledger::ClaimPredicate;
use crate::types::{Amount, Price};

/// One exported operation row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationRecord {
    pub source_account: String,
    /// M-address of the effective source when it is multiplexed
    pub source_account_muxed: Option<String>,
    #[serde(rename = "type")]
    pub operation_type: i32,
    pub type_string: String,
    /// 1-based position within the transaction
    pub application_order: u32,
    #[serde(rename = "id")]
    pub operation_id: i64,
    pub transaction_id: i64,
    pub details: Details,
}

/// Asset type, code and issuer of one hop in a payment path
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathAsset {
    pub asset_type: String,
    pub asset_code: String,
    pub asset_issuer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimantOutput {
    pub destination: String,
    pub predicate: ClaimPredicate,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Details {
    pub account: String,
    pub amount: Amount,
    pub asset_code: String,
    pub asset_issuer: String,
    pub asset_type: String,
    pub authorize: bool,
    pub authorize_to_maintain_liabilities: bool,
    pub balance_id: String,
    pub begin_sponsor: String,
    pub bump_to: String,
    pub buying_asset_code: String,
    pub buying_asset_issuer: String,
    pub buying_asset_type: String,
    pub claimable_balance_id: String,
    pub claimants: Vec<ClaimantOutput>,
    pub clear_flags: Vec<i32>,
    #[serde(rename = "clear_flags_s")]
    pub clear_flags_string: Vec<String>,
    pub data_account_id: String,
    pub data_name: String,
    pub destination_min: String,
    pub from: String,
    pub funder: String,
    pub high_threshold: u32,
    pub home_domain: String,
    pub inflation_dest: String,
    pub into: String,
    pub limit: Amount,
    pub low_threshold: u32,
    pub master_key_weight: u32,
    pub med_threshold: u32,
    pub name: String,
    pub offer_id: i64,
    pub path: Vec<PathAsset>,
    pub price: f64,
    pub price_r: Price,
    pub selling_asset_code: String,
    pub selling_asset_issuer: String,
    pub selling_asset_type: String,
    pub set_flags: Vec<i32>,
    #[serde(rename = "set_flags_s")]
    pub set_flags_string: Vec<String>,
    pub signer_account_id: String,
    pub signer_key: String,
    pub signer_weight: u32,
    pub source_amount: Amount,
    pub source_asset_code: String,
    pub source_asset_issuer: String,
    pub source_asset_type: String,
    pub source_max: Amount,
    pub sponsored_id: String,
    pub starting_balance: Amount,
    pub to: String,
    pub trustee: String,
    pub trustline_account_id: String,
    pub trustline_asset: String,
    pub trustor: String,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_details_serialize_every_key() {
        let value = serde_json::to_value(Details::default()).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 56);
        assert_eq!(object["path"], serde_json::json!([]));
        assert_eq!(object["set_flags_s"], serde_json::json!([]));
        assert_eq!(object["clear_flags_s"], serde_json::json!([]));
        assert_eq!(object["claimants"], serde_json::json!([]));
        assert_eq!(object["amount"], "0.0000000");
        assert_eq!(object["price_r"], serde_json::json!({"n": 0, "d": 0}));
        assert!(!object.contains_key("set_flags_string"));
    }

    #[test]
    fn test_record_keys() {
        let record = OperationRecord {
            source_account: "GA".to_string(),
            source_account_muxed: None,
            operation_type: 1,
            type_string: "payment".to_string(),
            application_order: 1,
            operation_id: 4294971393,
            transaction_id: 4294971392,
            details: Details::default(),
        };
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["type"], 1);
        assert_eq!(value["id"], 4294971393i64);
        assert!(value["source_account_muxed"].is_null());
    }
}
