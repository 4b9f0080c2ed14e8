use super::asset::canonical_trust_line_asset_string;
use super::claimable::balance_id_hex;
use super::error::DetailsError;
use super::output::Details;
use crate::ledger::{LedgerKey, RevokeSponsorshipOp};

/// Fields identifying the ledger entry whose sponsorship is revoked.
///
/// Only the classic entry kinds can be revoked; every other kind is rejected
/// explicitly so a new wire kind never falls through silently.
pub fn ledger_key_details(key: &LedgerKey) -> Result<Details, DetailsError> {
    let details = match key {
        LedgerKey::Account { account_id } => Details {
            account: account_id
                .address()
                .map_err(DetailsError::address("ledger key account"))?,
            ..Default::default()
        },
        LedgerKey::ClaimableBalance { balance_id } => Details {
            claimable_balance_id: balance_id_hex(balance_id).map_err(|err| {
                DetailsError::MalformedLedgerKey(format!("claimable balance: {err}"))
            })?,
            ..Default::default()
        },
        LedgerKey::Data {
            account_id,
            data_name,
        } => Details {
            data_account_id: account_id
                .address()
                .map_err(DetailsError::address("ledger key data account"))?,
            data_name: data_name.clone(),
            ..Default::default()
        },
        LedgerKey::Offer { offer_id, .. } => Details {
            offer_id: *offer_id,
            ..Default::default()
        },
        LedgerKey::Trustline { account_id, asset } => Details {
            trustline_account_id: account_id
                .address()
                .map_err(DetailsError::address("ledger key trustline account"))?,
            trustline_asset: canonical_trust_line_asset_string(asset)?,
            ..Default::default()
        },
        LedgerKey::LiquidityPool { .. }
        | LedgerKey::ContractData
        | LedgerKey::ContractCode
        | LedgerKey::ConfigSetting
        | LedgerKey::Ttl => return Err(DetailsError::unsupported_ledger_key(key.entry_type())),
    };
    Ok(details)
}

pub fn revoke_sponsorship_details(op: &RevokeSponsorshipOp) -> Result<Details, DetailsError> {
    match op {
        RevokeSponsorshipOp::LedgerEntry(key) => ledger_key_details(key),
        RevokeSponsorshipOp::Signer {
            account_id,
            signer_key,
        } => Ok(Details {
            signer_account_id: account_id
                .address()
                .map_err(DetailsError::address("signer account"))?,
            signer_key: signer_key
                .address()
                .map_err(DetailsError::address("signer key"))?,
            ..Default::default()
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{AccountId, AlphaNum, ClaimableBalanceId, SignerKey, TrustLineAsset};
    use crate::types::HexBytes;

    const ZERO_ADDRESS: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";
    const ONES_ADDRESS: &str = "GAAQCAIBAEAQCAIBAEAQCAIBAEAQCAIBAEAQCAIBAEAQCAIBAEAQDZ7H";

    #[test]
    fn test_account_key() {
        let details = ledger_key_details(&LedgerKey::Account {
            account_id: AccountId::new([0u8; 32]),
        })
        .unwrap();
        assert_eq!(details.account, ZERO_ADDRESS);
    }

    #[test]
    fn test_trustline_key_uses_canonical_asset() {
        let details = ledger_key_details(&LedgerKey::Trustline {
            account_id: AccountId::new([0u8; 32]),
            asset: TrustLineAsset::CreditAlphanum4(AlphaNum::new("EUR", AccountId::new([1u8; 32]))),
        })
        .unwrap();
        assert_eq!(details.trustline_account_id, ZERO_ADDRESS);
        assert_eq!(details.trustline_asset, format!("EUR:{ONES_ADDRESS}"));
    }

    #[test]
    fn test_data_and_offer_keys() {
        let data = ledger_key_details(&LedgerKey::Data {
            account_id: AccountId::new([1u8; 32]),
            data_name: "config".to_string(),
        })
        .unwrap();
        assert_eq!(data.data_account_id, ONES_ADDRESS);
        assert_eq!(data.data_name, "config");

        let offer = ledger_key_details(&LedgerKey::Offer {
            seller_id: AccountId::new([1u8; 32]),
            offer_id: 77,
        })
        .unwrap();
        assert_eq!(offer.offer_id, 77);
    }

    #[test]
    fn test_claimable_balance_key() {
        let details = ledger_key_details(&LedgerKey::ClaimableBalance {
            balance_id: ClaimableBalanceId::V0(HexBytes::from([0x11; 32])),
        })
        .unwrap();
        assert_eq!(details.claimable_balance_id, format!("00000000{}", "11".repeat(32)));
        assert!(details.balance_id.is_empty());
    }

    #[test]
    fn test_bad_balance_hash_is_malformed_key() {
        let err = ledger_key_details(&LedgerKey::ClaimableBalance {
            balance_id: ClaimableBalanceId::V0(HexBytes::new(vec![0u8; 31])),
        })
        .unwrap_err();
        assert!(matches!(err, DetailsError::MalformedLedgerKey(_)));
    }

    #[test]
    fn test_non_classic_keys_rejected() {
        for key in [
            LedgerKey::LiquidityPool {
                liquidity_pool_id: HexBytes::from([0u8; 32]),
            },
            LedgerKey::ContractData,
            LedgerKey::ContractCode,
            LedgerKey::ConfigSetting,
            LedgerKey::Ttl,
        ] {
            assert!(matches!(
                ledger_key_details(&key),
                Err(DetailsError::MalformedLedgerKey(_))
            ));
        }
    }

    #[test]
    fn test_signer_revocation() {
        let details = revoke_sponsorship_details(&RevokeSponsorshipOp::Signer {
            account_id: AccountId::new([0u8; 32]),
            signer_key: SignerKey::Ed25519(HexBytes::from([1u8; 32])),
        })
        .unwrap();
        assert_eq!(details.signer_account_id, ZERO_ADDRESS);
        assert_eq!(details.signer_key, ONES_ADDRESS);
    }
}
