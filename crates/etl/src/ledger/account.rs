use serde::{Deserialize, Serialize};

use crate::types::HexBytes;
use crate::utils::strkey::{self, StrKeyError};

/// An ed25519 account public key
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(pub HexBytes);

impl AccountId {
    pub fn new(key: impl Into<HexBytes>) -> Self {
        Self(key.into())
    }

    /// Canonical G-address
    pub fn address(&self) -> Result<String, StrKeyError> {
        strkey::encode_account_id(self.0.as_bytes())
    }
}

/// A source or destination that may carry a multiplexing id
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MuxedAccount {
    Ed25519(HexBytes),
    MuxedEd25519 { id: u64, ed25519: HexBytes },
}

impl MuxedAccount {
    /// The underlying account, dropping any multiplexing id
    pub fn account_id(&self) -> AccountId {
        match self {
            MuxedAccount::Ed25519(key) => AccountId(key.clone()),
            MuxedAccount::MuxedEd25519 { ed25519, .. } => AccountId(ed25519.clone()),
        }
    }

    /// G-address of the underlying account
    pub fn address(&self) -> Result<String, StrKeyError> {
        let key = match self {
            MuxedAccount::Ed25519(key) => key,
            MuxedAccount::MuxedEd25519 { ed25519, .. } => ed25519,
        };
        strkey::encode_account_id(key.as_bytes())
    }

    /// M-address when the account is multiplexed
    pub fn muxed_address(&self) -> Result<Option<String>, StrKeyError> {
        match self {
            MuxedAccount::Ed25519(_) => Ok(None),
            MuxedAccount::MuxedEd25519 { id, ed25519 } => {
                strkey::encode_muxed_account(ed25519.as_bytes(), *id).map(Some)
            }
        }
    }
}

impl From<AccountId> for MuxedAccount {
    fn from(account: AccountId) -> Self {
        MuxedAccount::Ed25519(account.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignerKey {
    Ed25519(HexBytes),
    PreAuthTx(HexBytes),
    HashX(HexBytes),
    Ed25519SignedPayload { ed25519: HexBytes, payload: HexBytes },
}

impl SignerKey {
    pub fn address(&self) -> Result<String, StrKeyError> {
        match self {
            SignerKey::Ed25519(key) => strkey::encode_account_id(key.as_bytes()),
            SignerKey::PreAuthTx(hash) => strkey::encode_pre_auth_tx(hash.as_bytes()),
            SignerKey::HashX(hash) => strkey::encode_hash_x(hash.as_bytes()),
            SignerKey::Ed25519SignedPayload { ed25519, payload } => {
                strkey::encode_signed_payload(ed25519.as_bytes(), payload.as_bytes())
            }
        }
    }
}
