use serde::{Deserialize, Serialize};

use super::AccountId;
use crate::types::HexBytes;

/// Code and issuer of a credit asset.
///
/// Codes arrive with the wire form's NUL padding intact; `code()` strips it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AlphaNum {
    pub code: String,
    pub issuer: AccountId,
}

impl AlphaNum {
    pub fn new(code: impl Into<String>, issuer: AccountId) -> Self {
        Self {
            code: code.into(),
            issuer,
        }
    }

    pub fn code(&self) -> &str {
        self.code.trim_end_matches('\0')
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Asset {
    Native,
    CreditAlphanum4(AlphaNum),
    CreditAlphanum12(AlphaNum),
}

impl Asset {
    pub fn type_name(&self) -> &'static str {
        match self {
            Asset::Native => "native",
            Asset::CreditAlphanum4(_) => "credit_alphanum4",
            Asset::CreditAlphanum12(_) => "credit_alphanum12",
        }
    }

    pub fn alpha_num(&self) -> Option<&AlphaNum> {
        match self {
            Asset::Native => None,
            Asset::CreditAlphanum4(a) | Asset::CreditAlphanum12(a) => Some(a),
        }
    }
}

/// Asset code without an issuer, as carried by allow-trust
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetCode {
    CreditAlphanum4(String),
    CreditAlphanum12(String),
}

impl AssetCode {
    /// The full asset once the issuer is known
    pub fn to_asset(&self, issuer: AccountId) -> Asset {
        match self {
            AssetCode::CreditAlphanum4(code) => Asset::CreditAlphanum4(AlphaNum::new(code, issuer)),
            AssetCode::CreditAlphanum12(code) => {
                Asset::CreditAlphanum12(AlphaNum::new(code, issuer))
            }
        }
    }
}

/// Asset held by a trustline; pool shares are identified by pool id
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrustLineAsset {
    Native,
    CreditAlphanum4(AlphaNum),
    CreditAlphanum12(AlphaNum),
    PoolShare(HexBytes),
}
