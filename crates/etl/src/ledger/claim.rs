use serde::{Deserialize, Serialize};

use super::AccountId;
use crate::types::HexBytes;

/// Condition under which a claimant may claim a balance.
///
/// The tree is carried through to output records untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimPredicate {
    Unconditional,
    And(Vec<ClaimPredicate>),
    Or(Vec<ClaimPredicate>),
    Not(Option<Box<ClaimPredicate>>),
    BeforeAbsoluteTime(i64),
    BeforeRelativeTime(i64),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimantV0 {
    pub destination: AccountId,
    pub predicate: ClaimPredicate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Claimant {
    V0(ClaimantV0),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimableBalanceId {
    /// SHA-256 hash identifying the balance
    V0(HexBytes),
}

impl ClaimableBalanceId {
    pub const HASH_LEN: usize = 32;

    /// Wire discriminant of the id variant
    pub fn discriminant(&self) -> u32 {
        match self {
            ClaimableBalanceId::V0(_) => 0,
        }
    }

    pub fn hash(&self) -> &HexBytes {
        match self {
            ClaimableBalanceId::V0(hash) => hash,
        }
    }
}
