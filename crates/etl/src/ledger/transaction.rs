use serde::{Deserialize, Serialize};

use super::{MuxedAccount, Operation, OperationResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionResultCode {
    FeeBumpInnerSuccess,
    FeeBumpInnerFailed,
    Success,
    Failed,
    TooEarly,
    TooLate,
    MissingOperation,
    BadSeq,
    BadAuth,
    InsufficientBalance,
    NoAccount,
    InsufficientFee,
    BadAuthExtra,
    InternalError,
    NotSupported,
    BadSponsorship,
    BadMinSeqAgeOrGap,
    Malformed,
    SorobanInvalid,
}

impl TransactionResultCode {
    pub fn is_success(self) -> bool {
        matches!(
            self,
            TransactionResultCode::Success | TransactionResultCode::FeeBumpInnerSuccess
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionResult {
    pub code: TransactionResultCode,
    /// One entry per operation; present when the operations were applied
    #[serde(default)]
    pub operation_results: Option<Vec<OperationResult>>,
}

impl TransactionResult {
    pub fn successful(&self) -> bool {
        self.code.is_success()
    }

    pub fn operation_result(&self, index: usize) -> Option<&OperationResult> {
        self.operation_results.as_ref()?.get(index)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionEnvelope {
    pub source_account: MuxedAccount,
    pub operations: Vec<Operation>,
}

/// A transaction as applied in a ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerTransaction {
    /// 1-based application position within the ledger
    pub index: u32,
    pub envelope: TransactionEnvelope,
    pub result: TransactionResult,
}

impl LedgerTransaction {
    pub fn successful(&self) -> bool {
        self.result.successful()
    }

    pub fn operations(&self) -> &[Operation] {
        &self.envelope.operations
    }

    pub fn source_account(&self) -> &MuxedAccount {
        &self.envelope.source_account
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    pub sequence: u32,
    #[serde(default)]
    pub transactions: Vec<LedgerTransaction>,
}
