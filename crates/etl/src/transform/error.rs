use thiserror::Error;

use crate::ledger::{LedgerEntryType, OperationType};
use crate::utils::strkey::StrKeyError;
use crate::utils::toid::TotalOrderIdError;

/// Failure while extracting the details of a single operation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DetailsError {
    #[error("Failed to render {field} address")]
    AddressDecode {
        field: &'static str,
        #[source]
        source: StrKeyError,
    },

    #[error("Operation type {0} is negative")]
    NegativeType(i32),

    #[error("Unsupported operation type: {0}")]
    UnsupportedOperationType(i32),

    #[error("Operation body does not hold a {expected} payload")]
    SchemaMismatch { expected: OperationType },

    #[error("No execution result available for {operation_type} operation")]
    MissingExecutionResult { operation_type: OperationType },

    #[error("Execution result of {operation_type} operation holds an out-of-range amount")]
    MalformedExecutionResult { operation_type: OperationType },

    #[error("Claimable balance id hash must be 32 bytes, got {0}")]
    MalformedBalanceId(usize),

    #[error("Unsupported ledger key for revoke sponsorship: {0}")]
    MalformedLedgerKey(String),

    #[error("Price {n}/{d} has a zero denominator")]
    MalformedPrice { n: i32, d: i32 },
}

impl DetailsError {
    /// Binds an address rendering failure to the field being rendered.
    pub fn address(field: &'static str) -> impl FnOnce(StrKeyError) -> Self {
        move |source| DetailsError::AddressDecode { field, source }
    }

    pub(crate) fn unsupported_ledger_key(entry_type: LedgerEntryType) -> Self {
        DetailsError::MalformedLedgerKey(entry_type.name().to_string())
    }
}

/// Failure to transform one operation into its record.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransformError {
    #[error("Failed to compute id for operation {operation_index}")]
    Identifier {
        operation_index: u32,
        #[source]
        source: TotalOrderIdError,
    },

    #[error("Failed to transform operation {operation_index} (operation id={operation_id})")]
    Operation {
        operation_index: u32,
        operation_id: i64,
        #[source]
        kind: DetailsError,
    },
}

impl TransformError {
    pub fn operation_index(&self) -> u32 {
        match self {
            TransformError::Identifier {
                operation_index, ..
            }
            | TransformError::Operation {
                operation_index, ..
            } => *operation_index,
        }
    }

    /// The underlying extraction failure, if the id could be computed
    pub fn details_error(&self) -> Option<&DetailsError> {
        match self {
            TransformError::Operation { kind, .. } => Some(kind),
            TransformError::Identifier { .. } => None,
        }
    }
}
