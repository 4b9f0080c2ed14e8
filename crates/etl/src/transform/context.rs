use super::error::{DetailsError, TransformError};
use crate::ledger::{LedgerTransaction, MuxedAccount, Operation};
use crate::utils::toid::TotalOrderId;

/// The operation's explicit source, else the transaction's.
pub fn operation_source<'a>(
    operation: &'a Operation,
    transaction: &'a LedgerTransaction,
) -> &'a MuxedAccount {
    operation
        .source_account
        .as_ref()
        .unwrap_or_else(|| transaction.source_account())
}

/// Positional facts shared by every field of one operation's record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationContext<'a> {
    pub operation_index: u32,
    pub transaction_id: i64,
    pub operation_id: i64,
    pub source: &'a MuxedAccount,
    /// G-address of the effective source
    pub source_address: String,
}

impl<'a> OperationContext<'a> {
    pub fn resolve(
        operation: &'a Operation,
        operation_index: u32,
        transaction: &'a LedgerTransaction,
        ledger_sequence: u32,
    ) -> Result<Self, TransformError> {
        let identifier = |source| TransformError::Identifier {
            operation_index,
            source,
        };
        let transaction_id = TotalOrderId::transaction(ledger_sequence, transaction.index)
            .map_err(identifier)?
            .to_i64();
        let operation_id =
            TotalOrderId::operation(ledger_sequence, transaction.index, operation_index)
                .map_err(identifier)?
                .to_i64();

        let fail = |kind| TransformError::Operation {
            operation_index,
            operation_id,
            kind,
        };

        let source = operation_source(operation, transaction);
        let source_address = source
            .address()
            .map_err(|err| fail(DetailsError::address("source account")(err)))?;

        if operation.type_tag < 0 {
            return Err(fail(DetailsError::NegativeType(operation.type_tag)));
        }

        Ok(Self {
            operation_index,
            transaction_id,
            operation_id,
            source,
            source_address,
        })
    }

    /// Attaches this operation's position to an extraction failure.
    pub fn error(&self, kind: DetailsError) -> TransformError {
        TransformError::Operation {
            operation_index: self.operation_index,
            operation_id: self.operation_id,
            kind,
        }
    }
}
