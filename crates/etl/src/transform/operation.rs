use super::context::OperationContext;
use super::details::extract_operation_details;
use super::error::{DetailsError, TransformError};
use super::output::OperationRecord;
use crate::ledger::{Ledger, LedgerTransaction, Operation, OperationType};

/// Transforms one operation of `transaction` into its output record.
///
/// `operation_index` is the zero-based position of `operation` within the
/// transaction. The call reads nothing but its arguments, so operations may be
/// transformed in any order or in parallel; callers emitting a transaction's
/// records must keep application order themselves.
pub fn transform_operation(
    operation: &Operation,
    operation_index: u32,
    transaction: &LedgerTransaction,
    ledger_sequence: u32,
) -> Result<OperationRecord, TransformError> {
    let context =
        OperationContext::resolve(operation, operation_index, transaction, ledger_sequence)?;

    let source_account_muxed = context
        .source
        .muxed_address()
        .map_err(|err| context.error(DetailsError::address("source account")(err)))?;

    let details = extract_operation_details(operation, transaction, &context)
        .map_err(|kind| context.error(kind))?;

    let type_string = OperationType::from_tag(operation.type_tag)
        .map(OperationType::name)
        .unwrap_or_default()
        .to_string();

    Ok(OperationRecord {
        source_account: context.source_address,
        source_account_muxed,
        operation_type: operation.type_tag,
        type_string,
        application_order: operation_index + 1,
        operation_id: context.operation_id,
        transaction_id: context.transaction_id,
        details,
    })
}

/// Transforms every operation of a transaction, in application order.
pub fn transform_transaction(
    transaction: &LedgerTransaction,
    ledger_sequence: u32,
) -> Result<Vec<OperationRecord>, TransformError> {
    transaction
        .operations()
        .iter()
        .zip(0u32..)
        .map(|(operation, index)| transform_operation(operation, index, transaction, ledger_sequence))
        .collect()
}

/// Transforms every operation of every transaction in a ledger.
pub fn transform_ledger(ledger: &Ledger) -> Result<Vec<OperationRecord>, TransformError> {
    let mut records = Vec::new();
    for transaction in &ledger.transactions {
        records.extend(transform_transaction(transaction, ledger.sequence)?);
    }
    Ok(records)
}
