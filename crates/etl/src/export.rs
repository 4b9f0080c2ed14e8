//! Batch export of ledgers to JSON lines.

use std::io::Write;

use config::ExportConfig;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::ledger::Ledger;
use crate::transform::{TransformError, transform_operation};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to transform ledger {ledger_sequence}, transaction {transaction_index}")]
    Transform {
        ledger_sequence: u32,
        transaction_index: u32,
        #[source]
        source: TransformError,
    },

    #[error("Failed to serialize operation record")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write operation record")]
    Write(#[from] std::io::Error),
}

/// Counters reported at the end of an export
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExportSummary {
    pub ledgers: usize,
    pub transactions: usize,
    pub failed_transactions_skipped: usize,
    pub operations_exported: usize,
    pub operations_skipped: usize,
}

/// Writes one JSON object per operation record to `writer`, one per line, in
/// ledger application order.
///
/// In strict mode the first failing operation aborts the export. Otherwise the
/// operation is logged and skipped and the export carries on.
pub fn export_ledgers<W: Write>(
    ledgers: &[Ledger],
    config: &ExportConfig,
    mut writer: W,
) -> Result<ExportSummary, ExportError> {
    let mut summary = ExportSummary::default();

    for ledger in ledgers {
        summary.ledgers += 1;
        debug!(
            ledger_sequence = ledger.sequence,
            transactions = ledger.transactions.len(),
            "Exporting ledger"
        );

        for transaction in &ledger.transactions {
            if !config.include_failed && !transaction.successful() {
                summary.failed_transactions_skipped += 1;
                continue;
            }
            summary.transactions += 1;

            for (operation, index) in transaction.operations().iter().zip(0u32..) {
                match transform_operation(operation, index, transaction, ledger.sequence) {
                    Ok(record) => {
                        serde_json::to_writer(&mut writer, &record)?;
                        writer.write_all(b"\n")?;
                        summary.operations_exported += 1;
                    }
                    Err(source) if config.strict => {
                        return Err(ExportError::Transform {
                            ledger_sequence: ledger.sequence,
                            transaction_index: transaction.index,
                            source,
                        });
                    }
                    Err(err) => {
                        warn!(
                            ledger_sequence = ledger.sequence,
                            transaction_index = transaction.index,
                            error = %err,
                            cause = ?err.details_error(),
                            "Skipping operation"
                        );
                        summary.operations_skipped += 1;
                    }
                }
            }
        }
    }

    writer.flush()?;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{
        LedgerTransaction, MuxedAccount, Operation, OperationBody, TransactionEnvelope,
        TransactionResult, TransactionResultCode,
    };

    fn transaction(index: u32, code: TransactionResultCode, operations: Vec<Operation>) -> LedgerTransaction {
        LedgerTransaction {
            index,
            envelope: TransactionEnvelope {
                source_account: MuxedAccount::Ed25519([0u8; 32].into()),
                operations,
            },
            result: TransactionResult {
                code,
                operation_results: None,
            },
        }
    }

    fn unsupported() -> Operation {
        let mut operation = Operation::new(None, OperationBody::Inflation);
        operation.type_tag = 50;
        operation
    }

    fn ledger() -> Ledger {
        Ledger {
            sequence: 7,
            transactions: vec![
                transaction(
                    1,
                    TransactionResultCode::Success,
                    vec![
                        Operation::new(None, OperationBody::Inflation),
                        unsupported(),
                        Operation::new(None, OperationBody::Inflation),
                    ],
                ),
                transaction(
                    2,
                    TransactionResultCode::Failed,
                    vec![Operation::new(None, OperationBody::Inflation)],
                ),
            ],
        }
    }

    fn config(strict: bool, include_failed: bool) -> ExportConfig {
        ExportConfig {
            strict,
            include_failed,
        }
    }

    #[test]
    fn test_lenient_export_skips_failing_operation() {
        let mut out = Vec::new();
        let summary = export_ledgers(&[ledger()], &config(false, true), &mut out).unwrap();

        assert_eq!(summary.ledgers, 1);
        assert_eq!(summary.transactions, 2);
        assert_eq!(summary.operations_exported, 3);
        assert_eq!(summary.operations_skipped, 1);

        let lines: Vec<serde_json::Value> = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0]["application_order"], 1);
        assert_eq!(lines[1]["application_order"], 3);
        assert_eq!(lines[2]["transaction_id"], (7i64 << 32) | (2 << 12));
    }

    #[test]
    fn test_strict_export_aborts() {
        let mut out = Vec::new();
        let err = export_ledgers(&[ledger()], &config(true, true), &mut out).unwrap_err();
        assert!(matches!(
            err,
            ExportError::Transform {
                ledger_sequence: 7,
                transaction_index: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_failed_transactions_excluded() {
        let mut out = Vec::new();
        let summary = export_ledgers(&[ledger()], &config(false, false), &mut out).unwrap();
        assert_eq!(summary.transactions, 1);
        assert_eq!(summary.failed_transactions_skipped, 1);
        assert_eq!(summary.operations_exported, 2);
    }
}
