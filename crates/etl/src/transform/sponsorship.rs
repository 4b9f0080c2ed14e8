//! Pairing of end-sponsoring operations with the begin marker that opened them.

use tracing::trace;

use super::context::operation_source;
use crate::ledger::{LedgerTransaction, Operation};

/// The begin-sponsoring operation matched by a lookback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SponsorshipMatch<'a> {
    pub operation: &'a Operation,
    pub operation_index: usize,
}

/// Scans the siblings before `operation_index` for the nearest begin-sponsoring
/// operation whose sponsored account is the current operation's source.
///
/// Failed transactions are never scanned: their operations need not nest
/// begin/end markers correctly.
pub fn find_initiating_begin_sponsoring<'a>(
    operation: &Operation,
    operation_index: usize,
    transaction: &'a LedgerTransaction,
) -> Option<SponsorshipMatch<'a>> {
    if !transaction.successful() {
        return None;
    }

    let sponsoree = operation_source(operation, transaction).account_id();
    let found = transaction
        .operations()
        .iter()
        .enumerate()
        .take(operation_index)
        .rev()
        .find(|(_, sibling)| {
            sibling
                .body
                .as_begin_sponsoring_future_reserves()
                .is_some_and(|begin| begin.sponsored_id == sponsoree)
        })
        .map(|(index, sibling)| SponsorshipMatch {
            operation: sibling,
            operation_index: index,
        });

    trace!(
        operation_index,
        matched = ?found.map(|m| m.operation_index),
        "Sponsorship lookback"
    );
    found
}
