//! Total order identifiers.
//!
//! A TOID packs (ledger sequence, transaction order, operation order) into one
//! i64 so that numeric order equals ledger application order:
//!
//! ```text
//!  63        32 31               12 11        0
//! +------------+-------------------+-----------+
//! |   ledger   | transaction order | op order  |
//! +------------+-------------------+-----------+
//! ```
//!
//! Operation order 0 denotes the transaction itself, so the operation at
//! zero-based index `i` uses order `i + 1`.

use thiserror::Error;

pub const LEDGER_SHIFT: u32 = 32;
pub const TRANSACTION_SHIFT: u32 = 12;

pub const LEDGER_MAX: u32 = i32::MAX as u32;
pub const TRANSACTION_ORDER_MAX: u32 = (1 << 20) - 1;
pub const OPERATION_ORDER_MAX: u32 = (1 << 12) - 1;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TotalOrderIdError {
    #[error("Ledger sequence {0} exceeds 2147483647")]
    LedgerOutOfRange(u32),

    #[error("Transaction order {0} exceeds 1048575")]
    TransactionOutOfRange(u32),

    #[error("Operation order {0} exceeds 4095")]
    OperationOutOfRange(u32),

    #[error("Total order id {0} is negative")]
    Negative(i64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TotalOrderId {
    pub ledger_sequence: u32,
    pub transaction_order: u32,
    pub operation_order: u32,
}

impl TotalOrderId {
    pub fn new(
        ledger_sequence: u32,
        transaction_order: u32,
        operation_order: u32,
    ) -> Result<Self, TotalOrderIdError> {
        if ledger_sequence > LEDGER_MAX {
            return Err(TotalOrderIdError::LedgerOutOfRange(ledger_sequence));
        }
        if transaction_order > TRANSACTION_ORDER_MAX {
            return Err(TotalOrderIdError::TransactionOutOfRange(transaction_order));
        }
        if operation_order > OPERATION_ORDER_MAX {
            return Err(TotalOrderIdError::OperationOutOfRange(operation_order));
        }
        Ok(Self {
            ledger_sequence,
            transaction_order,
            operation_order,
        })
    }

    /// Id of a transaction (operation order 0)
    pub fn transaction(
        ledger_sequence: u32,
        transaction_order: u32,
    ) -> Result<Self, TotalOrderIdError> {
        Self::new(ledger_sequence, transaction_order, 0)
    }

    /// Id of the operation at zero-based `operation_index`
    pub fn operation(
        ledger_sequence: u32,
        transaction_order: u32,
        operation_index: u32,
    ) -> Result<Self, TotalOrderIdError> {
        let order = operation_index
            .checked_add(1)
            .ok_or(TotalOrderIdError::OperationOutOfRange(operation_index))?;
        Self::new(ledger_sequence, transaction_order, order)
    }

    pub fn to_i64(self) -> i64 {
        (i64::from(self.ledger_sequence) << LEDGER_SHIFT)
            | (i64::from(self.transaction_order) << TRANSACTION_SHIFT)
            | i64::from(self.operation_order)
    }

    pub fn parse(id: i64) -> Result<Self, TotalOrderIdError> {
        if id < 0 {
            return Err(TotalOrderIdError::Negative(id));
        }
        Ok(Self {
            ledger_sequence: (id >> LEDGER_SHIFT) as u32,
            transaction_order: ((id >> TRANSACTION_SHIFT) as u32) & TRANSACTION_ORDER_MAX,
            operation_order: (id as u32) & OPERATION_ORDER_MAX,
        })
    }
}

impl From<TotalOrderId> for i64 {
    fn from(id: TotalOrderId) -> Self {
        id.to_i64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packing_layout() {
        let id = TotalOrderId::new(1, 1, 1).unwrap().to_i64();
        assert_eq!(id, (1 << 32) | (1 << 12) | 1);
    }

    #[test]
    fn test_operation_uses_index_plus_one() {
        let tx = TotalOrderId::transaction(30_521_816, 3).unwrap().to_i64();
        let op = TotalOrderId::operation(30_521_816, 3, 0).unwrap().to_i64();
        assert_eq!(op, tx + 1);
    }

    #[test]
    fn test_ordering_follows_ledger_first() {
        let late_in_ledger = TotalOrderId::new(10, TRANSACTION_ORDER_MAX, OPERATION_ORDER_MAX)
            .unwrap()
            .to_i64();
        let next_ledger = TotalOrderId::new(11, 0, 0).unwrap().to_i64();
        assert!(late_in_ledger < next_ledger);
    }

    #[test]
    fn test_bounds() {
        assert_eq!(
            TotalOrderId::new(LEDGER_MAX + 1, 0, 0),
            Err(TotalOrderIdError::LedgerOutOfRange(LEDGER_MAX + 1))
        );
        assert_eq!(
            TotalOrderId::new(1, TRANSACTION_ORDER_MAX + 1, 0),
            Err(TotalOrderIdError::TransactionOutOfRange(TRANSACTION_ORDER_MAX + 1))
        );
        assert_eq!(
            TotalOrderId::operation(1, 1, OPERATION_ORDER_MAX),
            Err(TotalOrderIdError::OperationOutOfRange(OPERATION_ORDER_MAX + 1))
        );
        assert!(TotalOrderId::new(LEDGER_MAX, TRANSACTION_ORDER_MAX, OPERATION_ORDER_MAX).is_ok());
    }

    #[test]
    fn test_parse_inverts_packing() {
        let id = TotalOrderId::new(123_456, 789, 42).unwrap();
        assert_eq!(TotalOrderId::parse(id.to_i64()).unwrap(), id);
        assert_eq!(TotalOrderId::parse(-1), Err(TotalOrderIdError::Negative(-1)));
    }
}
