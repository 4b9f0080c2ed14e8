// Copyright (C) 2026 Stellar ETL Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Properties of the operation transform observable through the public API:
//! purity, identifier ordering, never-absent lists, flag ordering, sponsorship
//! pairing and execution-result enrichment.

#[cfg(test)]
mod tests {
    use stellar_etl::ledger::{
        AccountId, Asset, BeginSponsoringFutureReservesOp, CreateAccountOp, LedgerTransaction,
        MuxedAccount, Operation, OperationBody, OperationResult, OperationResultTr,
        PathPaymentResult, PathPaymentStrictReceiveOp, PathPaymentSuccess, PaymentOp,
        SetOptionsOp, SimplePaymentResult, TransactionEnvelope, TransactionResult,
        TransactionResultCode,
    };
    use stellar_etl::transform::{
        DetailsError, transform_operation, transform_transaction,
    };
    use stellar_etl::types::Amount;
    use stellar_etl::utils::toid::TotalOrderId;

    // ========================================================================
    // Test helpers
    // ========================================================================

    const SOURCE: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";

    fn muxed(byte: u8) -> MuxedAccount {
        MuxedAccount::Ed25519([byte; 32].into())
    }

    fn transaction(
        code: TransactionResultCode,
        operations: Vec<Operation>,
        operation_results: Option<Vec<OperationResult>>,
    ) -> LedgerTransaction {
        LedgerTransaction {
            index: 3,
            envelope: TransactionEnvelope {
                source_account: muxed(0),
                operations,
            },
            result: TransactionResult {
                code,
                operation_results,
            },
        }
    }

    fn payment(source: Option<u8>) -> Operation {
        Operation::new(
            source.map(muxed),
            OperationBody::Payment(PaymentOp {
                destination: muxed(4),
                asset: Asset::Native,
                amount: 10,
            }),
        )
    }

    fn strict_receive() -> Operation {
        Operation::new(
            None,
            OperationBody::PathPaymentStrictReceive(PathPaymentStrictReceiveOp {
                send_asset: Asset::Native,
                send_max: 999_000_000,
                destination: muxed(4),
                dest_asset: Asset::Native,
                dest_amount: 100_000_000,
                path: Vec::new(),
            }),
        )
    }

    // ========================================================================
    // Purity and identifiers
    // ========================================================================

    #[test]
    fn test_transform_is_deterministic() {
        let tx = transaction(
            TransactionResultCode::Success,
            vec![payment(None), payment(Some(2))],
            None,
        );
        let first = transform_transaction(&tx, 55).unwrap();
        let second = transform_transaction(&tx, 55).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_operation_ids_follow_application_order() {
        let tx = transaction(
            TransactionResultCode::Success,
            vec![payment(None), payment(None), payment(None)],
            None,
        );
        let records = transform_transaction(&tx, 55).unwrap();
        let transaction_id = TotalOrderId::transaction(55, 3).unwrap().to_i64();

        for (index, record) in records.iter().enumerate() {
            assert_eq!(record.application_order as usize, index + 1);
            assert_eq!(record.transaction_id, transaction_id);
            assert!(record.operation_id > transaction_id);
            let parsed = TotalOrderId::parse(record.operation_id).unwrap();
            assert_eq!(parsed.ledger_sequence, 55);
            assert_eq!(parsed.transaction_order, 3);
            assert_eq!(parsed.operation_order as usize, index + 1);
        }
        assert!(records.windows(2).all(|w| w[0].operation_id < w[1].operation_id));
    }

    #[test]
    fn test_ids_increase_with_ledger_regardless_of_position() {
        let late_in_early_ledger = TotalOrderId::operation(10, 1_048_575, 4_094).unwrap();
        let first_in_next_ledger = TotalOrderId::operation(11, 1, 0).unwrap();
        assert!(late_in_early_ledger.to_i64() < first_in_next_ledger.to_i64());
    }

    // ========================================================================
    // Record shape
    // ========================================================================

    #[test]
    fn test_lists_present_for_every_kind() {
        let tx = transaction(
            TransactionResultCode::Success,
            vec![Operation::new(
                None,
                OperationBody::CreateAccount(CreateAccountOp {
                    destination: AccountId::new([1u8; 32]),
                    starting_balance: 1,
                }),
            )],
            None,
        );
        let record = transform_operation(&tx.operations()[0], 0, &tx, 2).unwrap();
        let json = serde_json::to_value(&record).unwrap();

        for key in ["path", "set_flags", "set_flags_s", "clear_flags", "clear_flags_s", "claimants"] {
            assert_eq!(json["details"][key], serde_json::json!([]), "{key}");
        }
        assert_eq!(json["details"]["starting_balance"], "0.0000001");
    }

    #[test]
    fn test_account_flag_names_are_order_stable() {
        let tx = transaction(
            TransactionResultCode::Success,
            vec![Operation::new(
                None,
                OperationBody::SetOptions(SetOptionsOp {
                    set_flags: Some(4 | 2),
                    ..Default::default()
                }),
            )],
            None,
        );
        let record = transform_operation(&tx.operations()[0], 0, &tx, 2).unwrap();
        assert_eq!(
            record.details.set_flags_string,
            vec!["auth_revocable", "auth_immutable"]
        );
    }

    // ========================================================================
    // Sponsorship
    // ========================================================================

    fn sandwich() -> Vec<Operation> {
        vec![
            Operation::new(
                None,
                OperationBody::BeginSponsoringFutureReserves(BeginSponsoringFutureReservesOp {
                    sponsored_id: AccountId::new([2u8; 32]),
                }),
            ),
            payment(Some(2)),
            Operation::new(Some(muxed(2)), OperationBody::EndSponsoringFutureReserves),
        ]
    }

    #[test]
    fn test_successful_sandwich_names_sponsor() {
        let tx = transaction(TransactionResultCode::Success, sandwich(), None);
        let records = transform_transaction(&tx, 9).unwrap();
        assert_eq!(records[2].details.begin_sponsor, SOURCE);
    }

    #[test]
    fn test_failed_sandwich_has_no_sponsor() {
        let tx = transaction(TransactionResultCode::Failed, sandwich(), None);
        let records = transform_transaction(&tx, 9).unwrap();
        assert_eq!(records[2].details.begin_sponsor, "");
    }

    // ========================================================================
    // Execution results
    // ========================================================================

    #[test]
    fn test_strict_receive_uses_actual_send_amount() {
        let result = PathPaymentResult::Success(PathPaymentSuccess {
            offers: Vec::new(),
            last: SimplePaymentResult {
                destination: AccountId::new([4u8; 32]),
                asset: Asset::Native,
                amount: 425_000_000,
            },
        });
        let tx = transaction(
            TransactionResultCode::Success,
            vec![strict_receive()],
            Some(vec![OperationResult::OpInner(
                OperationResultTr::PathPaymentStrictReceive(result),
            )]),
        );
        let record = transform_operation(&tx.operations()[0], 0, &tx, 2).unwrap();
        assert_eq!(record.details.source_amount.to_string(), "42.5000000");
        assert_eq!(record.details.source_max.to_string(), "99.9000000");
    }

    #[test]
    fn test_strict_receive_in_failed_transaction_stays_zero() {
        // No results at all: a lookup would fail, so none must be attempted.
        let tx = transaction(TransactionResultCode::Failed, vec![strict_receive()], None);
        let record = transform_operation(&tx.operations()[0], 0, &tx, 2).unwrap();
        assert_eq!(record.details.source_amount, Amount::ZERO);
    }

    #[test]
    fn test_unknown_tag_yields_no_record() {
        let mut operation = payment(None);
        operation.type_tag = 1_000;
        let tx = transaction(TransactionResultCode::Success, vec![operation], None);
        let err = transform_operation(&tx.operations()[0], 0, &tx, 2).unwrap_err();
        assert_eq!(
            err.details_error(),
            Some(&DetailsError::UnsupportedOperationType(1_000))
        );
    }
}
