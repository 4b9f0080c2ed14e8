// Copyright (C) 2026 Stellar ETL Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Decoded ledgers load from the JSON form the exporter reads.

#[cfg(test)]
mod tests {
    use serde_json::json;
    use stellar_etl::ledger::{Ledger, OperationBody, OperationType, TransactionResultCode};
    use stellar_etl::transform::transform_ledger;

    fn ledger_json() -> serde_json::Value {
        json!({
            "sequence": 12,
            "transactions": [{
                "index": 1,
                "envelope": {
                    "source_account": { "ed25519": "00".repeat(32) },
                    "operations": [
                        {
                            "type": 1,
                            "body": { "payment": {
                                "destination": { "muxed_ed25519": { "id": 5, "ed25519": "01".repeat(32) } },
                                "asset": { "credit_alphanum4": { "code": "USD", "issuer": "01".repeat(32) } },
                                "amount": 25000000
                            }}
                        },
                        {
                            "source_account": { "ed25519": "02".repeat(32) },
                            "type": 10,
                            "body": { "manage_data": { "data_name": "k", "data_value": "0x6869" } }
                        },
                        { "type": 9, "body": "inflation" }
                    ]
                },
                "result": { "code": "success" }
            }]
        })
    }

    #[test]
    fn test_ledger_deserializes() {
        let ledger: Ledger = serde_json::from_value(ledger_json()).unwrap();

        assert_eq!(ledger.sequence, 12);
        let tx = &ledger.transactions[0];
        assert_eq!(tx.result.code, TransactionResultCode::Success);
        assert!(tx.result.operation_results.is_none());
        assert_eq!(tx.operations().len(), 3);
        assert!(matches!(tx.operations()[0].body, OperationBody::Payment(_)));
        assert!(tx.operations()[1].source_account.is_some());
        assert_eq!(
            tx.operations()[2].body.operation_type(),
            OperationType::Inflation
        );
    }

    #[test]
    fn test_ledger_json_transforms() {
        let ledger: Ledger = serde_json::from_value(ledger_json()).unwrap();
        let records = transform_ledger(&ledger).unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].type_string, "payment");
        assert_eq!(records[0].details.amount.to_string(), "2.5000000");
        assert_eq!(records[0].details.asset_code, "USD");
        assert_eq!(records[1].details.value, "aGk=");
        assert_eq!(
            records[1].source_account,
            "GABAEAQCAIBAEAQCAIBAEAQCAIBAEAQCAIBAEAQCAIBAEAQCAIBAEJXA"
        );
        assert_eq!(records[2].type_string, "inflation");
    }
}
