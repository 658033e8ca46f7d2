// Aropool Miner - Free and Open Source Software Statement
//
// This project, aropool-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: tests/messages_test.rs
// Version: 1.0.0
//
// This file contains tests for the pool message types, located in the tests
// directory. It covers work response validation and the share submission form.
//
// Tree Location:
// - tests/messages_test.rs (pool message tests)
// - Depends on: aropool-miner, serde_json

mod common;

#[cfg(test)]
mod tests {
    use super::common::share;
    use aropool_miner::core::difficulty::U256;
    use aropool_miner::pool::messages::{InfoResponse, SubmitAck, SubmitForm, WorkError};

    fn parse(json: &str) -> Result<aropool_miner::core::types::WorkItem, WorkError> {
        serde_json::from_str::<InfoResponse>(json)
            .unwrap()
            .into_work_item()
    }

    #[test]
    fn test_info_with_numbers() {
        let item = parse(
            r#"{"status":"ok","data":{"block":"b1","height":5000,"difficulty":100,"limit":1000,"public_key":"pk1"}}"#,
        )
        .unwrap();
        assert_eq!(item.block, "b1");
        assert_eq!(item.height, 5000);
        assert_eq!(item.difficulty, U256::from(100u64));
        assert_eq!(item.limit, 1000);
        assert_eq!(item.pool_public_key, "pk1");
    }

    #[test]
    fn test_info_with_strings() {
        let item = parse(
            r#"{"status":"ok","data":{"block":"b1","height":"10801","difficulty":"340282366920938463463374607431768211456","limit":"1000","public_key":"pk1"}}"#,
        )
        .unwrap();
        assert_eq!(item.height, 10_801);
        assert_eq!(item.difficulty, U256::one() << 128);
    }

    #[test]
    fn test_null_data() {
        assert_eq!(parse(r#"{"status":"ok","data":null}"#), Err(WorkError::MissingData));
        assert_eq!(parse(r#"{"status":"error"}"#), Err(WorkError::MissingData));
    }

    #[test]
    fn test_missing_fields() {
        assert_eq!(
            parse(r#"{"data":{"height":1,"difficulty":1,"limit":1,"public_key":"pk"}}"#),
            Err(WorkError::MissingField("block"))
        );
        assert_eq!(
            parse(r#"{"data":{"block":"b","height":1,"difficulty":null,"limit":1,"public_key":"pk"}}"#),
            Err(WorkError::MissingField("difficulty"))
        );
        assert_eq!(
            parse(r#"{"data":{"block":"b","height":1,"difficulty":1,"limit":1}}"#),
            Err(WorkError::MissingField("public_key"))
        );
        assert_eq!(
            parse(r#"{"data":{"block":"","height":1,"difficulty":1,"limit":1,"public_key":"pk"}}"#),
            Err(WorkError::MissingField("block"))
        );
    }

    #[test]
    fn test_bad_numbers() {
        assert!(matches!(
            parse(r#"{"data":{"block":"b","height":-5,"difficulty":1,"limit":1,"public_key":"pk"}}"#),
            Err(WorkError::InvalidNumber { field: "height", .. })
        ));
        assert!(matches!(
            parse(r#"{"data":{"block":"b","height":1,"difficulty":"lots","limit":1,"public_key":"pk"}}"#),
            Err(WorkError::InvalidNumber { field: "difficulty", .. })
        ));
        assert!(matches!(
            parse(r#"{"data":{"block":"b","height":1,"difficulty":2.5,"limit":1,"public_key":"pk"}}"#),
            Err(WorkError::InvalidNumber { field: "difficulty", .. })
        ));
    }

    #[test]
    fn test_zero_difficulty_rejected() {
        assert_eq!(
            parse(r#"{"data":{"block":"b","height":1,"difficulty":"0","limit":1,"public_key":"pk"}}"#),
            Err(WorkError::ZeroDifficulty)
        );
    }

    #[test]
    fn test_submit_form_fields() {
        let share = share(2, "nonce1");
        let form = SubmitForm::new(&share, "WALLET");
        assert_eq!(form.argon, share.argon);
        assert_eq!(form.nonce, "nonce1");
        assert_eq!(form.public_key, "pk1");
        assert_eq!(form.private_key, "WALLET");
        assert_eq!(form.address, "WALLET");

        let value = serde_json::to_value(&form).unwrap();
        assert_eq!(value["address"], "WALLET");
    }

    #[test]
    fn test_submit_ack_status() {
        let ok: SubmitAck = serde_json::from_str(r#"{"status":"ok","data":"accepted"}"#).unwrap();
        assert!(ok.is_ok());
        let rejected: SubmitAck = serde_json::from_str(r#"{"status":"error","data":"stale"}"#).unwrap();
        assert!(!rejected.is_ok());
        let empty: SubmitAck = serde_json::from_str("{}").unwrap();
        assert!(!empty.is_ok());
    }
}
