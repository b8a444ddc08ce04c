#[cfg(test)]
mod integration_tests {
    use std::str::FromStr;

    use math::Rational;
    use num_bigint::BigInt;
    use secret_core::{
        PointSource, RecoveryError, RecoveryWarning, ShareDocument,
        recover_secret, recover_secret_from_json,
    };

    const LARGE: &str = include_str!("../fixtures/large_degree_six.json");
    const TAMPERED: &str = include_str!("../fixtures/large_tampered.json");
    const NESTED: &str = include_str!("../fixtures/nested_keys.json");
    const FRACTIONAL: &str = include_str!("../fixtures/fractional.json");

    const LARGE_SECRET: &str =
        "113290930051451398541124007855224703922444404575131771778104";

    fn large_secret() -> BigInt {
        BigInt::from_str(LARGE_SECRET).expect("valid literal")
    }

    #[test]
    fn recovers_secret_wider_than_machine_words() {
        let result = recover_secret_from_json(LARGE).expect("recovers");
        assert_eq!(result.secret(), &large_secret());
        assert_eq!(result.selected(), 7);
        assert_eq!(result.available(), 10);
        assert!(result.warnings().is_empty());
    }

    #[test]
    fn every_window_of_large_document_agrees() {
        let document = ShareDocument::from_json_str(LARGE).expect("parses");
        let points = document.decode_points().expect("decodes");
        let recovery = document.recovery().expect("valid threshold");
        let k = document.threshold();

        for start in 0..=points.len() - k {
            let window = &points[start..start + k];
            let result = recovery.reconstruct(window).expect("recovers");
            assert_eq!(result.secret(), &large_secret(), "window at {start}");
        }
    }

    #[test]
    fn tampered_redundant_share_does_not_change_secret() {
        let result = recover_secret_from_json(TAMPERED).expect("recovers");
        assert_eq!(result.secret(), &large_secret());
        assert!(result.warnings().is_empty());
    }

    #[test]
    fn cross_check_flags_tampered_share() {
        let document = ShareDocument::from_json_str(TAMPERED).expect("parses");
        let points = document.decode_points().expect("decodes");
        let result = document
            .recovery()
            .expect("valid threshold")
            .with_cross_check(true)
            .reconstruct(&points)
            .expect("recovers");

        assert_eq!(result.secret(), &large_secret());
        assert_eq!(
            result.warnings(),
            &[RecoveryWarning::InconsistentShare {
                x: BigInt::from(9)
            }]
        );
    }

    #[test]
    fn tampered_share_inside_threshold_shifts_the_secret() {
        let document = ShareDocument::from_json_str(TAMPERED).expect("parses");
        let points = document.decode_points().expect("decodes");
        let recovery = document.recovery().expect("valid threshold");

        // Shares 4..=10 include the tampered share 9.
        let result = recovery.reconstruct(&points[3..]).expect("recovers");
        assert_ne!(result.secret(), &large_secret());
    }

    #[test]
    fn shares_nested_in_keys_are_used() {
        let document = ShareDocument::from_json_str(NESTED).expect("parses");
        let xs: Vec<BigInt> = document
            .decode_points()
            .expect("decodes")
            .iter()
            .map(|p| p.x().clone())
            .collect();
        assert_eq!(xs, vec![BigInt::from(1), BigInt::from(2), BigInt::from(3)]);

        let result = recover_secret(&document).expect("recovers");
        assert_eq!(result.secret(), &BigInt::from(0));
    }

    #[test]
    fn fractional_result_is_reported_not_raised() {
        let result = recover_secret_from_json(FRACTIONAL).expect("recovers");
        let half = Rational::from_str("1/2").expect("valid rational");

        assert!(!result.is_integer());
        assert_eq!(result.value(), &half);
        assert_eq!(result.secret(), &BigInt::from(1));
        assert_eq!(
            result.warnings(),
            &[RecoveryWarning::NonIntegerResult { value: half }]
        );
    }

    #[test]
    fn reconstruction_report_serializes() {
        let result = recover_secret_from_json(FRACTIONAL).expect("recovers");
        let report = serde_json::to_value(&result).expect("serializes");
        assert_eq!(report["selected"], 2);
        assert_eq!(report["warnings"][0]["kind"], "non_integer_result");
    }

    #[test]
    fn hard_errors_propagate() {
        let short = r#"{"keys":{"n":1,"k":2},"1":{"base":"10","value":"4"}}"#;
        assert!(matches!(
            recover_secret_from_json(short),
            Err(RecoveryError::InsufficientShares {
                required: 2,
                provided: 1
            })
        ));

        let bad_digit = r#"{"keys":{"k":1},"1":{"base":"8","value":"98"}}"#;
        assert!(matches!(
            recover_secret_from_json(bad_digit),
            Err(RecoveryError::InvalidEncoding { base: 8, .. })
        ));

        let zero_k = r#"{"keys":{"k":0},"1":{"base":"10","value":"4"}}"#;
        assert!(matches!(
            recover_secret_from_json(zero_k),
            Err(RecoveryError::InvalidThreshold(0))
        ));

        let bad_base = r#"{"keys":{"k":1},"1":{"base":"40","value":"4"}}"#;
        assert!(matches!(
            recover_secret_from_json(bad_base),
            Err(RecoveryError::InvalidBase(40))
        ));
    }
}
