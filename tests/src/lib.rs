//! End-to-end checks that run share documents through the whole pipeline.

mod integration;

#[cfg(test)]
mod tests {
    use num_bigint::BigInt;
    use secret_core::recover_secret_from_json;

    #[test]
    fn test_complete_workflow() {
        let input = include_str!("../fixtures/sample.json");

        let result =
            recover_secret_from_json(input).expect("sample document recovers");

        assert_eq!(result.secret(), &BigInt::from(3));
        assert!(result.is_integer());
        assert!(result.warnings().is_empty());
        assert_eq!(result.selected(), 3);
        assert_eq!(result.available(), 4);
    }
}
