//! Shamir secret recovery: exact Lagrange interpolation of the constant term
//! from `(x, y)` shares, plus the decoding needed to get shares out of a JSON
//! document.

pub mod document;
pub mod encoding;
pub mod error;
pub mod lagrange;
pub mod params;
pub mod point;
pub mod recovery;
pub mod traits;

pub use document::ShareDocument;
pub use encoding::{decode_value, encode_value, EncodedShare};
pub use error::{RecoveryError, RecoveryResult, ShareSetError};
pub use params::Threshold;
pub use point::Point;
pub use recovery::{Reconstruction, RecoveryWarning, SecretRecovery};
pub use traits::PointSource;

/// Decode a document's shares and recover the secret from its first `k`.
pub fn recover_secret(document: &ShareDocument) -> RecoveryResult<Reconstruction> {
    let points = document.decode_points()?;
    document.recovery()?.reconstruct(&points)
}

/// Parse `input` as a share document and recover its secret.
pub fn recover_secret_from_json(input: &str) -> RecoveryResult<Reconstruction> {
    recover_secret(&ShareDocument::from_json_str(input)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;

    #[test]
    fn recovers_secret_from_sample_document() {
        let input = r#"{
            "keys": { "n": 4, "k": 3 },
            "1": { "base": "10", "value": "4" },
            "2": { "base": "2", "value": "111" },
            "3": { "base": "10", "value": "12" },
            "6": { "base": "4", "value": "213" }
        }"#;

        let result = recover_secret_from_json(input).unwrap();
        assert_eq!(result.secret(), &BigInt::from(3));
        assert_eq!(result.selected(), 3);
        assert_eq!(result.available(), 4);
    }

    #[test]
    fn decoding_errors_stop_recovery() {
        let input = r#"{"keys":{"k":1},"1":{"base":"16","value":"xyz"}}"#;
        assert!(matches!(
            recover_secret_from_json(input),
            Err(RecoveryError::InvalidEncoding { base: 16, .. })
        ));
    }

    #[test]
    fn too_few_shares_in_document() {
        let input = r#"{"keys":{"n":2,"k":3},"1":{"base":"10","value":"4"},"2":{"base":"10","value":"7"}}"#;
        assert!(matches!(
            recover_secret_from_json(input),
            Err(RecoveryError::InsufficientShares {
                required: 3,
                provided: 2
            })
        ));
    }
}
