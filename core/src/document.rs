//! Loader for the JSON share document.
//!
//! ```json
//! {
//!   "keys": { "n": 4, "k": 3 },
//!   "1": { "base": "10", "value": "4" },
//!   "2": { "base": "2", "value": "111" }
//! }
//! ```
//!
//! Share entries may sit at the root or inside `keys`. Root entries come
//! first, each group in document order.

use std::collections::HashSet;
use std::io::Read;

use num_bigint::BigInt;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::encoding::EncodedShare;
use crate::error::{RecoveryError, RecoveryResult, ShareSetError};
use crate::point::Point;
use crate::recovery::SecretRecovery;

const KEYS_FIELD: &str = "keys";
const THRESHOLD_FIELD: &str = "k";
const COUNT_FIELD: &str = "n";
const RESERVED_FIELDS: [&str; 3] = [KEYS_FIELD, THRESHOLD_FIELD, COUNT_FIELD];

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Number(u64),
    Text(String),
}

impl RawNumber {
    fn resolve<T>(self, field: &str) -> RecoveryResult<T>
    where
        T: TryFrom<u64> + std::str::FromStr,
    {
        let invalid = |shown: String| {
            RecoveryError::InvalidDocument(format!(
                "{field} must be a non-negative integer, got {shown}"
            ))
        };
        match self {
            RawNumber::Number(n) => {
                T::try_from(n).map_err(|_| invalid(n.to_string()))
            }
            RawNumber::Text(text) => {
                text.trim().parse().map_err(|_| invalid(format!("{text:?}")))
            }
        }
    }
}

#[derive(Deserialize)]
struct RawShare {
    base: RawNumber,
    value: String,
}

/// A parsed share document: threshold, declared count, and encoded shares in
/// document order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareDocument {
    threshold: usize,
    declared_count: Option<usize>,
    shares: Vec<EncodedShare>,
}

impl ShareDocument {
    pub fn new(
        threshold: usize,
        declared_count: Option<usize>,
        shares: Vec<EncodedShare>,
    ) -> Self {
        Self {
            threshold,
            declared_count,
            shares,
        }
    }

    pub fn from_json_str(input: &str) -> RecoveryResult<Self> {
        Self::from_value(serde_json::from_str(input)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> RecoveryResult<Self> {
        Self::from_value(serde_json::from_reader(reader)?)
    }

    pub fn from_value(value: Value) -> RecoveryResult<Self> {
        let Value::Object(root) = value else {
            return Err(RecoveryError::InvalidDocument(
                "expected a JSON object at the top level".into(),
            ));
        };

        let keys = root
            .get(KEYS_FIELD)
            .and_then(Value::as_object)
            .ok_or_else(|| {
                RecoveryError::InvalidDocument(format!(
                    "missing \"{KEYS_FIELD}\" object"
                ))
            })?;

        let threshold = read_count(keys, THRESHOLD_FIELD)?.ok_or_else(|| {
            RecoveryError::InvalidDocument(format!(
                "missing \"{KEYS_FIELD}.{THRESHOLD_FIELD}\""
            ))
        })?;
        let declared_count = read_count(keys, COUNT_FIELD)?;

        let mut shares = Vec::new();
        collect_shares(&root, &mut shares)?;
        collect_shares(keys, &mut shares)?;
        ensure_unique_indices(&shares)?;

        if let Some(declared) = declared_count {
            if declared != shares.len() {
                warn!(
                    declared,
                    found = shares.len(),
                    "declared share count does not match document"
                );
            }
        }

        Ok(Self::new(threshold, declared_count, shares))
    }

    /// The threshold `k` from `keys.k`.
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// The share count from `keys.n`, if present.
    pub fn declared_count(&self) -> Option<usize> {
        self.declared_count
    }

    pub fn shares(&self) -> &[EncodedShare] {
        &self.shares
    }

    /// Decode every share value, keeping document order.
    pub fn decode_points(&self) -> RecoveryResult<Vec<Point>> {
        self.shares.iter().map(EncodedShare::decode).collect()
    }

    /// A recovery driver configured with this document's threshold.
    pub fn recovery(&self) -> RecoveryResult<SecretRecovery> {
        SecretRecovery::with_threshold(self.threshold)
    }
}

fn read_count(
    object: &Map<String, Value>,
    field: &str,
) -> RecoveryResult<Option<usize>> {
    object
        .get(field)
        .map(|value| {
            RawNumber::deserialize(value)
                .map_err(|err| {
                    RecoveryError::InvalidDocument(format!("{field}: {err}"))
                })?
                .resolve(field)
        })
        .transpose()
}

fn collect_shares(
    object: &Map<String, Value>,
    shares: &mut Vec<EncodedShare>,
) -> RecoveryResult<()> {
    for (key, value) in object {
        if RESERVED_FIELDS.contains(&key.as_str()) {
            continue;
        }
        let Ok(x) = key.parse::<BigInt>() else {
            debug!(key = %key, "skipping non-numeric document key");
            continue;
        };

        let raw = RawShare::deserialize(value).map_err(|err| {
            RecoveryError::InvalidDocument(format!("share {key}: {err}"))
        })?;
        let base = raw.base.resolve(&format!("share {key} base"))?;
        shares.push(EncodedShare::new(x, base, raw.value));
    }
    Ok(())
}

fn ensure_unique_indices(shares: &[EncodedShare]) -> RecoveryResult<()> {
    let mut seen = HashSet::with_capacity(shares.len());
    for share in shares {
        if !seen.insert(&share.x) {
            return Err(ShareSetError::DuplicateX(share.x.clone()).into());
        }
    }
    Ok(())
}
