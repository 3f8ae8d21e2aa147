//! YAML comparer.
//!
//! Unlike [`crate::json::JsonComparer`] there is no separate well-formedness
//! pass: a malformed buffer surfaces as the YAML decoder's own error.
//!
//! Merge keys (`<<: *anchor`) are expanded before comparison, with keys
//! written explicitly in a mapping taking precedence over merged ones.

use std::collections::BTreeMap;

use serde_yaml::Value;
use tracing::debug;

use crate::comparer::{require_both, Comparer};
use crate::encoding::Encoding;
use crate::error::{CompareResult, DecodeError};
use crate::key_diff::{diff_keys, KeyDiff};

/// Compares YAML documents.
#[derive(Clone, Copy, Debug, Default)]
pub struct YamlComparer;

impl Comparer for YamlComparer {
    fn encoding(&self) -> Encoding {
        Encoding::Yaml
    }

    fn compare(&self, x: Option<&[u8]>, y: Option<&[u8]>) -> CompareResult<KeyDiff> {
        let (x, y) = require_both(x, y)?;

        let x_doc = decode(x)?;
        let y_doc = decode(y)?;

        let diff = diff_keys(&x_doc, &y_doc, values_equal);
        debug!(
            encoding = %Encoding::Yaml,
            x_keys = x_doc.len(),
            y_keys = y_doc.len(),
            new = diff.additions(),
            deleted = diff.removals(),
            changed = diff.modifications(),
            "compared documents"
        );
        Ok(diff)
    }
}

/// Decode a YAML mapping into its top-level entries, expanding merge keys.
/// An empty or `null` document decodes as empty.
pub fn decode(buf: &[u8]) -> CompareResult<BTreeMap<String, Value>> {
    let value: Option<Value> = serde_yaml::from_slice(buf).map_err(DecodeError::from)?;
    let Some(mut value) = value else {
        return Ok(BTreeMap::new());
    };
    value.apply_merge().map_err(DecodeError::from)?;

    let doc: Option<BTreeMap<String, Value>> =
        serde_yaml::from_value(value).map_err(DecodeError::from)?;
    Ok(doc.unwrap_or_default())
}

/// YAML value equality.
///
/// Strictly structural: integers and floats are distinct (`1` differs from
/// `1.0`), mapping entry order is ignored, and tags must match.
pub fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Sequence(a), Value::Sequence(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(a, b)| values_equal(a, b))
        }
        (Value::Mapping(a), Value::Mapping(b)) => {
            a.len() == b.len()
                && a
                    .iter()
                    .all(|(k, v)| b.get(k).is_some_and(|w| values_equal(v, w)))
        }
        (Value::Tagged(a), Value::Tagged(b)) => {
            a.tag == b.tag && values_equal(&a.value, &b.value)
        }
        _ => a == b,
    }
}
