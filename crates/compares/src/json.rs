//! JSON comparer.
//!
//! Both buffers are parsed before either is decoded into a document, so a
//! malformed buffer is reported as [`CompareError::InvalidDocument`] naming the
//! offending side. Well-formed JSON whose top level is not an object (or
//! `null`) fails afterwards with the decoder's own error.
//!
//! Parsing accepts anything the decoder accepts: invalid UTF-8 is replaced
//! with U+FFFD and nesting depth is not limited.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::comparer::{require_both, Comparer};
use crate::encoding::Encoding;
use crate::error::{CompareError, CompareResult, DecodeError, Side};
use crate::key_diff::{diff_keys, KeyDiff};

/// Compares JSON documents.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonComparer;

impl Comparer for JsonComparer {
    fn encoding(&self) -> Encoding {
        Encoding::Json
    }

    fn compare(&self, x: Option<&[u8]>, y: Option<&[u8]>) -> CompareResult<KeyDiff> {
        let (x, y) = require_both(x, y)?;

        let x_val = validate(Side::X, x)?;
        let y_val = validate(Side::Y, y)?;

        let x_doc = into_document(x_val)?;
        let y_doc = into_document(y_val)?;

        let diff = diff_keys(&x_doc, &y_doc, values_equal);
        debug!(
            encoding = %Encoding::Json,
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

/// Check that `buf` holds exactly one well-formed JSON value.
pub fn is_valid(buf: &[u8]) -> bool {
    parse(buf).is_ok()
}

fn parse(buf: &[u8]) -> serde_json::Result<Value> {
    let text = String::from_utf8_lossy(buf);
    let mut de = serde_json::Deserializer::from_str(&text);
    de.disable_recursion_limit();
    let value = Value::deserialize(&mut de)?;
    de.end()?;
    Ok(value)
}

fn validate(side: Side, buf: &[u8]) -> CompareResult<Value> {
    parse(buf).map_err(|_| CompareError::InvalidDocument {
        side,
        encoding: Encoding::Json,
    })
}

/// Decode a JSON object into its top-level entries. `null` decodes as empty.
pub fn decode(buf: &[u8]) -> CompareResult<BTreeMap<String, Value>> {
    into_document(parse(buf).map_err(DecodeError::from)?)
}

fn into_document(value: Value) -> CompareResult<BTreeMap<String, Value>> {
    let doc: Option<BTreeMap<String, Value>> =
        serde_json::from_value(value).map_err(DecodeError::from)?;
    Ok(doc.unwrap_or_default())
}

/// JSON value equality.
///
/// Structural, except that numbers compare by their `f64` value: JSON has a
/// single number type, so `1` and `1.0` are the same value.
pub fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(a), Value::Number(b)) => match (a.as_f64(), b.as_f64()) {
            (Some(a), Some(b)) => a == b,
            _ => a == b,
        },
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(a, b)| values_equal(a, b))
        }
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a
                    .iter()
                    .all(|(k, v)| b.get(k).is_some_and(|w| values_equal(v, w)))
        }
        _ => a == b,
    }
}
