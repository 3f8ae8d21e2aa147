//! The comparator contract shared by every encoding.

use serde::Serialize;
use tracing::trace;

use crate::encoding::Encoding;
use crate::error::{CompareError, CompareResult, Side};
use crate::key_diff::KeyDiff;

/// Outcome of a chained comparison over a sequence of buffers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ChainVerdict {
    /// `true` if every adjacent pair examined so far was identical.
    pub equal: bool,
    /// Index of the first buffer that differs from its predecessor, or `0`
    /// when the whole chain is identical.
    pub first_divergence: usize,
}

/// A stateless document comparator.
///
/// Implementations differ only in how `compare` decodes its inputs. All
/// operations are pure functions of their arguments:
/// - `are_equal` and `is_equal` treat buffers as opaque bytes and never decode.
/// - `compare` reconciles the top-level keys of two decoded documents.
/// - An absent buffer (`None`) is distinct from an empty one (`Some(&[])`).
pub trait Comparer: Send + Sync {
    /// The encoding this comparer decodes.
    fn encoding(&self) -> Encoding;

    /// Compare adjacent buffers in order, stopping at the first difference.
    fn are_equal(&self, items: &[&[u8]]) -> CompareResult<ChainVerdict> {
        are_equal(items)
    }

    /// Byte identity of two buffers.
    fn is_equal(&self, x: Option<&[u8]>, y: Option<&[u8]>) -> CompareResult<bool> {
        is_equal(x, y)
    }

    /// Diff the top-level keys of `y` against `x`.
    ///
    /// Keys only in `y` are new, keys only in `x` are deleted, and keys in
    /// both whose values differ under the encoding's equality rule are changed.
    fn compare(&self, x: Option<&[u8]>, y: Option<&[u8]>) -> CompareResult<KeyDiff>;
}

/// Chained byte comparison: `items[0]` vs `items[1]`, `items[1]` vs `items[2]`, ...
///
/// Returns `{ equal, first_divergence: i }` at the first `i` where
/// `items[i - 1] != items[i]`, with `equal` reporting whether any earlier pair
/// matched. Returns `{ true, 0 }` when the whole chain is identical.
pub fn are_equal(items: &[&[u8]]) -> CompareResult<ChainVerdict> {
    match items.len() {
        0 => return Err(CompareError::NoItem),
        1 => return Err(CompareError::OnlyOneItem),
        _ => {}
    }

    let mut equal = false;
    for (i, pair) in items.windows(2).enumerate() {
        let index = i + 1;
        if pair[0] != pair[1] {
            trace!(index, "chain diverged");
            return Ok(ChainVerdict {
                equal,
                first_divergence: index,
            });
        }
        equal = true;
    }

    Ok(ChainVerdict {
        equal,
        first_divergence: 0,
    })
}

/// Byte identity of two present buffers.
pub fn is_equal(x: Option<&[u8]>, y: Option<&[u8]>) -> CompareResult<bool> {
    let (x, y) = require_both(x, y)?;
    Ok(x == y)
}

/// Reject absent buffers, checking `x` before `y`.
pub(crate) fn require_both<'a>(
    x: Option<&'a [u8]>,
    y: Option<&'a [u8]>,
) -> CompareResult<(&'a [u8], &'a [u8])> {
    let x = x.ok_or(CompareError::NilItem(Side::X))?;
    let y = y.ok_or(CompareError::NilItem(Side::Y))?;
    Ok((x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn no_items() {
        let err = are_equal(&[]).unwrap_err();
        assert!(matches!(err, CompareError::NoItem));
    }

    #[test]
    fn one_item() {
        let err = are_equal(&[b"{}"]).unwrap_err();
        assert!(matches!(err, CompareError::OnlyOneItem));
    }

    #[test]
    fn identical_pair() {
        let v = are_equal(&[b"abc", b"abc"]).unwrap();
        assert_eq!(v, ChainVerdict { equal: true, first_divergence: 0 });
    }

    #[test]
    fn differing_pair() {
        let v = are_equal(&[b"abc", b"abd"]).unwrap();
        assert_eq!(v, ChainVerdict { equal: false, first_divergence: 1 });
    }

    #[test]
    fn divergence_after_matching_prefix() {
        let v = are_equal(&[b"a", b"a", b"c"]).unwrap();
        assert_eq!(v, ChainVerdict { equal: true, first_divergence: 2 });
    }

    #[test]
    fn short_circuits_on_first_divergence() {
        // items[2] and items[3] also differ, but only index 1 is reported.
        let v = are_equal(&[b"a", b"b", b"c", b"d"]).unwrap();
        assert_eq!(v.first_divergence, 1);
        assert!(!v.equal);
    }

    #[test]
    fn chained_not_all_pairs() {
        let items: [&[u8]; 3] = [b"a", b"a", b"a"];
        assert!(are_equal(&items).unwrap().equal);
    }

    #[test]
    fn empty_buffers_are_identical() {
        let v = are_equal(&[b"", b""]).unwrap();
        assert!(v.equal);
    }

    #[test]
    fn structurally_equal_but_bytes_differ() {
        // Chained comparison never decodes.
        let v = are_equal(&[br#"{"a":1}"#, br#"{ "a": 1 }"#]).unwrap();
        assert!(!v.equal);
        assert_eq!(v.first_divergence, 1);
    }

    #[test]
    fn is_equal_nil_sides() {
        let err = is_equal(None, Some(b"x")).unwrap_err();
        assert_eq!(err.to_string(), "x is nil item");
        let err = is_equal(Some(b"x"), None).unwrap_err();
        assert_eq!(err.to_string(), "y is nil item");
        let err = is_equal(None, None).unwrap_err();
        assert_eq!(err.to_string(), "x is nil item");
    }

    #[test]
    fn is_equal_bytes() {
        assert!(is_equal(Some(b"abc"), Some(b"abc")).unwrap());
        assert!(!is_equal(Some(b"abc"), Some(b"ab")).unwrap());
        assert!(is_equal(Some(b""), Some(b"")).unwrap());
    }

    proptest! {
        #[test]
        fn identical_chains_are_equal(
            buf in proptest::collection::vec(any::<u8>(), 0..64),
            n in 2usize..8,
        ) {
            let items: Vec<&[u8]> = std::iter::repeat(buf.as_slice()).take(n).collect();
            let v = are_equal(&items).unwrap();
            prop_assert_eq!(v, ChainVerdict { equal: true, first_divergence: 0 });
        }

        #[test]
        fn is_equal_matches_slice_equality(
            a in proptest::collection::vec(any::<u8>(), 0..16),
            b in proptest::collection::vec(any::<u8>(), 0..16),
        ) {
            prop_assert_eq!(is_equal(Some(a.as_slice()), Some(b.as_slice())).unwrap(), a == b);
        }
    }
}
