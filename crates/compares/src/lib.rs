//! Structural comparison of serialized JSON and YAML documents.
//!
//! Answers three questions about raw byte buffers: are N buffers equal in a
//! chain, are two buffers byte-identical, and which top-level keys were added,
//! removed, or changed between two documents.
//!
//! # Key Types
//!
//! - [`Comparer`] -- The comparator contract (`are_equal`, `is_equal`, `compare`)
//! - [`JsonComparer`] / [`YamlComparer`] -- One implementation per encoding
//! - [`KeyDiff`] -- Top-level key diff (new / deleted / changed keys)
//! - [`ChainVerdict`] -- Result of a chained N-way comparison
//! - [`Encoding`] -- Encoding selection and comparer lookup

pub mod comparer;
pub mod encoding;
pub mod error;
pub mod json;
pub mod key_diff;
pub mod yaml;

pub use comparer::{are_equal, is_equal, ChainVerdict, Comparer};
pub use encoding::{Encoding, UnknownEncoding};
pub use error::{CompareError, CompareResult, DecodeError, Side};
pub use json::JsonComparer;
pub use key_diff::{diff_keys, KeyDiff};
pub use yaml::YamlComparer;
