//! Top-level key reconciliation between two decoded documents.
//!
//! Documents are represented as `BTreeMap<String, V>`. The diff only looks at
//! the outermost keys: a nested change inside a shared key is reported as that
//! key being changed, with no detail about what changed inside it.

use std::collections::BTreeMap;

use serde::Serialize;

/// The result of comparing the top-level keys of two documents.
///
/// Key order within each list follows the iteration order of the decoded map
/// and carries no meaning.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct KeyDiff {
    /// Keys present in `y` but not in `x`.
    pub new_keys: Vec<String>,
    /// Keys present in `x` but not in `y`.
    pub deleted_keys: Vec<String>,
    /// Keys present in both whose values differ.
    pub changed_keys: Vec<String>,
}

impl KeyDiff {
    /// Create an empty key diff.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the documents have the same top-level keys and values.
    pub fn is_equal(&self) -> bool {
        self.new_keys.is_empty() && self.deleted_keys.is_empty() && self.changed_keys.is_empty()
    }

    /// Number of new keys.
    pub fn additions(&self) -> usize {
        self.new_keys.len()
    }

    /// Number of deleted keys.
    pub fn removals(&self) -> usize {
        self.deleted_keys.len()
    }

    /// Number of changed keys.
    pub fn modifications(&self) -> usize {
        self.changed_keys.len()
    }
}

/// Reconcile the key sets of `x` and `y`.
///
/// Keys only in `x` are deleted, keys only in `y` are new, and keys in both
/// for which `eq` returns `false` are changed. A key lands in at most one list.
pub fn diff_keys<V, F>(x: &BTreeMap<String, V>, y: &BTreeMap<String, V>, eq: F) -> KeyDiff
where
    F: Fn(&V, &V) -> bool,
{
    let mut diff = KeyDiff::new();

    // Deleted and changed keys.
    for (key, x_val) in x {
        match y.get(key) {
            Some(y_val) => {
                if !eq(x_val, y_val) {
                    diff.changed_keys.push(key.clone());
                }
            }
            None => diff.deleted_keys.push(key.clone()),
        }
    }

    // New keys.
    for key in y.keys() {
        if !x.contains_key(key) {
            diff.new_keys.push(key.clone());
        }
    }

    diff
}
