//! Error types for the compares crate.

use std::fmt;

use crate::encoding::Encoding;

/// Which argument of a pairwise operation an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// The first (baseline) document.
    X,
    /// The second (candidate) document.
    Y,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::X => f.write_str("x"),
            Side::Y => f.write_str("y"),
        }
    }
}

/// Errors that can occur during comparison.
#[derive(Debug, thiserror::Error)]
pub enum CompareError {
    /// A chained comparison was given nothing to compare.
    #[error("there is no item to compare")]
    NoItem,

    /// A chained comparison was given a single item.
    #[error("there is only one item to compare")]
    OnlyOneItem,

    /// A required buffer was absent.
    #[error("{0} is nil item")]
    NilItem(Side),

    /// A buffer failed well-formedness validation before decoding.
    #[error("{side} is invalid {encoding}")]
    InvalidDocument { side: Side, encoding: Encoding },

    /// The decoder rejected the buffer's contents.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl CompareError {
    /// The side this error is attributed to, if any.
    pub fn side(&self) -> Option<Side> {
        match self {
            CompareError::NilItem(side) => Some(*side),
            CompareError::InvalidDocument { side, .. } => Some(*side),
            _ => None,
        }
    }
}

/// Decoder failures, passed through unmodified from the encoding library.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

/// Convenience alias for comparison results.
pub type CompareResult<T> = Result<T, CompareError>;
