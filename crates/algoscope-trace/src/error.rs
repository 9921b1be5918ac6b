use std::fmt;

use crate::algorithm::Algorithm;

/// Errors that can occur when requesting a trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceError {
    /// The identifier does not name an algorithm in the catalogue.
    UnknownAlgorithm(String),
    /// A searching algorithm was run without a target value.
    MissingTarget(Algorithm),
    /// The input exceeds the supported array length.
    ArrayTooLarge { len: usize, max: usize },
}

impl fmt::Display for TraceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownAlgorithm(id) => write!(f, "unknown algorithm \u{201c}{id}\u{201d}"),
            Self::MissingTarget(alg) => write!(f, "{alg} needs a target value"),
            Self::ArrayTooLarge { len, max } => {
                write!(f, "array of {len} elements exceeds the limit of {max}")
            }
        }
    }
}

impl std::error::Error for TraceError {}
