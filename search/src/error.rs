//! Typed search errors.
//!
//! `SearchError` represents boundary failures only: a caller asked for
//! something that cannot be searched. "No path", "unknown city", and
//! "start equals goal" are ordinary [`crate::result::SearchResult`]s.

/// Failure raised before any search step is taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Depth limits must be non-negative.
    NegativeDepthLimit { limit: i64 },
    /// An algorithm tag did not name one of the eight strategies.
    UnknownAlgorithm { tag: String },
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeDepthLimit { limit } => {
                write!(f, "depth limit must be non-negative, got {limit}")
            }
            Self::UnknownAlgorithm { tag } => write!(f, "unknown algorithm tag: {tag:?}"),
        }
    }
}

impl std::error::Error for SearchError {}
