//! Harness-level errors.

use pathlab_kernel::proof::canon::CanonError;
use pathlab_kernel::GraphError;
use pathlab_search::{Algorithm, SearchError};

/// Failure while configuring, running, or decoding a comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HarnessError {
    /// The comparison configuration cannot be run as given.
    InvalidConfig { detail: String },
    /// A search rejected its input at the boundary.
    Search(SearchError),
    /// The graph could not be fingerprinted.
    Graph(GraphError),
    /// Canonical serialization of the digest basis failed.
    Canon(CanonError),
    /// A worker thread panicked instead of returning a result.
    WorkerPanicked { algorithm: Algorithm },
    /// A serialized report did not have the expected shape.
    MalformedReport { detail: String },
    /// A serialized report's stored digest disagrees with its content.
    DigestMismatch { stored: String, recomputed: String },
}

impl std::fmt::Display for HarnessError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfig { detail } => write!(f, "invalid comparison config: {detail}"),
            Self::Search(e) => write!(f, "search rejected input: {e}"),
            Self::Graph(e) => write!(f, "graph error: {e}"),
            Self::Canon(e) => write!(f, "canonical JSON error: {e}"),
            Self::WorkerPanicked { algorithm } => {
                write!(f, "worker for {algorithm} panicked")
            }
            Self::MalformedReport { detail } => write!(f, "malformed report: {detail}"),
            Self::DigestMismatch { stored, recomputed } => {
                write!(
                    f,
                    "digest mismatch: stored={stored}, recomputed={recomputed}"
                )
            }
        }
    }
}

impl std::error::Error for HarnessError {}

impl From<SearchError> for HarnessError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

impl From<GraphError> for HarnessError {
    fn from(e: GraphError) -> Self {
        Self::Graph(e)
    }
}

impl From<CanonError> for HarnessError {
    fn from(e: CanonError) -> Self {
        Self::Canon(e)
    }
}
