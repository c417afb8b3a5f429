//! Typed graph construction and loading errors.

use crate::proof::canon::CanonError;

/// Failure while building, loading, or fingerprinting a [`crate::RoadGraph`].
///
/// Queries never fail: an unknown state simply has no roads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Edge weights must be strictly positive.
    NonPositiveWeight { from: String, to: String },
    /// A road from a state to itself.
    SelfLoop { state: String },
    /// JSON input did not have the expected shape.
    Malformed { detail: String },
    /// Canonical serialization for fingerprinting failed.
    Canon(CanonError),
}

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositiveWeight { from, to } => {
                write!(f, "road {from} -> {to} must have a positive weight")
            }
            Self::SelfLoop { state } => write!(f, "self-loop on {state}"),
            Self::Malformed { detail } => write!(f, "malformed graph JSON: {detail}"),
            Self::Canon(e) => write!(f, "graph fingerprint failed: {e}"),
        }
    }
}

impl std::error::Error for GraphError {}

impl From<CanonError> for GraphError {
    fn from(e: CanonError) -> Self {
        Self::Canon(e)
    }
}
