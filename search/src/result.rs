//! `SearchResult`: the one record a run hands back to its caller.

use pathlab_kernel::proof::canon::{canonical_json_bytes, CanonError};
use pathlab_kernel::proof::hash::{canonical_hash, ContentHash};
use pathlab_kernel::proof::hash_domain::HashDomain;
use pathlab_kernel::Cost;
use serde_json::{json, Value};

use crate::algorithm::Algorithm;
use crate::metrics::{RunClock, SearchMetrics};

/// A path found by a run: root-first states and their total cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub path: Vec<String>,
    pub distance: Cost,
}

/// Terminal state of a run. There is no resumption from either.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    GoalReached(Solution),
    Exhausted,
}

/// Solution quality and search effort for one run.
///
/// An empty `path` means no solution was found; `distance` is then `0`.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub algorithm: Algorithm,
    pub path: Vec<String>,
    pub distance: Cost,
    pub nodes_expanded: u64,
    pub nodes_generated: u64,
    pub max_frontier_size: u64,
    /// Wall-clock time of the run in fractional milliseconds.
    pub execution_time: f64,
}

impl SearchResult {
    /// Assemble the record. Side-effect free.
    #[must_use]
    pub fn assemble(
        algorithm: Algorithm,
        outcome: SearchOutcome,
        metrics: SearchMetrics,
        clock: &RunClock,
    ) -> Self {
        let (path, distance) = match outcome {
            SearchOutcome::GoalReached(Solution { path, distance }) => (path, distance),
            SearchOutcome::Exhausted => (Vec::new(), 0),
        };
        Self {
            algorithm,
            path,
            distance,
            nodes_expanded: metrics.nodes_expanded,
            nodes_generated: metrics.nodes_generated,
            max_frontier_size: metrics.max_frontier_size,
            execution_time: clock.elapsed_ms(),
        }
    }

    /// The `start == goal` result: a one-state path at zero cost. `roots` is
    /// the number of trees the algorithm seeds (two for bidirectional).
    #[must_use]
    pub fn trivial(algorithm: Algorithm, state: &str, roots: u64, clock: &RunClock) -> Self {
        let metrics = SearchMetrics {
            nodes_expanded: roots,
            nodes_generated: roots,
            max_frontier_size: roots,
        };
        let solution = Solution {
            path: vec![state.to_string()],
            distance: 0,
        };
        Self::assemble(algorithm, SearchOutcome::GoalReached(solution), metrics, clock)
    }

    /// Whether a path was found.
    #[must_use]
    pub fn is_solution(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of roads on the path; `None` without a solution.
    #[must_use]
    pub fn edge_count(&self) -> Option<usize> {
        self.path.len().checked_sub(1)
    }

    /// Every field except `execution_time`.
    #[must_use]
    pub fn deterministic_json_value(&self) -> Value {
        json!({
            "algorithm": self.algorithm.tag(),
            "path": self.path,
            "distance": self.distance,
            "nodes_expanded": self.nodes_expanded,
            "nodes_generated": self.nodes_generated,
            "max_frontier_size": self.max_frontier_size,
        })
    }

    /// Every field, timing included.
    #[must_use]
    pub fn to_json_value(&self) -> Value {
        let mut value = self.deterministic_json_value();
        value["execution_time"] = json!(self.execution_time);
        value
    }

    /// SHA-256 of the canonical deterministic projection. Two runs with the
    /// same inputs produce the same digest.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if canonical serialization fails.
    pub fn deterministic_digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = canonical_json_bytes(&self.deterministic_json_value())?;
        Ok(canonical_hash(HashDomain::SearchResult, &bytes))
    }
}
