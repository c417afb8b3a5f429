//! Precomputed remaining-cost estimates relative to one reference goal.

use std::collections::BTreeMap;

use crate::graph::Cost;

/// Estimates of the remaining cost from each state to a single fixed goal.
///
/// The table carries no coordinates, so nothing can be said about any other
/// goal: [`HeuristicTable::estimate`] returns `0` there, which is admissible
/// and leaves greedy/A* correct but uninformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeuristicTable {
    goal: String,
    estimates: BTreeMap<String, Cost>,
}

impl HeuristicTable {
    /// Create a table for `goal`. The goal's own estimate defaults to `0`
    /// when `estimates` omits it.
    #[must_use]
    pub fn new(goal: impl Into<String>, estimates: BTreeMap<String, Cost>) -> Self {
        Self {
            goal: goal.into(),
            estimates,
        }
    }

    /// The goal every estimate is measured against.
    #[must_use]
    pub fn goal(&self) -> &str {
        &self.goal
    }

    /// Raw tabulated estimates.
    #[must_use]
    pub fn estimates(&self) -> &BTreeMap<String, Cost> {
        &self.estimates
    }

    /// Estimate the remaining cost from `state` to `goal`.
    ///
    /// `0` when `goal` is not the table's reference goal or `state` is not
    /// tabulated.
    #[must_use]
    pub fn estimate(&self, state: &str, goal: &str) -> Cost {
        if goal != self.goal {
            return 0;
        }
        self.estimates.get(state).copied().unwrap_or(0)
    }
}
