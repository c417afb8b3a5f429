//! Traversal policies: the configuration values that turn the shared driver
//! into a specific strategy.

use crate::error::SearchError;

/// Depth-limited search uses this limit when the caller does not pick one.
pub const DEFAULT_DEPTH_LIMIT: u32 = 10;

/// Iterative deepening tries limits `0..IDS_DEPTH_CEILING`.
pub const IDS_DEPTH_CEILING: u32 = 100;

/// When a node is compared against the goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalCheck {
    /// Test each successor as it is generated (breadth-first).
    OnGenerate,
    /// Test a node when it is popped for expansion.
    OnExpand,
}

/// What happens to a successor whose state was already reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Discard if the state is explored or anywhere in the frontier.
    SuppressSeen,
    /// Discard if explored; if in the frontier, replace the entry only when
    /// the new path is strictly cheaper.
    ReplaceIfCheaper,
    /// No explored set. Discard only if the state already occurs on the
    /// successor's own root-to-parent chain.
    AncestorCycle,
}

/// Order in which a state's roads are turned into successors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuccessorOrder {
    /// Lexicographic by neighbor name.
    AsListed,
    /// Reverse lexicographic, so a LIFO frontier expands the first-listed
    /// neighbor first.
    Reversed,
}

/// Everything that distinguishes one traversal strategy from another,
/// apart from the frontier discipline itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraversalPolicy {
    pub goal_check: GoalCheck,
    pub duplicates: DuplicatePolicy,
    /// Nodes at this depth are goal-tested but never expanded.
    pub depth_limit: Option<u32>,
    pub successor_order: SuccessorOrder,
}

impl TraversalPolicy {
    #[must_use]
    pub const fn breadth_first() -> Self {
        Self {
            goal_check: GoalCheck::OnGenerate,
            duplicates: DuplicatePolicy::SuppressSeen,
            depth_limit: None,
            successor_order: SuccessorOrder::AsListed,
        }
    }

    #[must_use]
    pub const fn uniform_cost() -> Self {
        Self {
            goal_check: GoalCheck::OnExpand,
            duplicates: DuplicatePolicy::ReplaceIfCheaper,
            depth_limit: None,
            successor_order: SuccessorOrder::AsListed,
        }
    }

    #[must_use]
    pub const fn depth_first() -> Self {
        Self {
            goal_check: GoalCheck::OnExpand,
            duplicates: DuplicatePolicy::SuppressSeen,
            depth_limit: None,
            successor_order: SuccessorOrder::Reversed,
        }
    }

    #[must_use]
    pub const fn depth_limited(limit: u32) -> Self {
        Self {
            depth_limit: Some(limit),
            ..Self::depth_first()
        }
    }

    /// One iteration of iterative deepening.
    #[must_use]
    pub const fn deepening_pass(limit: u32) -> Self {
        Self {
            goal_check: GoalCheck::OnExpand,
            duplicates: DuplicatePolicy::AncestorCycle,
            depth_limit: Some(limit),
            successor_order: SuccessorOrder::Reversed,
        }
    }

    #[must_use]
    pub const fn greedy_best_first() -> Self {
        Self {
            goal_check: GoalCheck::OnExpand,
            duplicates: DuplicatePolicy::SuppressSeen,
            depth_limit: None,
            successor_order: SuccessorOrder::AsListed,
        }
    }

    #[must_use]
    pub const fn a_star() -> Self {
        Self::uniform_cost()
    }

    /// Whether a node at `depth` may be expanded.
    #[must_use]
    pub fn may_expand(&self, depth: u32) -> bool {
        match self.depth_limit {
            Some(limit) => depth < limit,
            None => true,
        }
    }
}

/// A validated, non-negative depth limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DepthLimit(u32);

impl DepthLimit {
    #[must_use]
    pub const fn new(limit: u32) -> Self {
        Self(limit)
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl Default for DepthLimit {
    fn default() -> Self {
        Self(DEFAULT_DEPTH_LIMIT)
    }
}

impl TryFrom<i64> for DepthLimit {
    type Error = SearchError;

    /// Negative limits are a caller bug and fail fast. Limits beyond
    /// `u32::MAX` saturate; no road graph is that deep.
    fn try_from(limit: i64) -> Result<Self, Self::Error> {
        if limit < 0 {
            return Err(SearchError::NegativeDepthLimit { limit });
        }
        Ok(Self(u32::try_from(limit).unwrap_or(u32::MAX)))
    }
}
