//! Heuristic-guided strategies.
//!
//! Both read `graph.heuristic(state, goal)`, which is `0` for any goal the
//! graph's table was not built for. Greedy search then has no ordering signal
//! beyond insertion order, and A* orders exactly like uniform-cost search.

use pathlab_kernel::RoadGraph;

use crate::algorithm::Algorithm;
use crate::frontier::{PriorityFrontier, PriorityKey};
use crate::policy::TraversalPolicy;
use crate::result::SearchResult;
use crate::search::run_single;

/// Greedy best-first search: always expand the state whose estimate is
/// lowest, ignoring the cost already paid.
#[must_use]
pub fn greedy_best_first<'g>(graph: &'g RoadGraph, start: &'g str, goal: &'g str) -> SearchResult {
    run_single(
        Algorithm::GreedyBestFirst,
        graph,
        start,
        goal,
        PriorityFrontier::new(PriorityKey::Heuristic, graph, goal),
        &TraversalPolicy::greedy_best_first(),
    )
}

/// A*: expand the lowest `path_cost + heuristic`. Cost-optimal when the
/// heuristic is admissible and consistent for `goal`.
#[must_use]
pub fn a_star<'g>(graph: &'g RoadGraph, start: &'g str, goal: &'g str) -> SearchResult {
    run_single(
        Algorithm::AStar,
        graph,
        start,
        goal,
        PriorityFrontier::new(PriorityKey::CostPlusHeuristic, graph, goal),
        &TraversalPolicy::a_star(),
    )
}
