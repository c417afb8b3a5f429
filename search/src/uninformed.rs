//! Uninformed single-frontier strategies.
//!
//! Each entry point is a frontier discipline plus a [`TraversalPolicy`]
//! handed to the shared driver. Bidirectional search keeps two frontiers and
//! lives in [`crate::bidirectional`].

use pathlab_kernel::RoadGraph;
use tracing::{debug_span, trace};

use crate::algorithm::Algorithm;
use crate::frontier::{FifoFrontier, LifoFrontier, PriorityFrontier, PriorityKey};
use crate::metrics::{RunClock, SearchMetrics};
use crate::policy::{TraversalPolicy, IDS_DEPTH_CEILING};
use crate::result::{SearchOutcome, SearchResult};
use crate::search::{finish, run_single, traverse};

/// Breadth-first search: FIFO frontier, goal test on generation.
///
/// Returns a path with the fewest roads; its cost is not minimized.
#[must_use]
pub fn breadth_first<'g>(graph: &'g RoadGraph, start: &'g str, goal: &'g str) -> SearchResult {
    run_single(
        Algorithm::BreadthFirst,
        graph,
        start,
        goal,
        FifoFrontier::new(),
        &TraversalPolicy::breadth_first(),
    )
}

/// Uniform-cost search: frontier ordered by path cost, goal test on
/// expansion, cheaper paths replace frontier entries.
#[must_use]
pub fn uniform_cost<'g>(graph: &'g RoadGraph, start: &'g str, goal: &'g str) -> SearchResult {
    run_single(
        Algorithm::UniformCost,
        graph,
        start,
        goal,
        PriorityFrontier::new(PriorityKey::PathCost, graph, goal),
        &TraversalPolicy::uniform_cost(),
    )
}

/// Depth-first search with a global explored set.
#[must_use]
pub fn depth_first<'g>(graph: &'g RoadGraph, start: &'g str, goal: &'g str) -> SearchResult {
    run_single(
        Algorithm::DepthFirst,
        graph,
        start,
        goal,
        LifoFrontier::new(),
        &TraversalPolicy::depth_first(),
    )
}

/// Depth-first search that never expands a node at depth `limit`.
///
/// Nodes at the limit are still goal-tested, so the returned path has at
/// most `limit` roads. A goal further away yields an empty path.
#[must_use]
pub fn depth_limited<'g>(
    graph: &'g RoadGraph,
    start: &'g str,
    goal: &'g str,
    limit: u32,
) -> SearchResult {
    run_single(
        Algorithm::DepthLimited,
        graph,
        start,
        goal,
        LifoFrontier::new(),
        &TraversalPolicy::depth_limited(limit),
    )
}

/// Iterative deepening: depth-limited passes with limits
/// `0..IDS_DEPTH_CEILING`, stopping at the first pass that reaches the goal.
///
/// Passes suppress only cycles along the current branch, so a state may be
/// expanded on several branches and again in every later pass. Counts add up
/// across passes; the frontier peak is the largest of any pass.
#[must_use]
pub fn iterative_deepening<'g>(
    graph: &'g RoadGraph,
    start: &'g str,
    goal: &'g str,
) -> SearchResult {
    let algorithm = Algorithm::IterativeDeepening;
    let _span = debug_span!("search", algorithm = algorithm.tag(), start, goal).entered();
    let clock = RunClock::start();
    if start == goal {
        return finish(SearchResult::trivial(algorithm, start, 1, &clock));
    }

    let mut metrics = SearchMetrics::default();
    let mut outcome = SearchOutcome::Exhausted;
    for limit in 0..IDS_DEPTH_CEILING {
        let mut pass = SearchMetrics::default();
        let policy = TraversalPolicy::deepening_pass(limit);
        outcome = traverse(graph, start, goal, LifoFrontier::new(), &policy, &mut pass);
        metrics.absorb(&pass);
        trace!(
            limit,
            expanded = pass.nodes_expanded,
            generated = pass.nodes_generated,
            found = matches!(outcome, SearchOutcome::GoalReached(_)),
            "deepening pass"
        );
        if matches!(outcome, SearchOutcome::GoalReached(_)) {
            break;
        }
    }
    finish(SearchResult::assemble(algorithm, outcome, metrics, &clock))
}
