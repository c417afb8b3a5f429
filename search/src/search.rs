//! The shared traversal driver.
//!
//! Every single-frontier strategy is this loop plus a frontier discipline
//! and a [`TraversalPolicy`]:
//!
//! 1. record the frontier size into the running maximum
//! 2. pop per discipline (empty frontier: `Exhausted`)
//! 3. count the expansion; goal-test here under [`GoalCheck::OnExpand`]
//! 4. mark explored (unless suppression is cycle-only)
//! 5. unless the depth guard forbids it, build one successor per road,
//!    count it, goal-test here under [`GoalCheck::OnGenerate`], and admit it
//!    per the [`DuplicatePolicy`]

use std::collections::HashSet;

use pathlab_kernel::{Cost, RoadGraph};
use tracing::{debug, debug_span, trace};

use crate::algorithm::Algorithm;
use crate::frontier::Frontier;
use crate::metrics::{RunClock, SearchMetrics};
use crate::node::{NodeArena, NodeId};
use crate::policy::{DuplicatePolicy, GoalCheck, SuccessorOrder, TraversalPolicy};
use crate::result::{SearchOutcome, SearchResult, Solution};

/// Run one strategy end to end: trivial short-circuit, traversal, assembly.
pub(crate) fn run_single<'g, F: Frontier<'g>>(
    algorithm: Algorithm,
    graph: &'g RoadGraph,
    start: &'g str,
    goal: &'g str,
    frontier: F,
    policy: &TraversalPolicy,
) -> SearchResult {
    let _span = debug_span!("search", algorithm = algorithm.tag(), start, goal).entered();
    let clock = RunClock::start();
    if start == goal {
        return finish(SearchResult::trivial(algorithm, start, 1, &clock));
    }

    let mut metrics = SearchMetrics::default();
    let outcome = traverse(graph, start, goal, frontier, policy, &mut metrics);
    finish(SearchResult::assemble(algorithm, outcome, metrics, &clock))
}

/// Log the terminal state of a run and hand the result back.
pub(crate) fn finish(result: SearchResult) -> SearchResult {
    debug!(
        solved = result.is_solution(),
        distance = result.distance,
        nodes_expanded = result.nodes_expanded,
        nodes_generated = result.nodes_generated,
        max_frontier_size = result.max_frontier_size,
        execution_time = result.execution_time,
        "search finished"
    );
    result
}

/// Traverse from `start` until the goal is found or the frontier empties.
///
/// Seeds the frontier with the start node, counted as one generated node.
/// `start == goal` is the caller's concern; under [`GoalCheck::OnGenerate`]
/// the start node itself is never tested.
pub fn traverse<'g, F: Frontier<'g>>(
    graph: &'g RoadGraph,
    start: &'g str,
    goal: &'g str,
    mut frontier: F,
    policy: &TraversalPolicy,
    metrics: &mut SearchMetrics,
) -> SearchOutcome {
    let mut arena = NodeArena::new();
    let mut explored: HashSet<&'g str> = HashSet::new();

    let root = arena.root(start);
    frontier.push(root, arena.get(root));
    metrics.record_generation();

    loop {
        metrics.observe_frontier(frontier.len());

        let Some(id) = frontier.pop() else {
            return SearchOutcome::Exhausted;
        };
        metrics.record_expansion();
        let node = *arena.get(id);
        trace!(
            state = node.state,
            depth = node.depth,
            path_cost = node.path_cost,
            "expand"
        );

        if policy.goal_check == GoalCheck::OnExpand && node.state == goal {
            return SearchOutcome::GoalReached(solution(&arena, id));
        }
        if policy.duplicates != DuplicatePolicy::AncestorCycle {
            explored.insert(node.state);
        }
        if !policy.may_expand(node.depth) {
            continue;
        }

        for (next, weight) in successors(graph, node.state, policy.successor_order) {
            let child = arena.child(id, next, weight);
            metrics.record_generation();

            if policy.goal_check == GoalCheck::OnGenerate && next == goal {
                return SearchOutcome::GoalReached(solution(&arena, child));
            }

            match policy.duplicates {
                DuplicatePolicy::SuppressSeen => {
                    if !explored.contains(next) && !frontier.contains(next) {
                        frontier.push(child, arena.get(child));
                    }
                }
                DuplicatePolicy::ReplaceIfCheaper => {
                    if explored.contains(next) {
                        continue;
                    }
                    if frontier.contains(next) {
                        frontier.replace_if_better(child, arena.get(child));
                    } else {
                        frontier.push(child, arena.get(child));
                    }
                }
                DuplicatePolicy::AncestorCycle => {
                    if !arena.on_ancestor_chain(id, next) {
                        frontier.push(child, arena.get(child));
                    }
                }
            }
        }
    }
}

/// `(neighbor, weight)` pairs for `state` in the requested order.
fn successors<'g>(
    graph: &'g RoadGraph,
    state: &str,
    order: SuccessorOrder,
) -> Vec<(&'g str, Cost)> {
    let mut roads: Vec<(&'g str, Cost)> = graph
        .neighbors(state)
        .iter()
        .map(|(next, &w)| (next.as_str(), w))
        .collect();
    if order == SuccessorOrder::Reversed {
        roads.reverse();
    }
    roads
}

pub(crate) fn solution(arena: &NodeArena<'_>, id: NodeId) -> Solution {
    Solution {
        path: arena.reconstruct(id),
        distance: arena.get(id).path_cost,
    }
}
