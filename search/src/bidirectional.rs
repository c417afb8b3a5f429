//! Bidirectional breadth-first search.
//!
//! A forward FIFO search from the start follows roads as listed; a backward
//! FIFO search from the goal follows them in reverse, finding successors by
//! scanning every row for roads into the current state. Each loop iteration
//! takes one forward step then one backward step. The run stops at the first
//! state expanded by one side that the other side has already expanded.
//!
//! The meeting rule minimizes neither hops nor cost in general; on graphs
//! with equal road weights the spliced path is as short as a breadth-first
//! one.

use std::collections::HashMap;

use pathlab_kernel::RoadGraph;
use tracing::{debug_span, trace};

use crate::algorithm::Algorithm;
use crate::frontier::{FifoFrontier, Frontier};
use crate::metrics::{RunClock, SearchMetrics};
use crate::node::{NodeArena, NodeId};
use crate::result::{SearchOutcome, SearchResult, Solution};
use crate::search::finish;

/// Which tree a step grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Forward,
    Backward,
}

/// One direction's frontier and explored map (state to the node that
/// expanded it).
struct HalfSearch<'g> {
    frontier: FifoFrontier<'g>,
    explored: HashMap<&'g str, NodeId>,
}

impl<'g> HalfSearch<'g> {
    fn seeded(arena: &mut NodeArena<'g>, state: &'g str) -> Self {
        let mut frontier = FifoFrontier::new();
        let root = arena.root(state);
        frontier.push(root, arena.get(root));
        Self {
            frontier,
            explored: HashMap::new(),
        }
    }
}

/// Search from both ends at once and splice the two paths where they meet.
///
/// Both trees are seeded before the first step, so the counters start at two
/// generated nodes and a frontier of two.
#[must_use]
pub fn bidirectional<'g>(graph: &'g RoadGraph, start: &'g str, goal: &'g str) -> SearchResult {
    let algorithm = Algorithm::Bidirectional;
    let _span = debug_span!("search", algorithm = algorithm.tag(), start, goal).entered();
    let clock = RunClock::start();
    if start == goal {
        return finish(SearchResult::trivial(algorithm, start, 2, &clock));
    }

    let mut metrics = SearchMetrics::seeded(2);
    let outcome = meet_in_the_middle(graph, start, goal, &mut metrics);
    finish(SearchResult::assemble(algorithm, outcome, metrics, &clock))
}

fn meet_in_the_middle<'g>(
    graph: &'g RoadGraph,
    start: &'g str,
    goal: &'g str,
    metrics: &mut SearchMetrics,
) -> SearchOutcome {
    let mut arena = NodeArena::new();
    let mut forward = HalfSearch::seeded(&mut arena, start);
    let mut backward = HalfSearch::seeded(&mut arena, goal);

    while !forward.frontier.is_empty() && !backward.frontier.is_empty() {
        metrics.observe_frontier(forward.frontier.len() + backward.frontier.len());

        for side in [Side::Forward, Side::Backward] {
            let (this, other) = match side {
                Side::Forward => (&mut forward, &backward),
                Side::Backward => (&mut backward, &forward),
            };
            if let Some(meeting) = step(graph, side, &mut arena, this, other, metrics) {
                return SearchOutcome::GoalReached(meeting);
            }
        }
    }
    SearchOutcome::Exhausted
}

/// Expand one node of `this`. Returns the spliced path if the expanded state
/// was already expanded by `other`.
fn step<'g>(
    graph: &'g RoadGraph,
    side: Side,
    arena: &mut NodeArena<'g>,
    this: &mut HalfSearch<'g>,
    other: &HalfSearch<'g>,
    metrics: &mut SearchMetrics,
) -> Option<Solution> {
    let id = this.frontier.pop()?;
    metrics.record_expansion();
    let node = *arena.get(id);
    trace!(?side, state = node.state, depth = node.depth, "expand");
    this.explored.insert(node.state, id);

    if let Some(&met) = other.explored.get(node.state) {
        let (fwd, bwd) = match side {
            Side::Forward => (id, met),
            Side::Backward => (met, id),
        };
        return Some(splice(arena, fwd, bwd));
    }

    let roads: Vec<(&'g str, _)> = match side {
        Side::Forward => graph
            .neighbors(node.state)
            .iter()
            .map(|(next, &w)| (next.as_str(), w))
            .collect(),
        Side::Backward => graph.predecessors(node.state),
    };
    for (next, weight) in roads {
        let child = match side {
            Side::Forward => arena.child(id, next, weight),
            Side::Backward => arena.reverse_child(id, next, weight),
        };
        metrics.record_generation();
        if !this.explored.contains_key(next) && !this.frontier.contains(next) {
            this.frontier.push(child, arena.get(child));
        }
    }
    None
}

/// Forward path to the meeting state, then the backward path from it to the
/// goal with the meeting state itself dropped.
fn splice(arena: &NodeArena<'_>, forward: NodeId, backward: NodeId) -> Solution {
    let mut path = arena.reconstruct(forward);
    path.extend(arena.reconstruct(backward).into_iter().rev().skip(1));
    Solution {
        path,
        distance: arena
            .get(forward)
            .path_cost
            .saturating_add(arena.get(backward).path_cost),
    }
}
