//! Small graphs and independent reference answers.
//!
//! The reference functions here deliberately share no code with
//! `pathlab_search`: they are what the lock tests check the engine against.

use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap, VecDeque};

use pathlab_kernel::{Cost, RoadGraph};
use pathlab_search::SearchResult;

/// `P0 - P1 - ... - P{n-1}`, every road weighing `weight`.
///
/// # Panics
///
/// Panics if `weight` is zero.
#[must_use]
pub fn line_graph(n: usize, weight: Cost) -> RoadGraph {
    let mut g = RoadGraph::new();
    for i in 1..n {
        g.insert_road(&format!("P{}", i - 1), &format!("P{i}"), weight)
            .unwrap();
    }
    g
}

/// Two equal-cost routes from `S` to `T` through `L` and `R`.
///
/// # Panics
///
/// Never; the weights are fixed and positive.
#[must_use]
pub fn diamond() -> RoadGraph {
    let mut g = RoadGraph::new();
    for (a, b) in [("S", "L"), ("S", "R"), ("L", "T"), ("R", "T")] {
        g.insert_road(a, b, 6).unwrap();
    }
    g
}

/// Two components: `A - B - C` and `X - Y`.
///
/// # Panics
///
/// Never; the weights are fixed and positive.
#[must_use]
pub fn split_graph() -> RoadGraph {
    let mut g = RoadGraph::new();
    g.insert_road("A", "B", 2).unwrap();
    g.insert_road("B", "C", 3).unwrap();
    g.insert_road("X", "Y", 4).unwrap();
    g
}

/// Fewest roads from `start` to `goal`, by plain breadth-first layering.
#[must_use]
pub fn reference_hops(graph: &RoadGraph, start: &str, goal: &str) -> Option<usize> {
    let mut seen: BTreeMap<&str, usize> = BTreeMap::new();
    let mut queue = VecDeque::from([start]);
    seen.insert(start, 0);
    while let Some(state) = queue.pop_front() {
        let hops = seen[state];
        if state == goal {
            return Some(hops);
        }
        for next in graph.neighbors(state).keys() {
            if !seen.contains_key(next.as_str()) {
                seen.insert(next, hops + 1);
                queue.push_back(next);
            }
        }
    }
    None
}

/// Cheapest total weight from `start` to `goal`, by Dijkstra with lazy
/// deletion.
#[must_use]
pub fn reference_cost(graph: &RoadGraph, start: &str, goal: &str) -> Option<Cost> {
    let mut best: BTreeMap<&str, Cost> = BTreeMap::new();
    let mut heap = BinaryHeap::from([Reverse((0, start))]);
    best.insert(start, 0);
    while let Some(Reverse((cost, state))) = heap.pop() {
        if state == goal {
            return Some(cost);
        }
        if best.get(state).is_some_and(|&b| b < cost) {
            continue;
        }
        for (next, &w) in graph.neighbors(state) {
            let candidate = cost + w;
            let improves = match best.get(next.as_str()) {
                Some(&known) => candidate < known,
                None => true,
            };
            if improves {
                best.insert(next, candidate);
                heap.push(Reverse((candidate, next)));
            }
        }
    }
    None
}

/// Assert that `result` is a well-formed answer for `start -> goal`: an
/// empty path with zero distance, or a walk from `start` to `goal` whose
/// road weights sum to `distance`.
///
/// # Panics
///
/// Panics with a description of the first violated property.
pub fn assert_well_formed(graph: &RoadGraph, result: &SearchResult, start: &str, goal: &str) {
    let tag = result.algorithm;
    if result.path.is_empty() {
        assert_eq!(result.distance, 0, "{tag}: empty path with nonzero distance");
        return;
    }
    assert_eq!(result.path.first().map(String::as_str), Some(start), "{tag}: wrong start");
    assert_eq!(result.path.last().map(String::as_str), Some(goal), "{tag}: wrong goal");
    assert_eq!(
        graph.walk_cost(&result.path),
        Some(result.distance),
        "{tag}: path {:?} is not a walk of cost {}",
        result.path,
        result.distance
    );
}
