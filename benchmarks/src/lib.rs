//! Shared helpers for pathlab benchmark suites.

use std::collections::BTreeMap;

use pathlab_kernel::{Cost, HeuristicTable, RoadGraph};

/// Name of the grid cell at row `r`, column `c`.
#[must_use]
pub fn cell(r: usize, c: usize) -> String {
    format!("r{r:02}c{c:02}")
}

/// Deterministic road weight between neighbouring cells, in `1..=5`.
fn grid_weight(r: usize, c: usize) -> Cost {
    ((r * 7 + c * 3) % 5 + 1) as Cost
}

/// A `side x side` grid of two-way roads with a Manhattan-distance heuristic
/// toward the far corner ([`grid_goal`]).
///
/// Every weight is at least 1, so the heuristic never overestimates.
///
/// # Panics
///
/// Panics if `side < 2`. Benchmark setup failures are fatal.
#[must_use]
pub fn grid_graph(side: usize) -> RoadGraph {
    assert!(side >= 2, "grid needs at least two cells per side");
    let mut graph = RoadGraph::new();
    for r in 0..side {
        for c in 0..side {
            let w = grid_weight(r, c);
            if c + 1 < side {
                graph
                    .insert_road(&cell(r, c), &cell(r, c + 1), w)
                    .expect("grid weight is positive");
            }
            if r + 1 < side {
                graph
                    .insert_road(&cell(r, c), &cell(r + 1, c), w)
                    .expect("grid weight is positive");
            }
        }
    }

    let goal = grid_goal(side);
    let estimates: BTreeMap<String, Cost> = (0..side)
        .flat_map(|r| (0..side).map(move |c| (r, c)))
        .map(|(r, c)| (cell(r, c), ((side - 1 - r) + (side - 1 - c)) as Cost))
        .collect();
    graph.with_heuristic(HeuristicTable::new(goal, estimates))
}

/// Start corner of [`grid_graph`].
#[must_use]
pub fn grid_start() -> String {
    cell(0, 0)
}

/// Far corner of a [`grid_graph`] of the given side.
#[must_use]
pub fn grid_goal(side: usize) -> String {
    cell(side - 1, side - 1)
}
