//! Concrete scenarios on the reference map, with pinned search effort.
//!
//! The counters below are golden values: a change to any of them means the
//! traversal order, duplicate handling, or counting rules changed.

use pathlab_kernel::dataset::{romania, ROMANIA_GOAL};
use pathlab_search::{depth_limited, run_algorithm, Algorithm, SearchResult};

fn arad_to_bucharest(algorithm: Algorithm) -> SearchResult {
    run_algorithm(algorithm, &romania(), "Arad", ROMANIA_GOAL, None).unwrap()
}

const CHEAPEST: [&str; 5] = ["Arad", "Sibiu", "Rimnicu Vilcea", "Pitesti", "Bucharest"];
const FEWEST_ROADS: [&str; 4] = ["Arad", "Sibiu", "Fagaras", "Bucharest"];

#[test]
fn a_star_and_uniform_cost_take_the_418_route() {
    for algorithm in [Algorithm::AStar, Algorithm::UniformCost] {
        let r = arad_to_bucharest(algorithm);
        assert_eq!(r.path, CHEAPEST, "{algorithm}");
        assert_eq!(r.distance, 418, "{algorithm}");
    }
}

#[test]
fn breadth_first_takes_three_roads() {
    let r = arad_to_bucharest(Algorithm::BreadthFirst);
    assert_eq!(r.path, FEWEST_ROADS);
    assert_eq!(r.path.len(), 4);
    assert_eq!(r.edge_count(), Some(3));
    assert_eq!(r.distance, 140 + 99 + 211);
}

#[test]
fn arad_to_arad_is_trivial_for_everyone() {
    let g = romania();
    for algorithm in Algorithm::ALL {
        let r = run_algorithm(algorithm, &g, "Arad", "Arad", None).unwrap();
        assert_eq!(r.path, vec!["Arad"], "{algorithm}");
        assert_eq!(r.distance, 0, "{algorithm}");
    }
}

#[test]
fn neamt_to_timisoara_is_beyond_three_roads() {
    let g = romania();
    let r = depth_limited(&g, "Neamt", "Timisoara", 3);
    assert!(r.path.is_empty());
    assert_eq!(r.distance, 0);
    assert_eq!(
        (r.nodes_expanded, r.nodes_generated, r.max_frontier_size),
        (4, 6, 1)
    );

    let r = run_algorithm(Algorithm::DepthLimited, &g, "Neamt", "Timisoara", Some(3)).unwrap();
    assert!(r.path.is_empty());
}

#[test]
fn search_effort_is_pinned() {
    // (algorithm, expanded, generated, max frontier, distance)
    let golden = [
        (Algorithm::BreadthFirst, 5, 13, 5, 450),
        (Algorithm::UniformCost, 13, 31, 4, 418),
        (Algorithm::DepthFirst, 4, 10, 5, 450),
        (Algorithm::DepthLimited, 4, 10, 5, 450),
        (Algorithm::IterativeDeepening, 18, 27, 5, 450),
        (Algorithm::Bidirectional, 9, 23, 9, 450),
        (Algorithm::GreedyBestFirst, 4, 10, 5, 450),
        (Algorithm::AStar, 6, 16, 6, 418),
    ];
    for (algorithm, expanded, generated, frontier, distance) in golden {
        let r = arad_to_bucharest(algorithm);
        assert_eq!(
            (r.nodes_expanded, r.nodes_generated, r.max_frontier_size, r.distance),
            (expanded, generated, frontier, distance),
            "{algorithm}"
        );
    }
}

#[test]
fn a_star_does_less_work_than_uniform_cost() {
    let astar = arad_to_bucharest(Algorithm::AStar);
    let ucs = arad_to_bucharest(Algorithm::UniformCost);
    assert!(astar.nodes_expanded < ucs.nodes_expanded);
}
