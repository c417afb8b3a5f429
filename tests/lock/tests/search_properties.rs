//! Properties every strategy must hold, checked against independent
//! reference answers over every ordered pair of cities on the reference map
//! and over small synthetic graphs.

use lock_tests::fixtures::{
    assert_well_formed, diamond, line_graph, reference_cost, reference_hops, split_graph,
};
use pathlab_kernel::dataset::{romania, ROMANIA_CITIES, ROMANIA_GOAL};
use pathlab_kernel::{Cost, RoadGraph};
use pathlab_search::{
    a_star, bidirectional, breadth_first, depth_limited, iterative_deepening, run_algorithm,
    uniform_cost, Algorithm, SearchResult,
};

fn all_pairs() -> impl Iterator<Item = (&'static str, &'static str)> {
    ROMANIA_CITIES
        .iter()
        .flat_map(|&s| ROMANIA_CITIES.iter().map(move |&t| (s, t)))
}

fn run(algorithm: Algorithm, graph: &RoadGraph, start: &str, goal: &str) -> SearchResult {
    run_algorithm(algorithm, graph, start, goal, None).unwrap()
}

// ---------------------------------------------------------------------------
// start == goal
// ---------------------------------------------------------------------------

#[test]
fn trivial_request_is_one_state_at_zero_cost() {
    let graphs = [romania(), line_graph(3, 4), diamond(), split_graph(), RoadGraph::new()];
    for graph in &graphs {
        for state in ["Arad", "P1", "S", "X", "Atlantis"] {
            for algorithm in Algorithm::ALL {
                let r = run(algorithm, graph, state, state);
                assert_eq!(r.path, vec![state], "{algorithm}");
                assert_eq!(r.distance, 0, "{algorithm}");
                let floor = if algorithm == Algorithm::Bidirectional { 2 } else { 1 };
                assert!(r.nodes_expanded >= floor, "{algorithm}");
                assert!(r.nodes_generated >= floor, "{algorithm}");
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Validity and counters
// ---------------------------------------------------------------------------

#[test]
fn every_answer_is_a_valid_walk() {
    let g = romania();
    for (s, t) in all_pairs() {
        for algorithm in Algorithm::ALL {
            let r = run(algorithm, &g, s, t);
            assert_well_formed(&g, &r, s, t);
            assert!(
                r.nodes_generated >= r.nodes_expanded,
                "{algorithm} {s}->{t}: generated {} < expanded {}",
                r.nodes_generated,
                r.nodes_expanded
            );
            assert!(r.max_frontier_size >= 1, "{algorithm} {s}->{t}");
        }
    }
}

#[test]
fn complete_strategies_reach_every_city() {
    let g = romania();
    for (s, t) in all_pairs() {
        for algorithm in Algorithm::ALL {
            if algorithm == Algorithm::DepthLimited {
                continue;
            }
            assert!(run(algorithm, &g, s, t).is_solution(), "{algorithm} {s}->{t}");
        }
    }
}

#[test]
fn disconnected_goal_exhausts() {
    let g = split_graph();
    for algorithm in Algorithm::ALL {
        let r = run(algorithm, &g, "A", "Y");
        assert!(r.path.is_empty(), "{algorithm}");
        assert_eq!(r.distance, 0, "{algorithm}");
        assert!(r.nodes_expanded >= 1, "{algorithm}");
    }
}

#[test]
fn unknown_states_exhaust_immediately() {
    let g = romania();
    for algorithm in Algorithm::ALL {
        let r = run(algorithm, &g, "Atlantis", ROMANIA_GOAL);
        assert!(r.path.is_empty(), "{algorithm}");
        let r = run(algorithm, &g, "Arad", "Atlantis");
        assert!(r.path.is_empty(), "{algorithm}");
    }
}

#[test]
fn only_the_current_row_is_read() {
    let mut g = RoadGraph::new();
    g.insert_arc("A", "B", 3).unwrap();
    for algorithm in Algorithm::ALL {
        assert_eq!(run(algorithm, &g, "A", "B").path, vec!["A", "B"], "{algorithm}");
        assert!(run(algorithm, &g, "B", "A").path.is_empty(), "{algorithm}");
    }
}

// ---------------------------------------------------------------------------
// Optimality
// ---------------------------------------------------------------------------

#[test]
fn uniform_cost_and_a_star_are_cost_optimal() {
    let g = romania();
    for (s, t) in all_pairs() {
        let best = reference_cost(&g, s, t);
        let ucs = uniform_cost(&g, s, t);
        let astar = a_star(&g, s, t);
        assert_eq!(Some(ucs.distance), best, "ucs {s}->{t}");
        assert_eq!(astar.distance, ucs.distance, "astar {s}->{t}");
    }
}

#[test]
fn a_star_expands_no_more_than_uniform_cost_toward_the_reference_goal() {
    let g = romania();
    for &s in &ROMANIA_CITIES {
        let ucs = uniform_cost(&g, s, ROMANIA_GOAL);
        let astar = a_star(&g, s, ROMANIA_GOAL);
        assert!(
            astar.nodes_expanded <= ucs.nodes_expanded,
            "{s}: astar {} > ucs {}",
            astar.nodes_expanded,
            ucs.nodes_expanded
        );
    }
}

#[test]
fn breadth_first_and_iterative_deepening_minimize_hops() {
    let g = romania();
    for (s, t) in all_pairs() {
        let hops = reference_hops(&g, s, t);
        let bfs = breadth_first(&g, s, t);
        let ids = iterative_deepening(&g, s, t);
        assert_eq!(bfs.edge_count(), hops, "bfs {s}->{t}");
        assert_eq!(ids.edge_count(), bfs.edge_count(), "ids {s}->{t}");
    }
}

#[test]
fn depth_limited_never_exceeds_its_limit() {
    let g = romania();
    for limit in 0..6 {
        for (s, t) in all_pairs() {
            let r = depth_limited(&g, s, t, limit);
            if let Some(edges) = r.edge_count() {
                assert!(edges <= limit as usize, "dls({limit}) {s}->{t}: {edges} roads");
            }
            if reference_hops(&g, s, t).is_some_and(|h| h > limit as usize) {
                assert!(r.path.is_empty(), "dls({limit}) {s}->{t} went past its limit");
            }
        }
    }
}

#[test]
fn bidirectional_matches_uniform_cost_on_uniform_weights() {
    for n in 2..9 {
        let g = line_graph(n, 3);
        for i in 0..n {
            for j in 0..n {
                let (s, t) = (format!("P{i}"), format!("P{j}"));
                let bi = bidirectional(&g, &s, &t);
                assert_eq!(bi.distance, uniform_cost(&g, &s, &t).distance, "{s}->{t}");
            }
        }
    }

    let g = diamond();
    let bi = bidirectional(&g, "S", "T");
    assert_eq!(bi.distance, uniform_cost(&g, "S", "T").distance);
    assert_eq!(bi.path, vec!["S", "L", "T"]);
}

#[test]
fn bidirectional_routes_are_valid_on_weighted_roads() {
    let g = romania();
    for (s, t) in all_pairs() {
        let bi = bidirectional(&g, s, t);
        assert_well_formed(&g, &bi, s, t);
        assert!(bi.distance >= uniform_cost(&g, s, t).distance, "{s}->{t}");
    }
}

// ---------------------------------------------------------------------------
// Extreme weights
// ---------------------------------------------------------------------------

#[test]
fn huge_weights_saturate_instead_of_overflowing() {
    let half = 1u64 << 63;
    let g = RoadGraph::from_json_value(&serde_json::json!({
        "roads": {"A": {"B": half}, "B": {"C": half}}
    }))
    .unwrap();
    for algorithm in Algorithm::ALL {
        let r = run(algorithm, &g, "A", "C");
        assert_eq!(r.path, vec!["A", "B", "C"], "{algorithm}");
        assert_eq!(r.distance, Cost::MAX, "{algorithm}");
    }
    assert_eq!(g.walk_cost(&["A", "B", "C"]), None);
}
