//! The reference Romania road map and its straight-line-distance table.

use std::collections::BTreeMap;

use crate::graph::{Cost, RoadGraph};
use crate::heuristic::HeuristicTable;

/// The only goal the straight-line table is measured against.
pub const ROMANIA_GOAL: &str = "Bucharest";

/// Every city on the map, sorted.
pub const ROMANIA_CITIES: [&str; 20] = [
    "Arad",
    "Bucharest",
    "Craiova",
    "Drobeta",
    "Eforie",
    "Fagaras",
    "Giurgiu",
    "Hirsova",
    "Iasi",
    "Lugoj",
    "Mehadia",
    "Neamt",
    "Oradea",
    "Pitesti",
    "Rimnicu Vilcea",
    "Sibiu",
    "Timisoara",
    "Urziceni",
    "Vaslui",
    "Zerind",
];

/// Two-way roads, each listed once.
const ROADS: [(&str, &str, Cost); 23] = [
    ("Arad", "Zerind", 75),
    ("Arad", "Sibiu", 140),
    ("Arad", "Timisoara", 118),
    ("Bucharest", "Fagaras", 211),
    ("Bucharest", "Pitesti", 101),
    ("Bucharest", "Giurgiu", 90),
    ("Bucharest", "Urziceni", 85),
    ("Craiova", "Drobeta", 120),
    ("Craiova", "Rimnicu Vilcea", 146),
    ("Craiova", "Pitesti", 138),
    ("Drobeta", "Mehadia", 75),
    ("Eforie", "Hirsova", 86),
    ("Fagaras", "Sibiu", 99),
    ("Hirsova", "Urziceni", 98),
    ("Iasi", "Neamt", 87),
    ("Iasi", "Vaslui", 92),
    ("Lugoj", "Timisoara", 111),
    ("Lugoj", "Mehadia", 70),
    ("Oradea", "Zerind", 71),
    ("Oradea", "Sibiu", 151),
    ("Pitesti", "Rimnicu Vilcea", 97),
    ("Rimnicu Vilcea", "Sibiu", 80),
    ("Urziceni", "Vaslui", 142),
];

/// Straight-line distance from each city to Bucharest.
const STRAIGHT_LINE_TO_BUCHAREST: [(&str, Cost); 20] = [
    ("Arad", 366),
    ("Bucharest", 0),
    ("Craiova", 160),
    ("Drobeta", 242),
    ("Eforie", 161),
    ("Fagaras", 176),
    ("Giurgiu", 77),
    ("Hirsova", 151),
    ("Iasi", 226),
    ("Lugoj", 244),
    ("Mehadia", 241),
    ("Neamt", 234),
    ("Oradea", 380),
    ("Pitesti", 100),
    ("Rimnicu Vilcea", 193),
    ("Sibiu", 253),
    ("Timisoara", 329),
    ("Urziceni", 80),
    ("Vaslui", 199),
    ("Zerind", 374),
];

/// The straight-line heuristic table for [`ROMANIA_GOAL`].
#[must_use]
pub fn straight_line_table() -> HeuristicTable {
    let estimates: BTreeMap<String, Cost> = STRAIGHT_LINE_TO_BUCHAREST
        .iter()
        .map(|&(city, d)| (city.to_string(), d))
        .collect();
    HeuristicTable::new(ROMANIA_GOAL, estimates)
}

/// Build the reference map with its heuristic attached.
#[must_use]
pub fn romania() -> RoadGraph {
    let mut graph = RoadGraph::new();
    for &(a, b, w) in &ROADS {
        graph.insert_road_unchecked(a, b, w);
    }
    graph.with_heuristic(straight_line_table())
}
