//! `RoadGraph`: immutable-by-convention weighted adjacency table.
//!
//! Rows are `BTreeMap`s (not `HashMap`s) so successor enumeration order is
//! lexicographic and identical across runs and processes.

use std::collections::BTreeMap;

use serde_json::{json, Map, Value};

use crate::error::GraphError;
use crate::heuristic::HeuristicTable;
use crate::proof::canon::canonical_json_bytes;
use crate::proof::hash::{canonical_hash, ContentHash};
use crate::proof::hash_domain::HashDomain;

/// Edge weight and accumulated path cost, in the dataset's distance unit.
pub type Cost = u64;

/// Adjacency row of a state with no recorded roads.
static NO_ROADS: BTreeMap<String, Cost> = BTreeMap::new();

/// Weighted adjacency table keyed by location name.
///
/// The searches only ever read a state's own row; they never assume that a
/// road `a -> b` implies `b -> a`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoadGraph {
    roads: BTreeMap<String, BTreeMap<String, Cost>>,
    heuristic: Option<HeuristicTable>,
}

impl RoadGraph {
    /// Create an empty graph with no heuristic.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a heuristic table, replacing any previous one.
    #[must_use]
    pub fn with_heuristic(mut self, table: HeuristicTable) -> Self {
        self.heuristic = Some(table);
        self
    }

    /// Insert a two-way road.
    ///
    /// # Errors
    ///
    /// [`GraphError::NonPositiveWeight`] for a zero weight,
    /// [`GraphError::SelfLoop`] when `a == b`.
    pub fn insert_road(&mut self, a: &str, b: &str, weight: Cost) -> Result<(), GraphError> {
        self.insert_arc(a, b, weight)?;
        self.insert_arc(b, a, weight)
    }

    /// Insert a one-way road `from -> to`, overwriting an existing weight.
    ///
    /// # Errors
    ///
    /// [`GraphError::NonPositiveWeight`] for a zero weight,
    /// [`GraphError::SelfLoop`] when `from == to`.
    pub fn insert_arc(&mut self, from: &str, to: &str, weight: Cost) -> Result<(), GraphError> {
        if weight == 0 {
            return Err(GraphError::NonPositiveWeight {
                from: from.to_string(),
                to: to.to_string(),
            });
        }
        if from == to {
            return Err(GraphError::SelfLoop {
                state: from.to_string(),
            });
        }
        self.roads
            .entry(from.to_string())
            .or_default()
            .insert(to.to_string(), weight);
        Ok(())
    }

    /// Roads leaving `state`. Empty for a state with no recorded row.
    #[must_use]
    pub fn neighbors(&self, state: &str) -> &BTreeMap<String, Cost> {
        self.roads.get(state).unwrap_or(&NO_ROADS)
    }

    /// States with a road *into* `state`, with that road's weight.
    ///
    /// Scans every row; used to walk edges in reverse. Ordered by the
    /// predecessor's name.
    #[must_use]
    pub fn predecessors(&self, state: &str) -> Vec<(&str, Cost)> {
        self.roads
            .iter()
            .filter_map(|(from, row)| row.get(state).map(|&w| (from.as_str(), w)))
            .collect()
    }

    /// Weight of the road `from -> to`, if present.
    #[must_use]
    pub fn edge_weight(&self, from: &str, to: &str) -> Option<Cost> {
        self.roads.get(from).and_then(|row| row.get(to)).copied()
    }

    /// Total weight of the walk through `path`. `None` if two consecutive
    /// states are not joined by a road or the total exceeds `Cost::MAX`. An
    /// empty or one-state path costs 0.
    #[must_use]
    pub fn walk_cost<S: AsRef<str>>(&self, path: &[S]) -> Option<Cost> {
        path.windows(2).try_fold(0, |total: Cost, pair| {
            total.checked_add(self.edge_weight(pair[0].as_ref(), pair[1].as_ref())?)
        })
    }

    /// Whether `state` appears anywhere in the table, as a row or a neighbor.
    #[must_use]
    pub fn contains(&self, state: &str) -> bool {
        self.roads.contains_key(state) || self.roads.values().any(|row| row.contains_key(state))
    }

    /// Every state that appears in the table, sorted.
    #[must_use]
    pub fn states(&self) -> Vec<&str> {
        let mut states: Vec<&str> = self
            .roads
            .iter()
            .flat_map(|(from, row)| std::iter::once(from.as_str()).chain(row.keys().map(String::as_str)))
            .collect();
        states.sort_unstable();
        states.dedup();
        states
    }

    /// Number of distinct states.
    #[must_use]
    pub fn state_count(&self) -> usize {
        self.states().len()
    }

    /// Number of directed arcs (a two-way road counts twice).
    #[must_use]
    pub fn arc_count(&self) -> usize {
        self.roads.values().map(BTreeMap::len).sum()
    }

    /// The attached heuristic table, if any.
    #[must_use]
    pub fn heuristic_table(&self) -> Option<&HeuristicTable> {
        self.heuristic.as_ref()
    }

    /// Estimated remaining cost from `state` to `goal`; `0` without a table.
    #[must_use]
    pub fn heuristic(&self, state: &str, goal: &str) -> Cost {
        self.heuristic
            .as_ref()
            .map_or(0, |table| table.estimate(state, goal))
    }

    /// Serialize as `{"roads": {...}, "heuristic": {...}|null}`.
    #[must_use]
    pub fn to_json_value(&self) -> Value {
        let heuristic = self.heuristic.as_ref().map_or(Value::Null, |table| {
            json!({
                "goal": table.goal(),
                "estimates": table.estimates(),
            })
        });
        json!({
            "roads": self.roads,
            "heuristic": heuristic,
        })
    }

    /// Load a graph from the shape produced by [`RoadGraph::to_json_value`].
    ///
    /// Rows are taken as given; nothing is mirrored.
    ///
    /// # Errors
    ///
    /// [`GraphError::Malformed`] when the shape or a weight is wrong, plus any
    /// error [`RoadGraph::insert_arc`] reports.
    pub fn from_json_value(value: &Value) -> Result<Self, GraphError> {
        let roads = value
            .get("roads")
            .and_then(Value::as_object)
            .ok_or_else(|| malformed("missing object field `roads`"))?;

        let mut graph = Self::new();
        for (from, row) in roads {
            let row = row
                .as_object()
                .ok_or_else(|| malformed(format!("row `{from}` is not an object")))?;
            for (to, weight) in row {
                graph.insert_arc(from, to, parse_cost(weight, &format!("roads.{from}.{to}"))?)?;
            }
        }

        match value.get("heuristic") {
            None | Some(Value::Null) => {}
            Some(h) => graph.heuristic = Some(parse_heuristic(h)?),
        }
        Ok(graph)
    }

    /// Canonical fingerprint of the adjacency table and heuristic.
    ///
    /// # Errors
    ///
    /// [`GraphError::Canon`] if canonical serialization fails.
    pub fn fingerprint(&self) -> Result<ContentHash, GraphError> {
        let bytes = canonical_json_bytes(&self.to_json_value())?;
        Ok(canonical_hash(HashDomain::GraphSnapshot, &bytes))
    }

    /// Insert without validation. Only for tables whose weights are known
    /// positive at compile time.
    pub(crate) fn insert_road_unchecked(&mut self, a: &str, b: &str, weight: Cost) {
        self.roads
            .entry(a.to_string())
            .or_default()
            .insert(b.to_string(), weight);
        self.roads
            .entry(b.to_string())
            .or_default()
            .insert(a.to_string(), weight);
    }
}

fn malformed(detail: impl Into<String>) -> GraphError {
    GraphError::Malformed {
        detail: detail.into(),
    }
}

fn parse_cost(value: &Value, at: &str) -> Result<Cost, GraphError> {
    value
        .as_u64()
        .ok_or_else(|| malformed(format!("`{at}` must be a non-negative integer, got {value}")))
}

fn parse_heuristic(value: &Value) -> Result<HeuristicTable, GraphError> {
    let goal = value
        .get("goal")
        .and_then(Value::as_str)
        .ok_or_else(|| malformed("heuristic is missing string field `goal`"))?;
    let raw = value
        .get("estimates")
        .and_then(Value::as_object)
        .map_or_else(Map::new, Clone::clone);

    let mut estimates = BTreeMap::new();
    for (state, estimate) in &raw {
        estimates.insert(
            state.clone(),
            parse_cost(estimate, &format!("heuristic.estimates.{state}"))?,
        );
    }
    Ok(HeuristicTable::new(goal, estimates))
}
