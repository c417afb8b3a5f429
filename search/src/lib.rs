//! Pathlab Search: eight classical route-finding strategies over a
//! [`RoadGraph`](pathlab_kernel::RoadGraph).
//!
//! This crate depends only on `pathlab_kernel`; it does NOT depend on
//! `pathlab_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! pathlab_kernel  ←  pathlab_search  ←  pathlab_harness
//! (roads, hashing)   (frontier, nodes)   (comparison, reports)
//! ```
//!
//! # Key types
//!
//! - [`NodeArena`] -- index-addressed search tree for one run
//! - [`Frontier`] -- FIFO, LIFO, and keyed-priority disciplines
//! - [`TraversalPolicy`] -- goal-check timing, duplicate handling, depth guard
//! - [`SearchResult`] -- path, distance, and effort counters of one run
//! - [`Algorithm`] -- the strategy catalogue and [`run_algorithm`] dispatcher
//!
//! Every run is single-threaded and owns its frontier, explored set, and
//! arena outright. Separate runs may share a graph across threads.

#![forbid(unsafe_code)]

pub mod algorithm;
pub mod bidirectional;
pub mod error;
pub mod frontier;
pub mod informed;
pub mod metrics;
pub mod node;
pub mod policy;
pub mod result;
pub mod search;
pub mod uninformed;

pub use algorithm::{run_algorithm, Algorithm, AlgorithmProfile, Guarantee};
pub use bidirectional::bidirectional;
pub use error::SearchError;
pub use frontier::{FifoFrontier, Frontier, LifoFrontier, PriorityFrontier, PriorityKey};
pub use informed::{a_star, greedy_best_first};
pub use metrics::SearchMetrics;
pub use node::{NodeArena, NodeId, SearchNode};
pub use policy::{TraversalPolicy, DEFAULT_DEPTH_LIMIT, IDS_DEPTH_CEILING};
pub use result::{SearchOutcome, SearchResult};
pub use uninformed::{
    breadth_first, depth_first, depth_limited, iterative_deepening, uniform_cost,
};
