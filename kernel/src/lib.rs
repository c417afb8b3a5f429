//! pathlab kernel: the read-only graph model every search borrows.
//!
//! # API Surface
//!
//! - [`graph::RoadGraph`] -- weighted adjacency table with an optional
//!   [`heuristic::HeuristicTable`]
//! - [`dataset::romania`] -- the reference 20-city road map
//! - [`proof::hash::canonical_hash`] -- domain-separated SHA-256 fingerprints
//!
//! # Module Dependency Direction
//!
//! `heuristic` ← `graph` ← `dataset`, and `proof` ← `graph` for snapshot
//! fingerprints. `proof` depends on nothing internal.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod dataset;
pub mod error;
pub mod graph;
pub mod heuristic;
pub mod proof;

pub use error::GraphError;
pub use graph::{Cost, RoadGraph};
pub use heuristic::HeuristicTable;
