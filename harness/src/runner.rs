//! Comparison runner: every selected algorithm against one request.
//!
//! # Pipeline
//!
//! ```text
//! resolve() → fingerprint() → [run_algorithm() × N] → ComparisonReport::build()
//! ```
//!
//! In parallel mode each algorithm gets its own scoped thread borrowing the
//! same graph. Runs share nothing mutable, so the report is identical in
//! both modes apart from timings.

use pathlab_kernel::RoadGraph;
use pathlab_search::policy::DepthLimit;
use pathlab_search::{run_algorithm, Algorithm, SearchResult};
use tracing::{debug, info, info_span};

use crate::config::{ComparisonConfig, ResolvedConfig};
use crate::error::HarnessError;
use crate::report::{ComparisonReport, ComparisonRequest};

/// Run every algorithm `config` selects from `start` to `goal`.
///
/// # Errors
///
/// Returns [`HarnessError::InvalidConfig`] if `config` fails validation,
/// [`HarnessError::Graph`] if the graph cannot be fingerprinted, and
/// [`HarnessError::WorkerPanicked`] if a parallel worker dies.
pub fn compare(
    graph: &RoadGraph,
    start: &str,
    goal: &str,
    config: &ComparisonConfig,
) -> Result<ComparisonReport, HarnessError> {
    let resolved = config.resolve()?;
    let _span = info_span!("compare", start, goal, parallel = resolved.parallel).entered();

    let graph_fingerprint = graph.fingerprint()?;
    let results = if resolved.parallel {
        run_parallel(graph, start, goal, &resolved)?
    } else {
        run_sequential(graph, start, goal, &resolved)?
    };

    let report = ComparisonReport::build(
        ComparisonRequest::new(start, goal, &resolved),
        graph_fingerprint,
        results,
    )?;
    info!(
        algorithms = report.results.len(),
        solved = report.results.iter().filter(|r| r.is_solution()).count(),
        digest = %report.digest,
        "comparison complete"
    );
    Ok(report)
}

fn run_one(
    algorithm: Algorithm,
    graph: &RoadGraph,
    start: &str,
    goal: &str,
    limit: DepthLimit,
) -> Result<SearchResult, HarnessError> {
    let result = run_algorithm(algorithm, graph, start, goal, Some(i64::from(limit.get())))?;
    debug!(
        algorithm = algorithm.tag(),
        distance = result.distance,
        nodes_expanded = result.nodes_expanded,
        "algorithm finished"
    );
    Ok(result)
}

fn run_sequential(
    graph: &RoadGraph,
    start: &str,
    goal: &str,
    config: &ResolvedConfig,
) -> Result<Vec<SearchResult>, HarnessError> {
    config
        .algorithms
        .iter()
        .map(|&a| run_one(a, graph, start, goal, config.depth_limit))
        .collect()
}

fn run_parallel(
    graph: &RoadGraph,
    start: &str,
    goal: &str,
    config: &ResolvedConfig,
) -> Result<Vec<SearchResult>, HarnessError> {
    std::thread::scope(|s| {
        let handles: Vec<_> = config
            .algorithms
            .iter()
            .map(|&a| (a, s.spawn(move || run_one(a, graph, start, goal, config.depth_limit))))
            .collect();
        handles
            .into_iter()
            .map(|(algorithm, handle)| {
                handle
                    .join()
                    .map_err(|_| HarnessError::WorkerPanicked { algorithm })?
            })
            .collect()
    })
}
