//! Comparison reports: every algorithm's result for one request, bound to
//! the graph and request by a digest.
//!
//! # Digest basis
//!
//! ```text
//! {
//!   "schema_version": "comparison.v1",
//!   "request": { "start", "goal", "algorithms", "depth_limit" },
//!   "graph_fingerprint": "sha256:...",
//!   "results": [ <SearchResult without execution_time>, ... ]
//! }
//! ```
//!
//! The basis is canonical JSON and hashed under
//! [`HashDomain::ComparisonReport`]. Timings appear in the full report but
//! never in the basis, so two runs of the same request share a digest.

use pathlab_kernel::proof::canon::canonical_json_bytes;
use pathlab_kernel::proof::hash::{canonical_hash, ContentHash};
use pathlab_kernel::proof::hash_domain::HashDomain;
use pathlab_kernel::Cost;
use pathlab_search::{Algorithm, SearchResult};
use serde_json::{json, Value};

use crate::config::ResolvedConfig;
use crate::error::HarnessError;

/// Schema tag carried by every report.
pub const REPORT_SCHEMA_VERSION: &str = "comparison.v1";

/// What was asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonRequest {
    pub start: String,
    pub goal: String,
    /// In report order.
    pub algorithms: Vec<Algorithm>,
    pub depth_limit: u32,
}

impl ComparisonRequest {
    #[must_use]
    pub fn new(start: &str, goal: &str, config: &ResolvedConfig) -> Self {
        Self {
            start: start.to_string(),
            goal: goal.to_string(),
            algorithms: config.algorithms.clone(),
            depth_limit: config.depth_limit.get(),
        }
    }

    #[must_use]
    pub fn to_json_value(&self) -> Value {
        let tags: Vec<&str> = self.algorithms.iter().map(|a| a.tag()).collect();
        json!({
            "start": self.start,
            "goal": self.goal,
            "algorithms": tags,
            "depth_limit": self.depth_limit,
        })
    }
}

/// One request's results across algorithms.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonReport {
    pub request: ComparisonRequest,
    /// [`pathlab_kernel::RoadGraph::fingerprint`] of the searched graph.
    pub graph_fingerprint: ContentHash,
    /// One entry per requested algorithm, in request order.
    pub results: Vec<SearchResult>,
    /// Hash of the canonical digest basis.
    pub digest: ContentHash,
}

impl ComparisonReport {
    /// Assemble a report and compute its digest.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Canon`] if the basis cannot be canonicalized.
    pub fn build(
        request: ComparisonRequest,
        graph_fingerprint: ContentHash,
        results: Vec<SearchResult>,
    ) -> Result<Self, HarnessError> {
        let basis = digest_basis_value(&request, &graph_fingerprint, &results);
        let digest = canonical_hash(HashDomain::ComparisonReport, &canonical_json_bytes(&basis)?);
        Ok(Self {
            request,
            graph_fingerprint,
            results,
            digest,
        })
    }

    /// The normative projection the digest is computed over.
    #[must_use]
    pub fn digest_basis_value(&self) -> Value {
        digest_basis_value(&self.request, &self.graph_fingerprint, &self.results)
    }

    /// Canonical bytes of [`Self::digest_basis_value`].
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Canon`] if canonicalization fails.
    pub fn digest_basis_bytes(&self) -> Result<Vec<u8>, HarnessError> {
        Ok(canonical_json_bytes(&self.digest_basis_value())?)
    }

    /// The full report: basis fields, timings, and the digest.
    #[must_use]
    pub fn to_json_value(&self) -> Value {
        let results: Vec<Value> = self.results.iter().map(SearchResult::to_json_value).collect();
        json!({
            "schema_version": REPORT_SCHEMA_VERSION,
            "request": self.request.to_json_value(),
            "graph_fingerprint": self.graph_fingerprint.as_str(),
            "results": results,
            "digest": self.digest.as_str(),
        })
    }

    /// Decode a full report and check its stored digest.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::MalformedReport`] if any field is missing or
    /// mistyped, and [`HarnessError::DigestMismatch`] if the stored digest
    /// does not match the decoded content.
    pub fn from_json_value(value: &Value) -> Result<Self, HarnessError> {
        let schema = str_field(value, "schema_version")?;
        if schema != REPORT_SCHEMA_VERSION {
            return Err(malformed(format!("unsupported schema_version {schema:?}")));
        }

        let request = parse_request(&value["request"])?;
        let graph_fingerprint = hash_field(value, "graph_fingerprint")?;
        let results = value["results"]
            .as_array()
            .ok_or_else(|| malformed("\"results\" is not an array"))?
            .iter()
            .enumerate()
            .map(|(i, r)| parse_result(r, i))
            .collect::<Result<Vec<_>, _>>()?;
        let stored = hash_field(value, "digest")?;

        let report = Self::build(request, graph_fingerprint, results)?;
        if report.digest != stored {
            return Err(HarnessError::DigestMismatch {
                stored: stored.as_str().to_string(),
                recomputed: report.digest.as_str().to_string(),
            });
        }
        Ok(report)
    }

    /// The result for `algorithm`, if it was run.
    #[must_use]
    pub fn result_for(&self, algorithm: Algorithm) -> Option<&SearchResult> {
        self.results.iter().find(|r| r.algorithm == algorithm)
    }

    /// The cheapest solution. Ties go to the earlier algorithm.
    #[must_use]
    pub fn best_by_distance(&self) -> Option<&SearchResult> {
        self.solutions().min_by_key(|r| r.distance)
    }

    /// The solution found with the fewest expansions. Ties go to the earlier
    /// algorithm.
    #[must_use]
    pub fn fewest_expansions(&self) -> Option<&SearchResult> {
        self.solutions().min_by_key(|r| r.nodes_expanded)
    }

    fn solutions(&self) -> impl Iterator<Item = &SearchResult> {
        self.results.iter().filter(|r| r.is_solution())
    }
}

fn digest_basis_value(
    request: &ComparisonRequest,
    graph_fingerprint: &ContentHash,
    results: &[SearchResult],
) -> Value {
    let results: Vec<Value> = results
        .iter()
        .map(SearchResult::deterministic_json_value)
        .collect();
    json!({
        "schema_version": REPORT_SCHEMA_VERSION,
        "request": request.to_json_value(),
        "graph_fingerprint": graph_fingerprint.as_str(),
        "results": results,
    })
}

// ---------------------------------------------------------------------------
// Decoding helpers
// ---------------------------------------------------------------------------

fn malformed(detail: impl Into<String>) -> HarnessError {
    HarnessError::MalformedReport {
        detail: detail.into(),
    }
}

fn str_field<'v>(value: &'v Value, key: &str) -> Result<&'v str, HarnessError> {
    value[key]
        .as_str()
        .ok_or_else(|| malformed(format!("missing string field {key:?}")))
}

fn u64_field(value: &Value, key: &str) -> Result<u64, HarnessError> {
    value[key]
        .as_u64()
        .ok_or_else(|| malformed(format!("missing integer field {key:?}")))
}

fn hash_field(value: &Value, key: &str) -> Result<ContentHash, HarnessError> {
    let raw = str_field(value, key)?;
    ContentHash::parse(raw).ok_or_else(|| malformed(format!("{key:?} is not a content hash")))
}

fn algorithm_tag(value: &Value) -> Result<Algorithm, HarnessError> {
    let tag = value
        .as_str()
        .ok_or_else(|| malformed("algorithm tag is not a string"))?;
    tag.parse().map_err(|e| malformed(format!("{e}")))
}

fn parse_request(value: &Value) -> Result<ComparisonRequest, HarnessError> {
    let algorithms = value["algorithms"]
        .as_array()
        .ok_or_else(|| malformed("\"request.algorithms\" is not an array"))?
        .iter()
        .map(algorithm_tag)
        .collect::<Result<Vec<_>, _>>()?;
    let depth_limit = u32::try_from(u64_field(value, "depth_limit")?)
        .map_err(|_| malformed("\"request.depth_limit\" out of range"))?;
    Ok(ComparisonRequest {
        start: str_field(value, "start")?.to_string(),
        goal: str_field(value, "goal")?.to_string(),
        algorithms,
        depth_limit,
    })
}

fn parse_result(value: &Value, index: usize) -> Result<SearchResult, HarnessError> {
    let at = |field: &str| format!("results[{index}].{field}");
    let path = value["path"]
        .as_array()
        .ok_or_else(|| malformed(format!("{} is not an array", at("path"))))?
        .iter()
        .map(|s| {
            s.as_str()
                .map(str::to_string)
                .ok_or_else(|| malformed(format!("{} holds a non-string", at("path"))))
        })
        .collect::<Result<Vec<_>, _>>()?;
    let execution_time = value["execution_time"]
        .as_f64()
        .ok_or_else(|| malformed(format!("{} is not a number", at("execution_time"))))?;
    let distance: Cost = u64_field(value, "distance")?;

    Ok(SearchResult {
        algorithm: algorithm_tag(&value["algorithm"])?,
        path,
        distance,
        nodes_expanded: u64_field(value, "nodes_expanded")?,
        nodes_generated: u64_field(value, "nodes_generated")?,
        max_frontier_size: u64_field(value, "max_frontier_size")?,
        execution_time,
    })
}
