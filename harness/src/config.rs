//! Comparison configuration: which algorithms to run and how.
//!
//! Callers fill in a [`ComparisonConfig`]; the runner only ever sees the
//! validated [`ResolvedConfig`].

use pathlab_search::policy::DepthLimit;
use pathlab_search::Algorithm;
use serde_json::{json, Value};

use crate::error::HarnessError;

/// Caller-facing configuration. Every field has a default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComparisonConfig {
    /// Algorithms to run, in report order. `None` runs [`Algorithm::ALL`].
    pub algorithms: Option<Vec<Algorithm>>,
    /// Limit for depth-limited search. `None` uses
    /// [`pathlab_search::DEFAULT_DEPTH_LIMIT`].
    pub depth_limit: Option<i64>,
    /// Run each algorithm on its own thread.
    pub parallel: bool,
}

/// A configuration that has passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Non-empty, duplicate-free, in the caller's order.
    pub algorithms: Vec<Algorithm>,
    pub depth_limit: DepthLimit,
    pub parallel: bool,
}

impl ComparisonConfig {
    /// Every algorithm, run one after another.
    #[must_use]
    pub fn all_sequential() -> Self {
        Self::default()
    }

    /// Every algorithm, one thread each.
    #[must_use]
    pub fn all_parallel() -> Self {
        Self {
            parallel: true,
            ..Self::default()
        }
    }

    /// Validate and fill in defaults.
    ///
    /// Duplicate algorithms are dropped; the first occurrence keeps its
    /// position.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::InvalidConfig`] for a negative depth limit or
    /// an empty algorithm list.
    pub fn resolve(&self) -> Result<ResolvedConfig, HarnessError> {
        let depth_limit = match self.depth_limit {
            Some(limit) => {
                DepthLimit::try_from(limit).map_err(|e| HarnessError::InvalidConfig {
                    detail: e.to_string(),
                })?
            }
            None => DepthLimit::default(),
        };

        let requested = self
            .algorithms
            .clone()
            .unwrap_or_else(|| Algorithm::ALL.to_vec());
        let mut algorithms: Vec<Algorithm> = Vec::with_capacity(requested.len());
        for algorithm in requested {
            if !algorithms.contains(&algorithm) {
                algorithms.push(algorithm);
            }
        }
        if algorithms.is_empty() {
            return Err(HarnessError::InvalidConfig {
                detail: "no algorithms selected".into(),
            });
        }

        Ok(ResolvedConfig {
            algorithms,
            depth_limit,
            parallel: self.parallel,
        })
    }
}

impl ResolvedConfig {
    /// The parts of the configuration that can change results. Threading
    /// mode is not one of them.
    #[must_use]
    pub fn to_json_value(&self) -> Value {
        let tags: Vec<&str> = self.algorithms.iter().map(|a| a.tag()).collect();
        json!({
            "algorithms": tags,
            "depth_limit": self.depth_limit.get(),
        })
    }
}
