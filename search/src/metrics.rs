//! Search-effort counters and the run clock.
//!
//! One [`SearchMetrics`] value is threaded through a run by `&mut`; nothing
//! is global, so concurrent runs cannot interfere.

use std::time::Instant;

/// Expansion, generation, and frontier-peak counters for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchMetrics {
    /// Nodes popped and processed.
    pub nodes_expanded: u64,
    /// Nodes constructed, seeds included, whether or not they were kept.
    pub nodes_generated: u64,
    /// Largest frontier size seen at the top of any loop iteration.
    pub max_frontier_size: u64,
}

impl SearchMetrics {
    /// Counters for a run that seeds `roots` frontier entries at once.
    #[must_use]
    pub fn seeded(roots: u64) -> Self {
        Self {
            nodes_expanded: 0,
            nodes_generated: roots,
            max_frontier_size: roots,
        }
    }

    pub fn record_expansion(&mut self) {
        self.nodes_expanded += 1;
    }

    pub fn record_generation(&mut self) {
        self.nodes_generated += 1;
    }

    /// Fold the current frontier size into the running maximum.
    pub fn observe_frontier(&mut self, size: usize) {
        self.max_frontier_size = self.max_frontier_size.max(size as u64);
    }

    /// Accumulate another pass's counts (iterative deepening): totals add,
    /// the frontier peak is the maximum of both.
    pub fn absorb(&mut self, pass: &SearchMetrics) {
        self.nodes_expanded += pass.nodes_expanded;
        self.nodes_generated += pass.nodes_generated;
        self.max_frontier_size = self.max_frontier_size.max(pass.max_frontier_size);
    }
}

/// Monotonic wall-clock timer for a single run.
#[derive(Debug, Clone, Copy)]
pub struct RunClock {
    started: Instant,
}

impl RunClock {
    #[must_use]
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Elapsed time in fractional milliseconds.
    #[must_use]
    pub fn elapsed_ms(&self) -> f64 {
        self.started.elapsed().as_secs_f64() * 1_000.0
    }
}
