//! The algorithm catalogue and the boundary dispatcher.
//!
//! [`Algorithm`] names the eight strategies by stable tag; [`run_algorithm`]
//! validates caller input and routes to the matching entry point.

use std::fmt;
use std::str::FromStr;

use pathlab_kernel::RoadGraph;

use crate::error::SearchError;
use crate::policy::DepthLimit;
use crate::result::SearchResult;
use crate::{bidirectional, informed, uninformed};

/// One of the eight search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Algorithm {
    BreadthFirst,
    UniformCost,
    DepthFirst,
    DepthLimited,
    IterativeDeepening,
    Bidirectional,
    GreedyBestFirst,
    AStar,
}

impl Algorithm {
    /// Every strategy, uninformed first, in catalogue order.
    pub const ALL: [Self; 8] = [
        Self::BreadthFirst,
        Self::UniformCost,
        Self::DepthFirst,
        Self::DepthLimited,
        Self::IterativeDeepening,
        Self::Bidirectional,
        Self::GreedyBestFirst,
        Self::AStar,
    ];

    /// Stable short tag used in results, reports, and on the command line.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::BreadthFirst => "bfs",
            Self::UniformCost => "ucs",
            Self::DepthFirst => "dfs",
            Self::DepthLimited => "dls",
            Self::IterativeDeepening => "ids",
            Self::Bidirectional => "bidirectional",
            Self::GreedyBestFirst => "greedy",
            Self::AStar => "astar",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::BreadthFirst => "Breadth-First Search",
            Self::UniformCost => "Uniform-Cost Search",
            Self::DepthFirst => "Depth-First Search",
            Self::DepthLimited => "Depth-Limited Search",
            Self::IterativeDeepening => "Iterative Deepening Search",
            Self::Bidirectional => "Bidirectional Search",
            Self::GreedyBestFirst => "Greedy Best-First Search",
            Self::AStar => "A* Search",
        }
    }

    /// Whether the strategy consults the heuristic.
    #[must_use]
    pub const fn is_informed(self) -> bool {
        matches!(self, Self::GreedyBestFirst | Self::AStar)
    }

    /// Whether the strategy takes a depth limit.
    #[must_use]
    pub const fn requires_depth_limit(self) -> bool {
        matches!(self, Self::DepthLimited)
    }

    /// Textbook properties of the strategy.
    #[must_use]
    pub const fn profile(self) -> AlgorithmProfile {
        match self {
            Self::BreadthFirst => AlgorithmProfile {
                complete: Guarantee::When("the branching factor is finite"),
                optimal: Guarantee::When("all step costs are equal"),
                time_complexity: "O(b^d)",
                space_complexity: "O(b^d)",
                summary: "Expands every state at the current depth before going deeper, \
                          using a FIFO queue.",
            },
            Self::UniformCost => AlgorithmProfile {
                complete: Guarantee::When("every step cost exceeds some positive constant"),
                optimal: Guarantee::Always,
                time_complexity: "O(b^(C*/e))",
                space_complexity: "O(b^(C*/e))",
                summary: "Expands the state with the lowest path cost, using a priority \
                          queue ordered by cumulative cost.",
            },
            Self::DepthFirst => AlgorithmProfile {
                complete: Guarantee::Never,
                optimal: Guarantee::Never,
                time_complexity: "O(b^m)",
                space_complexity: "O(bm)",
                summary: "Follows each branch as far as possible before backtracking, \
                          using a LIFO stack.",
            },
            Self::DepthLimited => AlgorithmProfile {
                complete: Guarantee::When("the goal lies within the depth limit"),
                optimal: Guarantee::Never,
                time_complexity: "O(b^l)",
                space_complexity: "O(bl)",
                summary: "Depth-first search that never expands a state at the depth limit.",
            },
            Self::IterativeDeepening => AlgorithmProfile {
                complete: Guarantee::When("the branching factor is finite"),
                optimal: Guarantee::When("all step costs are equal"),
                time_complexity: "O(b^d)",
                space_complexity: "O(bd)",
                summary: "Runs depth-limited search with limits 0, 1, 2, ... until the goal \
                          is found.",
            },
            Self::Bidirectional => AlgorithmProfile {
                complete: Guarantee::When("both halves are complete"),
                optimal: Guarantee::When("all step costs are equal"),
                time_complexity: "O(b^(d/2))",
                space_complexity: "O(b^(d/2))",
                summary: "Searches forward from the start and backward from the goal, \
                          stopping where the two meet.",
            },
            Self::GreedyBestFirst => AlgorithmProfile {
                complete: Guarantee::Never,
                optimal: Guarantee::Never,
                time_complexity: "O(b^m)",
                space_complexity: "O(b^m)",
                summary: "Expands the state that looks closest to the goal by h(n) alone.",
            },
            Self::AStar => AlgorithmProfile {
                complete: Guarantee::When("the heuristic is admissible and consistent"),
                optimal: Guarantee::When("the heuristic is admissible and consistent"),
                time_complexity: "exponential in the worst case",
                space_complexity: "exponential",
                summary: "Expands the state with the lowest f(n) = g(n) + h(n).",
            },
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Algorithm {
    type Err = SearchError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.tag() == tag)
            .ok_or_else(|| SearchError::UnknownAlgorithm {
                tag: tag.to_string(),
            })
    }
}

/// Whether a property holds for a strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guarantee {
    Always,
    /// Holds under the stated condition.
    When(&'static str),
    Never,
}

impl fmt::Display for Guarantee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Always => f.write_str("yes"),
            Self::When(condition) => write!(f, "yes, if {condition}"),
            Self::Never => f.write_str("no"),
        }
    }
}

/// Completeness, optimality, and complexity of one strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlgorithmProfile {
    pub complete: Guarantee,
    pub optimal: Guarantee,
    pub time_complexity: &'static str,
    pub space_complexity: &'static str,
    pub summary: &'static str,
}

/// Run `algorithm` from `start` to `goal`.
///
/// `depth_limit` is read only by [`Algorithm::DepthLimited`]; `None` there
/// means [`crate::policy::DEFAULT_DEPTH_LIMIT`].
///
/// # Errors
///
/// Returns [`SearchError::NegativeDepthLimit`] for a negative limit, whatever
/// the algorithm. The search itself never fails.
pub fn run_algorithm(
    algorithm: Algorithm,
    graph: &RoadGraph,
    start: &str,
    goal: &str,
    depth_limit: Option<i64>,
) -> Result<SearchResult, SearchError> {
    let limit = depth_limit
        .map(DepthLimit::try_from)
        .transpose()?
        .unwrap_or_default();

    let result = match algorithm {
        Algorithm::BreadthFirst => uninformed::breadth_first(graph, start, goal),
        Algorithm::UniformCost => uninformed::uniform_cost(graph, start, goal),
        Algorithm::DepthFirst => uninformed::depth_first(graph, start, goal),
        Algorithm::DepthLimited => uninformed::depth_limited(graph, start, goal, limit.get()),
        Algorithm::IterativeDeepening => uninformed::iterative_deepening(graph, start, goal),
        Algorithm::Bidirectional => bidirectional::bidirectional(graph, start, goal),
        Algorithm::GreedyBestFirst => informed::greedy_best_first(graph, start, goal),
        Algorithm::AStar => informed::a_star(graph, start, goal),
    };
    Ok(result)
}
