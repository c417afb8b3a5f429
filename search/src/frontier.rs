//! Frontier disciplines: FIFO, LIFO, and keyed priority.
//!
//! Every frontier stores [`NodeId`]s into the run's arena plus enough of the
//! node to answer `contains(state)` in O(1). `len()` always counts logical
//! entries, never stale heap slots.

use std::cmp::Reverse;
use std::collections::hash_map::Entry;
use std::collections::{BinaryHeap, HashMap, VecDeque};

use pathlab_kernel::{Cost, RoadGraph};

use crate::node::{NodeId, SearchNode};

/// Container of generated-but-not-yet-expanded nodes.
pub trait Frontier<'g> {
    /// Insert `node` (stored in the arena as `id`).
    fn push(&mut self, id: NodeId, node: &SearchNode<'g>);

    /// Remove and return the next node per this discipline.
    fn pop(&mut self) -> Option<NodeId>;

    /// Whether any entry currently holds `state`.
    fn contains(&self, state: &str) -> bool;

    /// Number of live entries.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Replace the entry for `node.state` when `node` reaches it more
    /// cheaply. Disciplines without replacement keep the first entry.
    ///
    /// Returns `true` if the frontier changed.
    fn replace_if_better(&mut self, id: NodeId, node: &SearchNode<'g>) -> bool {
        let _ = (id, node);
        false
    }
}

/// Per-state entry counts. A LIFO frontier under cycle-only suppression may
/// hold the same state more than once.
#[derive(Debug, Default)]
struct Membership<'g> {
    counts: HashMap<&'g str, usize>,
}

impl<'g> Membership<'g> {
    fn add(&mut self, state: &'g str) {
        *self.counts.entry(state).or_insert(0) += 1;
    }

    fn remove(&mut self, state: &'g str) {
        if let Entry::Occupied(mut slot) = self.counts.entry(state) {
            *slot.get_mut() -= 1;
            if *slot.get() == 0 {
                slot.remove();
            }
        }
    }

    fn contains(&self, state: &str) -> bool {
        self.counts.contains_key(state)
    }
}

/// Oldest entry first (breadth-first).
#[derive(Debug, Default)]
pub struct FifoFrontier<'g> {
    queue: VecDeque<(NodeId, &'g str)>,
    members: Membership<'g>,
}

impl FifoFrontier<'_> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<'g> Frontier<'g> for FifoFrontier<'g> {
    fn push(&mut self, id: NodeId, node: &SearchNode<'g>) {
        self.queue.push_back((id, node.state));
        self.members.add(node.state);
    }

    fn pop(&mut self) -> Option<NodeId> {
        let (id, state) = self.queue.pop_front()?;
        self.members.remove(state);
        Some(id)
    }

    fn contains(&self, state: &str) -> bool {
        self.members.contains(state)
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// Newest entry first (depth-first).
#[derive(Debug, Default)]
pub struct LifoFrontier<'g> {
    stack: Vec<(NodeId, &'g str)>,
    members: Membership<'g>,
}

impl LifoFrontier<'_> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<'g> Frontier<'g> for LifoFrontier<'g> {
    fn push(&mut self, id: NodeId, node: &SearchNode<'g>) {
        self.stack.push((id, node.state));
        self.members.add(node.state);
    }

    fn pop(&mut self) -> Option<NodeId> {
        let (id, state) = self.stack.pop()?;
        self.members.remove(state);
        Some(id)
    }

    fn contains(&self, state: &str) -> bool {
        self.members.contains(state)
    }

    fn len(&self) -> usize {
        self.stack.len()
    }
}

/// What a [`PriorityFrontier`] orders by. Lower pops first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityKey {
    /// `g(n)`: uniform-cost search.
    PathCost,
    /// `h(n)`: greedy best-first search.
    Heuristic,
    /// `g(n) + h(n)`: A*.
    CostPlusHeuristic,
}

/// Heap ordering key: `(priority, seq)`, lower first.
///
/// `seq` is the insertion sequence number, so equal priorities pop in
/// insertion order. A replaced entry keeps its original `seq`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FrontierKey {
    pub priority: Cost,
    pub seq: u64,
}

/// `BinaryHeap` is a max-heap, so entries carry `Reverse<FrontierKey>`.
#[derive(Debug)]
struct HeapEntry<'g> {
    key: Reverse<FrontierKey>,
    id: NodeId,
    state: &'g str,
}

impl PartialEq for HeapEntry<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.id == other.id
    }
}

impl Eq for HeapEntry<'_> {}

impl PartialOrd for HeapEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry<'_> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key
            .cmp(&other.key)
            .then_with(|| other.id.cmp(&self.id))
    }
}

/// The live entry for a state.
#[derive(Debug, Clone, Copy)]
struct BestEntry {
    id: NodeId,
    seq: u64,
    path_cost: Cost,
}

/// Priority frontier with in-place improvement.
///
/// Maintains:
/// - a `HashMap` from state to its single live entry
/// - a `BinaryHeap` that may also hold stale entries left behind by
///   [`Frontier::replace_if_better`]; `pop` skips any entry whose id is no
///   longer the live one for its state
///
/// A state holds at most one live entry: `push` is only for states the
/// frontier does not contain, and an existing entry changes only through
/// [`Frontier::replace_if_better`].
pub struct PriorityFrontier<'g> {
    heap: BinaryHeap<HeapEntry<'g>>,
    live: HashMap<&'g str, BestEntry>,
    key: PriorityKey,
    graph: &'g RoadGraph,
    goal: &'g str,
    next_seq: u64,
}

impl<'g> PriorityFrontier<'g> {
    /// `graph` and `goal` feed the heuristic for the informed keys.
    #[must_use]
    pub fn new(key: PriorityKey, graph: &'g RoadGraph, goal: &'g str) -> Self {
        Self {
            heap: BinaryHeap::new(),
            live: HashMap::new(),
            key,
            graph,
            goal,
            next_seq: 0,
        }
    }

    /// The ordering value of `node` under this frontier's key.
    #[must_use]
    pub fn priority_of(&self, node: &SearchNode<'_>) -> Cost {
        match self.key {
            PriorityKey::PathCost => node.path_cost,
            PriorityKey::Heuristic => self.graph.heuristic(node.state, self.goal),
            PriorityKey::CostPlusHeuristic => node
                .path_cost
                .saturating_add(self.graph.heuristic(node.state, self.goal)),
        }
    }

    /// Heap slots including stale ones.
    #[must_use]
    pub fn heap_len(&self) -> usize {
        self.heap.len()
    }

    fn enqueue(&mut self, id: NodeId, node: &SearchNode<'g>, seq: u64) {
        let priority = self.priority_of(node);
        self.heap.push(HeapEntry {
            key: Reverse(FrontierKey { priority, seq }),
            id,
            state: node.state,
        });
    }
}

impl<'g> Frontier<'g> for PriorityFrontier<'g> {
    fn push(&mut self, id: NodeId, node: &SearchNode<'g>) {
        debug_assert!(
            !self.live.contains_key(node.state),
            "{} is already on the frontier; use replace_if_better",
            node.state
        );
        let seq = self.next_seq;
        self.next_seq += 1;
        self.live.insert(
            node.state,
            BestEntry {
                id,
                seq,
                path_cost: node.path_cost,
            },
        );
        self.enqueue(id, node, seq);
    }

    fn pop(&mut self) -> Option<NodeId> {
        while let Some(entry) = self.heap.pop() {
            let is_live = self
                .live
                .get(entry.state)
                .is_some_and(|best| best.id == entry.id);
            if is_live {
                self.live.remove(entry.state);
                return Some(entry.id);
            }
        }
        None
    }

    fn contains(&self, state: &str) -> bool {
        self.live.contains_key(state)
    }

    fn len(&self) -> usize {
        self.live.len()
    }

    fn replace_if_better(&mut self, id: NodeId, node: &SearchNode<'g>) -> bool {
        let Some(best) = self.live.get_mut(node.state) else {
            return false;
        };
        if node.path_cost >= best.path_cost {
            return false;
        }
        let seq = best.seq;
        *best = BestEntry {
            id,
            seq,
            path_cost: node.path_cost,
        };
        self.enqueue(id, node, seq);
        true
    }
}
