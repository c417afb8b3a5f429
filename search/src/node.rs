//! Search nodes and the per-run arena that owns them.
//!
//! A node never holds a reference to its parent, only the parent's
//! [`NodeId`] in the same [`NodeArena`]. The arena lives exactly as long as
//! one traversal and is dropped wholesale, together with every node.

use pathlab_kernel::Cost;

/// Index of a node in its [`NodeArena`].
pub type NodeId = usize;

/// The road traversed to produce a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Action<'g> {
    pub from: &'g str,
    pub to: &'g str,
}

impl std::fmt::Display for Action<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.from, self.to)
    }
}

/// An immutable record in the backward-linked solution tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchNode<'g> {
    /// Location this node stands for.
    pub state: &'g str,
    /// Parent in the same arena (`None` for a root).
    pub parent: Option<NodeId>,
    /// Road from the parent (`None` for a root).
    pub action: Option<Action<'g>>,
    /// Sum of edge weights from the root.
    pub path_cost: Cost,
    /// Edge count from the root.
    pub depth: u32,
}

/// Append-only node storage for one run.
#[derive(Debug, Default)]
pub struct NodeArena<'g> {
    nodes: Vec<SearchNode<'g>>,
}

impl<'g> NodeArena<'g> {
    #[must_use]
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Add a root node (cost 0, depth 0). An arena may hold several roots;
    /// bidirectional search keeps both trees in one arena.
    pub fn root(&mut self, state: &'g str) -> NodeId {
        self.push(SearchNode {
            state,
            parent: None,
            action: None,
            path_cost: 0,
            depth: 0,
        })
    }

    /// Add a successor of `parent` reached over a road of `weight`. The path
    /// cost saturates at `Cost::MAX`.
    ///
    /// # Panics
    ///
    /// Panics if `parent` was not issued by this arena.
    pub fn child(&mut self, parent: NodeId, state: &'g str, weight: Cost) -> NodeId {
        let p = self.nodes[parent];
        self.push(SearchNode {
            state,
            parent: Some(parent),
            action: Some(Action {
                from: p.state,
                to: state,
            }),
            path_cost: p.path_cost.saturating_add(weight),
            depth: p.depth + 1,
        })
    }

    /// Add a successor reached by walking `parent`'s road backwards: the
    /// action reads `state to parent.state`.
    ///
    /// # Panics
    ///
    /// Panics if `parent` was not issued by this arena.
    pub fn reverse_child(&mut self, parent: NodeId, state: &'g str, weight: Cost) -> NodeId {
        let id = self.child(parent, state, weight);
        let node = &mut self.nodes[id];
        node.action = node.action.map(|a| Action {
            from: a.to,
            to: a.from,
        });
        id
    }

    fn push(&mut self, node: SearchNode<'g>) -> NodeId {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    /// # Panics
    ///
    /// Panics if `id` was not issued by this arena.
    #[must_use]
    pub fn get(&self, id: NodeId) -> &SearchNode<'g> {
        &self.nodes[id]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// `id`, its parent, its grandparent, ... up to the root.
    pub fn ancestry(&self, id: NodeId) -> impl Iterator<Item = &SearchNode<'g>> + '_ {
        std::iter::successors(Some(id), move |&i| self.nodes[i].parent).map(move |i| &self.nodes[i])
    }

    /// States from the root to `id`, root first. Time proportional to depth.
    #[must_use]
    pub fn reconstruct(&self, id: NodeId) -> Vec<String> {
        let mut path: Vec<String> = self.ancestry(id).map(|n| n.state.to_string()).collect();
        path.reverse();
        path
    }

    /// Whether `state` occurs on the chain from `id` back to its root,
    /// `id` itself included.
    #[must_use]
    pub fn on_ancestor_chain(&self, id: NodeId, state: &str) -> bool {
        self.ancestry(id).any(|n| n.state == state)
    }
}
