//! Graph contract and its storage representations.
//!
//! [`Graph`] is the seam every algorithm in this crate is written against.
//! Two representations implement it with identical semantics but different
//! costs:
//!
//! | Operation          | [`AdjacencyList`] | [`AdjacencyMatrix`] |
//! |--------------------|-------------------|---------------------|
//! | `weight`/`has_edge`| O(out-degree)     | O(1)                |
//! | `nodes_adjacent`   | O(out-degree)     | O(V)                |
//! | `edges`            | O(V + E)          | O(V²)               |
//! | space              | O(V + E)          | O(V²)               |
//!
//! [`AnyGraph`] selects one of them at runtime (see [`crate::config`]).
//!
//! # Example
//!
//! ```rust
//! use trellis_core::{AdjacencyList, Graph, NodeArena};
//!
//! let mut arena = NodeArena::new();
//! let nodes = arena.insert_all(["A", "B", "C"]);
//!
//! let mut graph = AdjacencyList::undirected(nodes.clone());
//! graph.add_edge(nodes[0], nodes[1], 4).unwrap();
//!
//! assert_eq!(graph.weight(nodes[1], nodes[0]), Some(&4));
//! assert_eq!(graph.edges().len(), 1);
//! ```

mod adjacency_list;
mod adjacency_matrix;
mod any_graph;


pub use adjacency_list::AdjacencyList;
pub use adjacency_matrix::AdjacencyMatrix;
pub use any_graph::{AnyGraph, Representation};

use crate::error::Result;
use crate::node::NodeId;

/// A weighted edge as reported by [`Graph::edges`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge<W> {
    from: NodeId,
    to: NodeId,
    weight: W,
}

impl<W> Edge<W> {
    /// Creates an edge.
    #[must_use]
    pub fn new(from: NodeId, to: NodeId, weight: W) -> Self {
        Self { from, to, weight }
    }

    /// Returns the source node.
    #[must_use]
    pub fn source(&self) -> NodeId {
        self.from
    }

    /// Returns the target node.
    #[must_use]
    pub fn target(&self) -> NodeId {
        self.to
    }

    /// Returns the edge weight.
    #[must_use]
    pub fn weight(&self) -> &W {
        &self.weight
    }

    /// Consumes the edge, returning its weight.
    #[must_use]
    pub fn into_weight(self) -> W {
        self.weight
    }
}

/// Graph over a fixed node set with mutable, weighted edges.
///
/// Implementations must agree on every observable result. For undirected
/// graphs `weight(a, b) == weight(b, a)` holds after every mutation, and
/// each undirected edge is enumerated exactly once.
pub trait Graph {
    /// Edge weight type; use `()` for unweighted graphs.
    type Weight: Clone;

    /// Creates a graph over `nodes`. Duplicate handles are ignored.
    fn new(nodes: Vec<NodeId>, undirected: bool) -> Self
    where
        Self: Sized;

    /// Creates a directed graph.
    fn directed(nodes: Vec<NodeId>) -> Self
    where
        Self: Sized,
    {
        Self::new(nodes, false)
    }

    /// Creates an undirected graph.
    fn undirected(nodes: Vec<NodeId>) -> Self
    where
        Self: Sized,
    {
        Self::new(nodes, true)
    }

    /// Returns every node in insertion order.
    fn nodes(&self) -> &[NodeId];

    /// Returns true if edges are symmetric.
    fn is_undirected(&self) -> bool;

    /// Returns every edge once; undirected edges are not duplicated.
    fn edges(&self) -> Vec<Edge<Self::Weight>>;

    /// Sets (or overwrites) the weight of `from → to`, and of `to → from`
    /// if the graph is undirected.
    fn add_edge(&mut self, from: NodeId, to: NodeId, weight: Self::Weight) -> Result<()>;

    /// Removes `from → to` (both directions if undirected) and returns the
    /// removed weight. Removing a missing edge is a no-op returning `None`.
    fn remove_edge(&mut self, from: NodeId, to: NodeId) -> Result<Option<Self::Weight>>;

    /// Returns the weight of `from → to`, if that edge exists.
    fn weight(&self, from: NodeId, to: NodeId) -> Option<&Self::Weight>;

    /// Returns the targets of every edge leaving `node`.
    fn nodes_adjacent(&self, node: NodeId) -> Vec<NodeId>;

    /// Returns true if `from → to` exists.
    fn has_edge(&self, from: NodeId, to: NodeId) -> bool {
        self.weight(from, to).is_some()
    }

    /// Returns true if `node` is part of this graph.
    fn contains_node(&self, node: NodeId) -> bool {
        self.nodes().contains(&node)
    }

    /// Returns the number of nodes.
    fn node_count(&self) -> usize {
        self.nodes().len()
    }

    /// Returns the number of edges, counting undirected edges once.
    fn edge_count(&self) -> usize {
        self.edges().len()
    }
}
