//! Runtime-selected graph representation.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::node::NodeId;

use super::{AdjacencyList, AdjacencyMatrix, Edge, Graph};

/// Storage representation of a graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Representation {
    /// Per-node edge lists; best for sparse graphs.
    #[default]
    List,
    /// Dense weight matrix; O(1) edge lookups.
    Matrix,
}

/// Graph whose representation is chosen at construction time.
#[derive(Debug, Clone)]
pub enum AnyGraph<W> {
    /// Backed by an [`AdjacencyList`].
    List(AdjacencyList<W>),
    /// Backed by an [`AdjacencyMatrix`].
    Matrix(AdjacencyMatrix<W>),
}

impl<W: Clone> AnyGraph<W> {
    /// Creates a graph with the given representation.
    #[must_use]
    pub fn with_representation(
        representation: Representation,
        nodes: Vec<NodeId>,
        undirected: bool,
    ) -> Self {
        match representation {
            Representation::List => Self::List(AdjacencyList::new(nodes, undirected)),
            Representation::Matrix => Self::Matrix(AdjacencyMatrix::new(nodes, undirected)),
        }
    }

    /// Returns the active representation.
    #[must_use]
    pub fn representation(&self) -> Representation {
        match self {
            Self::List(_) => Representation::List,
            Self::Matrix(_) => Representation::Matrix,
        }
    }
}

macro_rules! delegate {
    ($self:expr, $graph:ident => $body:expr) => {
        match $self {
            AnyGraph::List($graph) => $body,
            AnyGraph::Matrix($graph) => $body,
        }
    };
}

impl<W: Clone> Graph for AnyGraph<W> {
    type Weight = W;

    /// Defaults to the adjacency-list representation.
    fn new(nodes: Vec<NodeId>, undirected: bool) -> Self {
        Self::with_representation(Representation::List, nodes, undirected)
    }

    fn nodes(&self) -> &[NodeId] {
        delegate!(self, g => g.nodes())
    }

    fn is_undirected(&self) -> bool {
        delegate!(self, g => g.is_undirected())
    }

    fn edges(&self) -> Vec<Edge<W>> {
        delegate!(self, g => g.edges())
    }

    fn add_edge(&mut self, from: NodeId, to: NodeId, weight: W) -> Result<()> {
        delegate!(self, g => g.add_edge(from, to, weight))
    }

    fn remove_edge(&mut self, from: NodeId, to: NodeId) -> Result<Option<W>> {
        delegate!(self, g => g.remove_edge(from, to))
    }

    fn weight(&self, from: NodeId, to: NodeId) -> Option<&W> {
        delegate!(self, g => g.weight(from, to))
    }

    fn nodes_adjacent(&self, node: NodeId) -> Vec<NodeId> {
        delegate!(self, g => g.nodes_adjacent(node))
    }

    fn contains_node(&self, node: NodeId) -> bool {
        delegate!(self, g => g.contains_node(node))
    }

    fn edge_count(&self) -> usize {
        delegate!(self, g => g.edge_count())
    }
}
