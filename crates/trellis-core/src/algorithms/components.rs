//! Connected components of undirected graphs.
//!
//! Two strategies are offered:
//!
//! - [`connected_components_dfs`] composes DFS hooks and returns the
//!   components as sets. It is a one-shot computation.
//! - [`ConnectedComponents`] runs union-find over the edges and stays
//!   queryable, accepting further edges without recomputing from scratch.

use std::collections::BTreeSet;

use rustc_hash::FxHashMap;

use crate::disjoint_sets::{DisjointSets, SetElement};
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::node::NodeId;
use crate::traversal::{dfs, DfsVisitor};

use super::require_undirected;

/// A set of components, each a set of nodes. Ordering is by node handle and
/// carries no meaning beyond determinism.
pub type Components = BTreeSet<BTreeSet<NodeId>>;

#[derive(Default)]
struct ComponentCollector {
    current: BTreeSet<NodeId>,
    components: Components,
}

impl DfsVisitor for ComponentCollector {
    fn will_visit_new_root(&mut self, _root: NodeId) {
        self.current = BTreeSet::new();
    }

    fn will_visit_node(&mut self, node: NodeId) {
        self.current.insert(node);
    }

    fn did_visit_new_root(&mut self, _root: NodeId) {
        self.components.insert(std::mem::take(&mut self.current));
    }
}

/// Returns the connected components of an undirected graph using DFS.
///
/// O(V + E) over an adjacency list, O(V²) over a matrix.
pub fn connected_components_dfs<G: Graph + ?Sized>(graph: &G) -> Result<Components> {
    require_undirected(graph, "connected_components_dfs")?;

    let mut collector = ComponentCollector::default();
    dfs(graph, &mut collector, None);

    tracing::debug!(
        nodes = graph.node_count(),
        components = collector.components.len(),
        "dfs connected components"
    );
    Ok(collector.components)
}

/// Incremental connected components backed by union-find.
///
/// Built from a graph's current edges; afterwards it is detached from the
/// graph and only changes through [`add_edge`](Self::add_edge).
///
/// # Example
///
/// ```rust
/// use trellis_core::algorithms::ConnectedComponents;
/// use trellis_core::{AdjacencyList, Graph, NodeArena};
///
/// let mut arena = NodeArena::new();
/// let n = arena.insert_all(["A", "B", "C"]);
/// let mut graph = AdjacencyList::undirected(n.clone());
/// graph.add_edge(n[0], n[1], ()).unwrap();
///
/// let mut components = ConnectedComponents::new(&graph).unwrap();
/// assert!(components.same_component(n[0], n[1]));
/// assert!(!components.same_component(n[0], n[2]));
///
/// components.add_edge(n[1], n[2]).unwrap();
/// assert!(components.same_component(n[0], n[2]));
/// ```
#[derive(Debug, Clone)]
pub struct ConnectedComponents {
    sets: DisjointSets,
    elements: FxHashMap<NodeId, SetElement>,
}

impl ConnectedComponents {
    /// Computes the components of an undirected graph.
    pub fn new<G: Graph + ?Sized>(graph: &G) -> Result<Self> {
        require_undirected(graph, "ConnectedComponents")?;

        let mut sets = DisjointSets::with_capacity(graph.node_count());
        let elements = graph
            .nodes()
            .iter()
            .map(|&node| (node, sets.make_set()))
            .collect();
        let mut components = Self { sets, elements };

        for edge in graph.edges() {
            components.add_edge(edge.source(), edge.target())?;
        }

        tracing::debug!(
            nodes = graph.node_count(),
            components = components.component_count(),
            "union-find connected components"
        );
        Ok(components)
    }

    fn element(&self, node: NodeId) -> Result<SetElement> {
        self.elements
            .get(&node)
            .copied()
            .ok_or(Error::UnknownNode(node))
    }

    /// Merges the components of `a` and `b`.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) -> Result<()> {
        let (x, y) = (self.element(a)?, self.element(b)?);
        if !self.sets.same_set(x, y) {
            self.sets.union(x, y);
        }
        Ok(())
    }

    /// Returns true if `a` and `b` are connected. Unknown nodes are never
    /// connected to anything.
    pub fn same_component(&mut self, a: NodeId, b: NodeId) -> bool {
        match (self.element(a), self.element(b)) {
            (Ok(x), Ok(y)) => self.sets.same_set(x, y),
            _ => false,
        }
    }

    /// Returns the number of components.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.sets.set_count()
    }
}
