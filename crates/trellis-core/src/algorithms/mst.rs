//! Minimum spanning trees over undirected weighted graphs.
//!
//! Both algorithms return the tree as a list of edges. On a disconnected
//! graph the result is a spanning forest: one tree per component.

use std::cmp::Ordering;

use num_traits::{Bounded, Zero};
use rustc_hash::FxHashMap;

use crate::disjoint_sets::DisjointSets;
use crate::error::Result;
use crate::graph::{Edge, Graph};
use crate::heap::MinBinaryHeap;
use crate::node::NodeId;

use super::require_undirected;

/// Kruskal's algorithm. O(E log E).
///
/// Edges are scanned in ascending weight order and kept whenever their
/// endpoints are still in different sets. Incomparable weights (NaN) are
/// treated as equal.
///
/// # Errors
///
/// Returns [`Error::UndirectedRequired`](crate::Error::UndirectedRequired)
/// for directed graphs.
pub fn mst_kruskal<G>(graph: &G) -> Result<Vec<Edge<G::Weight>>>
where
    G: Graph + ?Sized,
    G::Weight: PartialOrd,
{
    require_undirected(graph, "mst_kruskal")?;

    let mut sets = DisjointSets::with_capacity(graph.node_count());
    let elements: FxHashMap<NodeId, _> = graph
        .nodes()
        .iter()
        .map(|&node| (node, sets.make_set()))
        .collect();

    let mut edges = graph.edges();
    let edge_count = edges.len();
    edges.sort_by(|a, b| a.weight().partial_cmp(b.weight()).unwrap_or(Ordering::Equal));

    let mut tree = Vec::with_capacity(graph.node_count().saturating_sub(1));
    for edge in edges {
        let (Some(&x), Some(&y)) = (elements.get(&edge.source()), elements.get(&edge.target()))
        else {
            continue;
        };
        if !sets.same_set(x, y) {
            sets.union(x, y);
            tree.push(edge);
        }
    }

    tracing::debug!(
        nodes = graph.node_count(),
        edges = edge_count,
        tree_edges = tree.len(),
        "kruskal"
    );
    Ok(tree)
}

/// Prim's algorithm over an indexed min-heap. O(V·(V + E)).
///
/// The first node starts with key zero, every other node with
/// `W::max_value()` and no known connection. Heap keys carry that flag
/// ahead of the weight, so a node reached through an edge of weight
/// `max_value()` still sorts before every unreached node. A node's heap
/// position is looked up with a linear scan before each key decrease.
/// A node extracted without a known connection opens a new tree in the
/// forest.
///
/// # Errors
///
/// Returns [`Error::UndirectedRequired`](crate::Error::UndirectedRequired)
/// for directed graphs.
pub fn mst_prim<G>(graph: &G) -> Result<Vec<Edge<G::Weight>>>
where
    G: Graph + ?Sized,
    G::Weight: PartialOrd + Copy + Bounded + Zero,
{
    require_undirected(graph, "mst_prim")?;

    // Key is (unreached, best known weight); `false` sorts first.
    let mut heap: MinBinaryHeap<(bool, G::Weight), NodeId> = graph
        .nodes()
        .iter()
        .enumerate()
        .map(|(i, &node)| {
            let key = if i == 0 {
                (false, <G::Weight as Zero>::zero())
            } else {
                (true, <G::Weight as Bounded>::max_value())
            };
            (key, node)
        })
        .collect();
    let mut parents: FxHashMap<NodeId, NodeId> = FxHashMap::default();
    let mut tree = Vec::with_capacity(graph.node_count().saturating_sub(1));

    while let Some(((_, key), node)) = heap.extract_entry() {
        if let Some(&parent) = parents.get(&node) {
            tree.push(Edge::new(parent, node, key));
        }

        for adjacent in graph.nodes_adjacent(node) {
            // Nodes already in the tree have left the heap.
            let Some(index) = heap.first_index(|_, &candidate| candidate == adjacent) else {
                continue;
            };
            let Some(&weight) = graph.weight(node, adjacent) else {
                continue;
            };
            let improves = heap
                .key(index)
                .is_some_and(|&(unreached, best)| unreached || weight < best);
            if improves {
                parents.insert(adjacent, node);
                heap.change_key(index, (false, weight));
            }
        }
    }

    tracing::debug!(
        nodes = graph.node_count(),
        tree_edges = tree.len(),
        "prim"
    );
    Ok(tree)
}

/// Sums the weights of `edges`.
pub fn total_weight<W: Copy + Zero>(edges: &[Edge<W>]) -> W {
    edges
        .iter()
        .fold(W::zero(), |total, edge| total + *edge.weight())
}
