//! Visitor-driven graph traversal (BFS/DFS).
//!
//! The engines in this module build no result of their own: callers observe
//! the traversal through [`BfsVisitor`] / [`DfsVisitor`] hooks and assemble
//! whatever they need (spanning trees, distances, components). Every hook has
//! a no-op default, so a visitor only implements the points it cares about.
//!
//! Without an explicit root the whole graph is covered: every node not yet
//! reached, in node-enumeration order, starts a new root.
//!
//! Complexity is O(V + E) over an [`AdjacencyList`](crate::AdjacencyList)
//! and O(V²) over an [`AdjacencyMatrix`](crate::AdjacencyMatrix), since the
//! shape is identical and only the adjacency query differs.
//!
//! # Example
//!
//! ```rust
//! use trellis_core::traversal::{dfs, DfsVisitor};
//! use trellis_core::{AdjacencyList, Graph, NodeArena, NodeId};
//!
//! struct Preorder(Vec<NodeId>);
//!
//! impl DfsVisitor for Preorder {
//!     fn will_visit_node(&mut self, node: NodeId) {
//!         self.0.push(node);
//!     }
//! }
//!
//! let mut arena = NodeArena::new();
//! let n = arena.insert_all(["A", "B", "C"]);
//! let mut graph = AdjacencyList::directed(n.clone());
//! graph.add_edge(n[0], n[1], ()).unwrap();
//!
//! let mut order = Preorder(Vec::new());
//! dfs(&graph, &mut order, None);
//! assert_eq!(order.0, n);
//! ```

mod tree;


pub use tree::{bfs_tree, dfs_tree, BfsTree, ParentTree};

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use crate::graph::Graph;
use crate::node::NodeId;

/// Hooks invoked by [`bfs`].
pub trait BfsVisitor {
    /// Called once per root, before its component is explored.
    fn will_visit_new_root(&mut self, _root: NodeId) {}

    /// Called when `child` is first discovered from `parent`, right before
    /// it is enqueued. Fires at most once per node.
    fn will_visit_child(&mut self, _parent: NodeId, _child: NodeId) {}
}

/// Hooks invoked by [`dfs`].
pub trait DfsVisitor {
    /// Called once per root, before its component is explored.
    fn will_visit_new_root(&mut self, _root: NodeId) {}

    /// Called after a root's whole component is exhausted.
    fn did_visit_new_root(&mut self, _root: NodeId) {}

    /// Called on entry to a node, before any of its children.
    fn will_visit_node(&mut self, _node: NodeId) {}

    /// Called after every child of `node` has been processed.
    fn did_visit_node(&mut self, _node: NodeId) {}

    /// Called before descending from `parent` into unvisited `child`.
    fn will_visit_child(&mut self, _parent: NodeId, _child: NodeId) {}
}

/// The no-op visitor.
impl BfsVisitor for () {}

/// The no-op visitor.
impl DfsVisitor for () {}

fn seeds<G: Graph + ?Sized>(graph: &G, root: Option<NodeId>) -> Vec<NodeId> {
    match root {
        Some(root) => vec![root],
        None => graph.nodes().to_vec(),
    }
}

/// Breadth-first traversal.
///
/// Explores from `root` only, or from every node if `root` is `None`.
pub fn bfs<G, V>(graph: &G, visitor: &mut V, root: Option<NodeId>)
where
    G: Graph + ?Sized,
    V: BfsVisitor + ?Sized,
{
    let mut discovered = FxHashSet::default();
    let mut queue = VecDeque::new();

    for seed in seeds(graph, root) {
        if !discovered.insert(seed) {
            continue;
        }
        visitor.will_visit_new_root(seed);
        queue.push_back(seed);

        while let Some(current) = queue.pop_front() {
            for adjacent in graph.nodes_adjacent(current) {
                if discovered.contains(&adjacent) {
                    continue;
                }
                visitor.will_visit_child(current, adjacent);
                discovered.insert(adjacent);
                queue.push_back(adjacent);
            }
        }
    }
}

/// Depth-first traversal.
///
/// Explores from `root` only, or from every node if `root` is `None`; in the
/// latter case each disconnected component gets its own root.
///
/// The search recurses once per node on the current path, so stack use
/// grows with the longest simple path explored. A path of around 10⁵ nodes
/// can overflow a default 2 MiB thread stack; run such graphs on a thread
/// spawned with a larger stack (`std::thread::Builder::stack_size`).
pub fn dfs<G, V>(graph: &G, visitor: &mut V, root: Option<NodeId>)
where
    G: Graph + ?Sized,
    V: DfsVisitor + ?Sized,
{
    let mut visited = FxHashSet::default();

    for seed in seeds(graph, root) {
        if visited.contains(&seed) {
            continue;
        }
        visitor.will_visit_new_root(seed);
        dfs_recursive(graph, seed, &mut visited, visitor);
        visitor.did_visit_new_root(seed);
    }
}

fn dfs_recursive<G, V>(graph: &G, current: NodeId, visited: &mut FxHashSet<NodeId>, visitor: &mut V)
where
    G: Graph + ?Sized,
    V: DfsVisitor + ?Sized,
{
    visitor.will_visit_node(current);
    visited.insert(current);

    for child in graph.nodes_adjacent(current) {
        // A child may have been reached through a sibling since the
        // adjacency snapshot was taken.
        if visited.contains(&child) {
            continue;
        }
        visitor.will_visit_child(current, child);
        dfs_recursive(graph, child, visited, visitor);
    }

    visitor.did_visit_node(current);
}
