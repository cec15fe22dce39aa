//! Spanning trees assembled from traversal hooks.

use rustc_hash::FxHashMap;

use crate::graph::Graph;
use crate::node::NodeId;

use super::{bfs, dfs, BfsVisitor, DfsVisitor};

/// Tree stored as a `child → parent` dictionary.
///
/// A node without an entry is a root (or not part of the tree at all).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParentTree {
    parents: FxHashMap<NodeId, NodeId>,
}

impl ParentTree {
    /// Creates an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `parent` as the parent of `child`, replacing any previous one.
    pub fn add_child(&mut self, child: NodeId, parent: NodeId) {
        self.parents.insert(child, parent);
    }

    /// Returns the parent of `child`, or `None` for roots.
    #[must_use]
    pub fn parent(&self, child: NodeId) -> Option<NodeId> {
        self.parents.get(&child).copied()
    }

    /// Returns true if `node` has a parent.
    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        self.parents.contains_key(&node)
    }

    /// Returns the number of `child → parent` links.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    /// Returns true if the tree has no links.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Returns the chain `node, parent, grandparent, …, root`.
    #[must_use]
    pub fn path_to_root(&self, node: NodeId) -> Vec<NodeId> {
        let mut path = vec![node];
        let mut current = node;
        while let Some(parent) = self.parent(current) {
            // Guard against a cycle introduced through add_child.
            if path.contains(&parent) {
                break;
            }
            path.push(parent);
            current = parent;
        }
        path
    }

    /// Iterates over `(child, parent)` links in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.parents.iter().map(|(child, parent)| (*child, *parent))
    }
}

/// BFS spanning tree plus hop counts from each node's root.
#[derive(Debug, Clone, Default)]
pub struct BfsTree {
    /// Parent links discovered by the search.
    pub tree: ParentTree,
    /// Hop count from the root of the node's component.
    pub distances: FxHashMap<NodeId, usize>,
}

impl BfsTree {
    /// Returns the hop count of `node`, if it was reached.
    #[must_use]
    pub fn distance(&self, node: NodeId) -> Option<usize> {
        self.distances.get(&node).copied()
    }
}

impl BfsVisitor for BfsTree {
    fn will_visit_new_root(&mut self, root: NodeId) {
        self.distances.insert(root, 0);
    }

    fn will_visit_child(&mut self, parent: NodeId, child: NodeId) {
        self.tree.add_child(child, parent);
        let depth = self.distances.get(&parent).copied().unwrap_or_default();
        self.distances.insert(child, depth + 1);
    }
}

impl DfsVisitor for ParentTree {
    fn will_visit_child(&mut self, parent: NodeId, child: NodeId) {
        self.add_child(child, parent);
    }
}

/// Builds a BFS spanning tree (forest when `root` is `None`) with distances.
pub fn bfs_tree<G: Graph + ?Sized>(graph: &G, root: Option<NodeId>) -> BfsTree {
    let mut result = BfsTree::default();
    bfs(graph, &mut result, root);
    result
}

/// Builds a DFS spanning tree (forest when `root` is `None`).
pub fn dfs_tree<G: Graph + ?Sized>(graph: &G, root: Option<NodeId>) -> ParentTree {
    let mut tree = ParentTree::new();
    dfs(graph, &mut tree, root);
    tree
}
