//! Universal-sink detection.
//!
//! A universal sink has out-degree 0 and in-degree V − 1: every other node
//! points to it and it points to none. Meaningful for directed graphs; an
//! undirected graph has one only when it is a single node.

use crate::graph::Graph;
use crate::node::NodeId;

/// Returns true if `node` is a universal sink of `graph`.
///
/// One edge lookup per other node: O(V) on a matrix, O(V·E) on a list.
/// A self-loop on `node` is not considered.
pub fn is_universal_sink<G: Graph + ?Sized>(graph: &G, node: NodeId) -> bool {
    graph.contains_node(node)
        && graph
            .nodes()
            .iter()
            .filter(|&&other| other != node)
            .all(|&other| !graph.has_edge(node, other) && graph.has_edge(other, node))
}

/// Finds the universal sink, if any.
///
/// Candidate elimination: an edge `candidate → b` rules the candidate out
/// (sinks have no outgoing edges), its absence rules `b` out. The survivor
/// of one pass is then verified with [`is_universal_sink`].
pub fn universal_sink<G: Graph + ?Sized>(graph: &G) -> Option<NodeId> {
    let (&first, rest) = graph.nodes().split_first()?;

    let candidate = rest.iter().fold(first, |candidate, &b| {
        if graph.has_edge(candidate, b) {
            b
        } else {
            candidate
        }
    });

    let verified = is_universal_sink(graph, candidate);
    tracing::debug!(
        nodes = graph.node_count(),
        candidate = %candidate,
        verified,
        "universal sink scan"
    );
    verified.then_some(candidate)
}
