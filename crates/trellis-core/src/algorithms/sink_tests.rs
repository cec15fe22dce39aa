use super::{is_universal_sink, universal_sink};
use crate::graph::{AdjacencyList, AdjacencyMatrix, Graph};
use crate::node::{NodeArena, NodeId};

fn nodes(count: usize) -> Vec<NodeId> {
    NodeArena::new().insert_all(0..count)
}

fn sink_found_and_invalidated<G: Graph<Weight = ()>>() {
    let n = nodes(3);
    let (a, b, c) = (n[0], n[1], n[2]);
    let mut graph = G::directed(n.clone());
    graph.add_edge(a, c, ()).unwrap();
    graph.add_edge(b, c, ()).unwrap();

    assert_eq!(universal_sink(&graph), Some(c));
    assert!(is_universal_sink(&graph, c));
    assert!(!is_universal_sink(&graph, a));

    // C loses in-degree V - 1.
    graph.remove_edge(b, c).unwrap();
    assert_eq!(universal_sink(&graph), None);

    // C gains an outgoing edge.
    graph.add_edge(b, c, ()).unwrap();
    graph.add_edge(c, a, ()).unwrap();
    assert_eq!(universal_sink(&graph), None);
    assert!(!is_universal_sink(&graph, c));
}

fn sink_found_regardless_of_position<G: Graph<Weight = ()>>() {
    let n = nodes(5);
    for sink in 0..n.len() {
        let mut graph = G::directed(n.clone());
        for (i, &node) in n.iter().enumerate() {
            if i != sink {
                graph.add_edge(node, n[sink], ()).unwrap();
            }
        }
        // Noise between non-sink nodes.
        let others: Vec<_> = (0..n.len()).filter(|&i| i != sink).collect();
        graph.add_edge(n[others[0]], n[others[1]], ()).unwrap();

        assert_eq!(universal_sink(&graph), Some(n[sink]), "sink at {sink}");
    }
}

fn trivial_graphs<G: Graph<Weight = ()>>() {
    let empty = G::directed(Vec::new());
    assert_eq!(universal_sink(&empty), None);

    let n = nodes(1);
    let single = G::directed(n.clone());
    assert_eq!(universal_sink(&single), Some(n[0]));

    let pair = G::directed(nodes(2));
    assert_eq!(universal_sink(&pair), None);
}

macro_rules! sink_suite {
    ($name:ident, $graph:ty) => {
        mod $name {
            use super::*;

            #[test]
            fn test_sink_found_and_invalidated() {
                sink_found_and_invalidated::<$graph>();
            }

            #[test]
            fn test_sink_found_regardless_of_position() {
                sink_found_regardless_of_position::<$graph>();
            }

            #[test]
            fn test_trivial_graphs() {
                trivial_graphs::<$graph>();
            }
        }
    };
}

sink_suite!(over_list, AdjacencyList<()>);
sink_suite!(over_matrix, AdjacencyMatrix<()>);

#[test]
fn test_unknown_node_is_never_a_sink() {
    let n = nodes(1);
    let stranger = nodes(1)[0];
    let graph = AdjacencyList::<()>::directed(n);
    assert!(!is_universal_sink(&graph, stranger));
}
