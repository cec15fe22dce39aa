use std::collections::BTreeSet;

use super::{connected_components_dfs, ConnectedComponents};
use crate::error::Error;
use crate::graph::{AdjacencyList, AdjacencyMatrix, Graph};
use crate::node::{NodeArena, NodeId};

fn nodes(count: usize) -> Vec<NodeId> {
    NodeArena::new().insert_all(0..count)
}

fn set(ids: &[NodeId]) -> BTreeSet<NodeId> {
    ids.iter().copied().collect()
}

/// Components {0, 1, 2}, {3, 4} and the isolated {5}.
fn build_three_components<G: Graph<Weight = ()>>() -> (G, Vec<NodeId>) {
    let n = nodes(6);
    let mut graph = G::undirected(n.clone());
    graph.add_edge(n[0], n[1], ()).unwrap();
    graph.add_edge(n[1], n[2], ()).unwrap();
    graph.add_edge(n[4], n[3], ()).unwrap();
    (graph, n)
}

fn dfs_components_partition_nodes<G: Graph<Weight = ()>>() {
    let (graph, n) = build_three_components::<G>();
    let components = connected_components_dfs(&graph).unwrap();

    let expected: BTreeSet<_> = [set(&n[0..3]), set(&n[3..5]), set(&n[5..6])]
        .into_iter()
        .collect();
    assert_eq!(components, expected);
}

fn union_find_agrees_with_dfs<G: Graph<Weight = ()>>() {
    let (graph, n) = build_three_components::<G>();
    let dfs_components = connected_components_dfs(&graph).unwrap();
    let mut uf = ConnectedComponents::new(&graph).unwrap();

    assert_eq!(uf.component_count(), dfs_components.len());
    for &a in &n {
        for &b in &n {
            let together = dfs_components
                .iter()
                .any(|c| c.contains(&a) && c.contains(&b));
            assert_eq!(uf.same_component(a, b), together, "{a} / {b}");
        }
    }
}

fn directed_graph_is_rejected<G: Graph<Weight = ()>>() {
    let n = nodes(2);
    let graph = G::directed(n);

    assert_eq!(
        connected_components_dfs(&graph),
        Err(Error::UndirectedRequired("connected_components_dfs"))
    );
    assert!(matches!(
        ConnectedComponents::new(&graph),
        Err(Error::UndirectedRequired(_))
    ));
}

macro_rules! components_suite {
    ($name:ident, $graph:ty) => {
        mod $name {
            use super::*;

            #[test]
            fn test_dfs_components_partition_nodes() {
                dfs_components_partition_nodes::<$graph>();
            }

            #[test]
            fn test_union_find_agrees_with_dfs() {
                union_find_agrees_with_dfs::<$graph>();
            }

            #[test]
            fn test_directed_graph_is_rejected() {
                directed_graph_is_rejected::<$graph>();
            }
        }
    };
}

components_suite!(over_list, AdjacencyList<()>);
components_suite!(over_matrix, AdjacencyMatrix<()>);

#[test]
fn test_union_find_is_detached_from_graph() {
    let n = nodes(3);
    let mut graph = AdjacencyList::undirected(n.clone());
    graph.add_edge(n[0], n[1], ()).unwrap();

    let mut components = ConnectedComponents::new(&graph).unwrap();
    graph.remove_edge(n[0], n[1]).unwrap();
    graph.add_edge(n[1], n[2], ()).unwrap();

    assert!(components.same_component(n[0], n[1]));
    assert!(!components.same_component(n[1], n[2]));
    assert_eq!(components.component_count(), 2);
}

#[test]
fn test_union_find_incremental_edges() {
    let n = nodes(4);
    let graph = AdjacencyMatrix::<()>::undirected(n.clone());
    let mut components = ConnectedComponents::new(&graph).unwrap();
    assert_eq!(components.component_count(), 4);

    components.add_edge(n[0], n[1]).unwrap();
    components.add_edge(n[2], n[3]).unwrap();
    // Already joined; must not panic.
    components.add_edge(n[1], n[0]).unwrap();
    assert_eq!(components.component_count(), 2);

    components.add_edge(n[1], n[3]).unwrap();
    assert_eq!(components.component_count(), 1);
    assert!(components.same_component(n[0], n[2]));
}

#[test]
fn test_union_find_unknown_nodes() {
    let n = nodes(2);
    let stranger = nodes(1)[0];
    let graph = AdjacencyList::<()>::undirected(n.clone());
    let mut components = ConnectedComponents::new(&graph).unwrap();

    assert_eq!(
        components.add_edge(n[0], stranger),
        Err(Error::UnknownNode(stranger))
    );
    assert!(!components.same_component(stranger, stranger));
    assert!(components.same_component(n[0], n[0]));
}

#[test]
fn test_empty_graph_has_no_components() {
    let graph = AdjacencyList::<()>::undirected(Vec::new());
    assert!(connected_components_dfs(&graph).unwrap().is_empty());
    assert_eq!(ConnectedComponents::new(&graph).unwrap().component_count(), 0);
}
