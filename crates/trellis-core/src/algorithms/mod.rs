//! Classic graph algorithms built on the [`Graph`](crate::Graph) contract.
//!
//! - [`components`]: connected components, via DFS hooks or union-find
//! - [`sink`]: universal-sink detection in directed graphs
//! - [`mst`]: minimum spanning trees (Kruskal, Prim)

pub mod components;
pub mod mst;
pub mod sink;

#[cfg(test)]
mod components_tests;
#[cfg(test)]
mod sink_tests;

pub use components::{connected_components_dfs, ConnectedComponents};
pub use mst::{mst_kruskal, mst_prim, total_weight};
pub use sink::{is_universal_sink, universal_sink};

use crate::error::{Error, Result};
use crate::graph::Graph;

/// Rejects directed graphs for algorithms defined on undirected ones.
fn require_undirected<G: Graph + ?Sized>(graph: &G, algorithm: &'static str) -> Result<()> {
    if graph.is_undirected() {
        Ok(())
    } else {
        Err(Error::UndirectedRequired(algorithm))
    }
}
