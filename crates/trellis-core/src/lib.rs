//! # Trellis Core
//!
//! Graph representations and classic graph algorithms.
//!
//! ## Features
//!
//! - **Two representations**: [`AdjacencyList`] and [`AdjacencyMatrix`] behind
//!   one [`Graph`] trait, interchangeable in every algorithm
//! - **Visitor traversal**: BFS/DFS engines driven by hook traits
//! - **Components**: DFS-based or incremental union-find
//! - **Universal sink**: candidate elimination plus verification
//! - **MST**: Kruskal (union-find) and Prim (indexed heap with decrease-key)
//! - **Primitives**: [`DisjointSets`] and an index-addressable [`BinaryHeap`]
//!
//! ## Quick Start
//!
//! ```rust
//! use trellis_core::{mst_kruskal, mst_prim, total_weight, AdjacencyMatrix, Graph, NodeArena};
//!
//! fn main() -> trellis_core::Result<()> {
//!     let mut cities = NodeArena::new();
//!     let n = cities.insert_all(["Lyon", "Paris", "Lille"]);
//!
//!     let mut roads = AdjacencyMatrix::undirected(n.clone());
//!     roads.add_edge(n[0], n[1], 465_u32)?;
//!     roads.add_edge(n[1], n[2], 225)?;
//!     roads.add_edge(n[0], n[2], 690)?;
//!
//!     assert_eq!(total_weight(&mst_kruskal(&roads)?), 690);
//!     assert_eq!(total_weight(&mst_prim(&roads)?), 690);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
// Clippy lints configured in workspace Cargo.toml [workspace.lints.clippy]
#![cfg_attr(
    test,
    allow(
        clippy::doc_markdown,
        clippy::uninlined_format_args,
        clippy::manual_assert
    )
)]

pub mod algorithms;
pub mod config;
pub mod disjoint_sets;
pub mod error;
#[cfg(test)]
mod error_tests;
pub mod graph;
pub mod heap;
pub mod node;
#[cfg(test)]
mod node_tests;
pub mod traversal;

pub use algorithms::{
    connected_components_dfs, is_universal_sink, mst_kruskal, mst_prim, total_weight,
    universal_sink, ConnectedComponents,
};
pub use config::{ConfigError, GraphConfig};
pub use disjoint_sets::{DisjointSets, SetElement};
pub use error::{Error, Result};
pub use graph::{AdjacencyList, AdjacencyMatrix, AnyGraph, Edge, Graph, Representation};
pub use heap::{BinaryHeap, HeapOrder, MaxBinaryHeap, MaxOrder, MinBinaryHeap, MinOrder};
pub use node::{NodeArena, NodeId};
pub use traversal::{bfs, bfs_tree, dfs, dfs_tree, BfsTree, BfsVisitor, DfsVisitor, ParentTree};
