//! Indirect adjacency-matrix representation.
//!
//! Weights live in a dense V×V table. Node handles are translated to rows and
//! columns through an [`IndexSet`], which gives O(1) lookups in both
//! directions (handle → index and index → handle).

use indexmap::IndexSet;

use crate::error::{Error, Result};
use crate::node::NodeId;

use super::{Edge, Graph};

/// Graph storing a dense matrix of optional weights.
#[derive(Debug, Clone)]
pub struct AdjacencyMatrix<W> {
    nodes: Vec<NodeId>,
    index: IndexSet<NodeId>,
    /// Row-major `dim × dim` cells; `None` means no edge.
    cells: Vec<Option<W>>,
    undirected: bool,
}

impl<W> AdjacencyMatrix<W> {
    fn dim(&self) -> usize {
        self.index.len()
    }

    fn position(&self, node: NodeId) -> Result<usize> {
        self.index
            .get_index_of(&node)
            .ok_or(Error::UnknownNode(node))
    }

    fn cell(&self, row: usize, col: usize) -> usize {
        row * self.dim() + col
    }
}

impl<W: Clone> AdjacencyMatrix<W> {
    fn write(&mut self, from: NodeId, to: NodeId, weight: Option<W>) -> Result<Option<W>> {
        let row = self.position(from)?;
        let col = self.position(to)?;

        let forward = self.cell(row, col);
        let backward = self.cell(col, row);
        let previous = std::mem::replace(&mut self.cells[forward], weight.clone());
        if self.undirected && forward != backward {
            let mirrored = std::mem::replace(&mut self.cells[backward], weight);
            return Ok(previous.or(mirrored));
        }
        Ok(previous)
    }
}

impl<W: Clone> Graph for AdjacencyMatrix<W> {
    type Weight = W;

    fn new(nodes: Vec<NodeId>, undirected: bool) -> Self {
        let index: IndexSet<NodeId> = nodes.into_iter().collect();
        let dim = index.len();
        Self {
            nodes: index.iter().copied().collect(),
            index,
            cells: vec![None; dim * dim],
            undirected,
        }
    }

    fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    fn is_undirected(&self) -> bool {
        self.undirected
    }

    /// Scans the full matrix, or only the lower triangle when undirected.
    fn edges(&self) -> Vec<Edge<W>> {
        let dim = self.dim();
        let mut edges = Vec::new();
        for row in 0..dim {
            let end = if self.undirected { row + 1 } else { dim };
            for col in 0..end {
                if let Some(weight) = &self.cells[self.cell(row, col)] {
                    edges.push(Edge::new(self.nodes[row], self.nodes[col], weight.clone()));
                }
            }
        }
        edges
    }

    fn add_edge(&mut self, from: NodeId, to: NodeId, weight: W) -> Result<()> {
        self.write(from, to, Some(weight)).map(|_| ())
    }

    fn remove_edge(&mut self, from: NodeId, to: NodeId) -> Result<Option<W>> {
        self.write(from, to, None)
    }

    fn weight(&self, from: NodeId, to: NodeId) -> Option<&W> {
        let row = self.index.get_index_of(&from)?;
        let col = self.index.get_index_of(&to)?;
        self.cells[self.cell(row, col)].as_ref()
    }

    fn nodes_adjacent(&self, node: NodeId) -> Vec<NodeId> {
        let Some(row) = self.index.get_index_of(&node) else {
            return Vec::new();
        };
        let start = self.cell(row, 0);
        self.cells[start..start + self.dim()]
            .iter()
            .zip(&self.nodes)
            .filter(|(cell, _)| cell.is_some())
            .map(|(_, &neighbor)| neighbor)
            .collect()
    }

    fn contains_node(&self, node: NodeId) -> bool {
        self.index.contains(&node)
    }
}
