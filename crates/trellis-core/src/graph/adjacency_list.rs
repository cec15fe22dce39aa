//! Adjacency-list representation.
//!
//! Each node owns an ordered bucket of outgoing slots. Undirected edges are
//! stored twice: a canonical slot at the endpoint the edge was added from and
//! a mirror slot at the other endpoint, so lookups work from either side
//! while enumeration skips mirrors.

use indexmap::IndexMap;
use smallvec::SmallVec;

use crate::error::{Error, Result};
use crate::node::NodeId;

use super::{Edge, Graph};

/// Outgoing edge record inside a bucket.
#[derive(Debug, Clone)]
struct Slot<W> {
    weight: W,
    neighbor: NodeId,
    /// True for the reverse record of an undirected edge.
    mirror: bool,
}

type Bucket<W> = SmallVec<[Slot<W>; 4]>;

/// Graph storing per-node lists of outgoing edges.
///
/// Edge lookups scan the source node's bucket, so they cost O(out-degree).
#[derive(Debug, Clone)]
pub struct AdjacencyList<W> {
    nodes: Vec<NodeId>,
    /// Buckets keyed by node, in node insertion order.
    buckets: IndexMap<NodeId, Bucket<W>>,
    undirected: bool,
}

impl<W> AdjacencyList<W> {
    fn bucket_mut(&mut self, node: NodeId) -> Result<&mut Bucket<W>> {
        self.buckets.get_mut(&node).ok_or(Error::UnknownNode(node))
    }

    /// Writes `from → to` in place if a slot exists, otherwise appends one.
    fn upsert_slot(&mut self, from: NodeId, to: NodeId, weight: W, mirror: bool) -> Result<()> {
        let bucket = self.bucket_mut(from)?;
        match bucket.iter_mut().find(|slot| slot.neighbor == to) {
            Some(slot) => slot.weight = weight,
            None => bucket.push(Slot {
                weight,
                neighbor: to,
                mirror,
            }),
        }
        Ok(())
    }

    fn take_slot(&mut self, from: NodeId, to: NodeId) -> Result<Option<W>> {
        let bucket = self.bucket_mut(from)?;
        Ok(bucket
            .iter()
            .position(|slot| slot.neighbor == to)
            .map(|index| bucket.remove(index).weight))
    }

    fn ensure_node(&self, node: NodeId) -> Result<()> {
        if self.buckets.contains_key(&node) {
            Ok(())
        } else {
            Err(Error::UnknownNode(node))
        }
    }
}

impl<W: Clone> Graph for AdjacencyList<W> {
    type Weight = W;

    fn new(nodes: Vec<NodeId>, undirected: bool) -> Self {
        let mut buckets = IndexMap::with_capacity(nodes.len());
        for node in nodes {
            buckets.entry(node).or_insert_with(SmallVec::new);
        }
        Self {
            nodes: buckets.keys().copied().collect(),
            buckets,
            undirected,
        }
    }

    fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    fn is_undirected(&self) -> bool {
        self.undirected
    }

    fn edges(&self) -> Vec<Edge<W>> {
        self.buckets
            .iter()
            .flat_map(|(&node, bucket)| {
                bucket
                    .iter()
                    .filter(|slot| !slot.mirror)
                    .map(move |slot| Edge::new(node, slot.neighbor, slot.weight.clone()))
            })
            .collect()
    }

    fn add_edge(&mut self, from: NodeId, to: NodeId, weight: W) -> Result<()> {
        self.ensure_node(from)?;
        self.ensure_node(to)?;

        if self.undirected {
            self.upsert_slot(from, to, weight.clone(), false)?;
            self.upsert_slot(to, from, weight, true)
        } else {
            self.upsert_slot(from, to, weight, false)
        }
    }

    fn remove_edge(&mut self, from: NodeId, to: NodeId) -> Result<Option<W>> {
        self.ensure_node(from)?;
        self.ensure_node(to)?;

        let removed = self.take_slot(from, to)?;
        if self.undirected {
            let mirrored = self.take_slot(to, from)?;
            return Ok(removed.or(mirrored));
        }
        Ok(removed)
    }

    fn weight(&self, from: NodeId, to: NodeId) -> Option<&W> {
        self.buckets
            .get(&from)?
            .iter()
            .find(|slot| slot.neighbor == to)
            .map(|slot| &slot.weight)
    }

    fn nodes_adjacent(&self, node: NodeId) -> Vec<NodeId> {
        self.buckets
            .get(&node)
            .map(|bucket| bucket.iter().map(|slot| slot.neighbor).collect())
            .unwrap_or_default()
    }

    fn contains_node(&self, node: NodeId) -> bool {
        self.buckets.contains_key(&node)
    }

    fn edge_count(&self) -> usize {
        self.buckets
            .values()
            .map(|bucket| bucket.iter().filter(|slot| !slot.mirror).count())
            .sum()
    }
}
