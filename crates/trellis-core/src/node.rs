//! Node handles and the arena that owns node payloads.
//!
//! Graphs never own payloads: they hold [`NodeId`] handles, so the same node
//! can participate in several graphs at once. Identity is the handle, never
//! the payload, so two nodes carrying equal payloads stay distinct in
//! adjacency maps and visited sets.
//!
//! # Example
//!
//! ```rust
//! use trellis_core::NodeArena;
//!
//! let mut arena = NodeArena::new();
//! let a = arena.insert("same");
//! let b = arena.insert("same");
//!
//! assert_ne!(a, b);
//! assert_eq!(arena.get(a), arena.get(b));
//! ```

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use indexmap::IndexMap;

/// Process-wide id source; ids are never reused, even across arenas.
static NEXT_NODE_ID: AtomicU64 = AtomicU64::new(0);

/// Opaque, copyable node handle.
///
/// Handles are totally ordered by creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u64);

impl NodeId {
    fn fresh() -> Self {
        Self(NEXT_NODE_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw numeric id (useful for logging).
    #[must_use]
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Owner of node payloads, addressed by [`NodeId`].
#[derive(Debug, Clone)]
pub struct NodeArena<T> {
    payloads: IndexMap<NodeId, T>,
}

impl<T> Default for NodeArena<T> {
    fn default() -> Self {
        Self {
            payloads: IndexMap::new(),
        }
    }
}

impl<T> NodeArena<T> {
    /// Creates an empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an arena with room for `capacity` nodes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            payloads: IndexMap::with_capacity(capacity),
        }
    }

    /// Stores a payload and returns the handle of the new node.
    pub fn insert(&mut self, payload: T) -> NodeId {
        let id = NodeId::fresh();
        self.payloads.insert(id, payload);
        id
    }

    /// Stores every payload in order, returning their handles in the same order.
    pub fn insert_all<I>(&mut self, payloads: I) -> Vec<NodeId>
    where
        I: IntoIterator<Item = T>,
    {
        payloads.into_iter().map(|p| self.insert(p)).collect()
    }

    /// Returns the payload of a node, if this arena issued it.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&T> {
        self.payloads.get(&id)
    }

    /// Returns a mutable reference to the payload of a node.
    #[must_use]
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.payloads.get_mut(&id)
    }

    /// Returns true if this arena issued the handle.
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.payloads.contains_key(&id)
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.payloads.len()
    }

    /// Returns true if the arena holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.payloads.is_empty()
    }

    /// Returns all handles in insertion order.
    #[must_use]
    pub fn ids(&self) -> Vec<NodeId> {
        self.payloads.keys().copied().collect()
    }

    /// Iterates over `(handle, payload)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &T)> {
        self.payloads.iter().map(|(id, payload)| (*id, payload))
    }

    /// Returns the handle of the first node whose payload matches.
    pub fn find<P>(&self, mut predicate: P) -> Option<NodeId>
    where
        P: FnMut(&T) -> bool,
    {
        self.payloads
            .iter()
            .find(|(_, payload)| predicate(payload))
            .map(|(id, _)| *id)
    }
}
