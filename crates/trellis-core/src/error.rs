//! Error types for trellis-core.

use thiserror::Error;

use crate::node::NodeId;

/// Errors surfaced by graph construction, mutation and algorithms.
///
/// Precondition violations of the low-level primitives (heap positions,
/// unions of already-joined sets) are programmer errors and panic instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An endpoint does not belong to the graph.
    #[error("Node {0} is not part of this graph")]
    UnknownNode(NodeId),

    /// The algorithm is only defined for undirected graphs.
    #[error("{0} requires an undirected graph")]
    UndirectedRequired(&'static str),

    /// Configuration could not be loaded or is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for trellis operations.
pub type Result<T> = std::result::Result<T, Error>;
