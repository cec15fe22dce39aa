//! Tests for error display and conversions.

use crate::config::ConfigError;
use crate::error::Error;
use crate::node::NodeArena;

#[test]
fn test_error_display_unknown_node() {
    let mut arena = NodeArena::new();
    let node = arena.insert("A");
    let err = Error::UnknownNode(node);
    assert_eq!(err.to_string(), format!("Node {node} is not part of this graph"));
}

#[test]
fn test_error_display_undirected_required() {
    let err = Error::UndirectedRequired("mst_kruskal");
    assert_eq!(err.to_string(), "mst_kruskal requires an undirected graph");
}

#[test]
fn test_error_from_config_error() {
    let err: Error = ConfigError::Invalid("bad value".to_string()).into();
    assert!(matches!(err, Error::Config(_)));
    assert!(err.to_string().contains("bad value"));
}
