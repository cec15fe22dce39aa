//! Tests for node handles and the node arena.

use std::collections::HashSet;

use super::node::NodeArena;

#[test]
fn test_equal_payloads_are_distinct_nodes() {
    let mut arena = NodeArena::new();
    let a = arena.insert(7);
    let b = arena.insert(7);

    assert_ne!(a, b);
    let set: HashSet<_> = [a, b].into_iter().collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn test_ids_are_ordered_by_creation() {
    let mut arena = NodeArena::new();
    let ids = arena.insert_all(["a", "b", "c"]);

    assert!(ids[0] < ids[1]);
    assert!(ids[1] < ids[2]);
    assert_eq!(arena.ids(), ids);
}

#[test]
fn test_ids_unique_across_arenas() {
    let mut first = NodeArena::new();
    let mut second = NodeArena::new();
    let a = first.insert("x");
    let b = second.insert("x");

    assert_ne!(a, b);
    assert!(first.contains(a));
    assert!(!first.contains(b));
    assert!(second.get(a).is_none());
}

#[test]
fn test_payload_is_mutable() {
    let mut arena = NodeArena::new();
    let id = arena.insert(String::from("old"));

    if let Some(payload) = arena.get_mut(id) {
        payload.push_str("-new");
    }
    assert_eq!(arena.get(id).map(String::as_str), Some("old-new"));
}

#[test]
fn test_find_and_iter() {
    let mut arena = NodeArena::with_capacity(3);
    let ids = arena.insert_all(["A", "B", "C"]);

    assert_eq!(arena.find(|p| *p == "B"), Some(ids[1]));
    assert_eq!(arena.find(|p| *p == "Z"), None);
    assert_eq!(arena.len(), 3);
    assert!(!arena.is_empty());

    let collected: Vec<_> = arena.iter().map(|(_, p)| *p).collect();
    assert_eq!(collected, vec!["A", "B", "C"]);
}
