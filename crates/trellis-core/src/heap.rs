//! Array-backed binary heap with positional access and key changes.
//!
//! Unlike `std::collections::BinaryHeap`, entries carry a separate key and
//! element, can be located by position, removed from the middle, and have
//! their key changed in place. One implementation serves both orderings
//! through the [`HeapOrder`] marker.
//!
//! Positions returned by [`BinaryHeap::first_index`] are invalidated by every
//! structural mutation; resolve them again before each use.
//!
//! # Example
//!
//! ```rust
//! use trellis_core::MinBinaryHeap;
//!
//! let mut heap: MinBinaryHeap<u32, &str> = [(5, "e"), (1, "a"), (3, "c")]
//!     .into_iter()
//!     .collect();
//!
//! let index = heap.first_index(|_, elem| *elem == "e").unwrap();
//! heap.change_key(index, 0);
//! assert_eq!(heap.extract(), Some("e"));
//! assert_eq!(heap.extract(), Some("a"));
//! ```

use std::fmt;
use std::marker::PhantomData;

/// Ordering of a [`BinaryHeap`].
pub trait HeapOrder<K> {
    /// Returns true if `a` must sit closer to the root than `b`.
    fn outranks(a: &K, b: &K) -> bool;
}

/// Smallest key at the root.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinOrder;

/// Largest key at the root.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxOrder;

impl<K: PartialOrd> HeapOrder<K> for MinOrder {
    fn outranks(a: &K, b: &K) -> bool {
        a < b
    }
}

impl<K: PartialOrd> HeapOrder<K> for MaxOrder {
    fn outranks(a: &K, b: &K) -> bool {
        a > b
    }
}

/// Binary heap whose root holds the smallest key.
pub type MinBinaryHeap<K, T> = BinaryHeap<K, T, MinOrder>;

/// Binary heap whose root holds the largest key.
pub type MaxBinaryHeap<K, T> = BinaryHeap<K, T, MaxOrder>;

/// Indexed binary heap of `(key, element)` entries.
pub struct BinaryHeap<K, T, O> {
    entries: Vec<(K, T)>,
    order: PhantomData<O>,
}

impl<K: fmt::Debug, T: fmt::Debug, O> fmt::Debug for BinaryHeap<K, T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryHeap")
            .field("entries", &self.entries)
            .finish()
    }
}

impl<K: Clone, T: Clone, O> Clone for BinaryHeap<K, T, O> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
            order: PhantomData,
        }
    }
}

impl<K, T, O> Default for BinaryHeap<K, T, O> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            order: PhantomData,
        }
    }
}

impl<K, T, O: HeapOrder<K>> BinaryHeap<K, T, O> {
    /// Creates an empty heap.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty heap with room for `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            order: PhantomData,
        }
    }

    /// Builds a heap from arbitrary entries in O(n).
    #[must_use]
    pub fn from_entries(entries: Vec<(K, T)>) -> Self {
        let mut heap = Self {
            entries,
            order: PhantomData,
        };
        heap.build();
        heap
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the heap is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the root element without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.entries.first().map(|(_, elem)| elem)
    }

    /// Returns the root key without removing it.
    #[must_use]
    pub fn peek_key(&self) -> Option<&K> {
        self.entries.first().map(|(key, _)| key)
    }

    /// Adds an entry. O(log n).
    pub fn insert(&mut self, key: K, element: T) {
        self.entries.push((key, element));
        self.move_up(self.entries.len() - 1);
    }

    /// Removes and returns the root element. O(log n).
    pub fn extract(&mut self) -> Option<T> {
        if self.entries.is_empty() {
            None
        } else {
            Some(self.remove(0))
        }
    }

    /// Like [`extract`](Self::extract) but also returns the key.
    pub fn extract_entry(&mut self) -> Option<(K, T)> {
        if self.entries.is_empty() {
            None
        } else {
            Some(self.remove_entry(0))
        }
    }

    /// Returns the position of the first entry matching `predicate`. O(n).
    pub fn first_index<P>(&self, mut predicate: P) -> Option<usize>
    where
        P: FnMut(&K, &T) -> bool,
    {
        self.entries
            .iter()
            .position(|(key, elem)| predicate(key, elem))
    }

    /// Returns the element at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.entries.get(index).map(|(_, elem)| elem)
    }

    /// Returns the key at `index`, if any.
    #[must_use]
    pub fn key(&self, index: usize) -> Option<&K> {
        self.entries.get(index).map(|(key, _)| key)
    }

    /// Iterates over entries in storage (not priority) order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &T)> {
        self.entries.iter().map(|(key, elem)| (key, elem))
    }

    /// Removes the entry at `index` and returns its element. O(log n).
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn remove(&mut self, index: usize) -> T {
        self.remove_entry(index).1
    }

    /// Removes the entry at `index` and returns it. O(log n).
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn remove_entry(&mut self, index: usize) -> (K, T) {
        let len = self.entries.len();
        assert!(
            index < len,
            "heap index {index} out of range for length {len}"
        );

        // swap_remove moves the last entry into the hole; it may belong
        // either above or below its new position.
        let removed = self.entries.swap_remove(index);
        if index < self.entries.len() {
            self.move_up(index);
            self.move_down(index);
        }
        removed
    }

    /// Replaces the key at `index` and restores heap order. O(log n).
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn change_key(&mut self, index: usize, key: K) {
        let len = self.entries.len();
        assert!(
            index < len,
            "heap index {index} out of range for length {len}"
        );

        let old_key = std::mem::replace(&mut self.entries[index].0, key);
        if O::outranks(&old_key, &self.entries[index].0) {
            self.move_down(index);
        } else {
            self.move_up(index);
        }
    }

    /// Absorbs every entry of `other` and rebuilds heap order. O(n + m).
    pub fn merge(&mut self, other: Self) {
        self.entries.extend(other.entries);
        self.build();
    }

    /// Returns true if every entry respects the ordering against its parent.
    #[must_use]
    pub fn is_heap(&self) -> bool {
        (1..self.entries.len())
            .all(|i| !O::outranks(&self.entries[i].0, &self.entries[parent(i)].0))
    }

    fn build(&mut self) {
        for index in (0..self.entries.len() / 2).rev() {
            self.move_down(index);
        }
    }

    fn move_up(&mut self, mut index: usize) {
        while index > 0 {
            let up = parent(index);
            if !O::outranks(&self.entries[index].0, &self.entries[up].0) {
                break;
            }
            self.entries.swap(index, up);
            index = up;
        }
    }

    fn move_down(&mut self, mut index: usize) {
        let len = self.entries.len();
        loop {
            let mut best = index;
            for child in [left_child(index), right_child(index)] {
                if child < len && O::outranks(&self.entries[child].0, &self.entries[best].0) {
                    best = child;
                }
            }
            if best == index {
                return;
            }
            self.entries.swap(index, best);
            index = best;
        }
    }
}

impl<K, T, O: HeapOrder<K>> FromIterator<(K, T)> for BinaryHeap<K, T, O> {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        Self::from_entries(iter.into_iter().collect())
    }
}

impl<K, T, O: HeapOrder<K>> Extend<(K, T)> for BinaryHeap<K, T, O> {
    fn extend<I: IntoIterator<Item = (K, T)>>(&mut self, iter: I) {
        for (key, element) in iter {
            self.insert(key, element);
        }
    }
}

fn parent(index: usize) -> usize {
    (index - 1) / 2
}

fn left_child(index: usize) -> usize {
    2 * index + 1
}

fn right_child(index: usize) -> usize {
    2 * index + 2
}
