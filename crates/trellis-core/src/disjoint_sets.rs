//! Disjoint sets (union-find) with union by rank and path compression.
//!
//! Elements live in an index-addressed forest owned by [`DisjointSets`]; the
//! handles returned by [`DisjointSets::make_set`] are the only way to refer
//! to them. With both heuristics every operation runs in amortized
//! O(α(n)) time.
//!
//! # Example
//!
//! ```rust
//! use trellis_core::DisjointSets;
//!
//! let mut sets = DisjointSets::new();
//! let a = sets.make_set();
//! let b = sets.make_set();
//!
//! assert!(!sets.same_set(a, b));
//! sets.union(a, b);
//! assert!(sets.same_set(a, b));
//! ```

/// Opaque handle to an element of a [`DisjointSets`] forest.
///
/// Handles are only meaningful for the instance that created them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SetElement(usize);

/// Union-find forest.
#[derive(Debug, Clone, Default)]
pub struct DisjointSets {
    /// Parent index per element; a root is its own parent.
    parent: Vec<usize>,
    /// Upper bound on the height of each root's tree.
    rank: Vec<u32>,
}

impl DisjointSets {
    /// Creates an empty forest.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty forest with room for `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            parent: Vec::with_capacity(capacity),
            rank: Vec::with_capacity(capacity),
        }
    }

    /// Creates a new singleton set and returns its only element.
    pub fn make_set(&mut self) -> SetElement {
        let index = self.parent.len();
        self.parent.push(index);
        self.rank.push(0);
        SetElement(index)
    }

    /// Returns the representative of the set containing `element`.
    ///
    /// Every element visited on the way to the root is re-parented directly
    /// onto the root. Ranks are left untouched.
    pub fn find_set(&mut self, element: SetElement) -> SetElement {
        let mut root = element.0;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = element.0;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        SetElement(root)
    }

    /// Merges the sets containing `x` and `y`.
    ///
    /// The root with the higher rank becomes the parent. On a tie the
    /// representative of `y` wins and its rank grows by one.
    ///
    /// # Panics
    ///
    /// Panics if `x` and `y` already belong to the same set; callers must
    /// check with [`same_set`](Self::same_set) first.
    pub fn union(&mut self, x: SetElement, y: SetElement) {
        let root_x = self.find_set(x).0;
        let root_y = self.find_set(y).0;
        assert_ne!(
            root_x, root_y,
            "union called on elements that already share a set"
        );

        if self.rank[root_x] > self.rank[root_y] {
            self.parent[root_y] = root_x;
        } else {
            self.parent[root_x] = root_y;
            if self.rank[root_x] == self.rank[root_y] {
                self.rank[root_y] += 1;
            }
        }
    }

    /// Returns true if both elements have the same representative.
    pub fn same_set(&mut self, x: SetElement, y: SetElement) -> bool {
        self.find_set(x) == self.find_set(y)
    }

    /// Returns the rank of an element.
    #[must_use]
    pub fn rank(&self, element: SetElement) -> u32 {
        self.rank[element.0]
    }

    /// Returns the number of elements ever created.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns true if no element was created yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the number of distinct sets.
    #[must_use]
    pub fn set_count(&self) -> usize {
        self.parent
            .iter()
            .enumerate()
            .filter(|(index, parent)| index == *parent)
            .count()
    }

    #[cfg(test)]
    pub(crate) fn parent_of(&self, element: SetElement) -> SetElement {
        SetElement(self.parent[element.0])
    }
}
