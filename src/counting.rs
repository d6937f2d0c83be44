//! A set that remembers how many times each value was inserted. Inserting a value that's already
//! present bumps its count instead of adding a node, so the tree ends up with one node per
//! distinct value and in-order traversal can split them into unique values and duplicates.
//!
//! # Examples
//!
//! ```
//! use dedup_bst::OrderedCountingSet;
//!
//! let mut set = OrderedCountingSet::new();
//!
//! // Nothing in here yet.
//! assert_eq!(set.count(1), 0);
//!
//! set.insert(1)?;
//! set.insert(2)?;
//! assert_eq!(set.insert(1)?, 2);
//!
//! assert_eq!(set.duplicates().collect::<Vec<_>>(), vec![(1, 2)]);
//! assert_eq!(set.unique().collect::<Vec<_>>(), vec![2]);
//! # Ok::<(), dedup_bst::Error>(())
//! ```

use crate::tree::{Placement, Tree};
use crate::Error;

/// An unbalanced BST of `i32`s where each node counts its insertions.
#[derive(Clone, Debug, Default)]
pub struct OrderedCountingSet {
    tree: Tree<usize>,
    total: usize,
}

impl OrderedCountingSet {
    /// Generates a new, empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set by inserting every value in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use dedup_bst::OrderedCountingSet;
    ///
    /// let set = OrderedCountingSet::build_from([1, 2, 3, 2, 4, 5, 1, 6])?;
    ///
    /// assert_eq!(set.duplicates().collect::<Vec<_>>(), vec![(1, 2), (2, 2)]);
    /// assert_eq!(set.unique().collect::<Vec<_>>(), vec![3, 4, 5, 6]);
    /// # Ok::<(), dedup_bst::Error>(())
    /// ```
    pub fn build_from<I>(values: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = i32>,
    {
        let mut set = Self::new();
        for value in values {
            set.insert(value)?;
        }

        Ok(set)
    }

    /// Inserts `value`, returning how many times it has now been inserted.
    ///
    /// A value seen for the first time gets a new node with a count of 1. A repeat increments the
    /// existing node's count and leaves the shape of the tree alone.
    pub fn insert(&mut self, value: i32) -> Result<usize, Error> {
        let count = match self.tree.place(value, || 1)? {
            Placement::Created => 1,
            Placement::Found(id) => {
                let node = self.tree.get_mut(id);
                node.tally += 1;
                node.tally
            }
        };
        self.total += 1;

        Ok(count)
    }

    /// How many times `value` was inserted. Zero if it never was.
    pub fn count(&self, value: i32) -> usize {
        self.tree.find(value).map_or(0, |n| n.tally)
    }

    /// Whether `value` was ever inserted.
    pub fn contains(&self, value: i32) -> bool {
        self.tree.find(value).is_some()
    }

    /// Number of distinct values.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Whether nothing has been inserted yet.
    pub fn is_empty(&self) -> bool {
        self.tree.len() == 0
    }

    /// Number of calls to [`insert`][Self::insert] that succeeded, repeats included.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of levels in the underlying tree.
    pub fn height(&self) -> usize {
        self.tree.height()
    }

    /// Every distinct value with its count, in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, usize)> + '_ {
        self.tree.iter().map(|n| (n.value, n.tally))
    }

    /// Values inserted more than once along with their counts, in ascending order. The traversal
    /// is lazy and starts over from the current tree every time this is called.
    pub fn duplicates(&self) -> impl Iterator<Item = (i32, usize)> + '_ {
        self.iter().filter(|&(_, count)| count > 1)
    }

    /// Values inserted exactly once, in ascending order.
    pub fn unique(&self) -> impl Iterator<Item = i32> + '_ {
        self.iter()
            .filter(|&(_, count)| count == 1)
            .map(|(value, _)| value)
    }
}
