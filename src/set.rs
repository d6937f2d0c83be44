//! A plain distinctness filter. The first insertion of a value creates its node and every later
//! insertion of the same value is dropped without touching the tree.
//!
//! # Examples
//!
//! ```
//! use dedup_bst::{OrderedSet, Shallow};
//!
//! let set = OrderedSet::build_from([1, 2, 3, 2, 4, 5, 1, 6])?;
//!
//! // The shallow report only looks at the root and its direct children.
//! assert_eq!(
//!     set.shallow(),
//!     Shallow { root: Some(1), left: None, right: Some(2) }
//! );
//!
//! // A full traversal sees everything that was kept.
//! assert_eq!(set.iter().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5, 6]);
//! # Ok::<(), dedup_bst::Error>(())
//! ```

use crate::tree::{Placement, Tree};
use crate::Error;

/// An unbalanced BST of distinct `i32`s.
#[derive(Clone, Debug, Default)]
pub struct OrderedSet {
    tree: Tree<()>,
}

/// The values at the top of an [`OrderedSet`]: its root and the root's direct children.
///
/// This is what [`OrderedSet::shallow`] reports. It is *not* a listing of the set; anything below
/// the root's children is invisible here. Use [`OrderedSet::iter`] for that.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Shallow {
    /// The first value inserted, if any.
    pub root: Option<i32>,
    /// The root's left child.
    pub left: Option<i32>,
    /// The root's right child.
    pub right: Option<i32>,
}

impl Shallow {
    /// The values that are present, root first, then left, then right.
    pub fn values(&self) -> impl Iterator<Item = i32> {
        [self.root, self.left, self.right].into_iter().flatten()
    }
}

impl OrderedSet {
    /// Generates a new, empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set by inserting every value in order.
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

    /// Inserts `value` if it isn't already present. Returns whether a node was created.
    ///
    /// # Examples
    ///
    /// ```
    /// use dedup_bst::OrderedSet;
    ///
    /// let mut set = OrderedSet::new();
    ///
    /// assert!(set.insert(3)?);
    /// assert!(!set.insert(3)?);
    /// assert_eq!(set.len(), 1);
    /// # Ok::<(), dedup_bst::Error>(())
    /// ```
    pub fn insert(&mut self, value: i32) -> Result<bool, Error> {
        let placement = self.tree.place(value, || ())?;

        Ok(matches!(placement, Placement::Created))
    }

    /// Whether `value` is in the set.
    pub fn contains(&self, value: i32) -> bool {
        self.tree.find(value).is_some()
    }

    /// Number of values in the set.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.tree.len() == 0
    }

    /// Number of levels in the underlying tree.
    pub fn height(&self) -> usize {
        self.tree.height()
    }

    /// Reports the root and its immediate children only.
    pub fn shallow(&self) -> Shallow {
        match self.tree.root() {
            None => Shallow::default(),
            Some(root) => Shallow {
                root: Some(root.value),
                left: self.tree.child(root.left).map(|n| n.value),
                right: self.tree.child(root.right).map(|n| n.value),
            },
        }
    }

    /// Every value in the set in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        self.tree.iter().map(|n| n.value)
    }
}
