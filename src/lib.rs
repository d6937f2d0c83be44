//! This crate finds and removes duplicates in a sequence of integers using Binary Search Trees
//! (BSTs), mostly for educational purposes.
//!
//! ## Counting with a tree
//!
//! Every value that goes in is compared against the node it meets: smaller values
//! head left, larger values head right. A value is given a node of its own only the
//! first time it shows up. Any later copy walks the same path, stops at that node
//! and either bumps the node's count or is thrown away. So the tree always holds
//! exactly one node per distinct value, and a node's count is the number of times
//! its value was inserted.
//!
//! Reading the nodes back left subtree first, then the node, then the right subtree
//! gives the distinct values already sorted. Splitting the report into "seen once"
//! and "seen more than once" is then a filter on the counts, with no extra sort.
//!
//! The trees here are never rebalanced. Their shape depends on insertion order and
//! sorted input turns them into a linked list with `O(N)` insertion.
//!
//! ## Sets
//!
//! - [`OrderedCountingSet`] counts how often each value was inserted and reports the
//!   unique values and the duplicates separately.
//! - [`OrderedSet`] keeps one copy of each value and drops repeats.
//!
//! The [`filters`] module compares the tree against other ways of deduplicating a
//! sequence, [`input`] generates sequences to feed them and [`report`] prints the
//! results.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod counting;
mod error;
pub mod filters;
pub mod input;
pub mod report;
pub mod set;
mod tree;

pub use counting::OrderedCountingSet;
pub use error::Error;
pub use set::{OrderedSet, Shallow};
