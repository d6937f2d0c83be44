//! The unbalanced BST both sets are built on.
//!
//! Nodes live in an arena (a `Vec`) and point at their children by index, so every node is owned
//! by the arena alone and the whole tree is released in one go when it's dropped. Nodes are never
//! removed or moved, which means the first node ever created (index `0`) stays the root for the
//! lifetime of the tree.
//!
//! Each node carries a `tally` chosen by the set built on top: a count for
//! [`OrderedCountingSet`][crate::OrderedCountingSet] and `()` for
//! [`OrderedSet`][crate::OrderedSet].

use std::cmp;

use crate::Error;

/// Index of a node in the arena.
pub(crate) type NodeId = usize;

/// The root is always the first node created.
const ROOT: NodeId = 0;

#[derive(Clone, Debug)]
pub(crate) struct Node<T> {
    pub(crate) value: i32,
    pub(crate) tally: T,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
}

impl<T> Node<T> {
    fn new(value: i32, tally: T) -> Self {
        Self {
            value,
            tally,
            left: None,
            right: None,
        }
    }
}

/// Which child of its parent a new node becomes.
#[derive(Clone, Copy, Debug)]
enum Side {
    Left,
    Right,
}

/// Where a value belongs in the tree.
enum Search {
    /// A node already holds the value.
    Found(NodeId),
    /// Nothing holds the value. It would hang off this parent (or become the root if there is no
    /// parent).
    Vacant(Option<(NodeId, Side)>),
}

/// What [`Tree::place`] did with a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Placement {
    /// A new node was created for the value.
    Created,
    /// The value was already in the tree. The tree is unchanged.
    Found(NodeId),
}

#[derive(Clone, Debug)]
pub(crate) struct Tree<T> {
    nodes: Vec<Node<T>>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    pub(crate) fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// How many distinct values are stored.
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn root(&self) -> Option<&Node<T>> {
        self.nodes.get(ROOT)
    }

    /// Follows a child link.
    pub(crate) fn child(&self, link: Option<NodeId>) -> Option<&Node<T>> {
        link.map(|id| &self.nodes[id])
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut Node<T> {
        &mut self.nodes[id]
    }

    pub(crate) fn find(&self, value: i32) -> Option<&Node<T>> {
        match self.search(value) {
            Search::Found(id) => Some(&self.nodes[id]),
            Search::Vacant(_) => None,
        }
    }

    /// Makes sure a node holds `value`, creating it with `tally()` if it doesn't exist yet. An
    /// existing node is left alone; it's up to the caller to update its tally.
    ///
    /// Room for the new node is reserved before anything is linked up, so on
    /// [`Error::Alloc`] the tree is exactly as it was.
    pub(crate) fn place(
        &mut self,
        value: i32,
        tally: impl FnOnce() -> T,
    ) -> Result<Placement, Error> {
        let parent = match self.search(value) {
            Search::Found(id) => return Ok(Placement::Found(id)),
            Search::Vacant(parent) => parent,
        };

        self.nodes.try_reserve(1)?;
        let id = self.nodes.len();
        self.nodes.push(Node::new(value, tally()));

        if let Some((parent, side)) = parent {
            let parent = &mut self.nodes[parent];
            match side {
                Side::Left => parent.left = Some(id),
                Side::Right => parent.right = Some(id),
            }
        }

        Ok(Placement::Created)
    }

    /// Walks down from the root the same way a recursive insert would, without recursing.
    fn search(&self, value: i32) -> Search {
        let mut parent = None;
        let mut current = self.root().map(|_| ROOT);

        while let Some(id) = current {
            let node = &self.nodes[id];
            match value.cmp(&node.value) {
                cmp::Ordering::Less => {
                    parent = Some((id, Side::Left));
                    current = node.left;
                }
                cmp::Ordering::Equal => return Search::Found(id),
                cmp::Ordering::Greater => {
                    parent = Some((id, Side::Right));
                    current = node.right;
                }
            }
        }

        Search::Vacant(parent)
    }

    /// Number of levels in the tree. An empty tree has height 0 and a lone root has height 1.
    pub(crate) fn height(&self) -> usize {
        let mut height = 0;
        let mut stack = self.root().map(|_| (ROOT, 1)).into_iter().collect::<Vec<_>>();

        while let Some((id, depth)) = stack.pop() {
            height = height.max(depth);
            let node = &self.nodes[id];
            for child in [node.left, node.right].into_iter().flatten() {
                stack.push((child, depth + 1));
            }
        }

        height
    }

    /// Visits every node in ascending value order.
    pub(crate) fn iter(&self) -> Iter<'_, T> {
        let mut iter = Iter {
            tree: self,
            stack: Vec::new(),
        };
        iter.descend_left(self.root().map(|_| ROOT));
        iter
    }
}

/// In-order traversal with an explicit stack so degenerate trees can't overflow the call stack.
/// The stack holds the nodes whose left subtree has been entered but who haven't been yielded yet.
pub(crate) struct Iter<'a, T> {
    tree: &'a Tree<T>,
    stack: Vec<NodeId>,
}

impl<'a, T> Iter<'a, T> {
    fn descend_left(&mut self, mut link: Option<NodeId>) {
        while let Some(id) = link {
            self.stack.push(id);
            link = self.tree.nodes[id].left;
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = &self.tree.nodes[id];
        self.descend_left(node.right);

        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(values: &[i32]) -> Tree<()> {
        let mut tree = Tree::new();
        for &value in values {
            tree.place(value, || ()).unwrap();
        }

        tree
    }

    fn values(tree: &Tree<()>) -> Vec<i32> {
        tree.iter().map(|n| n.value).collect()
    }

    #[test]
    fn empty_tree() {
        let tree = Tree::<()>::new();

        assert!(tree.root().is_none());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.height(), 0);
        assert_eq!(values(&tree), Vec::<i32>::new());
    }

    #[test]
    fn first_value_is_root() {
        let tree = build(&[5, 3, 8]);

        let root = tree.root().unwrap();
        assert_eq!(root.value, 5);
        assert_eq!(tree.child(root.left).map(|n| n.value), Some(3));
        assert_eq!(tree.child(root.right).map(|n| n.value), Some(8));
    }

    #[test]
    fn place_reports_found_for_repeats() {
        let mut tree = Tree::new();

        assert_eq!(tree.place(4, || ()).unwrap(), Placement::Created);
        assert_eq!(tree.place(2, || ()).unwrap(), Placement::Created);
        assert_eq!(tree.place(4, || ()).unwrap(), Placement::Found(0));
        assert_eq!(tree.place(2, || ()).unwrap(), Placement::Found(1));
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn tally_only_built_for_new_nodes() {
        let mut tree = Tree::new();
        tree.place(1, || 10).unwrap();
        tree.place(1, || panic!("1 is already in the tree")).unwrap();

        assert_eq!(tree.find(1).map(|n| n.tally), Some(10));
    }

    #[test]
    fn always_adding_left() {
        let tree = build(&[10, 9, 8, 7, 6, 5, 4, 3, 2, 1]);

        assert_eq!(tree.height(), 10);
        assert_eq!(values(&tree), (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn always_adding_right() {
        let tree = build(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);

        assert_eq!(tree.height(), 10);
        assert_eq!(values(&tree), (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn balanced_insertion_order() {
        let tree = build(&[4, 2, 6, 1, 3, 5, 7]);

        assert_eq!(tree.height(), 3);
        assert_eq!(values(&tree), (1..=7).collect::<Vec<_>>());
    }

    #[test]
    fn deep_degenerate_tree_iterates() {
        let mut tree = Tree::new();
        for x in 0..10_000 {
            tree.place(x, || ()).unwrap();
        }

        assert_eq!(tree.height(), 10_000);
        assert!(tree.iter().map(|n| n.value).eq(0..10_000));
    }

    #[test]
    fn find_hit_and_miss() {
        let tree = build(&[1, 2, 3, 2, 4, 5, 1, 6]);

        assert_eq!(tree.find(4).map(|n| n.value), Some(4));
        assert!(tree.find(0).is_none());
        assert!(tree.find(7).is_none());
    }

    quickcheck::quickcheck! {
        fn in_order_is_strictly_ascending(xs: Vec<i32>) -> bool {
            let tree = build(&xs);
            let values = values(&tree);

            values.windows(2).all(|w| w[0] < w[1])
        }
    }

    quickcheck::quickcheck! {
        fn one_node_per_distinct_value(xs: Vec<i8>) -> bool {
            let xs = xs.into_iter().map(i32::from).collect::<Vec<_>>();
            let tree = build(&xs);
            let distinct = xs.iter().collect::<std::collections::BTreeSet<_>>();

            tree.len() == distinct.len() && values(&tree).iter().eq(distinct)
        }
    }
}
