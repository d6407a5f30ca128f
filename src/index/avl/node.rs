//! Tree nodes and the recursive mutation algorithms.
//!
//! Every function here works on owned links (`Option<Box<Node>>`). A parent
//! exclusively owns its children, so rotations and splices move boxes
//! between slots with `Option::take` and never alias a node.

use std::cmp::{max, Ordering};

use tracing::trace;

use crate::common::config::{LEAF_HEIGHT, MAX_BALANCE_FACTOR};
use crate::index::IndexStats;

/// An owned, possibly absent subtree.
pub(crate) type Link<K, V> = Option<Box<Node<K, V>>>;

/// A single record in the tree.
#[derive(Debug)]
pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) payload: V,
    pub(crate) left: Link<K, V>,
    pub(crate) right: Link<K, V>,
    /// Cached `1 + max(height(left), height(right))`.
    pub(crate) height: i32,
}

impl<K, V> Node<K, V> {
    pub(crate) fn new(key: K, payload: V) -> Self {
        Self {
            key,
            payload,
            left: None,
            right: None,
            height: LEAF_HEIGHT,
        }
    }

    /// Recompute the cached height from the (already correct) children.
    #[inline]
    pub(crate) fn update_height(&mut self) {
        self.height = 1 + max(height(&self.left), height(&self.right));
    }

    /// `height(left) - height(right)`.
    #[inline]
    pub(crate) fn balance_factor(&self) -> i32 {
        height(&self.left) - height(&self.right)
    }
}

/// Height of a subtree; 0 for an absent one.
#[inline]
pub(crate) fn height<K, V>(link: &Link<K, V>) -> i32 {
    link.as_ref().map_or(0, |node| node.height)
}

// ============================================================================
// Rotations
// ============================================================================

/// Rotate `root` right, promoting its left child.
///
/// ```text
///        root            pivot
///       /    \          /     \
///    pivot    C   =>   A      root
///    /   \                   /    \
///   A     B                 B      C
/// ```
fn rotate_right<K, V>(mut root: Box<Node<K, V>>, stats: &IndexStats) -> Box<Node<K, V>> {
    let Some(mut pivot) = root.left.take() else {
        return root;
    };
    root.left = pivot.right.take();
    root.update_height();
    pivot.right = Some(root);
    pivot.update_height();

    IndexStats::bump(&stats.rotations);
    trace!(height = pivot.height, "rotated right");
    pivot
}

/// Rotate `root` left, promoting its right child. Mirror of [`rotate_right`].
fn rotate_left<K, V>(mut root: Box<Node<K, V>>, stats: &IndexStats) -> Box<Node<K, V>> {
    let Some(mut pivot) = root.right.take() else {
        return root;
    };
    root.right = pivot.left.take();
    root.update_height();
    pivot.left = Some(root);
    pivot.update_height();

    IndexStats::bump(&stats.rotations);
    trace!(height = pivot.height, "rotated left");
    pivot
}

/// Recompute `node`'s height and restore the balance invariant at it.
///
/// Handles all four imbalance shapes: left-left and right-right need one
/// rotation, left-right and right-left rotate the heavy child first.
pub(crate) fn rebalance<K, V>(mut node: Box<Node<K, V>>, stats: &IndexStats) -> Box<Node<K, V>> {
    node.update_height();
    let balance = node.balance_factor();

    if balance > MAX_BALANCE_FACTOR {
        if node.left.as_ref().is_some_and(|left| left.balance_factor() < 0) {
            node.left = node.left.take().map(|left| rotate_left(left, stats));
        }
        return rotate_right(node, stats);
    }

    if balance < -MAX_BALANCE_FACTOR {
        if node.right.as_ref().is_some_and(|right| right.balance_factor() > 0) {
            node.right = node.right.take().map(|right| rotate_right(right, stats));
        }
        return rotate_left(node, stats);
    }

    node
}

/// Run [`rebalance`] on whatever node currently occupies `link`.
fn rebalance_link<K, V>(link: &mut Link<K, V>, stats: &IndexStats) {
    if let Some(node) = link.take() {
        *link = Some(rebalance(node, stats));
    }
}

// ============================================================================
// Insert
// ============================================================================

/// Insert `key` below `link`. Returns `false` (and touches nothing) if the
/// key is already present.
pub(crate) fn insert<K: Ord, V>(
    link: &mut Link<K, V>,
    key: K,
    payload: V,
    stats: &IndexStats,
) -> bool {
    let inserted = match link {
        None => {
            *link = Some(Box::new(Node::new(key, payload)));
            return true;
        }
        Some(node) => match key.cmp(&node.key) {
            Ordering::Less => insert(&mut node.left, key, payload, stats),
            Ordering::Greater => insert(&mut node.right, key, payload, stats),
            Ordering::Equal => false,
        },
    };

    if inserted {
        rebalance_link(link, stats);
    }
    inserted
}

// ============================================================================
// Remove
// ============================================================================

/// Remove `key` from below `link`. Returns `false` if it was not present.
pub(crate) fn remove<K: Ord, V>(link: &mut Link<K, V>, key: &K, stats: &IndexStats) -> bool {
    let Some(node) = link.as_mut() else {
        return false;
    };

    let removed = match key.cmp(&node.key) {
        Ordering::Less => remove(&mut node.left, key, stats),
        Ordering::Greater => remove(&mut node.right, key, stats),
        Ordering::Equal => {
            unlink(link, stats);
            true
        }
    };

    if removed {
        rebalance_link(link, stats);
    }
    removed
}

/// Splice the node at `link` out of the tree.
///
/// - leaf: the slot becomes empty
/// - one child: the child takes over the slot
/// - two children: the in-order successor is detached from the right
///   subtree and its key and payload move into this node, which stays put
fn unlink<K, V>(link: &mut Link<K, V>, stats: &IndexStats) {
    let Some(mut node) = link.take() else {
        return;
    };

    *link = match (node.left.take(), node.right.take()) {
        (None, None) => None,
        (Some(child), None) | (None, Some(child)) => Some(child),
        (Some(left), Some(right)) => {
            let (rest, successor) = detach_min(right, stats);
            let Node { key, payload, .. } = *successor;
            node.key = key;
            node.payload = payload;
            node.left = Some(left);
            node.right = rest;
            Some(node)
        }
    };
}

/// Detach the minimum node of the subtree rooted at `node`.
///
/// Returns the rebalanced remainder and the detached node (with no children).
fn detach_min<K, V>(
    mut node: Box<Node<K, V>>,
    stats: &IndexStats,
) -> (Link<K, V>, Box<Node<K, V>>) {
    match node.left.take() {
        None => {
            let rest = node.right.take();
            (rest, node)
        }
        Some(left) => {
            let (rest, min) = detach_min(left, stats);
            node.left = rest;
            (Some(rebalance(node, stats)), min)
        }
    }
}

// ============================================================================
// Lookup
// ============================================================================

/// Find the node holding `key`, if any.
pub(crate) fn find<'a, K: Ord, V>(link: &'a Link<K, V>, key: &K) -> Option<&'a Node<K, V>> {
    let mut current = link.as_deref();
    while let Some(node) = current {
        current = match key.cmp(&node.key) {
            Ordering::Less => node.left.as_deref(),
            Ordering::Greater => node.right.as_deref(),
            Ordering::Equal => return Some(node),
        };
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(key: i32) -> Link<i32, ()> {
        Some(Box::new(Node::new(key, ())))
    }

    fn branch(key: i32, left: Link<i32, ()>, right: Link<i32, ()>) -> Link<i32, ()> {
        let mut node = Box::new(Node::new(key, ()));
        node.left = left;
        node.right = right;
        node.update_height();
        Some(node)
    }

    fn keys_preorder(link: &Link<i32, ()>, out: &mut Vec<i32>) {
        if let Some(node) = link {
            out.push(node.key);
            keys_preorder(&node.left, out);
            keys_preorder(&node.right, out);
        }
    }

    fn preorder(link: &Link<i32, ()>) -> Vec<i32> {
        let mut out = Vec::new();
        keys_preorder(link, &mut out);
        out
    }

    #[test]
    fn test_height_of_absent_and_leaf() {
        assert_eq!(height::<i32, ()>(&None), 0);
        assert_eq!(height(&leaf(1)), 1);
        assert_eq!(height(&branch(2, leaf(1), None)), 2);
    }

    #[test]
    fn test_rotate_right_preserves_order() {
        // 3 <- 2 <- 1 chain, left-left case
        let stats = IndexStats::new();
        let root = branch(3, branch(2, leaf(1), None), None).unwrap();
        let root = rotate_right(root, &stats);

        assert_eq!(root.key, 2);
        assert_eq!(root.height, 2);
        assert_eq!(preorder(&Some(root)), vec![2, 1, 3]);
    }

    #[test]
    fn test_rotate_left_moves_inner_grandchild() {
        //   1              3
        //    \            / \
        //     3    =>    1   4
        //    / \          \
        //   2   4          2
        let stats = IndexStats::new();
        let root = branch(1, None, branch(3, leaf(2), leaf(4))).unwrap();
        let root = rotate_left(root, &stats);

        assert_eq!(root.key, 3);
        assert_eq!(preorder(&Some(root)), vec![3, 1, 2, 4]);
    }

    #[test]
    fn test_rebalance_left_right_case() {
        let stats = IndexStats::new();
        let root = branch(3, branch(1, None, leaf(2)), None).unwrap();
        let root = rebalance(root, &stats);

        assert_eq!(preorder(&Some(root)), vec![2, 1, 3]);
        assert_eq!(stats.snapshot().rotations, 2);
    }

    #[test]
    fn test_rebalance_right_left_case() {
        let stats = IndexStats::new();
        let root = branch(1, None, branch(3, leaf(2), None)).unwrap();
        let root = rebalance(root, &stats);

        assert_eq!(preorder(&Some(root)), vec![2, 1, 3]);
        assert_eq!(stats.snapshot().rotations, 2);
    }

    #[test]
    fn test_rebalance_leaves_balanced_node_alone() {
        let stats = IndexStats::new();
        let root = branch(2, leaf(1), leaf(3)).unwrap();
        let root = rebalance(root, &stats);

        assert_eq!(preorder(&Some(root)), vec![2, 1, 3]);
        assert_eq!(stats.snapshot().rotations, 0);
    }

    #[test]
    fn test_insert_duplicate_is_rejected() {
        let stats = IndexStats::new();
        let mut root: Link<i32, &str> = None;

        assert!(insert(&mut root, 1, "first", &stats));
        assert!(!insert(&mut root, 1, "second", &stats));
        assert_eq!(find(&root, &1).map(|n| n.payload), Some("first"));
    }

    #[test]
    fn test_detach_min_returns_leftmost() {
        let stats = IndexStats::new();
        let root = branch(4, branch(2, leaf(1), leaf(3)), leaf(5)).unwrap();

        let (rest, min) = detach_min(root, &stats);

        assert_eq!(min.key, 1);
        assert!(min.left.is_none() && min.right.is_none());
        assert_eq!(preorder(&rest), vec![4, 2, 3, 5]);
    }

    #[test]
    fn test_remove_two_children_keeps_position() {
        let stats = IndexStats::new();
        let mut root = branch(2, leaf(1), leaf(3));

        assert!(remove(&mut root, &2, &stats));
        // Successor 3 now sits at the root slot
        assert_eq!(preorder(&root), vec![3, 1]);
        assert_eq!(height(&root), 2);
    }

    #[test]
    fn test_remove_absent_key() {
        let stats = IndexStats::new();
        let mut root = branch(2, leaf(1), leaf(3));

        assert!(!remove(&mut root, &7, &stats));
        assert_eq!(preorder(&root), vec![2, 1, 3]);
    }
}
