//! Configuration constants for CatalogDB.

/// Height of a freshly inserted node (a leaf).
///
/// An absent subtree has height 0, so a leaf is `1 + max(0, 0)`.
pub const LEAF_HEIGHT: i32 = 1;

/// Largest tolerated `|height(left) - height(right)|` at any node.
///
/// Anything beyond this triggers a single or double rotation.
pub const MAX_BALANCE_FACTOR: i32 = 1;

/// Coefficient of the AVL worst-case height bound.
///
/// An AVL tree with `n` nodes never exceeds `1.4405 * log2(n + 2)` levels
/// (Adelson-Velsky and Landis, 1962). This is the Fibonacci-tree bound.
pub const AVL_HEIGHT_FACTOR: f64 = 1.4405;

/// Worst-case height of a balanced tree holding `len` records.
///
/// # Example
/// ```
/// use catalogdb::common::config::max_avl_height;
///
/// assert_eq!(max_avl_height(0), 1);
/// assert!(max_avl_height(1_000_000) <= 29);
/// ```
pub fn max_avl_height(len: usize) -> usize {
    (AVL_HEIGHT_FACTOR * ((len + 2) as f64).log2()).floor() as usize
}
