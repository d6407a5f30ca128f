//! Lazy in-order traversals.
//!
//! Both iterators keep an explicit stack of borrowed nodes, so they never
//! recurse and hold at most `height` entries at once.

use std::cmp::Ordering;
use std::iter::FusedIterator;

use super::node::Node;

/// Push `node` and its chain of left descendants onto `stack`.
fn push_left_spine<'a, K, V>(stack: &mut Vec<&'a Node<K, V>>, mut node: Option<&'a Node<K, V>>) {
    while let Some(n) = node {
        stack.push(n);
        node = n.left.as_deref();
    }
}

/// Ascending iterator over every `(key, payload)` in an index.
///
/// Created by [`OrderedIndex::records`](super::OrderedIndex::records).
#[derive(Debug)]
pub struct Records<'a, K, V> {
    stack: Vec<&'a Node<K, V>>,
    remaining: usize,
}

impl<'a, K, V> Records<'a, K, V> {
    pub(crate) fn new(root: Option<&'a Node<K, V>>, len: usize, height: usize) -> Self {
        let mut stack = Vec::with_capacity(height);
        push_left_spine(&mut stack, root);
        Self {
            stack,
            remaining: len,
        }
    }
}

impl<'a, K, V> Iterator for Records<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        push_left_spine(&mut self.stack, node.right.as_deref());
        self.remaining = self.remaining.saturating_sub(1);
        Some((&node.key, &node.payload))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Records<'_, K, V> {}

impl<K, V> FusedIterator for Records<'_, K, V> {}

impl<K, V> Clone for Records<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

/// Ascending iterator over the records with `low <= key <= high`.
///
/// Created by [`OrderedIndex::range_records`](super::OrderedIndex::range_records).
/// Subtrees entirely below `low` are never entered, and iteration stops at
/// the first key above `high`.
#[derive(Debug)]
pub struct RangeRecords<'a, K, V> {
    stack: Vec<&'a Node<K, V>>,
    high: &'a K,
}

impl<'a, K: Ord, V> RangeRecords<'a, K, V> {
    pub(crate) fn new(root: Option<&'a Node<K, V>>, low: &K, high: &'a K, height: usize) -> Self {
        let mut stack = Vec::new();
        if low <= high {
            stack.reserve(height);
            // Seek to the smallest key >= low, keeping only ancestors that
            // are themselves >= low.
            let mut current = root;
            while let Some(node) = current {
                current = match low.cmp(&node.key) {
                    Ordering::Greater => node.right.as_deref(),
                    Ordering::Equal => {
                        stack.push(node);
                        None
                    }
                    Ordering::Less => {
                        stack.push(node);
                        node.left.as_deref()
                    }
                };
            }
        }
        Self { stack, high }
    }
}

impl<'a, K: Ord, V> Iterator for RangeRecords<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        match node.key.cmp(self.high) {
            Ordering::Greater => {
                // Everything left on the stack is larger still
                self.stack.clear();
                None
            }
            Ordering::Equal => {
                self.stack.clear();
                Some((&node.key, &node.payload))
            }
            Ordering::Less => {
                push_left_spine(&mut self.stack, node.right.as_deref());
                Some((&node.key, &node.payload))
            }
        }
    }
}

impl<K: Ord, V> FusedIterator for RangeRecords<'_, K, V> {}

impl<K, V> Clone for RangeRecords<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            high: self.high,
        }
    }
}
