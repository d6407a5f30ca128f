//! AVL-balanced ordered index.
//!
//! [`OrderedIndex`] is a height-balanced binary search tree mapping a unique
//! ordered key to a payload. It supports insert, remove, point lookup, a full
//! ascending scan and an inclusive range scan.
//!
//! # Invariants
//! After every public call returns:
//! - in-order traversal yields strictly ascending keys
//! - every node's cached height is `1 + max(height(left), height(right))`
//! - every node's balance factor is within `[-1, 1]`
//!
//! [`OrderedIndex::validate`] audits all three.
//!
//! # Duplicate keys
//! Inserting a key that is already present is a no-op: the stored payload
//! is kept and the new one is dropped. Use [`OrderedIndex::remove`] first
//! to replace a record.

mod iter;
mod node;

use std::fmt;

use tracing::debug;

use crate::common::config::MAX_BALANCE_FACTOR;
use crate::common::{Error, Result};
use crate::index::IndexStats;

pub use iter::{RangeRecords, Records};
use node::Link;

/// A height-balanced binary search tree keyed by `K`.
///
/// The index exclusively owns every node. Queries hand out borrowed views of
/// keys and payloads, never nodes.
///
/// # Concurrency
/// `OrderedIndex` is a plain single-threaded structure: mutation needs
/// `&mut self`, so the borrow checker already keeps readers and writers
/// apart. Callers sharing it across threads must wrap it in their own lock.
///
/// # Example
/// ```
/// use catalogdb::OrderedIndex;
///
/// let mut index = OrderedIndex::new();
/// index.insert("B", 2);
/// index.insert("A", 1);
/// index.insert("C", 3);
///
/// let keys: Vec<_> = index.records().map(|(k, _)| *k).collect();
/// assert_eq!(keys, ["A", "B", "C"]);
///
/// let range: Vec<_> = index.range_records(&"A", &"B").map(|(_, v)| *v).collect();
/// assert_eq!(range, [1, 2]);
/// ```
pub struct OrderedIndex<K, V> {
    root: Link<K, V>,

    /// Number of records (nodes) currently stored.
    len: usize,

    /// Operation counters.
    stats: IndexStats,
}

impl<K, V> OrderedIndex<K, V> {
    /// Create an empty index.
    pub fn new() -> Self {
        Self {
            root: None,
            len: 0,
            stats: IndexStats::new(),
        }
    }

    /// Number of records in the index.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the index holds no records.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the tree (0 when empty, 1 for a single record).
    #[inline]
    pub fn height(&self) -> usize {
        node::height(&self.root) as usize
    }

    /// Operation counters for this index.
    pub fn stats(&self) -> &IndexStats {
        &self.stats
    }

    /// Drop every record. Counters are kept.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// All records in ascending key order.
    ///
    /// The iterator is lazy and can be created any number of times; each
    /// call starts a fresh traversal of the current tree.
    pub fn records(&self) -> Records<'_, K, V> {
        Records::new(self.root.as_deref(), self.len, self.height())
    }

    /// Record with the smallest key.
    pub fn first(&self) -> Option<(&K, &V)> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some((&node.key, &node.payload))
    }

    /// Record with the largest key.
    pub fn last(&self) -> Option<(&K, &V)> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some((&node.key, &node.payload))
    }
}

impl<K: Ord, V> OrderedIndex<K, V> {
    /// Insert a record.
    ///
    /// Returns `true` if a new record was created. If `key` is already
    /// present nothing changes (no payload update, no rebalancing) and
    /// `false` is returned.
    pub fn insert(&mut self, key: K, payload: V) -> bool {
        let inserted = node::insert(&mut self.root, key, payload, &self.stats);
        if inserted {
            self.len += 1;
            IndexStats::bump(&self.stats.inserts);
        } else {
            IndexStats::bump(&self.stats.duplicate_inserts);
            debug!("duplicate key ignored");
        }
        inserted
    }

    /// Remove the record for `key`.
    ///
    /// Returns `true` if a record was removed; an absent key is a no-op.
    pub fn remove(&mut self, key: &K) -> bool {
        let removed = node::remove(&mut self.root, key, &self.stats);
        if removed {
            self.len -= 1;
            IndexStats::bump(&self.stats.removes);
        } else {
            IndexStats::bump(&self.stats.missed_removes);
            debug!("remove of absent key ignored");
        }
        removed
    }

    /// Look up the payload stored for `key`.
    pub fn find(&self, key: &K) -> Option<&V> {
        IndexStats::bump(&self.stats.lookups);
        node::find(&self.root, key).map(|node| &node.payload)
    }

    /// Returns `true` if `key` is present.
    pub fn contains_key(&self, key: &K) -> bool {
        node::find(&self.root, key).is_some()
    }

    /// Records with `low <= key <= high`, in ascending key order.
    ///
    /// An inverted range (`low > high`) yields nothing.
    pub fn range_records<'a>(&'a self, low: &K, high: &'a K) -> RangeRecords<'a, K, V> {
        RangeRecords::new(self.root.as_deref(), low, high, self.height())
    }
}

impl<K: Ord + fmt::Debug, V> OrderedIndex<K, V> {
    /// Audit every tree invariant.
    ///
    /// This walks the whole tree and is meant for tests and debugging. A
    /// returned error always indicates a bug in the index itself.
    pub fn validate(&self) -> Result<()> {
        let counted = check_subtree(&self.root)?;
        if counted != self.len {
            return Err(Error::LengthMismatch {
                recorded: self.len,
                counted,
            });
        }

        let mut previous: Option<&K> = None;
        for (key, _) in self.records() {
            if let Some(prev) = previous {
                if prev >= key {
                    return Err(Error::OutOfOrder {
                        previous: format!("{:?}", prev),
                        current: format!("{:?}", key),
                    });
                }
            }
            previous = Some(key);
        }
        Ok(())
    }
}

/// Check heights and balance factors bottom-up, returning the node count.
fn check_subtree<K: fmt::Debug, V>(link: &Link<K, V>) -> Result<usize> {
    let Some(current) = link else {
        return Ok(0);
    };
    let count = 1 + check_subtree(&current.left)? + check_subtree(&current.right)?;

    let actual = 1 + node::height(&current.left).max(node::height(&current.right));
    if current.height != actual {
        return Err(Error::HeightMismatch {
            key: format!("{:?}", current.key),
            cached: current.height,
            actual,
        });
    }

    let balance_factor = current.balance_factor();
    if balance_factor.abs() > MAX_BALANCE_FACTOR {
        return Err(Error::Unbalanced {
            key: format!("{:?}", current.key),
            balance_factor,
        });
    }
    Ok(count)
}

impl<K, V> Default for OrderedIndex<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for OrderedIndex<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.records()).finish()
    }
}

impl<'a, K, V> IntoIterator for &'a OrderedIndex<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Records<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.records()
    }
}

/// Bulk insert; as with [`OrderedIndex::insert`], the first payload seen for
/// a key wins.
impl<K: Ord, V> Extend<(K, V)> for OrderedIndex<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, payload) in iter {
            self.insert(key, payload);
        }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for OrderedIndex<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut index = Self::new();
        index.extend(iter);
        index
    }
}
