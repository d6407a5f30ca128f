//! Index statistics tracking.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Statistics tracked by an [`OrderedIndex`](crate::index::OrderedIndex).
///
/// All fields are atomic so read-only operations (`find`) can count
/// themselves through `&self`. Counters never influence index behavior.
///
/// # Memory Ordering
/// We use `Ordering::Relaxed` for all operations because:
/// - We only need atomicity (no partial updates)
/// - Counters are independent of each other
///
/// # Example
/// ```
/// use catalogdb::IndexStats;
/// use std::sync::atomic::Ordering;
///
/// let stats = IndexStats::new();
/// stats.lookups.fetch_add(1, Ordering::Relaxed);
/// assert_eq!(stats.lookups.load(Ordering::Relaxed), 1);
/// ```
#[derive(Debug)]
pub struct IndexStats {
    /// Number of inserts that created a new node.
    pub inserts: AtomicU64,

    /// Number of inserts ignored because the key already existed.
    pub duplicate_inserts: AtomicU64,

    /// Number of removes that spliced a node out.
    pub removes: AtomicU64,

    /// Number of removes for a key that was not present.
    pub missed_removes: AtomicU64,

    /// Number of point lookups.
    pub lookups: AtomicU64,

    /// Number of single rotations (a double rotation counts twice).
    pub rotations: AtomicU64,
}

impl IndexStats {
    /// Create a new stats tracker with all counters at zero.
    pub fn new() -> Self {
        Self {
            inserts: AtomicU64::new(0),
            duplicate_inserts: AtomicU64::new(0),
            removes: AtomicU64::new(0),
            missed_removes: AtomicU64::new(0),
            lookups: AtomicU64::new(0),
            rotations: AtomicU64::new(0),
        }
    }

    #[inline]
    pub(crate) fn bump(counter: &AtomicU64) {
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Average rotations per structural change (0.0 when nothing changed).
    pub fn rotations_per_mutation(&self) -> f64 {
        self.snapshot().rotations_per_mutation()
    }

    /// Get a snapshot of current statistics.
    ///
    /// This returns a non-atomic copy for display/logging.
    pub fn snapshot(&self) -> IndexStatsSnapshot {
        IndexStatsSnapshot {
            inserts: self.inserts.load(Ordering::Relaxed),
            duplicate_inserts: self.duplicate_inserts.load(Ordering::Relaxed),
            removes: self.removes.load(Ordering::Relaxed),
            missed_removes: self.missed_removes.load(Ordering::Relaxed),
            lookups: self.lookups.load(Ordering::Relaxed),
            rotations: self.rotations.load(Ordering::Relaxed),
        }
    }

    /// Reset all counters to zero.
    pub fn reset(&self) {
        self.inserts.store(0, Ordering::Relaxed);
        self.duplicate_inserts.store(0, Ordering::Relaxed);
        self.removes.store(0, Ordering::Relaxed);
        self.missed_removes.store(0, Ordering::Relaxed);
        self.lookups.store(0, Ordering::Relaxed);
        self.rotations.store(0, Ordering::Relaxed);
    }
}

impl Default for IndexStats {
    fn default() -> Self {
        Self::new()
    }
}

/// A point-in-time snapshot of index statistics.
///
/// Unlike `IndexStats`, this is not atomic and can be safely
/// printed, compared, etc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IndexStatsSnapshot {
    pub inserts: u64,
    pub duplicate_inserts: u64,
    pub removes: u64,
    pub missed_removes: u64,
    pub lookups: u64,
    pub rotations: u64,
}

impl IndexStatsSnapshot {
    /// Average rotations per structural change (0.0 when nothing changed).
    pub fn rotations_per_mutation(&self) -> f64 {
        let mutations = self.inserts + self.removes;
        if mutations == 0 {
            0.0
        } else {
            self.rotations as f64 / mutations as f64
        }
    }
}

impl fmt::Display for IndexStatsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ inserts: {}, duplicates: {}, removes: {}, missed: {}, lookups: {}, rotations: {} }}",
            self.inserts,
            self.duplicate_inserts,
            self.removes,
            self.missed_removes,
            self.lookups,
            self.rotations
        )
    }
}
