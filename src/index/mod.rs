//! Index structures.
//!
//! # Components
//! - [`OrderedIndex`] - AVL-balanced ordered index with range scans
//! - [`CatalogEntry`] / [`CatalogIndex`] - the catalog record payload
//! - [`IndexStats`] - Operation counters

pub mod avl;
mod entry;
mod stats;

pub use avl::{OrderedIndex, RangeRecords, Records};
pub use entry::{CatalogEntry, CatalogIndex};
pub use stats::{IndexStats, IndexStatsSnapshot};
