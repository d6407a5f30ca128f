//! CatalogDB - An in-memory catalog index backed by a height-balanced search tree.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                           CatalogDB                             │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                  Index Layer (index/)                    │   │
//! │  │   OrderedIndex<K, V>  ──  AVL tree, owned Box links      │   │
//! │  │   insert | remove | find | records | range_records       │   │
//! │  │   CatalogIndex = OrderedIndex<String, CatalogEntry>      │   │
//! │  │   IndexStats (atomic counters)                           │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                Shared Primitives (common/)               │   │
//! │  │            Error + Result, config constants              │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (Error, config)
//! - [`index`] - Index structures (AVL ordered index)
//!
//! The library never prints. Diagnostics go through `tracing` and only reach
//! a subscriber installed by the embedding program.
//!
//! # Quick Start
//! ```
//! use catalogdb::{CatalogEntry, CatalogIndex};
//!
//! let mut catalog = CatalogIndex::new();
//! catalog.insert("978-1".to_string(), CatalogEntry::new("Title A", "Author A"));
//! catalog.insert("978-2".to_string(), CatalogEntry::new("Title B", "Author B"));
//!
//! let low = "978-0".to_string();
//! let high = "978-1".to_string();
//! assert_eq!(catalog.range_records(&low, &high).count(), 1);
//! ```

pub mod common;
pub mod index;

// Re-export commonly used items at crate root for convenience
pub use common::{Error, Result};
pub use index::{CatalogEntry, CatalogIndex, IndexStats, IndexStatsSnapshot, OrderedIndex};
