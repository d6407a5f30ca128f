//! Error types for CatalogDB.

use thiserror::Error as ThisError;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
/// This is a common Rust pattern (see `std::io::Result`).
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in CatalogDB.
///
/// Index operations themselves never fail: a missing key or an inverted
/// range is an ordinary empty result. The variants below are produced only
/// by [`OrderedIndex::validate`](crate::index::OrderedIndex::validate) and
/// describe a broken tree invariant, which always means a bug in the index.
///
/// Keys are rendered with `Debug` so the error stays free of generics.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// In-order traversal produced a key that is not strictly greater than
    /// its predecessor (ordering or uniqueness violated).
    #[error("key {current} is not greater than preceding key {previous}")]
    OutOfOrder { previous: String, current: String },

    /// A node's cached height disagrees with its children.
    #[error("node {key} caches height {cached} but its subtree has height {actual}")]
    HeightMismatch {
        key: String,
        cached: i32,
        actual: i32,
    },

    /// A node's subtrees differ in height by more than one.
    #[error("node {key} has balance factor {balance_factor}")]
    Unbalanced { key: String, balance_factor: i32 },

    /// The tracked record count disagrees with the number of nodes.
    #[error("index records {recorded} entries but holds {counted} nodes")]
    LengthMismatch { recorded: usize, counted: usize },
}
