//! Catalog record payload.

use std::fmt;

use crate::index::OrderedIndex;

/// An index keyed by catalog number (e.g. an ISBN) holding [`CatalogEntry`]s.
pub type CatalogIndex = OrderedIndex<String, CatalogEntry>;

/// The two descriptive fields stored alongside a catalog key.
///
/// # Example
/// ```
/// use catalogdb::{CatalogEntry, CatalogIndex};
///
/// let mut catalog = CatalogIndex::new();
/// catalog.insert(
///     "978-0-201-63361-0".to_string(),
///     CatalogEntry::new("Effective C++", "Scott Meyers"),
/// );
///
/// let entry = catalog.find(&"978-0-201-63361-0".to_string()).unwrap();
/// assert_eq!(entry.author, "Scott Meyers");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct CatalogEntry {
    pub title: String,
    pub author: String,
}

impl CatalogEntry {
    /// Create a new entry.
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
        }
    }
}

impl fmt::Display for CatalogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Title: {}, Author: {}", self.title, self.author)
    }
}
