//! Bookstore walkthrough for the catalog index.
//!
//! All formatting happens here; the index only returns data.
//! Set `RUST_LOG=catalogdb=trace` to see rotations.

use catalogdb::{CatalogEntry, CatalogIndex};
use tracing_subscriber::{fmt, EnvFilter};

fn print_records<'a>(records: impl Iterator<Item = (&'a String, &'a CatalogEntry)>) {
    for (isbn, entry) in records {
        println!("ISBN: {}, {}", isbn, entry);
    }
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).with_target(false).init();

    let mut catalog = CatalogIndex::new();
    catalog.insert(
        "978-3-16-148410-0".to_string(),
        CatalogEntry::new("The C++ Programming Language", "Bjarne Stroustrup"),
    );
    catalog.insert(
        "978-0-201-63361-0".to_string(),
        CatalogEntry::new("Effective C++", "Scott Meyers"),
    );
    catalog.insert(
        "978-1-59327-599-1".to_string(),
        CatalogEntry::new("Clean Code", "Robert C. Martin"),
    );

    println!("All books in sorted order:");
    print_records(catalog.records());

    let wanted = "978-3-16-148410-0".to_string();
    println!("\nSearching for book with ISBN {}:", wanted);
    match catalog.find(&wanted) {
        Some(entry) => println!("Book found: ISBN: {}, {}", wanted, entry),
        None => println!("Book not found."),
    }

    let removed = "978-0-201-63361-0".to_string();
    println!("\nRemoving book with ISBN {}:", removed);
    catalog.remove(&removed);

    println!("\nAll books in sorted order after removal:");
    print_records(catalog.records());

    let low = "978-0-201-63300-0".to_string();
    let high = "978-3-16-148410-0".to_string();
    println!("\nBooks between ISBNs {} and {}:", low, high);
    print_records(catalog.range_records(&low, &high));

    println!("\n{}", catalog.stats().snapshot());
}
