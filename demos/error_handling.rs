//! Error handling example for streetmap-rs
//!
//! This example demonstrates the two error policies of the catalog and the
//! failures a dataset load can produce.

use streetmap_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== streetmap-rs Error Handling Example ===\n");

    // Example 1: Loading a dataset that does not exist
    println!("--- Example 1: Loading a missing dataset ---");
    match DefaultCatalog::load_from_path("does-not-exist.json.gz") {
        Ok(_) => println!("✓ Loaded (unexpected)"),
        Err(e) => println!("✗ Failed to load dataset: {e}"),
    }
    println!();

    let catalog = DefaultCatalog::build(
        vec![
            Node::new(1, 0.0, 0.0).named("Main Street"),
            Node::new(2, 1.0, 1.0).named("Maine Ave"),
        ],
        |_| true,
    );

    // Example 2: A prefix miss is just an empty result
    println!("--- Example 2: Prefix with no matches ---");
    let names = catalog.names_by_prefix("zzz");
    println!("  {} names found", names.len());
    println!();

    // Example 3: An exact-name miss is an error
    println!("--- Example 3: Exact name with no match ---");
    match catalog.entities_by_exact_name("Nonexistent Place") {
        Ok(records) => println!("  Found {} locations", records.len()),
        Err(e) if e.is_not_found() => println!("  Not found: {e}"),
        Err(e) => return Err(e),
    }
    println!();

    // Example 4: Nearest on a catalog with no eligible nodes
    println!("--- Example 4: Nearest with nothing eligible ---");
    let isolated = DefaultCatalog::build(vec![Node::new(9, 0.0, 0.0)], |_| false);
    match isolated.nearest_to(0.0, 0.0) {
        Ok(id) => println!("  Node {id}"),
        Err(e) => println!("  {e}"),
    }
    println!();

    // Example 5: Non-finite query coordinate
    println!("--- Example 5: Nearest to a NaN longitude ---");
    match catalog.nearest_to(f64::NAN, 0.0) {
        Ok(id) => println!("  Node {id}"),
        Err(e) => println!("  {e}"),
    }

    Ok(())
}
