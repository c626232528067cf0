//! Basic usage example for streetmap-rs
//!
//! This example demonstrates how to:
//! - Build a small street graph by hand
//! - Index it into a location catalog
//! - Run prefix, exact-name and nearest-node queries

use streetmap_rs::prelude::*;

fn sample_graph() -> Result<StreetGraph> {
    let mut graph = StreetGraph::new();
    graph.add_node(Node::new(1, -122.2585, 37.8716).named("Sather Gate"));
    graph.add_node(Node::new(2, -122.2590, 37.8700).named("Telegraph Ave"));
    graph.add_node(Node::new(3, -122.2600, 37.8690));
    graph.add_node(Node::new(4, -122.2680, 37.8700).named("Shattuck Ave"));
    graph.add_node(Node::new(5, -122.2530, 37.8690).named("Telegraph Ave"));
    graph.add_node(Node::new(6, -122.2700, 37.8800).named("Peet's Coffee"));
    graph.add_edge(2, 3)?;
    graph.add_edge(3, 4)?;
    graph.add_edge(2, 5)?;
    Ok(graph)
}

fn main() -> Result<()> {
    println!("=== streetmap-rs Basic Usage Example ===\n");

    let graph = sample_graph()?;
    let catalog = DefaultCatalog::from_graph(&graph);
    let stats = catalog.stats();
    println!(
        "✓ Catalog built: {} nodes, {} named, {} eligible for nearest\n",
        stats.nodes, stats.named, stats.eligible
    );

    // Example 1: Prefix search
    println!("--- Example 1: Names starting with \"tel\" ---");
    for name in catalog.names_by_prefix("tel") {
        println!("  {name}");
    }
    println!();

    // Example 2: Exact name lookup (case and punctuation ignored)
    println!("--- Example 2: Locations named \"PEETS coffee\" ---");
    for r in catalog.entities_by_exact_name("PEETS coffee")? {
        println!("  #{} {} at ({}, {})", r.id, r.name, r.lon, r.lat);
    }
    println!();

    // Example 3: Nearest connected node
    println!("--- Example 3: Nearest node to Sather Gate ---");
    let id = catalog.nearest_to(-122.2585, 37.8716)?;
    println!("  Node {id} (Sather Gate itself has no edges, so it is skipped)");

    Ok(())
}
