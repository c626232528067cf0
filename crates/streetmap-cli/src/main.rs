//! streetmap: command-line interface for streetmap-core
//!
//! Loads a map dataset, builds the location catalog, and runs one query.
//!
//! Usage examples
//! --------------
//!
//! - Show catalog stats
//!   $ streetmap -i berkeley.json.gz stats
//!
//! - Nearest connected node to a coordinate
//!   $ streetmap -i berkeley.json.gz nearest -122.2585 37.8716
//!
//! - Names starting with a prefix
//!   $ streetmap -i berkeley.json.gz prefix "tele"
//!
//! - Every location with an exact name, as JSON
//!   $ streetmap -i berkeley.json.gz --json locate "Telegraph Ave"
//!
//! Set `STREETMAP_INPUT` to skip `-i`, and `RUST_LOG=debug` to see build
//! and load diagnostics on stderr.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use streetmap_core::prelude::*;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = CliArgs::parse();

    let input = args
        .input
        .context("no dataset given: pass --input <path> or set STREETMAP_INPUT")?;
    let catalog = DefaultCatalog::load_from_path(&input)
        .with_context(|| format!("failed to load {input}"))?;
    debug!(input = %input, command = ?args.command, "catalog ready");

    match args.command {
        Commands::Stats => {
            let stats = catalog.stats();
            if args.json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("Catalog statistics:");
                println!("  Nodes: {}", stats.nodes);
                println!("  Named nodes: {}", stats.named);
                println!("  Distinct names: {}", stats.distinct_names);
                println!("  Eligible for nearest: {}", stats.eligible);
                println!("  Distinct coordinates: {}", stats.coordinates);
            }
        }

        Commands::Nearest { lon, lat } => {
            let node = catalog.closest_node(lon, lat)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(node)?);
            } else {
                match node.name() {
                    Some(name) => println!("{} ({}, {}) {name}", node.id, node.lon, node.lat),
                    None => println!("{} ({}, {})", node.id, node.lon, node.lat),
                }
            }
        }

        Commands::Prefix { prefix } => {
            let names = catalog.names_by_prefix(&prefix);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&names)?);
            } else if names.is_empty() {
                println!("No locations found starting with: {prefix}");
            } else {
                for name in names {
                    println!("{name}");
                }
            }
        }

        Commands::Locate { name } => match catalog.entities_by_exact_name(&name) {
            Ok(records) => {
                if args.json {
                    println!("{}", serde_json::to_string_pretty(&records)?);
                } else {
                    for r in records {
                        println!("{} - {} ({}, {})", r.id, r.name, r.lon, r.lat);
                    }
                }
            }
            Err(e) if e.is_not_found() => {
                eprintln!("No location found for: {name}");
                std::process::exit(1);
            }
            Err(e) => return Err(e.into()),
        },
    }

    Ok(())
}
