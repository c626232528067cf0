// crates/streetmap-core/src/lib.rs

//! # streetmap-core
//!
//! Location search over a street-map graph that has already been loaded:
//!
//! - the graph node nearest to an arbitrary coordinate,
//! - every location name starting with a prefix,
//! - every location record for an exact name.
//!
//! Names are matched on their cleaned form (ASCII letters and spaces,
//! lowercased), see [`text::clean_name`].
//!
//! ```rust
//! use streetmap_core::prelude::*;
//!
//! let nodes = vec![
//!     Node::new(1, 0.0, 0.0).named("Main Street"),
//!     Node::new(2, 1.0, 1.0).named("Maine Ave"),
//! ];
//! let catalog = DefaultCatalog::build(nodes, |_| true);
//!
//! assert_eq!(catalog.names_by_prefix("MAI"), vec!["Main Street", "Maine Ave"]);
//! assert_eq!(catalog.entities_by_exact_name("main street")?[0].id, 1);
//! assert_eq!(catalog.nearest_to(0.9, 0.8)?, 2);
//! # Ok::<(), MapError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod catalog;
pub mod common;
pub mod coord_index;
pub mod error;
pub mod graph;
#[cfg(feature = "json")]
pub mod loader; // JSON datasets
pub mod model;
pub mod point;
pub mod prelude;
pub mod search; // LocationSearch impl for LocationCatalog
pub mod text;
pub mod traits;
pub mod trie;

// Re-exports
pub use crate::catalog::{DefaultCatalog, LocationCatalog};
pub use crate::common::CatalogStats;
pub use crate::coord_index::CoordinateIndex;
pub use crate::error::{MapError, Result};
pub use crate::graph::StreetGraph;
pub use crate::model::{LocationRecord, Node, NodeId};
pub use crate::point::{Coordinate, DefaultPointSet, NaivePointSet, NearestPoint};
#[cfg(feature = "rtree")]
pub use crate::point::RTreePointSet;
// Export the Search Trait (Crucial for users!)
pub use crate::traits::{LocationSearch, NameMatch};
pub use crate::trie::PrefixIndex;
