//! streetmap prelude: bring common types and traits into scope for demos and the CLI.

#![allow(unused_imports)]

pub use crate::catalog::{DefaultCatalog, LocationCatalog};
pub use crate::common::CatalogStats;
pub use crate::error::{MapError, Result};
pub use crate::graph::StreetGraph;
pub use crate::model::{LocationRecord, Node, NodeId};
pub use crate::point::{Coordinate, DefaultPointSet, NaivePointSet, NearestPoint};
pub use crate::text::{clean_name, equals_cleaned};
pub use crate::traits::{LocationSearch, NameMatch};
pub use crate::trie::PrefixIndex;
