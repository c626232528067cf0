// crates/streetmap-core/src/common.rs
use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for a built catalog.
///
/// Returned by [`crate::LocationCatalog::stats`]. `eligible` counts the
/// nodes handed to the nearest-neighbour primitive, `coordinates` the
/// distinct coordinates among them (lower when nodes collide).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub nodes: usize,
    pub named: usize,
    pub distinct_names: usize,
    pub eligible: usize,
    pub coordinates: usize,
}
