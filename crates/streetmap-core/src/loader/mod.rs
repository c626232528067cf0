// crates/streetmap-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (file I/O, optional gzip) and turns a
//! [`MapDataset`] document into a [`StreetGraph`].

use crate::catalog::LocationCatalog;
use crate::error::Result;
use crate::graph::StreetGraph;
use crate::point::NearestPoint;
use std::io::Read;
use std::path::Path;
use tracing::info;

mod common_io;
mod dataset;

pub use common_io::is_gzip;
pub use dataset::MapDataset;

impl StreetGraph {
    /// Load a graph from a JSON dataset file (`.json` or, with the `compact`
    /// feature, `.json.gz`).
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let reader = common_io::open_stream(path)?;
        let graph = Self::from_reader(reader)?;
        info!(
            path = %path.display(),
            nodes = graph.nodes().len(),
            edges = graph.edge_count(),
            "map dataset loaded"
        );
        Ok(graph)
    }

    /// Parse an uncompressed JSON dataset from `reader`.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let dataset: MapDataset = serde_json::from_reader(reader)?;
        Self::from_dataset(dataset)
    }

    pub fn from_dataset(dataset: MapDataset) -> Result<Self> {
        let mut graph = StreetGraph::new();
        for node in dataset.nodes {
            graph.add_node(node);
        }
        for (a, b) in dataset.edges {
            graph.add_edge(a, b)?;
        }
        Ok(graph)
    }
}

impl<P: NearestPoint> LocationCatalog<P> {
    /// Load a dataset and index it, treating connected nodes as eligible.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let graph = StreetGraph::load_from_path(path)?;
        Ok(Self::from_graph(&graph))
    }
}
