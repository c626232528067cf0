// crates/streetmap-core/src/loader/dataset.rs
use crate::model::{Node, NodeId};
use serde::{Deserialize, Serialize};

/// On-disk map dataset.
///
/// ```json
/// { "nodes": [ {"id": 1, "lon": -122.25, "lat": 37.87, "name": "Main Street"} ],
///   "edges": [ [1, 2] ] }
/// ```
///
/// Edges are undirected; `name` and `edges` may be omitted.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct MapDataset {
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<(NodeId, NodeId)>,
}
