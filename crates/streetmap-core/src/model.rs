// crates/streetmap-core/src/model.rs
use crate::point::Coordinate;
use serde::{Deserialize, Serialize};

/// Identifier of a graph node, as assigned by the map source.
pub type NodeId = i64;

/// A located, optionally named graph node.
///
/// Nodes are consumed by the catalog as-is and never mutated after it is built.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub lon: f64,
    pub lat: f64,
    #[serde(default)]
    pub name: Option<String>,
}

impl Node {
    pub fn new(id: NodeId, lon: f64, lat: f64) -> Self {
        Self {
            id,
            lon,
            lat,
            name: None,
        }
    }

    /// Builder-style helper used by tests and demos.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// `(lon, lat)` as a map-space coordinate.
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lon, self.lat)
    }
}

/// A location returned by an exact-name lookup.
///
/// Serializes to `{"lat", "lon", "name", "id"}`, the shape downstream
/// layers hand to clients.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    pub lat: f64,
    pub lon: f64,
    pub name: String,
    pub id: NodeId,
}

impl LocationRecord {
    /// `None` for unnamed nodes; they never appear in name lookups.
    pub fn from_node(node: &Node) -> Option<Self> {
        node.name.as_ref().map(|name| Self {
            lat: node.lat,
            lon: node.lon,
            name: name.clone(),
            id: node.id,
        })
    }
}
