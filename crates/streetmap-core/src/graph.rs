// crates/streetmap-core/src/graph.rs
use crate::error::{MapError, Result};
use crate::model::{Node, NodeId};
use std::collections::HashMap;

/// Minimal undirected street graph: the node snapshot a catalog is built
/// from, plus enough adjacency to tell connected nodes from isolated ones.
#[derive(Debug, Default, Clone)]
pub struct StreetGraph {
    nodes: Vec<Node>,
    positions: HashMap<NodeId, usize>,
    adjacency: HashMap<NodeId, Vec<NodeId>>,
}

impl StreetGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `node`. A node with an id already present replaces the old one
    /// in place.
    pub fn add_node(&mut self, node: Node) {
        match self.positions.get(&node.id) {
            Some(&pos) => self.nodes[pos] = node,
            None => {
                self.positions.insert(node.id, self.nodes.len());
                self.nodes.push(node);
            }
        }
    }

    /// Connects `a` and `b` in both directions. Both must already exist.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) -> Result<()> {
        for id in [a, b] {
            if !self.positions.contains_key(&id) {
                return Err(MapError::InvalidDataset(format!(
                    "edge ({a}, {b}) references unknown node {id}"
                )));
            }
        }
        self.adjacency.entry(a).or_default().push(b);
        self.adjacency.entry(b).or_default().push(a);
        Ok(())
    }

    /// All nodes, in insertion order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.positions.get(&id).map(|&pos| &self.nodes[pos])
    }

    pub fn neighbors(&self, id: NodeId) -> &[NodeId] {
        self.adjacency.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn degree(&self, id: NodeId) -> usize {
        self.neighbors(id).len()
    }

    /// The default eligibility rule for nearest-node queries: isolated nodes
    /// cannot start or end a route, so they are skipped.
    pub fn has_neighbors(&self, id: NodeId) -> bool {
        self.degree(id) > 0
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }
}
