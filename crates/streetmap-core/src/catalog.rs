// crates/streetmap-core/src/catalog.rs

//! # Location Catalog
//!
//! Built once from a node snapshot, queried many times afterwards. All
//! structures are filled during [`LocationCatalog::build`] and never written
//! again, so a built catalog can be shared across threads without locking.

use crate::common::CatalogStats;
use crate::coord_index::CoordinateIndex;
use crate::error::Result;
use crate::graph::StreetGraph;
use crate::model::Node;
use crate::point::{DefaultPointSet, NearestPoint};
use crate::text::clean_name;
use crate::trie::PrefixIndex;
use std::collections::HashMap;
use tracing::debug;

/// Read-side location index over a street-map graph.
///
/// `P` is the nearest-neighbour primitive; see [`DefaultCatalog`] for the
/// usual choice.
#[derive(Debug)]
pub struct LocationCatalog<P: NearestPoint = DefaultPointSet> {
    /// Every node handed to `build`, in input order.
    pub(crate) nodes: Vec<Node>,
    /// Cleaned names of all named nodes.
    pub(crate) names: PrefixIndex,
    /// Cleaned name -> positions in `nodes`, in input order.
    pub(crate) groups: HashMap<String, Vec<usize>>,
    pub(crate) coords: CoordinateIndex,
    pub(crate) points: P,
    eligible: usize,
}

/// Catalog using the crate's default nearest-neighbour primitive.
pub type DefaultCatalog = LocationCatalog<DefaultPointSet>;

impl<P: NearestPoint> LocationCatalog<P> {
    /// Index `nodes`.
    ///
    /// Every node with a name is indexed by its cleaned name. Only nodes for
    /// which `eligible` returns `true` take part in nearest-node queries;
    /// unnamed eligible nodes are still reachable that way.
    pub fn build<F>(nodes: Vec<Node>, eligible: F) -> Self
    where
        F: Fn(&Node) -> bool,
    {
        let mut names = PrefixIndex::new();
        let mut groups: HashMap<String, Vec<usize>> = HashMap::new();

        for (pos, node) in nodes.iter().enumerate() {
            if let Some(name) = node.name() {
                let key = clean_name(name);
                names.insert(&key);
                groups.entry(key).or_default().push(pos);
            }
        }

        let eligible_nodes: Vec<&Node> = nodes.iter().filter(|n| eligible(*n)).collect();
        let coords = CoordinateIndex::build(eligible_nodes.iter().copied());
        let points = P::from_points(coords.coordinates().collect());

        let catalog = Self {
            eligible: eligible_nodes.len(),
            nodes,
            names,
            groups,
            coords,
            points,
        };

        let stats = catalog.stats();
        debug!(
            nodes = stats.nodes,
            named = stats.named,
            distinct_names = stats.distinct_names,
            eligible = stats.eligible,
            coordinates = stats.coordinates,
            "location catalog built"
        );
        catalog
    }

    /// Index every node of `graph`, with only connected nodes eligible for
    /// nearest-node queries.
    pub fn from_graph(graph: &StreetGraph) -> Self {
        Self::build(graph.nodes().to_vec(), |n| graph.has_neighbors(n.id))
    }

    /// The eligible node closest to `(lon, lat)`.
    pub fn closest_node(&self, lon: f64, lat: f64) -> Result<&Node> {
        self.coords.nearest_entity(lon, lat, &self.points)
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            nodes: self.nodes.len(),
            named: self.groups.values().map(Vec::len).sum(),
            distinct_names: self.names.len(),
            eligible: self.eligible,
            coordinates: self.coords.len(),
        }
    }

    /// All nodes the catalog was built from, in input order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// The cleaned-name prefix index.
    pub fn prefix_index(&self) -> &PrefixIndex {
        &self.names
    }

    /// The coordinate index over eligible nodes.
    pub fn coordinate_index(&self) -> &CoordinateIndex {
        &self.coords
    }

    /// Nodes whose cleaned name is exactly `key`. `key` must already be cleaned.
    pub(crate) fn group(&self, key: &str) -> Option<impl Iterator<Item = &Node> + '_> {
        self.groups
            .get(key)
            .map(|positions| positions.iter().map(|&pos| &self.nodes[pos]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::NaivePointSet;

    fn nodes() -> Vec<Node> {
        vec![
            Node::new(1, 0.0, 0.0).named("Main Street"),
            Node::new(2, 1.0, 1.0).named("Maine Ave"),
            Node::new(3, 2.0, 2.0).named("main street!"),
            Node::new(4, 3.0, 3.0),
        ]
    }

    #[test]
    fn groups_and_trie_hold_the_same_keys() {
        let catalog = LocationCatalog::<NaivePointSet>::build(nodes(), |_| true);

        let mut from_groups: Vec<_> = catalog.groups.keys().cloned().collect();
        from_groups.sort();
        let from_trie: Vec<_> = catalog.names.words().collect();
        assert_eq!(from_groups, from_trie);
    }

    #[test]
    fn groups_keep_input_order() {
        let catalog = LocationCatalog::<NaivePointSet>::build(nodes(), |_| true);
        let ids: Vec<_> = catalog.group("main street").unwrap().map(|n| n.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn eligibility_limits_the_coordinate_index_only() {
        let catalog = LocationCatalog::<NaivePointSet>::build(nodes(), |n| n.id != 2);

        let stats = catalog.stats();
        assert_eq!(stats.nodes, 4);
        assert_eq!(stats.named, 3);
        assert_eq!(stats.distinct_names, 2);
        assert_eq!(stats.eligible, 3);
        assert_eq!(stats.coordinates, 3);

        // Node 2 is still findable by name but never returned as nearest.
        assert!(catalog.group("maine ave").is_some());
        assert_eq!(catalog.closest_node(0.9, 0.9).unwrap().id, 1);
    }
}
