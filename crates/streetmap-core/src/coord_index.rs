// crates/streetmap-core/src/coord_index.rs
use crate::error::{MapError, Result};
use crate::model::Node;
use crate::point::{Coordinate, NearestPoint};
use std::collections::HashMap;
use tracing::warn;

/// Exact map from coordinate to the node located there.
///
/// Nodes sharing a bit-identical coordinate occupy a single slot: the one
/// inserted last wins and the earlier ones become unreachable through this
/// index. Collisions are counted and logged, not rejected.
#[derive(Debug, Default)]
pub struct CoordinateIndex {
    by_coordinate: HashMap<Coordinate, Node>,
    /// Distinct coordinates in first-insertion order.
    order: Vec<Coordinate>,
    collisions: usize,
}

impl CoordinateIndex {
    pub fn build<'a, I>(nodes: I) -> Self
    where
        I: IntoIterator<Item = &'a Node>,
    {
        let mut index = CoordinateIndex::default();
        for node in nodes {
            let coordinate = node.coordinate();
            match index.by_coordinate.insert(coordinate, node.clone()) {
                None => index.order.push(coordinate),
                Some(shadowed) => {
                    warn!(
                        kept = node.id,
                        shadowed = shadowed.id,
                        lon = node.lon,
                        lat = node.lat,
                        "two nodes share one coordinate; keeping the later one"
                    );
                    index.collisions += 1;
                }
            }
        }
        index
    }

    /// The node stored at exactly `coordinate`.
    pub fn resolve(&self, coordinate: Coordinate) -> Result<&Node> {
        self.by_coordinate
            .get(&coordinate)
            .ok_or(MapError::UnknownCoordinate {
                lon: coordinate.x,
                lat: coordinate.y,
            })
    }

    /// Ask `primitive` for the closest coordinate and resolve it to a node.
    ///
    /// `primitive` must have been built from [`CoordinateIndex::coordinates`]
    /// of this index, otherwise resolution may fail with
    /// [`MapError::UnknownCoordinate`]. A NaN or infinite `lon`/`lat` is
    /// rejected with [`MapError::InvalidQuery`] before the primitive is asked.
    pub fn nearest_entity<P>(&self, lon: f64, lat: f64, primitive: &P) -> Result<&Node>
    where
        P: NearestPoint + ?Sized,
    {
        if !lon.is_finite() || !lat.is_finite() {
            return Err(MapError::InvalidQuery { lon, lat });
        }
        let coordinate = primitive
            .nearest(lon, lat)
            .ok_or(MapError::EmptyPointSet)?;
        self.resolve(coordinate)
    }

    /// The distinct coordinates held by the index, in the order each was
    /// first inserted.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.order.iter().copied()
    }

    /// Number of distinct coordinates.
    pub fn len(&self) -> usize {
        self.by_coordinate.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_coordinate.is_empty()
    }

    /// How many inserts replaced an earlier node at the same coordinate.
    pub fn collisions(&self) -> usize {
        self.collisions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::NaivePointSet;

    #[test]
    fn later_node_wins_on_shared_coordinate() {
        let nodes = vec![
            Node::new(1, 2.0, 3.0).named("First"),
            Node::new(2, 2.0, 3.0).named("Second"),
            Node::new(3, 5.0, 5.0),
        ];
        let index = CoordinateIndex::build(&nodes);

        assert_eq!(index.len(), 2);
        assert_eq!(index.collisions(), 1);
        assert_eq!(index.resolve(Coordinate::new(2.0, 3.0)).unwrap().id, 2);
    }

    #[test]
    fn resolve_foreign_coordinate_fails() {
        let nodes = vec![Node::new(1, 0.0, 0.0)];
        let index = CoordinateIndex::build(&nodes);

        let err = index.resolve(Coordinate::new(0.0, 1e-12)).unwrap_err();
        assert!(matches!(err, MapError::UnknownCoordinate { .. }));
        assert!(err.is_not_found());
    }

    #[test]
    fn nearest_entity_goes_through_primitive() {
        let nodes = vec![Node::new(10, 0.0, 0.0), Node::new(20, 4.0, 4.0)];
        let index = CoordinateIndex::build(&nodes);
        let ps = NaivePointSet::from_points(index.coordinates().collect());

        assert_eq!(index.nearest_entity(3.0, 3.5, &ps).unwrap().id, 20);
        assert_eq!(index.nearest_entity(-1.0, 0.5, &ps).unwrap().id, 10);
    }

    #[test]
    fn nearest_entity_on_empty_index() {
        let nodes: Vec<Node> = Vec::new();
        let index = CoordinateIndex::build(&nodes);
        let ps = NaivePointSet::from_points(Vec::new());

        let err = index.nearest_entity(0.0, 0.0, &ps).unwrap_err();
        assert!(matches!(err, MapError::EmptyPointSet));
    }

    #[test]
    fn coordinates_follow_first_insertion_order() {
        let nodes = vec![
            Node::new(1, 1.0, 0.0),
            Node::new(2, 0.0, 1.0),
            Node::new(3, 1.0, 0.0),
            Node::new(4, -1.0, 0.0),
        ];
        let index = CoordinateIndex::build(&nodes);
        let coords: Vec<_> = index.coordinates().collect();
        assert_eq!(
            coords,
            vec![
                Coordinate::new(1.0, 0.0),
                Coordinate::new(0.0, 1.0),
                Coordinate::new(-1.0, 0.0),
            ]
        );
    }

    #[test]
    fn non_finite_query_is_rejected() {
        let nodes = vec![Node::new(1, 0.0, 0.0)];
        let index = CoordinateIndex::build(&nodes);
        let ps = NaivePointSet::from_points(index.coordinates().collect());

        let queries = [
            (f64::NAN, 0.0),
            (0.0, f64::NAN),
            (f64::INFINITY, 0.0),
            (0.0, f64::NEG_INFINITY),
        ];
        for (lon, lat) in queries {
            let err = index.nearest_entity(lon, lat, &ps).unwrap_err();
            assert!(matches!(err, MapError::InvalidQuery { .. }));
            assert!(!err.is_not_found());
        }
    }
}
