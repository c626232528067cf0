// crates/streetmap-core/src/point.rs

//! # Points and nearest-neighbour primitives
//!
//! [`Coordinate`] is the key type shared by the coordinate index and the
//! nearest-neighbour primitives. [`NearestPoint`] is the only contract the
//! catalog relies on for geometry: given a query location, hand back one of
//! the coordinates the primitive was built from.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// A location in map space: `x` is longitude, `y` is latitude.
///
/// Equality and hashing are exact: two coordinates are equal only if both
/// components are bit-identical. No tolerance is applied.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared planar distance to `(x, y)`.
    #[inline]
    pub fn distance_2(&self, x: f64, y: f64) -> f64 {
        let dx = self.x - x;
        let dy = self.y - y;
        dx * dx + dy * dy
    }

    #[inline]
    fn bits(&self) -> (u64, u64) {
        (self.x.to_bits(), self.y.to_bits())
    }
}

impl PartialEq for Coordinate {
    fn eq(&self, other: &Self) -> bool {
        self.bits() == other.bits()
    }
}

impl Eq for Coordinate {}

impl Hash for Coordinate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits().hash(state);
    }
}

/// Nearest-neighbour primitive over a fixed point set.
///
/// Implementors must only ever return coordinates drawn from the set they
/// were built with; the coordinate index depends on this to resolve the
/// result back to a node.
pub trait NearestPoint: Send + Sync {
    /// Build the primitive over `points`.
    fn from_points(points: Vec<Coordinate>) -> Self
    where
        Self: Sized;

    /// The stored coordinate closest to `(x, y)`, or `None` if the set is empty.
    fn nearest(&self, x: f64, y: f64) -> Option<Coordinate>;

    /// Number of points the primitive was built from.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Linear-scan nearest neighbour. `O(n)` per query, no build cost.
///
/// Ties go to the point that came first in the input.
#[derive(Debug, Clone, Default)]
pub struct NaivePointSet {
    points: Vec<Coordinate>,
}

impl NearestPoint for NaivePointSet {
    fn from_points(points: Vec<Coordinate>) -> Self {
        Self { points }
    }

    fn nearest(&self, x: f64, y: f64) -> Option<Coordinate> {
        let mut best: Option<(Coordinate, f64)> = None;
        for p in &self.points {
            let d = p.distance_2(x, y);
            match best {
                Some((_, best_d)) if d >= best_d => {}
                _ => best = Some((*p, d)),
            }
        }
        best.map(|(p, _)| p)
    }

    fn len(&self) -> usize {
        self.points.len()
    }
}

#[cfg(feature = "rtree")]
pub use self::rtree::RTreePointSet;

#[cfg(feature = "rtree")]
mod rtree {
    use super::{Coordinate, NearestPoint};
    use rstar::RTree;

    /// R-tree backed nearest neighbour (`rstar`), `O(log n)` per query.
    #[derive(Debug)]
    pub struct RTreePointSet {
        tree: RTree<[f64; 2]>,
    }

    impl NearestPoint for RTreePointSet {
        fn from_points(points: Vec<Coordinate>) -> Self {
            let points = points.into_iter().map(|p| [p.x, p.y]).collect();
            Self {
                tree: RTree::bulk_load(points),
            }
        }

        fn nearest(&self, x: f64, y: f64) -> Option<Coordinate> {
            self.tree
                .nearest_neighbor(&[x, y])
                .map(|p| Coordinate::new(p[0], p[1]))
        }

        fn len(&self) -> usize {
            self.tree.size()
        }
    }
}

/// The primitive used by [`crate::DefaultCatalog`].
#[cfg(feature = "rtree")]
pub type DefaultPointSet = RTreePointSet;
/// The primitive used by [`crate::DefaultCatalog`].
#[cfg(not(feature = "rtree"))]
pub type DefaultPointSet = NaivePointSet;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn grid() -> Vec<Coordinate> {
        let mut pts = Vec::new();
        for i in 0..10 {
            for j in 0..10 {
                pts.push(Coordinate::new(i as f64, j as f64 * 0.5));
            }
        }
        pts
    }

    #[test]
    fn equality_is_bitwise() {
        assert_eq!(Coordinate::new(1.5, -2.0), Coordinate::new(1.5, -2.0));
        assert_ne!(Coordinate::new(0.1 + 0.2, 0.0), Coordinate::new(0.3, 0.0));
        assert_ne!(Coordinate::new(0.0, 0.0), Coordinate::new(-0.0, 0.0));

        let set: HashSet<_> = [Coordinate::new(2.0, 3.0), Coordinate::new(2.0, 3.0)]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn naive_finds_closest() {
        let ps = NaivePointSet::from_points(grid());
        assert_eq!(ps.nearest(3.2, 1.1), Some(Coordinate::new(3.0, 1.0)));
        assert_eq!(ps.nearest(-50.0, -50.0), Some(Coordinate::new(0.0, 0.0)));
        assert_eq!(ps.len(), 100);
    }

    #[test]
    fn naive_tie_goes_to_first_point() {
        let ps = NaivePointSet::from_points(vec![
            Coordinate::new(1.0, 0.0),
            Coordinate::new(-1.0, 0.0),
        ]);
        assert_eq!(ps.nearest(0.0, 0.0), Some(Coordinate::new(1.0, 0.0)));
    }

    #[test]
    fn empty_set_has_no_nearest() {
        let ps = NaivePointSet::from_points(Vec::new());
        assert!(ps.is_empty());
        assert_eq!(ps.nearest(0.0, 0.0), None);
    }

    #[cfg(feature = "rtree")]
    #[test]
    fn rtree_agrees_with_naive() {
        let naive = NaivePointSet::from_points(grid());
        let tree = RTreePointSet::from_points(grid());
        for (x, y) in [(3.2, 1.1), (9.9, 4.6), (-1.0, 2.3), (4.4, 0.1), (7.0, 3.0)] {
            assert_eq!(tree.nearest(x, y), naive.nearest(x, y), "query ({x}, {y})");
        }
        assert_eq!(tree.len(), 100);
        assert!(RTreePointSet::from_points(Vec::new()).nearest(0.0, 0.0).is_none());
    }
}
