// crates/streetmap-core/src/search.rs
use crate::catalog::LocationCatalog;
use crate::error::{MapError, Result};
use crate::model::{LocationRecord, NodeId};
use crate::point::NearestPoint;
use crate::text::clean_name;
use crate::traits::LocationSearch;
use tracing::trace;

impl<P: NearestPoint> LocationSearch for LocationCatalog<P> {
    fn nearest_to(&self, lon: f64, lat: f64) -> Result<NodeId> {
        let node = self.closest_node(lon, lat)?;
        trace!(lon, lat, id = node.id, "nearest node");
        Ok(node.id)
    }

    fn names_by_prefix(&self, prefix: &str) -> Vec<String> {
        let key = clean_name(prefix);
        let mut out = Vec::new();

        // One entry per node, so shared display names repeat.
        for word in self.names.iter_prefix(&key) {
            for node in self.group(&word).into_iter().flatten() {
                if let Some(name) = node.name() {
                    out.push(name.to_owned());
                }
            }
        }
        trace!(prefix, key = %key, hits = out.len(), "prefix search");
        out
    }

    fn entities_by_exact_name(&self, name: &str) -> Result<Vec<LocationRecord>> {
        let key = clean_name(name);
        let group = self.group(&key).ok_or_else(|| {
            MapError::NotFound(format!("no location named {name:?} (cleaned: {key:?})"))
        })?;

        let records: Vec<LocationRecord> = group.filter_map(LocationRecord::from_node).collect();
        trace!(name, hits = records.len(), "exact name lookup");
        Ok(records)
    }
}
