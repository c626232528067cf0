// crates/streetmap-core/src/traits.rs
use crate::error::Result;
use crate::model::{LocationRecord, Node, NodeId};
use crate::text::clean_name;

/// Name-based matching helpers for types that expose a display name.
///
/// Comparisons go through [`clean_name`], so case and punctuation are
/// ignored. Implementors provide the raw name via [`NameMatch::name_str`].
///
/// # Examples
/// ```rust
/// use streetmap_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> Option<&str> { Some(self.0) }
/// }
///
/// assert!(Place("Peet's Coffee").is_named("peets coffee"));
/// assert!(Place("Main St.").name_starts_with("MAIN"));
/// ```
pub trait NameMatch {
    /// The raw display name, if any.
    fn name_str(&self) -> Option<&str>;

    /// Equality on the cleaned form. Unnamed values never match.
    #[inline]
    fn is_named(&self, q: &str) -> bool {
        self.name_str()
            .is_some_and(|n| clean_name(n) == clean_name(q))
    }

    /// Prefix match on the cleaned form. Unnamed values never match.
    #[inline]
    fn name_starts_with(&self, prefix: &str) -> bool {
        self.name_str()
            .is_some_and(|n| clean_name(n).starts_with(&clean_name(prefix)))
    }
}

impl NameMatch for Node {
    fn name_str(&self) -> Option<&str> {
        self.name()
    }
}

impl NameMatch for LocationRecord {
    fn name_str(&self) -> Option<&str> {
        Some(&self.name)
    }
}

/// The query surface a location index offers to downstream layers
/// (HTTP handlers, the CLI, bindings).
pub trait LocationSearch {
    /// Id of the eligible node closest to `(lon, lat)`.
    ///
    /// Fails only when there are no eligible nodes at all.
    fn nearest_to(&self, lon: f64, lat: f64) -> Result<NodeId>;

    /// Display names of every named node whose cleaned name starts with the
    /// cleaned `prefix`. No match is an empty `Vec`, not an error.
    fn names_by_prefix(&self, prefix: &str) -> Vec<String>;

    /// Every node whose cleaned name equals the cleaned `name`.
    ///
    /// Unlike [`LocationSearch::names_by_prefix`], a miss is an error
    /// ([`crate::MapError::NotFound`]).
    fn entities_by_exact_name(&self, name: &str) -> Result<Vec<LocationRecord>>;
}
