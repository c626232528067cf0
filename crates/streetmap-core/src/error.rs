// crates/streetmap-core/src/error.rs
use thiserror::Error;

/// Errors produced while loading map data or answering catalog queries.
#[derive(Debug, Error)]
pub enum MapError {
    /// A lookup key (cleaned location name, dataset path) has no match.
    #[error("not found: {0}")]
    NotFound(String),

    /// A coordinate was resolved that is not a key of the coordinate index.
    ///
    /// Only reachable when a caller feeds a coordinate that did not come
    /// from the nearest-neighbour primitive the index was built alongside.
    #[error("no node located at ({lon}, {lat})")]
    UnknownCoordinate { lon: f64, lat: f64 },

    /// Nearest-neighbour query with a NaN or infinite component.
    #[error("query coordinate must be finite, got ({lon}, {lat})")]
    InvalidQuery { lon: f64, lat: f64 },

    /// Nearest-neighbour query against a catalog with no eligible nodes.
    #[error("no eligible nodes to search")]
    EmptyPointSet,

    /// The dataset is structurally valid JSON but inconsistent.
    #[error("invalid dataset: {0}")]
    InvalidDataset(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MapError {
    /// `true` for every "nothing there" outcome, regardless of which lookup
    /// produced it.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            MapError::NotFound(_) | MapError::UnknownCoordinate { .. } | MapError::EmptyPointSet
        )
    }
}

pub type Result<T> = std::result::Result<T, MapError>;
