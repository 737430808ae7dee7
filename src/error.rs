//! Error type shared by every fallible operation in the crate.

use thiserror::Error;

/// Errors raised while constructing inputs or building a tour.
///
/// Out-of-range move requests are deliberately absent: the
/// [`SequenceEditor`](crate::editing::SequenceEditor) treats them as no-ops.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SequencingError {
    /// Latitude outside [-90, 90], longitude outside [-180, 180], or a
    /// non-finite component.
    #[error("invalid coordinate (lat {lat}, lng {lng})")]
    InvalidCoordinate {
        /// Offending latitude.
        lat: f64,
        /// Offending longitude.
        lng: f64,
    },
    /// Two stops handed to the builder share an id.
    #[error("duplicate stop id `{id}`")]
    DuplicateStopId {
        /// The repeated id.
        id: String,
    },
    /// The route directory has no route with this id.
    #[error("route `{route_id}` not found")]
    RouteNotFound {
        /// Requested route id.
        route_id: String,
    },
    /// Configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, SequencingError>;

impl From<serde_json::Error> for SequencingError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidConfig(err.to_string())
    }
}
