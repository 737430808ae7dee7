//! Nearest-neighbor tour construction.
//!
//! Starting from the depot, repeatedly visit the closest stop not yet
//! visited. Distances are great-circle kilometres.
//!
//! # Complexity
//!
//! O(n²) where n = number of stops.
//!
//! # Reference
//!
//! Greedy nearest neighbor typically lands 15-25% above the optimal tour.
//! Dispatchers correct the remainder by hand through
//! [`SequenceEditor`](crate::editing::SequenceEditor).

use log::debug;

use crate::config::SequencingConfig;
use crate::distance::DistanceMatrix;
use crate::error::{Result, SequencingError};
use crate::models::{find_duplicate_id, Point, Stop, Tour};

/// Nearest-neighbor tour builder.
///
/// # Examples
///
/// ```
/// use aqua_route::models::{Point, Stop};
/// use aqua_route::constructive::TourBuilder;
///
/// let depot = Point::new(6.9271, 79.8612).unwrap();
/// let stops = vec![
///     Stop::new("S1", Point::new(6.9315, 79.8423).unwrap(), ()),
///     Stop::new("S2", Point::new(6.9281, 79.8620).unwrap(), ()),
/// ];
/// let tour = TourBuilder::new().build(&depot, &stops).unwrap();
/// assert_eq!(tour.ids(), vec!["S2", "S1"]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TourBuilder {
    reject_duplicate_ids: bool,
}

impl Default for TourBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TourBuilder {
    /// Creates a builder that rejects repeated stop ids.
    pub fn new() -> Self {
        Self {
            reject_duplicate_ids: true,
        }
    }

    /// Creates a builder following the given configuration.
    pub fn from_config(config: &SequencingConfig) -> Self {
        Self::new().with_reject_duplicate_ids(config.reject_duplicate_ids())
    }

    /// Enables or disables the duplicate-id check.
    ///
    /// With the check off, repeated ids are carried through as distinct
    /// entries and [`Tour::position_of`] reports only the first.
    pub fn with_reject_duplicate_ids(mut self, reject: bool) -> Self {
        self.reject_duplicate_ids = reject;
        self
    }

    /// Orders `stops` by greedy nearest neighbor from `depot`.
    ///
    /// The result is a permutation of `stops`. Equidistant candidates are
    /// resolved in favour of the one appearing first among the stops not yet
    /// visited, so identical inputs always yield identical tours.
    pub fn build<A: Clone>(&self, depot: &Point, stops: &[Stop<A>]) -> Result<Tour<A>> {
        if self.reject_duplicate_ids {
            if let Some(id) = find_duplicate_id(stops) {
                return Err(SequencingError::DuplicateStopId { id: id.to_string() });
            }
        }

        let n = stops.len();
        let locations: Vec<Point> = stops.iter().map(|s| *s.location()).collect();
        let distances = DistanceMatrix::from_depot_and_stops(depot, &locations);

        // Matrix indices: 0 = depot, i + 1 = stops[i].
        let mut remaining: Vec<usize> = (1..=n).collect();
        let mut current = 0;
        let mut order = Vec::with_capacity(n);

        while let Some(pos) = distances.nearest_among(current, &remaining) {
            let next = remaining.remove(pos);
            order.push(stops[next - 1].clone());
            current = next;
        }

        debug!("nearest-neighbor tour built over {n} stops");
        Ok(Tour::from_ordered(order))
    }
}

/// Orders `stops` by greedy nearest neighbor from `depot` using the default
/// builder.
///
/// # Examples
///
/// ```
/// use aqua_route::models::{Point, Stop};
/// use aqua_route::constructive::nearest_neighbor_tour;
///
/// let depot = Point::new(0.0, 0.0).unwrap();
/// let tour = nearest_neighbor_tour::<()>(&depot, &[]).unwrap();
/// assert!(tour.is_empty());
/// ```
pub fn nearest_neighbor_tour<A: Clone>(depot: &Point, stops: &[Stop<A>]) -> Result<Tour<A>> {
    TourBuilder::new().build(depot, stops)
}
