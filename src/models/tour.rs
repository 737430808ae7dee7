//! Ordered tour of delivery stops.

use std::collections::HashSet;

use serde::Serialize;

use super::{Point, Stop};

/// An ordered sequence of stops.
///
/// The depot is not part of the sequence. Tours are produced by the
/// [`constructive`](crate::constructive) builders and reordered only through
/// position swaps, so the set of stops never changes after construction.
///
/// Ids are unique unless the tour was built with
/// [`with_reject_duplicate_ids(false)`][dup], in which case repeated ids are
/// kept as distinct entries and [`position_of`](Self::position_of) finds the
/// first one.
///
/// [dup]: crate::constructive::TourBuilder::with_reject_duplicate_ids
///
/// # Examples
///
/// ```
/// use aqua_route::models::{Point, Stop};
/// use aqua_route::constructive::nearest_neighbor_tour;
///
/// let depot = Point::new(0.0, 0.0).unwrap();
/// let stops = vec![
///     Stop::new("far", Point::new(0.02, 0.0).unwrap(), ()),
///     Stop::new("near", Point::new(0.01, 0.0).unwrap(), ()),
/// ];
/// let tour = nearest_neighbor_tour(&depot, &stops).unwrap();
/// assert_eq!(tour.ids(), vec!["near", "far"]);
/// assert_eq!(tour.position_of("far"), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Tour<A> {
    stops: Vec<Stop<A>>,
}

impl<A> Tour<A> {
    /// Wraps an already-validated sequence.
    pub(crate) fn from_ordered(stops: Vec<Stop<A>>) -> Self {
        Self { stops }
    }

    /// Swaps two positions. Callers guarantee both are in bounds.
    pub(crate) fn swap(&mut self, a: usize, b: usize) {
        self.stops.swap(a, b);
    }

    /// Stops in visit order.
    pub fn stops(&self) -> &[Stop<A>] {
        &self.stops
    }

    /// Number of stops.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Returns `true` if the tour has no stops.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Stop ids in visit order.
    pub fn ids(&self) -> Vec<&str> {
        self.stops.iter().map(|s| s.id()).collect()
    }

    /// Zero-based position of the first stop with the given id.
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.stops.iter().position(|s| s.id() == id)
    }

    /// Stops paired with their 1-based position badge.
    pub fn badges(&self) -> impl Iterator<Item = (usize, &Stop<A>)> + '_ {
        self.stops.iter().enumerate().map(|(i, s)| (i + 1, s))
    }

    /// Kilometres driven from `depot` through every stop in order,
    /// optionally returning to the depot.
    pub fn path_length(&self, depot: &Point, include_return_leg: bool) -> f64 {
        let mut total = 0.0;
        let mut prev = depot;
        for stop in &self.stops {
            total += prev.distance_to(stop.location());
            prev = stop.location();
        }
        if include_return_leg {
            total += prev.distance_to(depot);
        }
        total
    }

    /// Consumes the tour, yielding the stops in order.
    pub fn into_stops(self) -> Vec<Stop<A>> {
        self.stops
    }
}

/// Returns the first id that appears more than once.
pub(crate) fn find_duplicate_id<A>(stops: &[Stop<A>]) -> Option<&str> {
    let mut seen = HashSet::with_capacity(stops.len());
    stops.iter().map(|s| s.id()).find(|id| !seen.insert(*id))
}
