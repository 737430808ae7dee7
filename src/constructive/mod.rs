//! Constructive heuristics for building an initial visit order.
//!
//! - [`nearest_neighbor_tour`] / [`TourBuilder`] — greedy nearest neighbor from the depot, O(n²)

mod nearest_neighbor;

pub use nearest_neighbor::{nearest_neighbor_tour, TourBuilder};
