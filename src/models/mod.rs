//! Domain model types for delivery sequencing.
//!
//! Geographic points, stops carrying an opaque payload, and tours as
//! ordered, duplicate-free sequences of stops.

mod point;
mod stop;
mod tour;

pub use point::Point;
pub use stop::{CustomerAttributes, Stop, WaterType};
pub use tour::Tour;

pub(crate) use tour::find_duplicate_id;
