//! # aqua-route
//!
//! Delivery sequencing for water-distribution routes: orders a route's stops
//! by greedy nearest neighbor from the loading yard and lets a dispatcher
//! fine-tune the result one swap at a time.
//!
//! ## Modules
//!
//! - [`models`] — Points, stops and tours
//! - [`distance`] — Haversine metric and distance matrix
//! - [`constructive`] — Nearest-neighbor tour builder
//! - [`editing`] — Sequence editor for manual reordering
//! - [`evaluation`] — Vehicle compatibility advisories
//! - [`context`] — Route directory boundary and dispatcher session
//! - [`config`] — Sequencing configuration

pub mod config;
pub mod constructive;
pub mod context;
pub mod distance;
pub mod editing;
pub mod error;
pub mod evaluation;
pub mod models;

pub use error::{Result, SequencingError};
