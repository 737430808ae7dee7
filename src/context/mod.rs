//! Route selection glue.
//!
//! Resolves a route through a [`RouteDirectory`], builds its tour, and keeps
//! one [`SequenceEditor`](crate::editing::SequenceEditor) per selection in a
//! [`RouteSession`].

mod directory;
mod route_context;
mod session;

pub use directory::{
    CustomerRecord, CustomerStatus, InMemoryDirectory, RouteDirectory, RouteRecord,
};
pub use route_context::{DriverRef, RouteContext, VehicleRef};
pub use session::{ActiveRoute, RouteSession};
