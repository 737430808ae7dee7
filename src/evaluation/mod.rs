//! Non-blocking checks of a route's stops against its vehicle.

mod compatibility;

pub use compatibility::{check_compatibility, Advisory, DeliveryLoad};
