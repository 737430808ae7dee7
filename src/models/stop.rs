//! Delivery stop and the customer payload it usually carries.

use serde::{Deserialize, Serialize};

use super::Point;

/// Water product delivered to a customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WaterType {
    /// Bottled drinking water.
    Drinking,
    /// Reverse-osmosis treated water.
    #[serde(rename = "RO")]
    Ro,
    /// Untreated well water.
    Well,
    /// Bulk industrial supply.
    Industrial,
}

/// Customer details shown on a stop card.
///
/// The sequencing engine never reads these; only the compatibility
/// advisories in [`evaluation`](crate::evaluation) look at `water_type`
/// and `units`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerAttributes {
    /// Display name.
    pub name: String,
    /// Street address.
    pub address: String,
    /// Product delivered at this stop.
    pub water_type: WaterType,
    /// Units (litres or bottles, per the vehicle's unit) per delivery.
    pub units: u32,
}

/// A single stop of a delivery tour.
///
/// Identity is by `id`. The attribute payload is carried through the engine
/// untouched.
///
/// # Examples
///
/// ```
/// use aqua_route::models::{Point, Stop};
///
/// let stop = Stop::new("C2", Point::new(6.9315, 79.8423).unwrap(), "Blue Sky Hotel");
/// assert_eq!(stop.id(), "C2");
/// assert_eq!(*stop.attributes(), "Blue Sky Hotel");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop<A = CustomerAttributes> {
    id: String,
    location: Point,
    attributes: A,
}

impl<A> Stop<A> {
    /// Creates a stop.
    pub fn new(id: impl Into<String>, location: Point, attributes: A) -> Self {
        Self {
            id: id.into(),
            location,
            attributes,
        }
    }

    /// Stop id, unique within a tour.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Geographic location.
    pub fn location(&self) -> &Point {
        &self.location
    }

    /// Opaque payload.
    pub fn attributes(&self) -> &A {
        &self.attributes
    }
}
