//! Vehicle/stop compatibility advisories.
//!
//! Advisories are informational. A tour is never rejected or reordered
//! because of them; the dispatcher decides.

use crate::context::VehicleRef;
use crate::models::{CustomerAttributes, Stop, WaterType};

/// Load-related facts about a stop's payload.
///
/// Implemented for [`CustomerAttributes`] and for `()` (no load data, so no
/// advisories).
pub trait DeliveryLoad {
    /// Product delivered at the stop, if known.
    fn water_type(&self) -> Option<WaterType>;

    /// Units delivered at the stop.
    fn units(&self) -> u32;
}

impl DeliveryLoad for CustomerAttributes {
    fn water_type(&self) -> Option<WaterType> {
        Some(self.water_type)
    }

    fn units(&self) -> u32 {
        self.units
    }
}

impl DeliveryLoad for () {
    fn water_type(&self) -> Option<WaterType> {
        None
    }

    fn units(&self) -> u32 {
        0
    }
}

/// A mismatch between the assigned vehicle and the stops on its route.
#[derive(Debug, Clone, PartialEq)]
pub enum Advisory {
    /// The vehicle is not fitted for the stop's product.
    WaterTypeNotAllowed {
        /// Stop id.
        stop_id: String,
        /// Product ordered at the stop.
        water_type: WaterType,
    },
    /// Combined units exceed the vehicle's capacity.
    CapacityExceeded {
        /// Units across every stop.
        load: u64,
        /// Vehicle capacity.
        capacity: u32,
    },
}

/// Checks `stops` against `vehicle`, returning every mismatch found.
///
/// Water-type advisories come first, in stop order, followed by at most one
/// capacity advisory.
///
/// # Examples
///
/// ```
/// use aqua_route::context::VehicleRef;
/// use aqua_route::evaluation::{check_compatibility, Advisory};
/// use aqua_route::models::{CustomerAttributes, Point, Stop, WaterType};
///
/// let truck = VehicleRef::new("V2", "WP-XYZ-5678", 10).with_water_types([WaterType::Industrial]);
/// let stop = Stop::new("C4", Point::new(6.93, 79.86).unwrap(), CustomerAttributes {
///     name: "Customer Stop #4".into(),
///     address: "40 Main St".into(),
///     water_type: WaterType::Drinking,
///     units: 4,
/// });
/// let advisories = check_compatibility(&truck, &[stop]);
/// assert_eq!(advisories.len(), 1);
/// assert!(matches!(advisories[0], Advisory::WaterTypeNotAllowed { .. }));
/// ```
pub fn check_compatibility<A: DeliveryLoad>(
    vehicle: &VehicleRef,
    stops: &[Stop<A>],
) -> Vec<Advisory> {
    let mut advisories = Vec::new();

    for stop in stops {
        if let Some(wt) = stop.attributes().water_type() {
            if !vehicle.allows(wt) {
                advisories.push(Advisory::WaterTypeNotAllowed {
                    stop_id: stop.id().to_string(),
                    water_type: wt,
                });
            }
        }
    }

    let load: u64 = stops.iter().map(|s| u64::from(s.attributes().units())).sum();
    if load > u64::from(vehicle.capacity()) {
        advisories.push(Advisory::CapacityExceeded {
            load,
            capacity: vehicle.capacity(),
        });
    }

    advisories
}
