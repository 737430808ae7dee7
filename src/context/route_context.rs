//! Route context: a route's depot, stops, vehicle and driver.

use serde::{Deserialize, Serialize};

use crate::models::{Point, Stop, WaterType};

/// Read-only reference to the vehicle assigned to a route.
///
/// # Examples
///
/// ```
/// use aqua_route::context::VehicleRef;
/// use aqua_route::models::WaterType;
///
/// let v = VehicleRef::new("V1", "WP-ABC-1234", 2000)
///     .with_water_types([WaterType::Drinking, WaterType::Ro]);
/// assert!(v.allows(WaterType::Ro));
/// assert!(!v.allows(WaterType::Industrial));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleRef {
    id: String,
    number: String,
    capacity: u32,
    water_types: Vec<WaterType>,
}

impl VehicleRef {
    /// Creates a vehicle reference with no allowed water types.
    pub fn new(id: impl Into<String>, number: impl Into<String>, capacity: u32) -> Self {
        Self {
            id: id.into(),
            number: number.into(),
            capacity,
            water_types: Vec::new(),
        }
    }

    /// Sets the products this vehicle may carry.
    pub fn with_water_types(mut self, types: impl IntoIterator<Item = WaterType>) -> Self {
        self.water_types = types.into_iter().collect();
        self
    }

    /// Vehicle id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Registration plate.
    pub fn number(&self) -> &str {
        &self.number
    }

    /// Load capacity in delivery units.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Products this vehicle may carry.
    pub fn water_types(&self) -> &[WaterType] {
        &self.water_types
    }

    /// Returns `true` if the vehicle may carry `water_type`.
    pub fn allows(&self, water_type: WaterType) -> bool {
        self.water_types.contains(&water_type)
    }
}

/// Read-only reference to the driver assigned to a route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverRef {
    id: String,
    name: String,
}

impl DriverRef {
    /// Creates a driver reference.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Driver id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Everything needed to sequence one route.
///
/// Produced by a [`RouteDirectory`](super::RouteDirectory). The vehicle and
/// driver are carried for display and delivery logging only. A route without
/// its own depot starts from the session's configured yard.
#[derive(Debug, Clone)]
pub struct RouteContext<A> {
    route_id: String,
    depot: Option<Point>,
    stops: Vec<Stop<A>>,
    vehicle: Option<VehicleRef>,
    driver: Option<DriverRef>,
}

impl<A> RouteContext<A> {
    /// Creates a context with no depot, vehicle or driver assigned.
    pub fn new(route_id: impl Into<String>, stops: Vec<Stop<A>>) -> Self {
        Self {
            route_id: route_id.into(),
            depot: None,
            stops,
            vehicle: None,
            driver: None,
        }
    }

    /// Sets a route-specific depot.
    pub fn with_depot(mut self, depot: Point) -> Self {
        self.depot = Some(depot);
        self
    }

    /// Attaches the assigned vehicle.
    pub fn with_vehicle(mut self, vehicle: VehicleRef) -> Self {
        self.vehicle = Some(vehicle);
        self
    }

    /// Attaches the assigned driver.
    pub fn with_driver(mut self, driver: DriverRef) -> Self {
        self.driver = Some(driver);
        self
    }

    /// Route id.
    pub fn route_id(&self) -> &str {
        &self.route_id
    }

    /// Route-specific depot, if the directory supplied one.
    pub fn depot(&self) -> Option<&Point> {
        self.depot.as_ref()
    }

    /// Stops on the route, in directory order.
    pub fn stops(&self) -> &[Stop<A>] {
        &self.stops
    }

    /// Assigned vehicle, if any.
    pub fn vehicle(&self) -> Option<&VehicleRef> {
        self.vehicle.as_ref()
    }

    /// Assigned driver, if any.
    pub fn driver(&self) -> Option<&DriverRef> {
        self.driver.as_ref()
    }
}
