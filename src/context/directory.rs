//! Data-access boundary: resolving a route id to its context.

use serde::{Deserialize, Serialize};

use super::{DriverRef, RouteContext, VehicleRef};
use crate::models::{CustomerAttributes, Point, Stop, WaterType};

/// Resolves route ids to sequencing inputs.
///
/// Implementations sit in front of whatever store holds the master data and
/// are expected to return only customers currently active on the route.
///
/// # Examples
///
/// ```
/// use aqua_route::context::{RouteContext, RouteDirectory};
/// use aqua_route::models::{Point, Stop};
///
/// struct Fixed;
///
/// impl RouteDirectory for Fixed {
///     type Attributes = ();
///     fn resolve(&self, route_id: &str) -> Option<RouteContext<()>> {
///         let stop = Stop::new("only", Point::new(0.0, 0.01).ok()?, ());
///         (route_id == "R1").then(|| RouteContext::new("R1", vec![stop]))
///     }
/// }
///
/// assert!(Fixed.resolve("R1").is_some());
/// assert!(Fixed.resolve("R2").is_none());
/// ```
pub trait RouteDirectory {
    /// Stop payload produced by this directory.
    type Attributes;

    /// Looks up a route. Returns `None` if it does not exist.
    fn resolve(&self, route_id: &str) -> Option<RouteContext<Self::Attributes>>;
}

/// Whether a customer currently receives deliveries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CustomerStatus {
    /// Receives deliveries.
    Active,
    /// Suspended; excluded from routes.
    Inactive,
}

/// A customer master record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerRecord {
    /// Customer id, used as the stop id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Street address.
    pub address: String,
    /// Delivery location.
    pub location: Point,
    /// Product delivered.
    pub water_type: WaterType,
    /// Units per delivery.
    pub units: u32,
    /// Delivery status.
    pub status: CustomerStatus,
}

impl CustomerRecord {
    fn to_stop(&self) -> Stop<CustomerAttributes> {
        Stop::new(
            self.id.clone(),
            self.location,
            CustomerAttributes {
                name: self.name.clone(),
                address: self.address.clone(),
                water_type: self.water_type,
                units: self.units,
            },
        )
    }
}

/// A route master record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRecord {
    /// Route id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Assigned vehicle id.
    pub vehicle_id: Option<String>,
    /// Assigned driver id.
    pub driver_id: Option<String>,
    /// Customers on the route.
    pub customer_ids: Vec<String>,
    /// Route-specific depot; the session's configured yard when absent.
    #[serde(default)]
    pub depot: Option<Point>,
}

/// A [`RouteDirectory`] over master data held in memory.
///
/// Stops come out in customer-master order, filtered to active customers
/// listed on the route.
///
/// # Examples
///
/// ```
/// use aqua_route::context::{
///     CustomerRecord, CustomerStatus, InMemoryDirectory, RouteDirectory, RouteRecord,
/// };
/// use aqua_route::models::{Point, WaterType};
///
/// let dir = InMemoryDirectory::default()
///     .with_customer(CustomerRecord {
///         id: "C1".into(),
///         name: "John Doe Residence".into(),
///         address: "123 Water Lane".into(),
///         location: Point::new(6.9271, 79.8612).unwrap(),
///         water_type: WaterType::Drinking,
///         units: 1,
///         status: CustomerStatus::Active,
///     })
///     .with_route(RouteRecord {
///         id: "R1".into(),
///         name: "Coastal Route Alpha".into(),
///         vehicle_id: None,
///         driver_id: None,
///         customer_ids: vec!["C1".into()],
///         depot: None,
///     });
///
/// let ctx = dir.resolve("R1").unwrap();
/// assert_eq!(ctx.stops().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryDirectory {
    customers: Vec<CustomerRecord>,
    vehicles: Vec<VehicleRef>,
    drivers: Vec<DriverRef>,
    routes: Vec<RouteRecord>,
}

impl InMemoryDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a customer.
    pub fn with_customer(mut self, customer: CustomerRecord) -> Self {
        self.customers.push(customer);
        self
    }

    /// Adds a vehicle.
    pub fn with_vehicle(mut self, vehicle: VehicleRef) -> Self {
        self.vehicles.push(vehicle);
        self
    }

    /// Adds a driver.
    pub fn with_driver(mut self, driver: DriverRef) -> Self {
        self.drivers.push(driver);
        self
    }

    /// Adds a route.
    pub fn with_route(mut self, route: RouteRecord) -> Self {
        self.routes.push(route);
        self
    }

    /// Customer records, for edits between selections.
    pub fn customers_mut(&mut self) -> &mut Vec<CustomerRecord> {
        &mut self.customers
    }

    /// Route records.
    pub fn routes(&self) -> &[RouteRecord] {
        &self.routes
    }

    /// Number of active customers on a route.
    pub fn active_stop_count(&self, route_id: &str) -> usize {
        self.resolve(route_id).map_or(0, |ctx| ctx.stops().len())
    }
}

impl RouteDirectory for InMemoryDirectory {
    type Attributes = CustomerAttributes;

    fn resolve(&self, route_id: &str) -> Option<RouteContext<CustomerAttributes>> {
        let route = self.routes.iter().find(|r| r.id == route_id)?;

        let stops = self
            .customers
            .iter()
            .filter(|c| c.status == CustomerStatus::Active)
            .filter(|c| route.customer_ids.contains(&c.id))
            .map(CustomerRecord::to_stop)
            .collect();

        let mut ctx = RouteContext::new(route.id.clone(), stops);
        if let Some(depot) = route.depot {
            ctx = ctx.with_depot(depot);
        }
        if let Some(v) = route
            .vehicle_id
            .as_deref()
            .and_then(|id| self.vehicles.iter().find(|v| v.id() == id))
        {
            ctx = ctx.with_vehicle(v.clone());
        }
        if let Some(d) = route
            .driver_id
            .as_deref()
            .and_then(|id| self.drivers.iter().find(|d| d.id() == id))
        {
            ctx = ctx.with_driver(d.clone());
        }
        Some(ctx)
    }
}
