//! Dispatcher session: one active route and its editor at a time.

use std::fmt;

use log::{debug, info, warn};

use super::{RouteContext, RouteDirectory, VehicleRef};
use crate::config::SequencingConfig;
use crate::constructive::TourBuilder;
use crate::editing::{Direction, MoveOutcome, SequenceEditor};
use crate::error::{Result, SequencingError};
use crate::evaluation::{check_compatibility, Advisory, DeliveryLoad};
use crate::models::{Point, Stop};

type Checker<A> = fn(&VehicleRef, &[Stop<A>]) -> Vec<Advisory>;

/// The currently selected route with its working order.
#[derive(Debug, Clone)]
pub struct ActiveRoute<A> {
    context: RouteContext<A>,
    depot: Point,
    editor: SequenceEditor<A>,
    advisories: Vec<Advisory>,
}

impl<A> ActiveRoute<A> {
    /// Route data the tour was built from.
    pub fn context(&self) -> &RouteContext<A> {
        &self.context
    }

    /// Depot the tour starts from: the route's own, else the configured yard.
    pub fn depot(&self) -> &Point {
        &self.depot
    }

    /// Working order.
    pub fn editor(&self) -> &SequenceEditor<A> {
        &self.editor
    }

    /// Vehicle/stop mismatches found when the route was opened.
    ///
    /// Empty unless the session was built with
    /// [`with_compatibility_checks`](RouteSession::with_compatibility_checks).
    pub fn advisories(&self) -> &[Advisory] {
        &self.advisories
    }
}

/// Ties route selection to tour building and editing.
///
/// Selecting a route different from the active one builds a fresh tour and
/// drops any edits made to the previous one. Reselecting the active route
/// keeps its edits; [`reoptimize`](Self::reoptimize) discards them. Routes
/// without their own depot start from [`SequencingConfig::yard`].
///
/// # Examples
///
/// ```
/// use aqua_route::config::SequencingConfig;
/// use aqua_route::context::{RouteContext, RouteDirectory, RouteSession};
/// use aqua_route::editing::Direction;
/// use aqua_route::models::{Point, Stop};
///
/// struct TwoStops;
///
/// impl RouteDirectory for TwoStops {
///     type Attributes = ();
///     fn resolve(&self, route_id: &str) -> Option<RouteContext<()>> {
///         let stops = vec![
///             Stop::new("S1", Point::new(6.9315, 79.8423).ok()?, ()),
///             Stop::new("S2", Point::new(6.9281, 79.8620).ok()?, ()),
///         ];
///         Some(RouteContext::new(route_id, stops))
///     }
/// }
///
/// let mut session = RouteSession::new(TwoStops, SequencingConfig::default());
/// let active = session.select("R1").unwrap();
/// assert_eq!(active.editor().tour().ids(), vec!["S2", "S1"]);
///
/// session.move_stop(1, Direction::Up);
/// assert_eq!(session.editor().unwrap().tour().ids(), vec!["S1", "S2"]);
/// ```
pub struct RouteSession<D: RouteDirectory> {
    directory: D,
    config: SequencingConfig,
    checker: Option<Checker<D::Attributes>>,
    active: Option<ActiveRoute<D::Attributes>>,
}

impl<D> RouteSession<D>
where
    D: RouteDirectory,
    D::Attributes: Clone,
{
    /// Creates a session with no route selected.
    pub fn new(directory: D, config: SequencingConfig) -> Self {
        Self {
            directory,
            config,
            checker: None,
            active: None,
        }
    }

    /// Selects a route, building its tour unless it is already active.
    ///
    /// On error the previously active route, if any, is left as it was.
    pub fn select(&mut self, route_id: &str) -> Result<&ActiveRoute<D::Attributes>> {
        let active = match self.active.take() {
            Some(current) if current.context.route_id() == route_id => {
                debug!("route {route_id} already active; keeping edits");
                current
            }
            prev => match self.open(route_id) {
                Ok(fresh) => {
                    match &prev {
                        Some(prev) => info!(
                            "route {} replaces {}; previous edits discarded",
                            route_id,
                            prev.context.route_id()
                        ),
                        None => info!("route {route_id} selected"),
                    }
                    fresh
                }
                Err(err) => {
                    self.active = prev;
                    return Err(err);
                }
            },
        };
        Ok(&*self.active.insert(active))
    }

    /// Rebuilds the active route from fresh directory data, discarding edits.
    ///
    /// Returns `Ok(None)` if no route is selected.
    pub fn reoptimize(&mut self) -> Result<Option<&ActiveRoute<D::Attributes>>> {
        let Some(route_id) = self.active.as_ref().map(|a| a.context.route_id().to_string())
        else {
            return Ok(None);
        };
        let fresh = self.open(&route_id)?;
        info!("route {route_id} re-optimized; manual edits discarded");
        Ok(Some(&*self.active.insert(fresh)))
    }

    /// Moves a stop in the active route. A no-op when nothing is selected.
    pub fn move_stop(&mut self, index: usize, direction: Direction) -> MoveOutcome {
        match self.active.as_mut() {
            Some(active) => active.editor.move_stop(index, direction),
            None => MoveOutcome::NoOp,
        }
    }

    /// The active route, if any.
    pub fn active(&self) -> Option<&ActiveRoute<D::Attributes>> {
        self.active.as_ref()
    }

    /// Working order of the active route.
    pub fn editor(&self) -> Option<&SequenceEditor<D::Attributes>> {
        self.active.as_ref().map(|a| &a.editor)
    }

    /// Mutable working order of the active route.
    pub fn editor_mut(&mut self) -> Option<&mut SequenceEditor<D::Attributes>> {
        self.active.as_mut().map(|a| &mut a.editor)
    }

    /// Context of the active route.
    pub fn context(&self) -> Option<&RouteContext<D::Attributes>> {
        self.active.as_ref().map(|a| &a.context)
    }

    /// Kilometres along the current order, per the configured return-leg
    /// setting.
    pub fn path_length(&self) -> Option<f64> {
        self.active.as_ref().map(|a| {
            a.editor
                .tour()
                .path_length(&a.depot, self.config.include_return_leg())
        })
    }

    /// Ends the editing session, returning the route and its final order.
    pub fn take(&mut self) -> Option<ActiveRoute<D::Attributes>> {
        self.active.take()
    }

    /// Drops the active route and its edits.
    pub fn clear(&mut self) {
        if let Some(prev) = self.active.take() {
            debug!("route {} cleared", prev.context.route_id());
        }
    }

    /// Underlying directory.
    pub fn directory(&self) -> &D {
        &self.directory
    }

    /// Mutable directory, e.g. to refresh master data before
    /// [`reoptimize`](Self::reoptimize).
    pub fn directory_mut(&mut self) -> &mut D {
        &mut self.directory
    }

    /// Session configuration.
    pub fn config(&self) -> &SequencingConfig {
        &self.config
    }

    fn open(&self, route_id: &str) -> Result<ActiveRoute<D::Attributes>> {
        let context = self
            .directory
            .resolve(route_id)
            .ok_or_else(|| SequencingError::RouteNotFound {
                route_id: route_id.to_string(),
            })?;
        let depot = context.depot().copied().unwrap_or(*self.config.yard());

        let tour = TourBuilder::from_config(&self.config).build(&depot, context.stops())?;

        let advisories = match (self.checker, context.vehicle()) {
            (Some(check), Some(vehicle)) => check(vehicle, context.stops()),
            _ => Vec::new(),
        };
        for advisory in &advisories {
            warn!("route {route_id}: {advisory:?}");
        }

        debug!(
            "route {}: {} stops, {:.3} km",
            route_id,
            tour.len(),
            tour.path_length(&depot, self.config.include_return_leg())
        );

        Ok(ActiveRoute {
            context,
            depot,
            editor: SequenceEditor::new(tour),
            advisories,
        })
    }
}

impl<D> RouteSession<D>
where
    D: RouteDirectory,
    D::Attributes: Clone + DeliveryLoad,
{
    /// Reports vehicle/stop mismatches on every route opened from now on.
    ///
    /// Advisories never block sequencing; they are logged and exposed on
    /// [`ActiveRoute::advisories`].
    pub fn with_compatibility_checks(mut self) -> Self {
        self.checker = Some(check_compatibility::<D::Attributes>);
        self
    }
}

impl<D> fmt::Debug for RouteSession<D>
where
    D: RouteDirectory + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteSession")
            .field("directory", &self.directory)
            .field("config", &self.config)
            .field("compatibility_checks", &self.checker.is_some())
            .field("active_route", &self.active.as_ref().map(|a| a.context.route_id()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{
        CustomerRecord, CustomerStatus, DriverRef, InMemoryDirectory, RouteRecord, VehicleRef,
    };
    use crate::models::{Point, WaterType};

    fn p(lat: f64, lng: f64) -> Point {
        Point::new(lat, lng).expect("valid point")
    }

    fn customer(id: &str, lat: f64, lng: f64, water_type: WaterType) -> CustomerRecord {
        CustomerRecord {
            id: id.into(),
            name: format!("Customer {id}"),
            address: format!("{id} Main St"),
            location: p(lat, lng),
            water_type,
            units: 10,
            status: CustomerStatus::Active,
        }
    }

    fn route(id: &str, vehicle: &str, customers: &[&str]) -> RouteRecord {
        RouteRecord {
            id: id.into(),
            name: format!("Route {id}"),
            vehicle_id: Some(vehicle.into()),
            driver_id: Some("D1".into()),
            customer_ids: customers.iter().map(|c| c.to_string()).collect(),
            depot: None,
        }
    }

    fn directory() -> InMemoryDirectory {
        InMemoryDirectory::default()
            .with_customer(customer("C1", 6.9315, 79.8423, WaterType::Drinking))
            .with_customer(customer("C2", 6.9281, 79.8620, WaterType::Ro))
            .with_customer(customer("C3", 6.9301, 79.8642, WaterType::Drinking))
            .with_customer(customer("C4", 6.9401, 79.8742, WaterType::Drinking))
            .with_customer(customer("C5", 6.9411, 79.8752, WaterType::Ro))
            .with_vehicle(
                VehicleRef::new("V1", "WP-ABC-1234", 2000)
                    .with_water_types([WaterType::Drinking, WaterType::Ro]),
            )
            .with_vehicle(
                VehicleRef::new("V2", "WP-XYZ-5678", 15).with_water_types([WaterType::Industrial]),
            )
            .with_driver(DriverRef::new("D1", "Rayan Fernando"))
            .with_route(route("R1", "V1", &["C1", "C2", "C3"]))
            .with_route(route("R2", "V2", &["C4", "C5"]))
    }

    fn session() -> RouteSession<InMemoryDirectory> {
        RouteSession::new(directory(), SequencingConfig::default()).with_compatibility_checks()
    }

    fn ids(s: &RouteSession<InMemoryDirectory>) -> Vec<String> {
        s.editor()
            .map(|e| e.current_order().iter().map(|st| st.id().to_string()).collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_select_builds_nearest_neighbor_order() {
        let mut s = session();
        let active = s.select("R1").expect("route exists");
        assert_eq!(active.context().route_id(), "R1");
        assert!(active.advisories().is_empty());
        assert_eq!(ids(&s), vec!["C2", "C3", "C1"]);
    }

    #[test]
    fn test_reselect_same_route_keeps_edits() {
        let mut s = session();
        s.select("R1").expect("route exists");
        assert!(s.move_stop(0, Direction::Down).is_moved());
        let edited = ids(&s);
        s.select("R1").expect("route exists");
        assert_eq!(ids(&s), edited);
    }

    #[test]
    fn test_select_other_route_resets_edits() {
        let mut s = session();
        s.select("R1").expect("route exists");
        let built = ids(&s);
        s.move_stop(0, Direction::Down);
        s.select("R2").expect("route exists");
        assert_eq!(s.context().map(|c| c.route_id()), Some("R2"));
        s.select("R1").expect("route exists");
        assert_eq!(ids(&s), built);
    }

    #[test]
    fn test_unknown_route_leaves_state() {
        let mut s = session();
        s.select("R1").expect("route exists");
        s.move_stop(1, Direction::Up);
        let edited = ids(&s);
        let err = s.select("R404").expect_err("unknown route");
        assert_eq!(
            err,
            SequencingError::RouteNotFound {
                route_id: "R404".into()
            }
        );
        assert_eq!(s.context().map(|c| c.route_id()), Some("R1"));
        assert_eq!(ids(&s), edited);
    }

    #[test]
    fn test_advisories_do_not_block() {
        let mut s = session();
        let active = s.select("R2").expect("route exists");
        assert_eq!(active.editor().len(), 2);
        assert_eq!(
            active.advisories(),
            &[
                Advisory::WaterTypeNotAllowed {
                    stop_id: "C4".into(),
                    water_type: WaterType::Drinking
                },
                Advisory::WaterTypeNotAllowed {
                    stop_id: "C5".into(),
                    water_type: WaterType::Ro
                },
                Advisory::CapacityExceeded {
                    load: 20,
                    capacity: 15
                },
            ]
        );
    }

    #[test]
    fn test_reoptimize_discards_edits_and_sees_new_data() {
        let mut s = session();
        assert!(s.reoptimize().expect("nothing selected").is_none());

        s.select("R1").expect("route exists");
        let built = ids(&s);
        s.move_stop(0, Direction::Down);
        s.reoptimize().expect("route exists");
        assert_eq!(ids(&s), built);

        if let Some(c) = s
            .directory_mut()
            .customers_mut()
            .iter_mut()
            .find(|c| c.id == "C3")
        {
            c.status = CustomerStatus::Inactive;
        }
        s.reoptimize().expect("route exists");
        assert_eq!(ids(&s), vec!["C2", "C1"]);
    }

    #[test]
    fn test_move_without_selection_is_noop() {
        let mut s = session();
        assert_eq!(s.move_stop(0, Direction::Down), MoveOutcome::NoOp);
        assert!(s.editor().is_none());
        assert!(s.path_length().is_none());
    }

    #[test]
    fn test_path_length_follows_config() {
        let mut one_way = session();
        one_way.select("R1").expect("route exists");
        let mut round = RouteSession::new(
            directory(),
            SequencingConfig::default().with_include_return_leg(true),
        );
        round.select("R1").expect("route exists");

        let a = one_way.path_length().expect("active");
        let b = round.path_length().expect("active");
        assert!(a > 0.0);
        assert!(b > a);
    }

    #[test]
    fn test_editor_mut_and_take() {
        let mut s = session();
        s.select("R1").expect("route exists");
        if let Some(e) = s.editor_mut() {
            e.move_stop(2, Direction::Up);
        }
        let finished = s.take().expect("active");
        assert_eq!(finished.editor().tour().ids(), vec!["C2", "C1", "C3"]);
        assert!(s.active().is_none());
    }

    #[test]
    fn test_clear() {
        let mut s = session();
        s.select("R2").expect("route exists");
        s.clear();
        assert!(s.context().is_none());
        assert_eq!(s.config(), &SequencingConfig::default());
        assert_eq!(s.directory().routes().len(), 2);
    }

    #[test]
    fn test_reselect_after_failed_select_keeps_edits() {
        let mut s = session();
        s.select("R1").expect("route exists");
        s.move_stop(0, Direction::Down);
        let edited = ids(&s);
        assert!(s.select("R404").is_err());
        let active = s.select("R1").expect("route exists");
        assert_eq!(active.context().route_id(), "R1");
        assert_eq!(ids(&s), edited);
    }

    #[test]
    fn test_configured_yard_is_default_depot() {
        let yard = p(6.9401, 79.8742);
        let mut s = RouteSession::new(
            InMemoryDirectory::default()
                .with_customer(customer("C1", 6.9315, 79.8423, WaterType::Drinking))
                .with_customer(customer("C2", 6.9281, 79.8620, WaterType::Ro))
                .with_customer(customer("C3", 6.9301, 79.8642, WaterType::Drinking))
                .with_route(route("R1", "V1", &["C1", "C2", "C3"])),
            SequencingConfig::default().with_yard(yard),
        );
        let active = s.select("R1").expect("route exists");
        assert!(active.context().depot().is_none());
        assert_eq!(active.depot(), &yard);
        assert_eq!(ids(&s), vec!["C3", "C2", "C1"]);
    }

    #[test]
    fn test_route_depot_overrides_configured_yard() {
        let own = p(6.9315, 79.8423);
        let mut r = route("R3", "V1", &["C1", "C2", "C3"]);
        r.depot = Some(own);
        let mut s = RouteSession::new(
            directory().with_route(r),
            SequencingConfig::default().with_yard(p(6.9401, 79.8742)),
        );
        let active = s.select("R3").expect("route exists");
        assert_eq!(active.depot(), &own);
        assert_eq!(ids(&s).first().map(String::as_str), Some("C1"));
    }

    #[test]
    fn test_advisories_are_opt_in() {
        let mut s = RouteSession::new(directory(), SequencingConfig::default());
        let active = s.select("R2").expect("route exists");
        assert!(active.advisories().is_empty());
        assert_eq!(active.editor().len(), 2);
    }

    struct Labels;

    impl RouteDirectory for Labels {
        type Attributes = String;

        fn resolve(&self, route_id: &str) -> Option<RouteContext<String>> {
            let stops = vec![
                Stop::new("S1", Point::new(6.9315, 79.8423).ok()?, "gate code 41".to_string()),
                Stop::new("S2", Point::new(6.9281, 79.8620).ok()?, "back door".to_string()),
                Stop::new("S3", Point::new(6.9301, 79.8642).ok()?, "call ahead".to_string()),
            ];
            (route_id == "L1").then(|| {
                RouteContext::new(route_id, stops)
                    .with_vehicle(VehicleRef::new("V9", "WP-LBL-0001", 1))
            })
        }
    }

    #[test]
    fn test_session_over_opaque_payload() {
        let mut s = RouteSession::new(Labels, SequencingConfig::default());
        let active = s.select("L1").expect("route exists");
        assert!(active.advisories().is_empty());
        assert_eq!(active.editor().tour().ids(), vec!["S2", "S3", "S1"]);
        assert_eq!(active.editor().current_order()[0].attributes(), "back door");

        assert!(s.move_stop(0, Direction::Down).is_moved());
        assert_eq!(s.editor().map(|e| e.tour().ids()), Some(vec!["S3", "S2", "S1"]));

        let rebuilt = s.reoptimize().expect("route exists").expect("active");
        assert_eq!(rebuilt.editor().tour().ids(), vec!["S2", "S3", "S1"]);
        assert!(s.select("L2").is_err());
    }

    #[test]
    fn test_debug_output() {
        let mut s = session();
        s.select("R1").expect("route exists");
        let out = format!("{s:?}");
        assert!(out.starts_with("RouteSession"));
        assert!(out.contains("compatibility_checks: true"));
        assert!(out.contains("active_route: Some(\"R1\")"));
    }
}
