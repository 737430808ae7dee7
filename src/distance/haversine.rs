//! Great-circle distance on a spherical Earth.

use crate::models::Point;

/// Mean Earth radius used by [`haversine_km`], in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine great-circle distance between two points, in kilometres.
///
/// Symmetric, non-negative, and exactly zero for identical points.
///
/// # Examples
///
/// ```
/// use aqua_route::models::Point;
/// use aqua_route::distance::haversine_km;
///
/// let yard = Point::new(6.9271, 79.8612).unwrap();
/// let hotel = Point::new(6.9315, 79.8423).unwrap();
/// let d = haversine_km(&yard, &hotel);
/// assert!(d > 2.0 && d < 2.3);
/// assert_eq!(haversine_km(&yard, &yard), 0.0);
/// ```
pub fn haversine_km(a: &Point, b: &Point) -> f64 {
    let d_lat = (b.lat() - a.lat()).abs().to_radians();
    let d_lng = (b.lng() - a.lng()).abs().to_radians();
    let sin_lat = (d_lat / 2.0).sin();
    let sin_lng = (d_lng / 2.0).sin();
    let h = sin_lat * sin_lat
        + a.lat().to_radians().cos() * b.lat().to_radians().cos() * sin_lng * sin_lng;
    // Rounding can push h just past 1 for antipodal pairs.
    let h = h.clamp(0.0, 1.0);
    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}
