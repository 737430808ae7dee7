//! Geographic point type.

use serde::{Deserialize, Serialize};

use crate::distance::haversine_km;
use crate::error::{Result, SequencingError};

/// A WGS84 coordinate in decimal degrees.
///
/// Construction validates the range, so every `Point` in the crate has
/// lat ∈ [-90, 90], lng ∈ [-180, 180] and finite components. Deserialization
/// goes through the same check.
///
/// # Examples
///
/// ```
/// use aqua_route::models::Point;
///
/// let yard = Point::new(6.9271, 79.8612).unwrap();
/// assert_eq!(yard.lat(), 6.9271);
/// assert!(Point::new(91.0, 0.0).is_err());
/// assert!(Point::new(0.0, f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPoint")]
pub struct Point {
    lat: f64,
    lng: f64,
}

#[derive(Deserialize)]
struct RawPoint {
    lat: f64,
    lng: f64,
}

impl TryFrom<RawPoint> for Point {
    type Error = SequencingError;

    fn try_from(raw: RawPoint) -> Result<Self> {
        Point::new(raw.lat, raw.lng)
    }
}

impl Point {
    /// Creates a point, rejecting out-of-range or non-finite components.
    pub fn new(lat: f64, lng: f64) -> Result<Self> {
        let valid = lat.is_finite()
            && lng.is_finite()
            && (-90.0..=90.0).contains(&lat)
            && (-180.0..=180.0).contains(&lng);
        if !valid {
            return Err(SequencingError::InvalidCoordinate { lat, lng });
        }
        Ok(Self { lat, lng })
    }

    /// Builds a point from constants known to be in range.
    pub(crate) const fn from_trusted(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lng(&self) -> f64 {
        self.lng
    }

    /// Great-circle distance to another point, in kilometres.
    pub fn distance_to(&self, other: &Point) -> f64 {
        haversine_km(self, other)
    }
}
