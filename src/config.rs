//! Sequencing configuration.
//!
//! Loaded from JSON; any missing field takes its default.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::Point;

/// Latitude of the default loading yard.
pub const DEFAULT_YARD_LAT: f64 = 6.9271;
/// Longitude of the default loading yard.
pub const DEFAULT_YARD_LNG: f64 = 79.8612;

/// Settings shared by the tour builder and route sessions.
///
/// # Examples
///
/// ```
/// use aqua_route::config::SequencingConfig;
///
/// let cfg = SequencingConfig::from_json_str(r#"{"include_return_leg": true}"#).unwrap();
/// assert!(cfg.include_return_leg());
/// assert!(cfg.reject_duplicate_ids());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SequencingConfig {
    yard: Point,
    reject_duplicate_ids: bool,
    include_return_leg: bool,
}

impl Default for SequencingConfig {
    fn default() -> Self {
        Self {
            yard: default_yard(),
            reject_duplicate_ids: true,
            include_return_leg: false,
        }
    }
}

fn default_yard() -> Point {
    Point::from_trusted(DEFAULT_YARD_LAT, DEFAULT_YARD_LNG)
}

impl SequencingConfig {
    /// Parses a configuration from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let cfg = serde_json::from_str(json)?;
        Ok(cfg)
    }

    /// Sets the loading yard used as the depot when a route has none.
    pub fn with_yard(mut self, yard: Point) -> Self {
        self.yard = yard;
        self
    }

    /// Enables or disables rejection of repeated stop ids.
    pub fn with_reject_duplicate_ids(mut self, reject: bool) -> Self {
        self.reject_duplicate_ids = reject;
        self
    }

    /// Whether reported path lengths include the drive back to the depot.
    pub fn with_include_return_leg(mut self, include: bool) -> Self {
        self.include_return_leg = include;
        self
    }

    /// Loading yard.
    pub fn yard(&self) -> &Point {
        &self.yard
    }

    /// Whether the builder rejects repeated stop ids.
    pub fn reject_duplicate_ids(&self) -> bool {
        self.reject_duplicate_ids
    }

    /// Whether path lengths include the return leg.
    pub fn include_return_leg(&self) -> bool {
        self.include_return_leg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SequencingError;

    #[test]
    fn test_defaults() {
        let cfg = SequencingConfig::default();
        assert_eq!(cfg.yard().lat(), DEFAULT_YARD_LAT);
        assert_eq!(cfg.yard().lng(), DEFAULT_YARD_LNG);
        assert!(cfg.reject_duplicate_ids());
        assert!(!cfg.include_return_leg());
    }

    #[test]
    fn test_empty_json_is_default() {
        let cfg = SequencingConfig::from_json_str("{}").expect("valid");
        assert_eq!(cfg, SequencingConfig::default());
    }

    #[test]
    fn test_partial_json() {
        let cfg = SequencingConfig::from_json_str(
            r#"{"yard": {"lat": 7.2906, "lng": 80.6337}, "reject_duplicate_ids": false}"#,
        )
        .expect("valid");
        assert_eq!(cfg.yard().lat(), 7.2906);
        assert!(!cfg.reject_duplicate_ids());
        assert!(!cfg.include_return_leg());
    }

    #[test]
    fn test_invalid_yard_rejected() {
        let res = SequencingConfig::from_json_str(r#"{"yard": {"lat": 95.0, "lng": 0.0}}"#);
        assert!(matches!(res, Err(SequencingError::InvalidConfig(_))));
    }

    #[test]
    fn test_builder() {
        let yard = Point::new(1.0, 2.0).expect("valid");
        let cfg = SequencingConfig::default()
            .with_yard(yard)
            .with_reject_duplicate_ids(false)
            .with_include_return_leg(true);
        assert_eq!(*cfg.yard(), yard);
        assert!(!cfg.reject_duplicate_ids());
        assert!(cfg.include_return_leg());
    }
}
