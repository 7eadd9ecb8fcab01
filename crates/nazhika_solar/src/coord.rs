//! Observer coordinate with range validation.

use serde::Serialize;
use thiserror::Error;

/// Errors from the solar layer.
#[derive(Debug, Error, PartialEq)]
pub enum SolarError {
    #[error("latitude {0} out of range [-90, 90]")]
    LatitudeOutOfRange(f64),
    #[error("longitude {0} out of range [-180, 180]")]
    LongitudeOutOfRange(f64),
}

/// Geographic position in degrees, east and north positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoCoordinate {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
}

impl GeoCoordinate {
    /// Build a validated coordinate.
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Result<Self, SolarError> {
        if !(-90.0..=90.0).contains(&latitude_deg) || !latitude_deg.is_finite() {
            return Err(SolarError::LatitudeOutOfRange(latitude_deg));
        }
        if !(-180.0..=180.0).contains(&longitude_deg) || !longitude_deg.is_finite() {
            return Err(SolarError::LongitudeOutOfRange(longitude_deg));
        }
        Ok(Self { latitude_deg, longitude_deg })
    }
}
