//! Haversine distance and geofence validity for attendance check-in/out.
//!
//! Coordinates are degrees. Distances are whole meters, rounded to the
//! nearest integer. A point is inside a fence when its distance to the
//! center is less than or equal to the radius.

use crate::errors::{AppError, AppResult};
use serde::Serialize;

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A validated latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    lat: f64,
    lon: f64,
}

impl GeoPoint {
    /// Build a point, rejecting NaN/infinite values and out-of-range degrees.
    pub fn new(lat: f64, lon: f64) -> AppResult<Self> {
        if !lat.is_finite() || !lon.is_finite() {
            return Err(AppError::InvalidCoordinate(format!(
                "non-finite value ({lat}, {lon})"
            )));
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(AppError::InvalidCoordinate(format!(
                "latitude {lat} outside [-90, 90]"
            )));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(AppError::InvalidCoordinate(format!(
                "longitude {lon} outside [-180, 180]"
            )));
        }
        Ok(Self { lat, lon })
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Great-circle distance to `other`, rounded to the nearest meter.
    pub fn distance_to(&self, other: &GeoPoint) -> u64 {
        let phi1 = self.lat.to_radians();
        let phi2 = other.lat.to_radians();
        let d_phi = (other.lat - self.lat).to_radians();
        let d_lambda = (other.lon - self.lon).to_radians();

        // clamp keeps sqrt(1 - a) real when rounding pushes a past 1
        let a = ((d_phi / 2.0).sin().powi(2)
            + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2))
        .clamp(0.0, 1.0);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        (EARTH_RADIUS_M * c).round() as u64
    }
}

/// Distance in meters between two raw coordinate pairs.
pub fn distance_m(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> AppResult<u64> {
    let p1 = GeoPoint::new(lat1, lon1)?;
    let p2 = GeoPoint::new(lat2, lon2)?;
    Ok(p1.distance_to(&p2))
}

/// Result of checking one point against a fence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FenceCheck {
    pub distance_m: u64,
    pub inside: bool,
}

/// A circular area around a site.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Geofence {
    pub center: GeoPoint,
    pub radius_m: f64,
}

impl Geofence {
    pub fn new(center: GeoPoint, radius_m: f64) -> AppResult<Self> {
        if !radius_m.is_finite() || radius_m < 0.0 {
            return Err(AppError::InvalidCoordinate(format!(
                "radius {radius_m} must be a non-negative number of meters"
            )));
        }
        Ok(Self { center, radius_m })
    }

    pub fn check(&self, point: &GeoPoint) -> FenceCheck {
        let distance_m = self.center.distance_to(point);
        FenceCheck {
            distance_m,
            inside: distance_m as f64 <= self.radius_m,
        }
    }

    pub fn check_coords(&self, lat: f64, lon: f64) -> AppResult<FenceCheck> {
        Ok(self.check(&GeoPoint::new(lat, lon)?))
    }
}

/// Entry and optional exit evaluated independently against the same fence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AttendanceCheck {
    pub entry: FenceCheck,
    pub exit: Option<FenceCheck>,
}

impl AttendanceCheck {
    pub fn evaluate(fence: &Geofence, entry: GeoPoint, exit: Option<GeoPoint>) -> Self {
        Self {
            entry: fence.check(&entry),
            exit: exit.map(|p| fence.check(&p)),
        }
    }

    /// Entry inside and exit (when present) inside.
    pub fn is_valid(&self) -> bool {
        self.entry.inside && self.exit.is_none_or(|e| e.inside)
    }
}
