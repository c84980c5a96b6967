use serde::{Deserialize, Serialize};

/// Earth radius in meters (WGS84 mean).
pub const EARTH_RADIUS_M: f64 = 6_371_008.8;

/// A WGS84 coordinate in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

/// Squared planar separation in radians², using the equirectangular
/// approximation. Only meaningful for comparisons.
pub fn planar_distance_sq(a: &Coordinate, b: &Coordinate) -> f64 {
    let mean_lat = ((a.latitude + b.latitude) / 2.0).to_radians();
    let x = (b.longitude - a.longitude).to_radians() * mean_lat.cos();
    let y = (b.latitude - a.latitude).to_radians();
    x * x + y * y
}

/// Equirectangular distance between two coordinates in meters.
///
/// Accurate to well under a meter at the distances the tracker cares about
/// (tens to hundreds of meters).
pub fn planar_distance_m(a: &Coordinate, b: &Coordinate) -> f64 {
    EARTH_RADIUS_M * planar_distance_sq(a, b).sqrt()
}
