use serde::Deserialize;

use crate::error::NavError;
use crate::geo::Coordinate;

/// A position fix from the platform location stream.
///
/// Both the flat `{ latitude, longitude }` shape and the platform's
/// `{ coords: { latitude, longitude } }` location object are accepted.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(untagged)]
pub enum PositionSample {
    Flat(Coordinate),
    Located { coords: Coordinate },
}

impl PositionSample {
    /// The sample's coordinate, or `MissingPosition` for a non-finite fix.
    pub fn coordinate(&self) -> Result<Coordinate, NavError> {
        let c = match self {
            Self::Flat(c) => *c,
            Self::Located { coords } => *coords,
        };
        if c.is_finite() {
            Ok(c)
        } else {
            Err(NavError::MissingPosition)
        }
    }
}

/// A compass reading from the platform heading stream.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadingSample {
    pub true_heading: f64,
}

/// Heading normalized into `[0, 360)`, or `None` when there is no reading.
///
/// The platform reports a negative `trueHeading` (usually `-1`) while the
/// compass is unavailable, so negative and non-finite values are both
/// treated as missing.
pub fn normalize_heading(degrees: f64) -> Option<f64> {
    if !degrees.is_finite() || degrees < 0.0 {
        return None;
    }
    Some(degrees % 360.0)
}
