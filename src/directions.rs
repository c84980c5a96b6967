use serde::Deserialize;

use crate::geo::Coordinate;

/// Top level of a directions-service response.
#[derive(Debug, Default, Deserialize)]
pub struct DirectionsResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub routes: Vec<DirectionsRoute>,
}

/// One candidate route (`routes[i]`).
#[derive(Debug, Default, Deserialize)]
pub struct DirectionsRoute {
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub legs: Vec<DirectionsLeg>,
}

/// One origin-to-destination leg (`routes[i].legs[j]`).
#[derive(Debug, Deserialize)]
pub struct DirectionsLeg {
    #[serde(default)]
    pub distance: Option<TextValue>,
    #[serde(default)]
    pub duration: Option<TextValue>,
    #[serde(default)]
    pub start_address: Option<String>,
    #[serde(default)]
    pub end_address: Option<String>,
    #[serde(default)]
    pub steps: Vec<DirectionsStep>,
}

/// A single step as delivered by the directions service.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsStep {
    pub html_instructions: String,
    pub start_location: LatLng,
    pub end_location: LatLng,
    pub polyline: EncodedPolyline,
    #[serde(default)]
    pub maneuver: Option<String>,
    pub duration: TextValue,
    pub distance: TextValue,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl From<LatLng> for Coordinate {
    fn from(ll: LatLng) -> Self {
        Coordinate::new(ll.lat, ll.lng)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct EncodedPolyline {
    pub points: String,
}

/// A `{ text, value }` pair: display text plus meters or seconds.
#[derive(Debug, Clone, Deserialize)]
pub struct TextValue {
    #[serde(default)]
    pub text: String,
    pub value: f64,
}
