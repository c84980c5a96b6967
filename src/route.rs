use log::debug;

use crate::directions::{DirectionsResponse, DirectionsStep};
use crate::error::NavError;
use crate::geo::Coordinate;
use crate::maneuver::Maneuver;
use crate::polyline;

type Result<T> = std::result::Result<T, NavError>;

/// One directed step of a route. Immutable once built.
#[derive(Debug, Clone)]
pub struct Step {
    pub start: Coordinate,
    pub end: Coordinate,
    pub maneuver: Maneuver,
    /// Instruction as delivered, markup included.
    pub instruction_markup: String,
    pub distance_meters: f64,
    pub duration_seconds: f64,
    pub geometry: Vec<Coordinate>,
}

/// Leg-level totals reported by the directions service.
#[derive(Debug, Clone, Default)]
pub struct RouteSummary {
    pub distance_text: Option<String>,
    pub distance_meters: Option<f64>,
    pub duration_text: Option<String>,
    pub duration_seconds: Option<f64>,
    pub start_address: Option<String>,
    pub end_address: Option<String>,
}

/// A nonempty, ordered sequence of steps with its concatenated geometry.
#[derive(Debug, Clone)]
pub struct Route {
    steps: Vec<Step>,
    geometry: Vec<Coordinate>,
    summary: RouteSummary,
}

impl Route {
    /// Build a route from raw directions steps, decoding every polyline.
    pub fn from_steps(raw: &[DirectionsStep]) -> Result<Self> {
        if raw.is_empty() {
            return Err(NavError::EmptyRoute);
        }

        let steps = raw
            .iter()
            .enumerate()
            .map(|(i, s)| build_step(s).map_err(|e| e.in_step(i)))
            .collect::<Result<Vec<_>>>()?;

        let geometry: Vec<Coordinate> = steps
            .iter()
            .flat_map(|s| s.geometry.iter().copied())
            .collect();

        debug!(
            "Built route: {} steps, {} geometry points",
            steps.len(),
            geometry.len()
        );

        Ok(Self {
            steps,
            geometry,
            summary: RouteSummary::default(),
        })
    }

    /// Build a route from a directions JSON response, using its first route and leg.
    pub fn from_directions_json(json: &str) -> Result<Self> {
        let response: DirectionsResponse = serde_json::from_str(json)?;
        Self::from_directions(response)
    }

    pub fn from_directions(response: DirectionsResponse) -> Result<Self> {
        if let Some(status) = response.status.as_deref() {
            if status != "OK" {
                return Err(NavError::DirectionsStatus(status.to_string()));
            }
        }

        let leg = response
            .routes
            .into_iter()
            .next()
            .and_then(|r| r.legs.into_iter().next())
            .ok_or(NavError::NoRoute)?;

        let mut route = Self::from_steps(&leg.steps)?;
        route.summary = RouteSummary {
            distance_text: leg.distance.as_ref().map(|d| d.text.clone()),
            distance_meters: leg.distance.as_ref().map(|d| d.value),
            duration_text: leg.duration.as_ref().map(|d| d.text.clone()),
            duration_seconds: leg.duration.as_ref().map(|d| d.value),
            start_address: leg.start_address,
            end_address: leg.end_address,
        };
        Ok(route)
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn step(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn last_index(&self) -> usize {
        self.steps.len() - 1
    }

    /// Every step's geometry, concatenated in order.
    pub fn geometry(&self) -> &[Coordinate] {
        &self.geometry
    }

    pub fn summary(&self) -> &RouteSummary {
        &self.summary
    }

    /// Summed distance (m) and duration (s) of the steps from `index` to the end.
    pub fn remaining_from(&self, index: usize) -> (f64, f64) {
        self.steps
            .get(index..)
            .unwrap_or_default()
            .iter()
            .fold((0.0, 0.0), |(d, t), s| {
                (d + s.distance_meters, t + s.duration_seconds)
            })
    }
}

fn build_step(raw: &DirectionsStep) -> Result<Step> {
    let geometry = polyline::decode(&raw.polyline.points)?;
    Ok(Step {
        start: raw.start_location.into(),
        end: raw.end_location.into(),
        maneuver: raw
            .maneuver
            .as_deref()
            .map(Maneuver::from_code)
            .unwrap_or_default(),
        instruction_markup: raw.html_instructions.clone(),
        distance_meters: raw.distance.value.max(0.0),
        duration_seconds: raw.duration.value.max(0.0),
        geometry,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step_json(points: &str, maneuver: Option<&str>, dist: f64, secs: f64) -> String {
        let maneuver = maneuver
            .map(|m| format!(r#""maneuver": "{m}","#))
            .unwrap_or_default();
        format!(
            r#"{{
                "html_instructions": "Head <b>east</b>",
                "start_location": {{"lat": 0.0, "lng": 0.0}},
                "end_location": {{"lat": 0.0, "lng": 1.0}},
                "polyline": {{"points": "{points}"}},
                {maneuver}
                "duration": {{"text": "2 mins", "value": {secs}}},
                "distance": {{"text": "0.6 mi", "value": {dist}}}
            }}"#
        )
    }

    fn parse_steps(steps: &[String]) -> Vec<DirectionsStep> {
        serde_json::from_str(&format!("[{}]", steps.join(","))).unwrap()
    }

    #[test]
    fn test_empty_route_rejected() {
        assert!(matches!(Route::from_steps(&[]), Err(NavError::EmptyRoute)));
    }

    #[test]
    fn test_geometry_concatenated() {
        let raw = parse_steps(&[
            step_json("_p~iF~ps|U_ulLnnqC", Some("turn-left"), 1000.0, 100.0),
            step_json("_p~iF~ps|U", None, 500.0, 50.0),
        ]);
        let route = Route::from_steps(&raw).unwrap();
        assert_eq!(route.step_count(), 2);
        assert_eq!(route.steps()[0].geometry.len(), 2);
        assert_eq!(route.steps()[1].geometry.len(), 1);
        assert_eq!(route.geometry().len(), 3);
        assert_eq!(route.steps()[0].maneuver, Maneuver::TurnLeft);
        assert_eq!(route.steps()[1].maneuver, Maneuver::Unknown);
        // Markup is kept as delivered
        assert_eq!(route.steps()[0].instruction_markup, "Head <b>east</b>");
    }

    #[test]
    fn test_bad_polyline_aborts_construction() {
        let raw = parse_steps(&[
            step_json("_p~iF~ps|U", None, 1.0, 1.0),
            step_json("_p~iF", None, 1.0, 1.0),
        ]);
        match Route::from_steps(&raw) {
            Err(NavError::Decode { step, .. }) => assert_eq!(step, Some(1)),
            other => panic!("Expected Decode error, got {other:?}"),
        }
    }

    #[test]
    fn test_remaining_from() {
        let raw = parse_steps(&[
            step_json("", None, 1000.0, 100.0),
            step_json("", None, 1000.0, 100.0),
        ]);
        let route = Route::from_steps(&raw).unwrap();
        assert_eq!(route.remaining_from(0), (2000.0, 200.0));
        assert_eq!(route.remaining_from(1), (1000.0, 100.0));
        assert_eq!(route.remaining_from(2), (0.0, 0.0));
        assert_eq!(route.remaining_from(9), (0.0, 0.0));
    }

    #[test]
    fn test_directions_status_and_missing_route() {
        let err = Route::from_directions_json(r#"{"status": "ZERO_RESULTS", "routes": []}"#)
            .unwrap_err();
        assert!(matches!(err, NavError::DirectionsStatus(ref s) if s == "ZERO_RESULTS"));

        let err = Route::from_directions_json(r#"{"status": "OK", "routes": []}"#).unwrap_err();
        assert!(matches!(err, NavError::NoRoute));

        let err = Route::from_directions_json("not json").unwrap_err();
        assert!(matches!(err, NavError::JsonParse(_)));
    }
}
