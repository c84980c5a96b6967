use geojson::{Feature, FeatureCollection, Geometry, Value};
use serde_json::{Map, Value as JsonValue};

use crate::geo::Coordinate;
use crate::markup::strip_markup;
use crate::route::{Route, Step};

/// Convert a route to a GeoJSON FeatureCollection, one Feature per step.
pub fn route_to_feature_collection(route: &Route) -> FeatureCollection {
    let features = route
        .steps()
        .iter()
        .enumerate()
        .map(|(i, step)| step_to_feature(i, step))
        .collect();

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

/// The not-yet-travelled part of the route as a single Feature.
pub fn remaining_route_feature(remaining: &[Coordinate]) -> Feature {
    let mut props = Map::new();
    props.insert(
        "kind".to_string(),
        JsonValue::String("remainingRoute".to_string()),
    );
    props.insert(
        "pointCount".to_string(),
        JsonValue::Number(remaining.len().into()),
    );

    Feature {
        bbox: None,
        geometry: line_geometry(remaining),
        id: None,
        properties: Some(props),
        foreign_members: None,
    }
}

fn step_to_feature(index: usize, step: &Step) -> Feature {
    let mut props = Map::new();
    props.insert("stepIndex".to_string(), JsonValue::Number(index.into()));
    props.insert(
        "maneuver".to_string(),
        JsonValue::String(step.maneuver.code().to_string()),
    );
    props.insert(
        "instruction".to_string(),
        JsonValue::String(strip_markup(&step.instruction_markup)),
    );
    insert_number(&mut props, "distanceMeters", step.distance_meters);
    insert_number(&mut props, "durationSeconds", step.duration_seconds);

    Feature {
        bbox: None,
        geometry: line_geometry(&step.geometry),
        id: None,
        properties: Some(props),
        foreign_members: None,
    }
}

/// LineString for two or more points, Point for one, nothing for none.
fn line_geometry(points: &[Coordinate]) -> Option<Geometry> {
    match points {
        [] => None,
        [single] => Some(Geometry::new(Value::Point(position(single)))),
        _ => Some(Geometry::new(Value::LineString(
            points.iter().map(position).collect(),
        ))),
    }
}

/// Build a [lon, lat] position.
fn position(c: &Coordinate) -> Vec<f64> {
    vec![c.longitude, c.latitude]
}

fn insert_number(props: &mut Map<String, JsonValue>, key: &str, value: f64) {
    if let Some(n) = serde_json::Number::from_f64(value) {
        props.insert(key.to_string(), JsonValue::Number(n));
    }
}
