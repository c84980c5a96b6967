pub mod camera;
pub mod converter;
pub mod directions;
pub mod error;
pub mod format;
pub mod geo;
pub mod maneuver;
pub mod markup;
pub mod options;
pub mod polyline;
pub mod remaining;
pub mod route;
pub mod samples;
pub mod session;
pub mod tracker;

use log::debug;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::directions::DirectionsStep;
use crate::error::NavError;
use crate::geo::Coordinate;
use crate::options::NavigationOptions;
use crate::route::Route;
use crate::samples::{HeadingSample, PositionSample};
use crate::session::TrackerSession;

/// Decode a precision-5 encoded polyline into `{ latitude, longitude }` objects.
#[wasm_bindgen(js_name = decodePolyline)]
pub fn decode_polyline(encoded: &str) -> Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();

    let coords = polyline::decode(encoded)?;
    to_js(&coords)
}

/// Encode an array of `{ latitude, longitude }` objects as a polyline string.
#[wasm_bindgen(js_name = encodePolyline)]
pub fn encode_polyline(coords: JsValue) -> Result<String, JsValue> {
    let coords: Vec<Coordinate> = from_js(coords)?;
    Ok(polyline::encode(&coords)?)
}

/// Strip instruction markup down to display text.
#[wasm_bindgen(js_name = stripInstructionMarkup)]
pub fn strip_instruction_markup(html: &str) -> String {
    markup::strip_markup(html)
}

/// Convert a directions JSON response to a GeoJSON FeatureCollection of steps.
#[wasm_bindgen(js_name = routeToGeoJson)]
pub fn route_to_geojson(directions_json: &str) -> Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();

    let route = Route::from_directions_json(directions_json)?;
    let fc = converter::route_to_feature_collection(&route);
    to_js(&fc)
}

/// A turn-by-turn navigation session driven by location and heading events.
#[wasm_bindgen]
pub struct NavigationSession {
    inner: TrackerSession,
}

#[wasm_bindgen]
impl NavigationSession {
    /// Start a session from the `steps` array of a directions leg.
    #[wasm_bindgen(constructor)]
    pub fn new(steps: JsValue, options: JsValue) -> Result<NavigationSession, JsValue> {
        console_error_panic_hook::set_once();

        let opts = parse_options(options)?;
        let steps: Vec<DirectionsStep> = from_js(steps)?;
        let route = Route::from_steps(&steps)?;
        Ok(Self {
            inner: TrackerSession::initialize(route, opts),
        })
    }

    /// Start a session from a full directions JSON response.
    #[wasm_bindgen(js_name = fromDirectionsJson)]
    pub fn from_directions_json(
        directions_json: &str,
        options: JsValue,
    ) -> Result<NavigationSession, JsValue> {
        console_error_panic_hook::set_once();

        let opts = parse_options(options)?;
        let route = Route::from_directions_json(directions_json)?;
        Ok(Self {
            inner: TrackerSession::initialize(route, opts),
        })
    }

    /// Feed a position fix. Returns the new update, or `undefined` when the
    /// sample was skipped and the last displayed state still stands.
    #[wasm_bindgen(js_name = onPositionSample)]
    pub fn on_position_sample(&mut self, sample: JsValue) -> Result<JsValue, JsValue> {
        let position = match parse_position(sample) {
            Ok(c) => Some(c),
            Err(e) => {
                debug!("Skipping position sample: {e}");
                None
            }
        };

        match self.inner.on_position_sample(position) {
            Some(update) => to_js(&update.with_eta(js_sys::Date::now())),
            None => Ok(JsValue::UNDEFINED),
        }
    }

    /// Feed a `{ trueHeading }` reading. Returns a camera move or `undefined`.
    #[wasm_bindgen(js_name = onHeadingSample)]
    pub fn on_heading_sample(&mut self, sample: JsValue) -> Result<JsValue, JsValue> {
        if sample.is_undefined() || sample.is_null() {
            return Ok(JsValue::UNDEFINED);
        }
        let heading: HeadingSample = from_js(sample)?;
        match self.inner.on_heading_sample(heading.true_heading) {
            Some(cmd) => to_js(&cmd),
            None => Ok(JsValue::UNDEFINED),
        }
    }

    /// The map reported a user gesture; stop moving the camera.
    #[wasm_bindgen(js_name = onManualGesture)]
    pub fn on_manual_gesture(&mut self) {
        self.inner.on_manual_gesture();
    }

    /// Resume following. Returns the immediate camera move, if a fix is known.
    pub fn recenter(&mut self) -> Result<JsValue, JsValue> {
        match self.inner.recenter() {
            Some(cmd) => to_js(&cmd),
            None => Ok(JsValue::UNDEFINED),
        }
    }

    /// The current update, without a camera move.
    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        to_js(&self.inner.snapshot().with_eta(js_sys::Date::now()))
    }

    #[wasm_bindgen(js_name = cameraMode)]
    pub fn camera_mode(&self) -> Result<JsValue, JsValue> {
        to_js(&self.inner.camera_mode())
    }

    #[wasm_bindgen(js_name = remainingRouteGeoJson)]
    pub fn remaining_route_geojson(&self) -> Result<JsValue, JsValue> {
        to_js(&converter::remaining_route_feature(
            self.inner.remaining_geometry(),
        ))
    }

    #[wasm_bindgen(js_name = routeGeoJson)]
    pub fn route_geojson(&self) -> Result<JsValue, JsValue> {
        to_js(&converter::route_to_feature_collection(self.inner.route()))
    }

    /// End the session. The caller releases its location and heading
    /// subscriptions alongside this call.
    pub fn dispose(&mut self) {
        self.inner.dispose();
    }

    #[wasm_bindgen(getter = isDisposed)]
    pub fn is_disposed(&self) -> bool {
        self.inner.is_disposed()
    }
}

fn parse_options(options: JsValue) -> Result<NavigationOptions, JsValue> {
    if options.is_undefined() || options.is_null() {
        Ok(NavigationOptions::default())
    } else {
        from_js(options)
    }
}

fn parse_position(sample: JsValue) -> Result<Coordinate, NavError> {
    if sample.is_undefined() || sample.is_null() {
        return Err(NavError::MissingPosition);
    }
    let sample: PositionSample =
        serde_wasm_bindgen::from_value(sample).map_err(|_| NavError::MissingPosition)?;
    sample.coordinate()
}

/// Serialize as plain JS objects and arrays (maps become objects, not `Map`).
fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

fn from_js<T: serde::de::DeserializeOwned>(value: JsValue) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}
