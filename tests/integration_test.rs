use turnpike_nav_wasm::camera::CameraFollowMode;
use turnpike_nav_wasm::error::NavError;
use turnpike_nav_wasm::geo::Coordinate;
use turnpike_nav_wasm::maneuver::Maneuver;
use turnpike_nav_wasm::options::{DistanceUnits, NavigationOptions};
use turnpike_nav_wasm::remaining::compute_remaining;
use turnpike_nav_wasm::route::Route;
use turnpike_nav_wasm::session::TrackerSession;

fn load_fixture(path: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{path}")).unwrap()
}

fn downtown() -> Route {
    Route::from_directions_json(&load_fixture("downtown.json")).unwrap()
}

fn start_session(opts: NavigationOptions) -> TrackerSession {
    env_logger::try_init().ok();
    TrackerSession::initialize(downtown(), opts)
}

// ---- route construction ----

#[test]
fn test_route_from_directions() {
    let route = downtown();
    assert_eq!(route.step_count(), 3);
    assert_eq!(route.geometry().len(), 9);

    let steps = route.steps();
    assert_eq!(steps[0].maneuver, Maneuver::Unknown);
    assert_eq!(steps[1].maneuver, Maneuver::TurnRight);
    assert_eq!(steps[2].maneuver, Maneuver::TurnLeft);
    assert_eq!(steps[0].start, Coordinate::new(30.4383, -84.2807));
    assert_eq!(steps[2].end, Coordinate::new(30.445, -84.275));
    assert!(steps[2].instruction_markup.contains("<div"));

    let summary = route.summary();
    assert_eq!(summary.distance_text.as_deref(), Some("0.8 mi"));
    assert_eq!(summary.duration_seconds, Some(205.0));
    assert_eq!(
        summary.end_address.as_deref(),
        Some("N Gadsden St, Tallahassee, FL 32301, USA")
    );
}

#[test]
fn test_empty_steps_rejected() {
    let err = Route::from_directions_json(&load_fixture("empty_steps.json")).unwrap_err();
    assert!(matches!(err, NavError::EmptyRoute));
}

#[test]
fn test_malformed_polyline_rejected() {
    let err = Route::from_directions_json(&load_fixture("malformed_polyline.json")).unwrap_err();
    match err {
        NavError::Decode { step, .. } => assert_eq!(step, Some(1)),
        other => panic!("Expected Decode error, got {other:?}"),
    }
}

#[test]
fn test_zero_results_rejected() {
    let err = Route::from_directions_json(&load_fixture("zero_results.json")).unwrap_err();
    assert!(matches!(err, NavError::DirectionsStatus(ref s) if s == "ZERO_RESULTS"));
    assert_eq!(
        err.to_string(),
        "Directions request failed with status 'ZERO_RESULTS'"
    );
}

// ---- progress tracking ----

#[test]
fn test_initial_update() {
    let session = start_session(NavigationOptions::default());
    let u = session.snapshot();

    assert_eq!(u.current_step_index, 0);
    assert_eq!(
        u.instruction_text,
        "Head north on S Monroe St toward E Jefferson St"
    );
    assert_eq!(u.maneuver, Maneuver::Unknown);
    assert_eq!(u.maneuver_icon, "straight_icon");
    assert_eq!(u.next_instruction_text, "Turn right onto E Tennessee St");
    assert_eq!(u.next_maneuver, Maneuver::TurnRight);
    assert_eq!(u.next_maneuver_text, "Turn Right");
    assert_eq!(u.remaining_distance_meters, 1293.0);
    assert_eq!(u.remaining_duration_seconds, 205.0);
    assert_eq!(u.remaining_distance_text, "0.8 mi");
    assert_eq!(u.remaining_duration_text, "3 min");
    assert_eq!(u.remaining_route_geometry.len(), 9);
}

#[test]
fn test_drive_along_route() {
    let mut session = start_session(NavigationOptions::default());
    let geometry = session.route().geometry().to_vec();

    let mut last_index = 0;
    let mut last_remaining = f64::INFINITY;
    for p in &geometry {
        if let Some(u) = session.on_position_sample(Some(*p)) {
            assert!(u.current_step_index >= last_index);
            assert!(u.current_step_index <= 2);
            assert!(u.remaining_distance_meters <= last_remaining);
            last_index = u.current_step_index;
            last_remaining = u.remaining_distance_meters;
        }
    }

    let state = session.state();
    assert_eq!(state.current_step_index, 2);
    assert_eq!(
        state.current_instruction_text,
        "Turn left onto N Gadsden St"
    );
    assert_eq!(state.next_instruction_text, "");
    assert_eq!(state.next_maneuver, Maneuver::Unknown);
    assert_eq!(state.remaining_distance_meters, 556.0);
    assert_eq!(state.remaining_duration_seconds, 90.0);
}

#[test]
fn test_advance_uses_step_start() {
    let mut session = start_session(NavigationOptions::default());

    // Standing at the first step's start advances straight away
    let u = session
        .on_position_sample(Some(Coordinate::new(30.4383, -84.2807)))
        .unwrap();
    assert_eq!(u.current_step_index, 1);
    assert_eq!(u.distance_to_turn_meters, 0.0);
    assert_eq!(u.remaining_distance_meters, 1104.0);
    assert_eq!(u.remaining_duration_seconds, 165.0);

    // Halfway up Monroe St is ~100 m from the next step's start
    let u = session
        .on_position_sample(Some(Coordinate::new(30.4391, -84.2807)))
        .unwrap();
    assert_eq!(u.current_step_index, 1);
    assert!((u.distance_to_turn_meters - 100.0).abs() < 1.0);
}

#[test]
fn test_stream_gap_keeps_last_state() {
    let mut session = start_session(NavigationOptions::default());
    session.on_position_sample(Some(Coordinate::new(30.4391, -84.2807)));
    let before = session.snapshot();

    assert!(session.on_position_sample(None).is_none());
    assert_eq!(session.snapshot(), before);
}

// ---- remaining route ----

#[test]
fn test_remaining_route_trims_behind() {
    let route = downtown();
    let at_turn = Coordinate::new(30.44, -84.2807);
    let rest = compute_remaining(route.geometry(), &at_turn);
    assert_eq!(rest.len(), 7);
    assert_eq!(rest[0], at_turn);
    assert_eq!(rest.last(), route.geometry().last());
}

// ---- camera ----

#[test]
fn test_camera_follow_cycle() {
    let mut session = start_session(NavigationOptions {
        camera_settle_delay_ms: 400,
        ..Default::default()
    });

    let u = session
        .on_position_sample(Some(Coordinate::new(30.4391, -84.2807)))
        .unwrap();
    assert_eq!(u.camera.as_ref().unwrap().delay_ms, 400);

    session.on_manual_gesture();
    let u = session
        .on_position_sample(Some(Coordinate::new(30.4392, -84.2807)))
        .unwrap();
    assert_eq!(u.camera_mode, CameraFollowMode::ManualOverride);
    assert!(u.camera.is_none());
    // Tracking continues while the camera is free
    assert_eq!(u.remaining_route_geometry.len(), 8);

    let cmd = session.recenter().unwrap();
    assert_eq!(cmd.center, Coordinate::new(30.4392, -84.2807));
    assert_eq!(cmd.delay_ms, 0);
    assert_eq!(session.camera_mode(), CameraFollowMode::Following);
}

#[test]
fn test_metric_units() {
    let session = start_session(NavigationOptions {
        distance_units: DistanceUnits::Metric,
        ..Default::default()
    });
    assert_eq!(session.snapshot().remaining_distance_text, "1.3 km");
}

#[test]
fn test_update_serializes_camel_case() {
    let mut session = start_session(NavigationOptions::default());
    let u = session
        .on_position_sample(Some(Coordinate::new(30.4383, -84.2807)))
        .unwrap();
    let json = serde_json::to_value(&u).unwrap();

    assert_eq!(json["instructionText"], "Turn right onto E Tennessee St");
    assert_eq!(json["maneuver"], "turn-right");
    assert_eq!(json["nextManeuver"], "turn-left");
    assert_eq!(json["cameraMode"], "following");
    assert_eq!(json["remainingRouteGeometry"][0]["latitude"], 30.4383);
    assert!(json.get("etaEpochMs").is_none());
    assert_eq!(json["camera"]["center"]["longitude"], -84.2807);
}
