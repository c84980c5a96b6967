//! One navigation session: route, progress, remaining line and camera.
//!
//! Every event is handled to completion before the next one; nothing here
//! blocks or spawns. Location and heading subscriptions belong to the
//! caller, which must release them when calling [`TrackerSession::dispose`].

use log::{debug, info, warn};
use serde::Serialize;

use crate::camera::{CameraCommand, CameraFollow, CameraFollowMode};
use crate::format::{format_distance, format_duration};
use crate::geo::Coordinate;
use crate::maneuver::Maneuver;
use crate::options::NavigationOptions;
use crate::remaining::nearest_vertex_index;
use crate::route::Route;
use crate::samples::normalize_heading;
use crate::tracker::{ProgressTracker, SampleOutcome, TrackerState};

/// Everything the rendering and map collaborators need after one sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationUpdate {
    pub instruction_text: String,
    pub maneuver: Maneuver,
    pub maneuver_icon: &'static str,
    pub next_instruction_text: String,
    pub next_maneuver: Maneuver,
    pub next_maneuver_icon: &'static str,
    pub next_maneuver_text: &'static str,
    pub current_step_index: usize,
    pub step_count: usize,
    pub distance_to_turn_meters: f64,
    pub remaining_distance_meters: f64,
    pub remaining_duration_seconds: f64,
    pub distance_to_turn_text: String,
    pub remaining_distance_text: String,
    pub remaining_duration_text: String,
    pub remaining_route_geometry: Vec<Coordinate>,
    pub camera_mode: CameraFollowMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub camera: Option<CameraCommand>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eta_epoch_ms: Option<f64>,
}

impl NavigationUpdate {
    /// Fill in the arrival time given the current wall-clock time.
    pub fn with_eta(mut self, now_epoch_ms: f64) -> Self {
        self.eta_epoch_ms = Some(now_epoch_ms + self.remaining_duration_seconds * 1000.0);
        self
    }
}

pub struct TrackerSession {
    route: Route,
    tracker: ProgressTracker,
    camera: CameraFollow,
    options: NavigationOptions,
    remaining_start: usize,
    last_position: Option<Coordinate>,
    heading: Option<f64>,
    disposed: bool,
}

impl TrackerSession {
    pub fn initialize(route: Route, options: NavigationOptions) -> Self {
        info!(
            "Navigation session started: {} steps, {:.0} m",
            route.step_count(),
            route.remaining_from(0).0
        );
        let tracker = ProgressTracker::initialize(&route, options.advance_threshold_meters);
        let camera = CameraFollow::new(&options);
        Self {
            route,
            tracker,
            camera,
            options,
            remaining_start: 0,
            last_position: None,
            heading: None,
            disposed: false,
        }
    }

    /// Apply a position fix. Returns `None` when the sample changed nothing
    /// (missing fix, duplicate fix, or a disposed session).
    pub fn on_position_sample(&mut self, position: Option<Coordinate>) -> Option<NavigationUpdate> {
        if self.disposed {
            warn!("Position sample delivered after dispose; ignoring");
            return None;
        }

        match self.tracker.on_position_sample(&self.route, position) {
            SampleOutcome::MissingPosition => {
                debug!("No position fix; keeping last state");
                None
            }
            // The camera already sits on this fix, so no follow move is sent either.
            SampleOutcome::Duplicate => None,
            SampleOutcome::Updated { .. } => {
                let position = position?;
                self.last_position = Some(position);
                self.remaining_start =
                    nearest_vertex_index(self.route.geometry(), &position).unwrap_or(0);
                let camera = self.camera.follow(position, self.heading);
                Some(self.build_update(camera))
            }
        }
    }

    /// Apply a compass reading. Returns a camera move while following.
    pub fn on_heading_sample(&mut self, true_heading: f64) -> Option<CameraCommand> {
        if self.disposed {
            warn!("Heading sample delivered after dispose; ignoring");
            return None;
        }
        let heading = normalize_heading(true_heading)?;
        self.heading = Some(heading);
        self.camera.follow(self.last_position?, self.heading)
    }

    pub fn on_manual_gesture(&mut self) {
        if self.disposed {
            return;
        }
        self.camera.on_manual_gesture();
    }

    pub fn recenter(&mut self) -> Option<CameraCommand> {
        if self.disposed {
            warn!("Recenter requested after dispose; ignoring");
            return None;
        }
        self.camera.recenter(self.last_position, self.heading)
    }

    /// End the session. Later samples are ignored.
    pub fn dispose(&mut self) {
        if !self.disposed {
            info!(
                "Navigation session disposed at step {} of {}",
                self.tracker.current_step_index() + 1,
                self.route.step_count()
            );
        }
        self.disposed = true;
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Current update without a camera move.
    pub fn snapshot(&self) -> NavigationUpdate {
        self.build_update(None)
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn state(&self) -> &TrackerState {
        self.tracker.state()
    }

    pub fn camera_mode(&self) -> CameraFollowMode {
        self.camera.mode()
    }

    pub fn heading(&self) -> Option<f64> {
        self.heading
    }

    pub fn remaining_geometry(&self) -> &[Coordinate] {
        self.route
            .geometry()
            .get(self.remaining_start..)
            .unwrap_or_default()
    }

    fn build_update(&self, camera: Option<CameraCommand>) -> NavigationUpdate {
        let state = self.tracker.state();
        let units = self.options.distance_units;
        NavigationUpdate {
            instruction_text: state.current_instruction_text.clone(),
            maneuver: state.current_maneuver,
            maneuver_icon: state.current_maneuver.icon_name(),
            next_instruction_text: state.next_instruction_text.clone(),
            next_maneuver: state.next_maneuver,
            next_maneuver_icon: state.next_maneuver.icon_name(),
            next_maneuver_text: state.next_maneuver.display_text(),
            current_step_index: state.current_step_index,
            step_count: self.route.step_count(),
            distance_to_turn_meters: state.distance_to_turn_meters,
            remaining_distance_meters: state.remaining_distance_meters,
            remaining_duration_seconds: state.remaining_duration_seconds,
            distance_to_turn_text: format_distance(state.distance_to_turn_meters, units),
            remaining_distance_text: format_distance(state.remaining_distance_meters, units),
            remaining_duration_text: format_duration(state.remaining_duration_seconds),
            remaining_route_geometry: self.remaining_geometry().to_vec(),
            camera_mode: self.camera.mode(),
            camera,
            eta_epoch_ms: None,
        }
    }
}
