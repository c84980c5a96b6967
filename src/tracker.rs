//! Step-progress state machine.
//!
//! The tracker measures each fix against the *start* of the current step and
//! moves to the next step once that point is within the advance threshold.
//! The step index never decreases.

use log::{debug, warn};
use serde::Serialize;

use crate::geo::{Coordinate, planar_distance_m};
use crate::maneuver::Maneuver;
use crate::markup::strip_markup;
use crate::route::Route;

pub const DEFAULT_ADVANCE_THRESHOLD_M: f64 = 25.0;

/// Progress along the route, as shown to the traveler.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackerState {
    pub current_step_index: usize,
    pub distance_to_turn_meters: f64,
    pub remaining_distance_meters: f64,
    pub remaining_duration_seconds: f64,
    pub current_instruction_text: String,
    pub current_maneuver: Maneuver,
    pub next_instruction_text: String,
    pub next_maneuver: Maneuver,
}

/// What a position sample did to the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleOutcome {
    /// No fix was available; the previous state is kept.
    MissingPosition,
    /// Same fix as the last applied one; nothing recomputed.
    Duplicate,
    Updated { advanced: bool },
}

#[derive(Debug, Clone)]
pub struct ProgressTracker {
    state: TrackerState,
    advance_threshold_m: f64,
    step_count: usize,
    last_position: Option<Coordinate>,
}

impl ProgressTracker {
    /// Start tracking at the first step of `route`.
    pub fn initialize(route: &Route, advance_threshold_m: f64) -> Self {
        let mut state = TrackerState {
            current_step_index: 0,
            distance_to_turn_meters: 0.0,
            remaining_distance_meters: 0.0,
            remaining_duration_seconds: 0.0,
            current_instruction_text: String::new(),
            current_maneuver: Maneuver::Unknown,
            next_instruction_text: String::new(),
            next_maneuver: Maneuver::Unknown,
        };
        refresh(&mut state, route);

        Self {
            state,
            advance_threshold_m,
            step_count: route.step_count(),
            last_position: None,
        }
    }

    pub fn state(&self) -> &TrackerState {
        &self.state
    }

    pub fn current_step_index(&self) -> usize {
        self.state.current_step_index
    }

    pub fn advance_threshold_m(&self) -> f64 {
        self.advance_threshold_m
    }

    /// Apply one position sample.
    ///
    /// `route` must be the route the tracker was initialized with.
    pub fn on_position_sample(
        &mut self,
        route: &Route,
        position: Option<Coordinate>,
    ) -> SampleOutcome {
        debug_assert_eq!(
            route.step_count(),
            self.step_count,
            "tracker fed a different route than it was initialized with"
        );
        let Some(position) = position else {
            return SampleOutcome::MissingPosition;
        };
        if self.last_position == Some(position) {
            return SampleOutcome::Duplicate;
        }
        self.last_position = Some(position);

        let index = self.state.current_step_index;
        let Some(step) = route.step(index) else {
            warn!("Step {index} missing from route; ignoring sample");
            return SampleOutcome::MissingPosition;
        };

        let distance = planar_distance_m(&position, &step.start);
        self.state.distance_to_turn_meters = distance;

        let advanced = distance < self.advance_threshold_m && index < route.last_index();
        if advanced {
            self.state.current_step_index = index + 1;
            debug!(
                "Advanced to step {} of {} ({distance:.1} m from step {index} start)",
                index + 1,
                route.step_count()
            );
        }

        refresh(&mut self.state, route);
        SampleOutcome::Updated { advanced }
    }
}

/// Recompute instruction fields and remaining totals for the current index.
fn refresh(state: &mut TrackerState, route: &Route) {
    let index = state.current_step_index;

    match route.step(index) {
        Some(step) => {
            state.current_instruction_text = strip_markup(&step.instruction_markup);
            state.current_maneuver = step.maneuver;
        }
        None => {
            state.current_instruction_text.clear();
            state.current_maneuver = Maneuver::Unknown;
        }
    }

    match route.step(index + 1) {
        Some(next) => {
            state.next_instruction_text = strip_markup(&next.instruction_markup);
            state.next_maneuver = next.maneuver;
        }
        None => {
            state.next_instruction_text.clear();
            state.next_maneuver = Maneuver::Unknown;
        }
    }

    let (distance, duration) = route.remaining_from(index);
    state.remaining_distance_meters = distance;
    state.remaining_duration_seconds = duration;
}
