use serde::Deserialize;

/// Options for a navigation session.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationOptions {
    /// Distance to the current step's start below which the tracker moves on (default: 25)
    #[serde(default = "default_advance_threshold")]
    pub advance_threshold_meters: f64,

    /// Delay before a follow-mode camera move is applied (default: 250)
    #[serde(default = "default_settle_delay")]
    pub camera_settle_delay_ms: u32,

    /// Animation length of a follow-mode camera move (default: 250)
    #[serde(default = "default_follow_animation")]
    pub follow_animation_ms: u32,

    /// Animation length of an explicit recenter (default: 1000)
    #[serde(default = "default_recenter_animation")]
    pub recenter_animation_ms: u32,

    /// Latitude span of the camera region (default: 0.0922)
    #[serde(default = "default_latitude_delta")]
    pub camera_latitude_delta: f64,

    /// Longitude span of the camera region (default: 0.0421)
    #[serde(default = "default_longitude_delta")]
    pub camera_longitude_delta: f64,

    /// Units used for the formatted distance strings (default: imperial)
    #[serde(default)]
    pub distance_units: DistanceUnits,
}

impl Default for NavigationOptions {
    fn default() -> Self {
        Self {
            advance_threshold_meters: default_advance_threshold(),
            camera_settle_delay_ms: default_settle_delay(),
            follow_animation_ms: default_follow_animation(),
            recenter_animation_ms: default_recenter_animation(),
            camera_latitude_delta: default_latitude_delta(),
            camera_longitude_delta: default_longitude_delta(),
            distance_units: DistanceUnits::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnits {
    #[default]
    Imperial,
    Metric,
}

fn default_advance_threshold() -> f64 {
    25.0
}

fn default_settle_delay() -> u32 {
    250
}

fn default_follow_animation() -> u32 {
    250
}

fn default_recenter_animation() -> u32 {
    1000
}

fn default_latitude_delta() -> f64 {
    0.0922
}

fn default_longitude_delta() -> f64 {
    0.0421
}
