use serde::Serialize;

/// Maneuver into a step, as coded by the directions service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Maneuver {
    TurnSlightLeft,
    TurnSharpLeft,
    UturnLeft,
    TurnLeft,
    TurnSlightRight,
    TurnSharpRight,
    UturnRight,
    TurnRight,
    Straight,
    RampLeft,
    RampRight,
    Merge,
    ForkLeft,
    ForkRight,
    RoundaboutLeft,
    RoundaboutRight,
    Depart,
    #[default]
    Unknown,
}

impl Maneuver {
    /// Parse a service code. Anything unrecognized becomes `Unknown`.
    pub fn from_code(code: &str) -> Self {
        match code {
            "turn-slight-left" => Self::TurnSlightLeft,
            "turn-sharp-left" => Self::TurnSharpLeft,
            "uturn-left" => Self::UturnLeft,
            "turn-left" => Self::TurnLeft,
            "turn-slight-right" => Self::TurnSlightRight,
            "turn-sharp-right" => Self::TurnSharpRight,
            "uturn-right" => Self::UturnRight,
            "turn-right" => Self::TurnRight,
            "straight" => Self::Straight,
            "ramp-left" => Self::RampLeft,
            "ramp-right" => Self::RampRight,
            "merge" => Self::Merge,
            "fork-left" => Self::ForkLeft,
            "fork-right" => Self::ForkRight,
            "roundabout-left" => Self::RoundaboutLeft,
            "roundabout-right" => Self::RoundaboutRight,
            "depart" => Self::Depart,
            _ => Self::Unknown,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::TurnSlightLeft => "turn-slight-left",
            Self::TurnSharpLeft => "turn-sharp-left",
            Self::UturnLeft => "uturn-left",
            Self::TurnLeft => "turn-left",
            Self::TurnSlightRight => "turn-slight-right",
            Self::TurnSharpRight => "turn-sharp-right",
            Self::UturnRight => "uturn-right",
            Self::TurnRight => "turn-right",
            Self::Straight => "straight",
            Self::RampLeft => "ramp-left",
            Self::RampRight => "ramp-right",
            Self::Merge => "merge",
            Self::ForkLeft => "fork-left",
            Self::ForkRight => "fork-right",
            Self::RoundaboutLeft => "roundabout-left",
            Self::RoundaboutRight => "roundabout-right",
            Self::Depart => "depart",
            Self::Unknown => "unknown",
        }
    }

    /// Short label shown next to the maneuver icon.
    pub fn display_text(self) -> &'static str {
        match self {
            Self::TurnSlightLeft => "Turn Slight Left",
            Self::TurnSharpLeft => "Turn Sharp Left",
            Self::UturnLeft => "U-turn Left",
            Self::TurnLeft => "Turn Left",
            Self::TurnSlightRight => "Turn Slight Right",
            Self::TurnSharpRight => "Turn Sharp Right",
            Self::UturnRight => "U-turn Right",
            Self::TurnRight => "Turn Right",
            Self::Straight => "Straight",
            Self::RampLeft => "Ramp Left",
            Self::RampRight => "Ramp Right",
            Self::Merge => "Merge",
            Self::ForkLeft => "Fork Left",
            Self::ForkRight => "Fork Right",
            Self::RoundaboutLeft => "Roundabout Left",
            Self::RoundaboutRight => "Roundabout Right",
            Self::Depart => "Start Route",
            Self::Unknown => "Continue Straight",
        }
    }

    /// Name of the bundled direction icon asset.
    pub fn icon_name(self) -> &'static str {
        match self {
            Self::TurnSlightLeft => "turn_slight_left_icon",
            Self::TurnSharpLeft => "turn_sharp_left_icon",
            Self::UturnLeft => "u_turn_left_icon",
            Self::TurnLeft => "turn_left_icon",
            Self::TurnSlightRight => "turn_slight_right_icon",
            Self::TurnSharpRight => "turn_sharp_right_icon",
            Self::UturnRight => "u_turn_right_icon",
            Self::TurnRight => "turn_right_icon",
            Self::Straight | Self::Unknown => "straight_icon",
            Self::RampLeft => "ramp_left_icon",
            Self::RampRight => "ramp_right_icon",
            Self::Merge => "merge_icon",
            Self::ForkLeft => "fork_left_icon",
            Self::ForkRight => "fork_right_icon",
            Self::RoundaboutLeft => "roundabout_left_icon",
            Self::RoundaboutRight => "roundabout_right_icon",
            Self::Depart => "depart_icon",
        }
    }
}
