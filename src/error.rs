use wasm_bindgen::JsValue;

#[derive(Debug)]
pub enum NavError {
    EmptyRoute,
    Decode {
        step: Option<usize>,
        offset: usize,
        reason: &'static str,
    },
    MissingPosition,
    InvalidCoordinate {
        index: usize,
    },
    NoRoute,
    DirectionsStatus(String),
    JsonParse(serde_json::Error),
}

impl NavError {
    /// Attach the index of the step whose polyline failed to decode.
    pub fn in_step(self, index: usize) -> Self {
        match self {
            Self::Decode { offset, reason, .. } => Self::Decode {
                step: Some(index),
                offset,
                reason,
            },
            other => other,
        }
    }
}

impl std::fmt::Display for NavError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyRoute => write!(f, "Route has no steps"),
            Self::Decode {
                step: Some(step),
                offset,
                reason,
            } => write!(
                f,
                "Polyline decode error in step {step} at offset {offset}: {reason}"
            ),
            Self::Decode {
                step: None,
                offset,
                reason,
            } => write!(f, "Polyline decode error at offset {offset}: {reason}"),
            Self::MissingPosition => write!(f, "No position fix available"),
            Self::InvalidCoordinate { index } => {
                write!(f, "Coordinate {index} is not a valid latitude/longitude")
            }
            Self::NoRoute => write!(f, "Directions response contains no route"),
            Self::DirectionsStatus(status) => {
                write!(f, "Directions request failed with status '{status}'")
            }
            Self::JsonParse(e) => write!(f, "JSON parse error: {e}"),
        }
    }
}

impl std::error::Error for NavError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::JsonParse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for NavError {
    fn from(e: serde_json::Error) -> Self {
        Self::JsonParse(e)
    }
}

impl From<NavError> for JsValue {
    fn from(e: NavError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}
