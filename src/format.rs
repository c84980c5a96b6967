use crate::options::DistanceUnits;

const METERS_PER_MILE: f64 = 1609.344;
const FEET_PER_METER: f64 = 3.280_839_895;

/// Human-readable distance, e.g. "350 ft", "0.8 mi", "150 m", "2.5 km".
pub fn format_distance(meters: f64, units: DistanceUnits) -> String {
    let meters = meters.max(0.0);
    match units {
        DistanceUnits::Imperial => {
            let miles = meters / METERS_PER_MILE;
            if miles < 0.1 {
                format!("{} ft", round_to_ten(meters * FEET_PER_METER))
            } else {
                format!("{miles:.1} mi")
            }
        }
        DistanceUnits::Metric => {
            if meters < 1000.0 {
                format!("{} m", round_to_ten(meters))
            } else {
                format!("{:.1} km", meters / 1000.0)
            }
        }
    }
}

/// Human-readable duration in whole minutes, e.g. "3 min", "1 hr 5 min".
pub fn format_duration(seconds: f64) -> String {
    let seconds = seconds.max(0.0);
    let mut minutes = (seconds / 60.0).round() as u64;
    if minutes == 0 && seconds > 0.0 {
        minutes = 1;
    }

    match (minutes / 60, minutes % 60) {
        (0, m) => format!("{m} min"),
        (h, 0) => format!("{h} hr"),
        (h, m) => format!("{h} hr {m} min"),
    }
}

fn round_to_ten(value: f64) -> i64 {
    (value / 10.0).round() as i64 * 10
}
