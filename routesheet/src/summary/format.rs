//! Distance and duration formatting for the summary card.

const METERS_PER_KILOMETER: f64 = 1000.0;
const SECONDS_PER_HOUR: u64 = 3600;
const SECONDS_PER_MINUTE: u64 = 60;

/// Format meters as kilometers with two decimals, e.g. `"12.34 km"`.
pub fn format_distance(distance_meters: f64) -> String {
    format!("{:.2} km", distance_meters / METERS_PER_KILOMETER)
}

/// Format seconds as whole hours and minutes, e.g. `"1h 30m"`.
///
/// Both parts are truncated, never rounded: 5399 seconds is `"1h 29m"`.
/// Negative or non-finite durations format as `"0h 0m"`.
pub fn format_duration(duration_seconds: f64) -> String {
    let total = if duration_seconds.is_finite() && duration_seconds > 0.0 {
        duration_seconds.floor() as u64
    } else {
        0
    };
    let hours = total / SECONDS_PER_HOUR;
    let minutes = (total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
    format!("{}h {}m", hours, minutes)
}

/// Full card text, e.g. `"12.34 km • 1h 30m"`.
pub fn format_summary(distance_meters: f64, duration_seconds: f64) -> String {
    format!(
        "{} • {}",
        format_distance(distance_meters),
        format_duration(duration_seconds)
    )
}
