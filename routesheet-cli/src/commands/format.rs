//! Format-summary command.

use routesheet::summary::format_summary;

pub fn run(distance_meters: f64, duration_seconds: f64) {
    println!("{}", format_summary(distance_meters, duration_seconds));
}
