//! Travel-time estimation.
//!
//! Converts great-circle distance into an approximate driving time at
//! an assumed average urban speed. This is deliberately not a routed
//! ETA: it exists to give the scorer and the user a consistent,
//! deterministic estimate, and the same inputs always produce the
//! same output.

/// Estimate travel time in minutes for a distance at an average speed.
///
/// Rounded to the nearest minute and floored at 1, so a very close
/// station never shows "0 minutes".
pub fn travel_time_min(distance_km: f64, avg_speed_kmh: f64) -> i64 {
    let minutes = distance_km / avg_speed_kmh * 60.0;
    (minutes.round() as i64).max(1)
}
