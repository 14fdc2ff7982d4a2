//! Wall-clock access

use chrono::Utc;

/// Current wall-clock time as fractional seconds since the Unix epoch.
///
/// The countdown engine never reads the clock itself; `now` values flow in
/// from the presentation layer so that state transitions stay deterministic
/// under test.
pub fn unix_now() -> f64 {
    Utc::now().timestamp_millis() as f64 / 1000.0
}
