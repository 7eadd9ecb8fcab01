//! Julian Date conversions.
//!
//! The Julian Date is the continuous day count used as the time axis for all
//! trigonometric series in the engine. It is derived from the absolute epoch
//! offset of an instant, so it is monotonic with wall-clock time and carries
//! no timezone ambiguity.

use chrono::{DateTime, Utc};

/// Julian Date of the J2000.0 epoch (2000-01-01T12:00:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian Date of the Unix epoch (1970-01-01T00:00:00 UTC).
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Seconds per day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Julian Date of a UTC instant.
///
/// Computed from the Unix timestamp, sub-second part included, so the result
/// is strictly monotonic in the input.
pub fn julian_day(t: DateTime<Utc>) -> f64 {
    let seconds = t.timestamp() as f64 + f64::from(t.timestamp_subsec_millis()) / 1_000.0;
    seconds / SECONDS_PER_DAY + UNIX_EPOCH_JD
}

/// Julian centuries since J2000.0 for a UTC instant.
///
/// The argument `T` of the longitude and ayanamsa series.
pub fn julian_centuries(t: DateTime<Utc>) -> f64 {
    (julian_day(t) - J2000_JD) / 36_525.0
}

/// UTC instant of a Julian Date, to millisecond precision.
///
/// Returns `None` for Julian Dates outside the representable chrono range.
pub fn julian_day_to_instant(jd: f64) -> Option<DateTime<Utc>> {
    let millis = ((jd - UNIX_EPOCH_JD) * SECONDS_PER_DAY * 1_000.0).round() as i64;
    DateTime::<Utc>::from_timestamp_millis(millis)
}
