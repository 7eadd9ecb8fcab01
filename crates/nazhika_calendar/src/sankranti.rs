//! Sankranti root-finder: the instant the Sun's sidereal longitude crosses a
//! rasi boundary.

use chrono::{DateTime, Duration, Utc};
use nazhika_astro::{AyanamsaModel, normalize_to_pm180, sidereal_sun_longitude};

use crate::error::CalendarError;

/// Look-back window for the search. One rasi ingress occurs roughly every
/// 30 days, so 32 days always brackets the most recent one.
pub const SANKRANTI_WINDOW_DAYS: i64 = 32;

/// Find the most recent instant before `search_end` at which the Sun's
/// sidereal longitude crossed `target_deg`.
///
/// Bisection over `[search_end - 32 d, search_end]` on the signed angular
/// distance to the target, wrapped into (-180, 180] so a crossing through
/// 360->0 steers correctly. Converges to a one-second window and returns the
/// upper bound. A window with no crossing is an error, never a guessed date.
pub fn find_sankranti(
    target_deg: f64,
    search_end: DateTime<Utc>,
    model: AyanamsaModel,
) -> Result<DateTime<Utc>, CalendarError> {
    let distance =
        |t: DateTime<Utc>| normalize_to_pm180(sidereal_sun_longitude(t, model) - target_deg);

    let mut low = search_end - Duration::days(SANKRANTI_WINDOW_DAYS);
    let mut high = search_end;
    // The Sun moves ~1 deg/day, so the distance is strictly increasing across
    // the window; a bracketing sign change is required for bisection.
    if distance(low) > 0.0 || distance(high) < 0.0 {
        return Err(CalendarError::SankrantiNotFound { target_deg, search_end });
    }

    while high - low > Duration::seconds(1) {
        let mid = low + (high - low) / 2;
        if distance(mid) < 0.0 {
            low = mid;
        } else {
            high = mid;
        }
    }
    Ok(high)
}
