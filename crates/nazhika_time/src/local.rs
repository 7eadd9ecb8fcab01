//! Timezone-explicit local calendar helpers.
//!
//! The Tamil calendar and the Nazhigai scheduler both reason about *local*
//! calendar days (sunset rule, noon-normalized reference days). These helpers
//! make the timezone an explicit argument so the calendrical core never reads
//! process-global locale state.

use chrono::{DateTime, LocalResult, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;

/// Local calendar date of a UTC instant in the given timezone.
pub fn local_date(t: DateTime<Utc>, tz: Tz) -> NaiveDate {
    t.with_timezone(&tz).date_naive()
}

/// UTC instant of a wall-clock time on a local calendar date.
///
/// DST transitions are resolved deterministically: an ambiguous wall-clock
/// time maps to its earlier instant, and a time skipped by a spring-forward
/// gap yields `None`.
pub fn at_local_time(date: NaiveDate, hour: u32, min: u32, sec: u32, tz: Tz) -> Option<DateTime<Utc>> {
    let naive = date.and_hms_opt(hour, min, sec)?;
    let resolved = match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earlier, _) => earlier,
        LocalResult::None => return None,
    };
    Some(resolved.with_timezone(&Utc))
}

/// UTC instant of local noon on a local calendar date.
///
/// Noon is used as the reference point for day arithmetic because it sits
/// far from both midnight (UTC day-boundary drift) and DST transition hours.
pub fn local_noon(date: NaiveDate, tz: Tz) -> Option<DateTime<Utc>> {
    at_local_time(date, 12, 0, 0, tz)
}

/// Whole local-calendar-day count from a local date to an instant.
///
/// The instant is projected onto its local date first, so an interval
/// spanning a single local midnight counts as one day regardless of its
/// length in hours.
pub fn local_day_span(from: NaiveDate, to: DateTime<Utc>, tz: Tz) -> i64 {
    (local_date(to, tz) - from).num_days()
}
