//! The Nazhigai clock: sunrise-anchored 60-part day, its inverse, and the
//! next-occurrence solver used for alarm scheduling.

use chrono::{DateTime, Duration, NaiveDate, Offset, TimeZone, Utc};
use chrono_tz::Tz;
use nazhika_solar::{GeoCoordinate, SolarProvider};
use nazhika_time::{SECONDS_PER_DAY, at_local_time, local_date, local_noon};
use serde::Serialize;

use crate::provenance::Provenance;

/// 1 nazhigai = 24 minutes; 60 per sunrise-to-sunrise day.
pub const SECONDS_PER_NAZHIGAI: i64 = 1440;

/// 1 vinazhigai = 24 seconds; 60 per nazhigai.
pub const SECONDS_PER_VINAZHIGAI: i64 = 24;

const DAY_SECONDS: i64 = SECONDS_PER_DAY as i64;

/// A Nazhigai clock reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VedicTime {
    /// Whole nazhigai since the reference sunrise, 0..=59.
    pub nazhigai: u8,
    /// Whole vinazhigai within the current nazhigai, 0..=59.
    pub vinazhigai: u8,
    /// Fraction of the 60-nazhigai cycle elapsed, [0, 1).
    pub percent_elapsed: f64,
    /// `percent_elapsed` as a dial angle in degrees, [0, 360).
    pub progress_angle_deg: f64,
    /// Sunrise anchoring the current Vedic day. Before today's sunrise this
    /// is yesterday's sunrise.
    pub reference_sunrise: DateTime<Utc>,
    /// Today's sunrise on the local calendar day of the query instant.
    pub sunrise: DateTime<Utc>,
    /// Today's sunset on the local calendar day of the query instant.
    pub sunset: DateTime<Utc>,
    /// Whether the instant lies in `[sunrise, sunset)`.
    pub is_daytime: bool,
    pub provenance: Provenance,
}

/// A local wall-clock time as a UTC instant, total even inside a DST gap
/// (the offset in force at `near` is applied to the naive time).
fn wall_clock_or_offset(
    date: NaiveDate,
    hour: u32,
    tz: Tz,
    near: DateTime<Utc>,
) -> DateTime<Utc> {
    if let Some(t) = at_local_time(date, hour, 0, 0, tz) {
        return t;
    }
    let offset = tz.offset_from_utc_datetime(&near.naive_utc()).fix();
    date.and_hms_opt(hour, 0, 0)
        .and_then(|naive| offset.from_local_datetime(&naive).single())
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or(near)
}

/// Sunrise for a local date, defaulting to 06:00 local when the provider has
/// no answer (polar regions). Returns the instant and whether it defaulted.
fn sunrise_or_default<P: SolarProvider>(
    date: NaiveDate,
    coord: GeoCoordinate,
    tz: Tz,
    provider: &P,
    near: DateTime<Utc>,
) -> (DateTime<Utc>, Provenance) {
    match provider.sunrise(date, coord, tz) {
        Some(t) => (t, Provenance::Computed),
        None => {
            log::debug!("no sunrise for {date}, defaulting to 06:00 local");
            (wall_clock_or_offset(date, 6, tz, near), Provenance::Fallback)
        }
    }
}

fn sunset_or_default<P: SolarProvider>(
    date: NaiveDate,
    coord: GeoCoordinate,
    tz: Tz,
    provider: &P,
    near: DateTime<Utc>,
) -> (DateTime<Utc>, Provenance) {
    match provider.sunset(date, coord, tz) {
        Some(t) => (t, Provenance::Computed),
        None => {
            log::debug!("no sunset for {date}, defaulting to 18:00 local");
            (wall_clock_or_offset(date, 18, tz, near), Provenance::Fallback)
        }
    }
}

/// Nazhigai clock reading at a UTC instant.
///
/// The Vedic day runs sunrise to sunrise. An instant before today's sunrise
/// still belongs to yesterday's cycle, so the anchor re-fetches yesterday's
/// sunrise in that case.
pub fn vedic_time<P: SolarProvider>(
    t: DateTime<Utc>,
    coord: GeoCoordinate,
    provider: &P,
    tz: Tz,
) -> VedicTime {
    let today = local_date(t, tz);
    let (sunrise, rise_prov) = sunrise_or_default(today, coord, tz, provider, t);
    let (sunset, set_prov) = sunset_or_default(today, coord, tz, provider, t);

    let (reference_sunrise, ref_prov) = if t < sunrise {
        let yesterday = today.pred_opt().unwrap_or(today);
        sunrise_or_default(yesterday, coord, tz, provider, t)
    } else {
        (sunrise, rise_prov)
    };

    let elapsed = t - reference_sunrise;
    let cycle_seconds = elapsed.num_seconds().rem_euclid(DAY_SECONDS);
    let cycle_millis = elapsed.num_milliseconds().rem_euclid(DAY_SECONDS * 1000);
    let percent_elapsed = cycle_millis as f64 / (DAY_SECONDS * 1000) as f64;

    let provenance = if rise_prov.is_fallback() || set_prov.is_fallback() || ref_prov.is_fallback()
    {
        Provenance::Fallback
    } else {
        Provenance::Computed
    };

    VedicTime {
        nazhigai: (cycle_seconds / SECONDS_PER_NAZHIGAI) as u8,
        vinazhigai: ((cycle_seconds % SECONDS_PER_NAZHIGAI) / SECONDS_PER_VINAZHIGAI) as u8,
        percent_elapsed,
        progress_angle_deg: percent_elapsed * 360.0,
        reference_sunrise,
        sunrise,
        sunset,
        is_daytime: sunrise <= t && t < sunset,
        provenance,
    }
}

/// Instant at which a nazhigai:vinazhigai reading occurs on the Vedic day
/// anchored at the sunrise of `reference`'s local calendar date.
///
/// Out-of-range values extrapolate linearly (negative or >= 60 readings are
/// deliberate offsets, not errors). `None` only when sunrise is
/// indeterminate for the date and location.
pub fn nazhigai_to_instant<P: SolarProvider>(
    nazhigai: i32,
    vinazhigai: i32,
    reference: DateTime<Utc>,
    coord: GeoCoordinate,
    tz: Tz,
    provider: &P,
) -> Option<DateTime<Utc>> {
    let date = local_date(reference, tz);
    let sunrise = provider.sunrise(date, coord, tz)?;
    let offset = i64::from(nazhigai) * SECONDS_PER_NAZHIGAI
        + i64::from(vinazhigai) * SECONDS_PER_VINAZHIGAI;
    Some(sunrise + Duration::seconds(offset))
}

/// Next future instant at which a recurring nazhigai:vinazhigai target fires.
///
/// Tries the cycles anchored on yesterday's, today's, then tomorrow's
/// sunrise, in that order; the first candidate after `now` wins. Yesterday
/// must be checked first: shortly after local midnight the previous Vedic
/// day's cycle is still running, and a large nazhigai target from that cycle
/// can land in the small hours of today. Each reference day is normalized to
/// local noon so UTC day-boundary drift cannot shift the anchor date.
pub fn next_occurrence<P: SolarProvider>(
    nazhigai: i32,
    vinazhigai: i32,
    now: DateTime<Utc>,
    coord: GeoCoordinate,
    tz: Tz,
    provider: &P,
) -> Option<DateTime<Utc>> {
    let today = local_date(now, tz);
    let earlier = [("yesterday", today.pred_opt()?), ("today", today)];
    for (cycle, date) in earlier {
        let reference = local_noon(date, tz)?;
        let candidate = nazhigai_to_instant(nazhigai, vinazhigai, reference, coord, tz, provider)?;
        if candidate > now {
            log::debug!("target {nazhigai}:{vinazhigai} fires at {candidate} ({cycle}'s cycle)");
            return Some(candidate);
        }
    }
    let reference = local_noon(today.succ_opt()?, tz)?;
    let candidate = nazhigai_to_instant(nazhigai, vinazhigai, reference, coord, tz, provider)?;
    log::debug!("target {nazhigai}:{vinazhigai} fires at {candidate} (tomorrow's cycle)");
    Some(candidate)
}
