//! Tamil solar calendar: month from the Sun's sidereal rasi, day-of-month
//! from the sankranti under the sunset rule.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use nazhika_astro::{AyanamsaModel, Rasi, rasi_from_longitude, sidereal_sun_longitude};
use nazhika_solar::{GeoCoordinate, SolarProvider};
use nazhika_time::{at_local_time, local_date, local_day_span};

use crate::provenance::Provenance;
use crate::sankranti::find_sankranti;

/// A Tamil calendar date.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct TamilDate {
    /// Rasi the Sun currently occupies.
    pub rasi: Rasi,
    /// Tamil month name, Chithirai..Panguni.
    pub month: &'static str,
    /// Day of the month, 1-based, floored at 1.
    pub day: u32,
    /// Instant the Sun entered the current rasi.
    pub sankranti: DateTime<Utc>,
    /// Local calendar day counted as Day 1 of the month.
    pub day_one: NaiveDate,
    /// Sidereal longitude at which the current rasi begins.
    pub rasi_start_deg: f64,
    pub provenance: Provenance,
}

/// Day 1 of a month under the sunset rule: the sankranti's local calendar
/// day if the ingress happened before that day's sunset, otherwise the next
/// day. A missing sunset falls back to 18:00 local.
///
/// Returns the date plus whether the sunset had to be defaulted.
pub fn sankranti_day_one<P: SolarProvider>(
    sankranti: DateTime<Utc>,
    coord: GeoCoordinate,
    tz: Tz,
    provider: &P,
) -> (NaiveDate, Provenance) {
    let ingress_day = local_date(sankranti, tz);
    let (sunset, provenance) = match provider.sunset(ingress_day, coord, tz) {
        Some(s) => (Some(s), Provenance::Computed),
        None => (at_local_time(ingress_day, 18, 0, 0, tz), Provenance::Fallback),
    };
    let day_one = match sunset {
        Some(s) if sankranti >= s => ingress_day.succ_opt().unwrap_or(ingress_day),
        Some(_) => ingress_day,
        // No resolvable sunset at all: keep the ingress day.
        None => ingress_day,
    };
    (day_one, provenance)
}

/// Tamil date at a UTC instant.
///
/// A failed sankranti search degrades to day 1 anchored at `t` itself, with
/// `Provenance::Fallback`; it is never a panic or a silently invented date.
pub fn tamil_date<P: SolarProvider>(
    t: DateTime<Utc>,
    coord: GeoCoordinate,
    tz: Tz,
    provider: &P,
    model: AyanamsaModel,
) -> TamilDate {
    let rasi = rasi_from_longitude(sidereal_sun_longitude(t, model));
    match find_sankranti(rasi.start_deg(), t, model) {
        Ok(sankranti) => {
            let (day_one, provenance) = sankranti_day_one(sankranti, coord, tz, provider);
            let span = local_day_span(day_one, t, tz) + 1;
            TamilDate {
                rasi,
                month: rasi.tamil_month(),
                day: span.max(1) as u32,
                sankranti,
                day_one,
                rasi_start_deg: rasi.start_deg(),
                provenance,
            }
        }
        Err(err) => {
            log::warn!("sankranti search failed, degrading to day 1: {err}");
            TamilDate {
                rasi,
                month: rasi.tamil_month(),
                day: 1,
                sankranti: t,
                day_one: local_date(t, tz),
                rasi_start_deg: rasi.start_deg(),
                provenance: Provenance::Fallback,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveTime, TimeZone};
    use chrono_tz::Asia::Kolkata;
    use nazhika_solar::FixedSolar;

    fn chennai() -> GeoCoordinate {
        GeoCoordinate::new(13.0827, 80.2707).unwrap()
    }

    fn fixed() -> FixedSolar {
        FixedSolar::new(
            NaiveTime::from_hms_opt(6, 30, 0).unwrap(),
            NaiveTime::from_hms_opt(18, 30, 0).unwrap(),
        )
    }

    #[test]
    fn ingress_before_sunset_keeps_the_day() {
        let sankranti = Kolkata.with_ymd_and_hms(2026, 1, 14, 12, 0, 0).unwrap().to_utc();
        let (day_one, provenance) = sankranti_day_one(sankranti, chennai(), Kolkata, &fixed());
        assert_eq!(day_one, NaiveDate::from_ymd_opt(2026, 1, 14).unwrap());
        assert_eq!(provenance, Provenance::Computed);
    }

    #[test]
    fn ingress_after_sunset_moves_day_one_forward() {
        let sankranti = Kolkata.with_ymd_and_hms(2026, 1, 14, 20, 0, 0).unwrap().to_utc();
        let (day_one, _) = sankranti_day_one(sankranti, chennai(), Kolkata, &fixed());
        assert_eq!(day_one, NaiveDate::from_ymd_opt(2026, 1, 15).unwrap());
    }

    #[test]
    fn ingress_at_exact_sunset_moves_day_one_forward() {
        let sankranti = Kolkata.with_ymd_and_hms(2026, 1, 14, 18, 30, 0).unwrap().to_utc();
        let (day_one, _) = sankranti_day_one(sankranti, chennai(), Kolkata, &fixed());
        assert_eq!(day_one, NaiveDate::from_ymd_opt(2026, 1, 15).unwrap());
    }
}
