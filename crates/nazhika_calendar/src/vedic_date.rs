//! Composite Vedic date snapshot: everything the panchang display needs in
//! one call.

use chrono::{DateTime, Datelike, Utc};
use chrono_tz::Tz;
use nazhika_astro::{
    Ayana, AyanamsaModel, Nakshatra, Paksha, Rasi, Tithi, Vara, ayana_on, nakshatra_at,
    rasi_from_longitude, samvatsara_for_year, sidereal_sun_longitude, tithi_at, vara_on,
};
use nazhika_time::local_date;
use serde::Serialize;

/// Snapshot of the Vedic calendrical elements at one instant.
///
/// Purely a function of the instant, timezone, and ayanamsa model; the
/// longitude series are geocentric so no observer coordinate is involved.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VedicDate {
    /// Name in the 60-year cycle for the local calendar year.
    pub samvatsara: &'static str,
    /// Position in the cycle, 1..=60.
    pub samvatsara_order: u8,
    pub tithi: Tithi,
    pub paksha: Paksha,
    /// Approximate lunar illumination fraction, [0, 1].
    pub illumination: f64,
    pub nakshatra: Nakshatra,
    pub vara: Vara,
    pub ayana: Ayana,
    /// Rasi the Sun occupies and the Tamil solar month it names.
    pub rasi: Rasi,
    pub maasa: &'static str,
    /// Day of the local Gregorian month.
    pub day_of_month: u32,
}

/// Vedic date at a UTC instant.
pub fn vedic_date(t: DateTime<Utc>, tz: Tz, model: AyanamsaModel) -> VedicDate {
    let date = local_date(t, tz);
    let (samvatsara, samvatsara_order) = samvatsara_for_year(date.year());
    let tithi = tithi_at(t);
    let rasi = rasi_from_longitude(sidereal_sun_longitude(t, model));
    VedicDate {
        samvatsara,
        samvatsara_order,
        tithi,
        paksha: tithi.paksha(),
        illumination: tithi.illumination(),
        nakshatra: nakshatra_at(t, model),
        vara: vara_on(date),
        ayana: ayana_on(date),
        rasi,
        maasa: rasi.tamil_month(),
        day_of_month: date.day(),
    }
}
