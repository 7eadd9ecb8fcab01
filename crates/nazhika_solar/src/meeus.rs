//! Sunrise equation with a low-order solar-transit model.
//!
//! Mean anomaly plus equation of center gives the ecliptic longitude, the
//! longitude gives declination and the equation of time, and the hour angle
//! at -0.833 degrees altitude (refraction plus semidiameter) gives rise and
//! set offsets from local transit. Accurate to a couple of minutes away from
//! the polar circles.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use nazhika_time::{J2000_JD, julian_day, julian_day_to_instant};

use crate::coord::GeoCoordinate;
use crate::provider::SolarProvider;

/// Mean obliquity of the ecliptic, degrees.
const OBLIQUITY_DEG: f64 = 23.4397;

/// Sun altitude defining rise/set: refraction (34') plus solar semidiameter (16').
const ALTITUDE_DEG: f64 = -0.833;

/// Transit-model sunrise/sunset provider.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeeusSolar;

impl MeeusSolar {
    /// Rise and set as Julian days for the local date, or `None` during
    /// polar day or polar night.
    fn rise_set_jd(self, date: NaiveDate, coord: GeoCoordinate) -> Option<(f64, f64)> {
        let midnight = date.and_hms_opt(0, 0, 0)?.and_utc();
        // Approximate local solar noon: civil date at 0h UTC, shifted by
        // half a day minus the longitude fraction.
        let jd_noon = julian_day(midnight) + 0.5 - coord.longitude_deg / 360.0;
        let d = jd_noon - J2000_JD;

        let m = (357.5291 + 0.985_600_28 * d).rem_euclid(360.0);
        let m_rad = m.to_radians();
        let center =
            1.9148 * m_rad.sin() + 0.0200 * (2.0 * m_rad).sin() + 0.0003 * (3.0 * m_rad).sin();
        // Ecliptic longitude: anomaly + center + argument of perihelion + 180
        let lambda = (m + center + 180.0 + 102.9372).rem_euclid(360.0);
        let lambda_rad = lambda.to_radians();

        let jd_transit = jd_noon + 0.0053 * m_rad.sin() - 0.0069 * (2.0 * lambda_rad).sin();

        let sin_decl = lambda_rad.sin() * OBLIQUITY_DEG.to_radians().sin();
        let cos_decl = sin_decl.asin().cos();
        let lat_rad = coord.latitude_deg.to_radians();
        let cos_h0 = (ALTITUDE_DEG.to_radians().sin() - lat_rad.sin() * sin_decl)
            / (lat_rad.cos() * cos_decl);
        if !(-1.0..=1.0).contains(&cos_h0) {
            return None;
        }
        let h0_deg = cos_h0.acos().to_degrees();

        Some((jd_transit - h0_deg / 360.0, jd_transit + h0_deg / 360.0))
    }
}

impl SolarProvider for MeeusSolar {
    fn sunrise(&self, date: NaiveDate, coord: GeoCoordinate, _tz: Tz) -> Option<DateTime<Utc>> {
        let (rise, _) = self.rise_set_jd(date, coord)?;
        julian_day_to_instant(rise)
    }

    fn sunset(&self, date: NaiveDate, coord: GeoCoordinate, _tz: Tz) -> Option<DateTime<Utc>> {
        let (_, set) = self.rise_set_jd(date, coord)?;
        julian_day_to_instant(set)
    }
}
