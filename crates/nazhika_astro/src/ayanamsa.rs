//! Lahiri ayanamsa: the tropical-to-sidereal correction.
//!
//! The ayanamsa is the slowly growing angular offset between the tropical
//! zodiac (anchored to the equinox) and the sidereal zodiac (anchored to the
//! fixed stars). Two models are provided and selectable per call:
//!
//! - [`AyanamsaModel::Linear`]: the classic linear drift anchored at J2000
//!   (23.854722 deg + 50.29 arcsec/year). Stable forever, coarser near any
//!   particular epoch.
//! - [`AyanamsaModel::Interpolated`]: piecewise-linear interpolation across
//!   calibration points spanning 2000-2026, with constant end-segment rate
//!   extrapolation outside the table. Tighter near the calibration window,
//!   but the table needs periodic recalibration as the window ages; accuracy
//!   decays at roughly the difference between the end-segment rate and the
//!   true precession rate per year of extrapolation.

use chrono::{DateTime, Utc};
use nazhika_time::{julian_centuries, julian_day};
use serde::Serialize;

use crate::angles::normalize_360;
use crate::sun::sun_longitude;

/// Lahiri ayanamsa at J2000.0 in degrees (23 deg 51' 17").
pub const LAHIRI_J2000_DEG: f64 = 23.854_722;

/// Lahiri drift in degrees per Julian century (50.29 arcsec/year).
pub const LAHIRI_RATE_DEG_PER_CENTURY: f64 = 1.396_971;

/// Calibration points for the interpolated model: (Julian Date, ayanamsa deg).
///
/// J2000.0, 2025-01-01, 2026-01-01. Values from published Lahiri almanac
/// positions for those epochs.
const CALIBRATION: [(f64, f64); 3] = [
    (2_451_545.0, 23.854_722),
    (2_460_676.5, 24.204_0),
    (2_461_041.5, 24.218_1),
];

/// Selectable ayanamsa computation model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum AyanamsaModel {
    /// Linear drift anchored at J2000.
    #[default]
    Linear,
    /// Piecewise-linear interpolation over the calibration table.
    Interpolated,
}

/// Lahiri ayanamsa in degrees at a UTC instant, under the chosen model.
pub fn ayanamsa_deg(model: AyanamsaModel, t: DateTime<Utc>) -> f64 {
    match model {
        AyanamsaModel::Linear => LAHIRI_J2000_DEG + LAHIRI_RATE_DEG_PER_CENTURY * julian_centuries(t),
        AyanamsaModel::Interpolated => interpolated_deg(julian_day(t)),
    }
}

fn interpolated_deg(jd: f64) -> f64 {
    let first = CALIBRATION[0];
    let last = CALIBRATION[CALIBRATION.len() - 1];

    if jd <= first.0 {
        // Extrapolate backward at the first segment's rate
        let (a, b) = (CALIBRATION[0], CALIBRATION[1]);
        return a.1 + (jd - a.0) * (b.1 - a.1) / (b.0 - a.0);
    }
    if jd >= last.0 {
        // Extrapolate forward at the last segment's rate
        let (a, b) = (CALIBRATION[CALIBRATION.len() - 2], last);
        return b.1 + (jd - b.0) * (b.1 - a.1) / (b.0 - a.0);
    }
    for pair in CALIBRATION.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if jd <= b.0 {
            let frac = (jd - a.0) / (b.0 - a.0);
            return a.1 + frac * (b.1 - a.1);
        }
    }
    // Table is sorted, so one of the segments above always matches
    last.1
}

/// Sun's sidereal ecliptic longitude in degrees [0, 360).
///
/// `sidereal = tropical - ayanamsa`, normalized. This is the quantity whose
/// 30-degree boundary crossings define the Tamil months.
pub fn sidereal_sun_longitude(t: DateTime<Utc>, model: AyanamsaModel) -> f64 {
    normalize_360(sun_longitude(t) - ayanamsa_deg(model, t))
}
