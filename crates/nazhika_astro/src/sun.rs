//! Sun ecliptic longitude from the truncated Meeus series.
//!
//! Mean longitude + equation of center (three sine harmonics of the mean
//! anomaly). Accuracy is about +/-0.01 degrees, which is calendrical-grade:
//! a Tithi segment is 12 degrees wide and a Rasi 30.
//!
//! The longitude is geocentric; an observer's position on Earth shifts the
//! apparent Sun by under 9 arcseconds (solar parallax), far below the series
//! truncation error, so no coordinate parameter is taken. This is an
//! intentional simplification, not an omission.

use chrono::{DateTime, Utc};
use nazhika_time::julian_centuries;

use crate::angles::normalize_360;

/// Sun's apparent (tropical) ecliptic longitude in degrees [0, 360).
pub fn sun_longitude(t: DateTime<Utc>) -> f64 {
    let tc = julian_centuries(t);

    // Mean longitude (Meeus 25.2)
    let l0 = 280.46646 + 36_000.76983 * tc + 0.000_3032 * tc * tc;

    // Mean anomaly (Meeus 25.3)
    let m = normalize_360(357.52911 + 35_999.05029 * tc - 0.000_1537 * tc * tc);
    let m_rad = m.to_radians();

    // Equation of center
    let c = (1.914_602 - 0.004_817 * tc - 0.000_014 * tc * tc) * m_rad.sin()
        + (0.019_993 - 0.000_101 * tc) * (2.0 * m_rad).sin()
        + 0.000_289 * (3.0 * m_rad).sin();

    normalize_360(l0 + c)
}
