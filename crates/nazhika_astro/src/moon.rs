//! Moon ecliptic longitude from the truncated Meeus series.
//!
//! Mean longitude plus the six largest periodic terms (the main elliptic
//! term, evection, variation, the annual equation, and the leading flattening
//! term). Accuracy is about +/-0.2 degrees; a Nakshatra sector spans 13.33
//! degrees and a Tithi 12, so this comfortably resolves both.

use chrono::{DateTime, Utc};
use nazhika_time::julian_centuries;

use crate::angles::normalize_360;

/// Moon's (tropical) ecliptic longitude in degrees [0, 360).
///
/// Geocentric; see the `sun` module for why no observer coordinate is taken.
pub fn moon_longitude(t: DateTime<Utc>) -> f64 {
    let tc = julian_centuries(t);
    let t2 = tc * tc;
    let t3 = t2 * tc;
    let t4 = t3 * tc;

    // Mean longitude (Meeus 47.1)
    let l = 218.316_447_7 + 481_267.881_234_21 * tc - 0.001_578_6 * t2 + t3 / 538_841.0
        - t4 / 65_194_000.0;

    // Mean elongation (Meeus 47.2)
    let d = 297.850_192_1 + 445_267.111_403_4 * tc - 0.001_881_9 * t2 + t3 / 545_868.0
        - t4 / 113_065_000.0;

    // Sun's mean anomaly (Meeus 47.3)
    let m = 357.529_109_2 + 35_999.050_290_9 * tc - 0.000_153_6 * t2 + t3 / 24_490_000.0;

    // Moon's mean anomaly (Meeus 47.4)
    let m_prime = 134.963_396_4 + 477_198.867_505_5 * tc + 0.008_741_4 * t2 + t3 / 69_699.0
        - t4 / 14_712_000.0;

    // Argument of latitude (Meeus 47.5)
    let f = 93.272_095_0 + 483_202.017_523_3 * tc - 0.003_653_9 * t2 - t3 / 3_526_000.0
        + t4 / 863_310_000.0;

    // Eccentricity damping for terms involving the Sun's anomaly
    let e = 1.0 - 0.002_516 * tc - 0.000_007_4 * t2;

    let correction = 6.288_774 * m_prime.to_radians().sin()
        + 1.274_027 * (2.0 * d - m_prime).to_radians().sin()
        + 0.658_314 * (2.0 * d).to_radians().sin()
        + 0.213_618 * (2.0 * m_prime).to_radians().sin()
        - 0.185_116 * e * m.to_radians().sin()
        - 0.114_332 * (2.0 * f).to_radians().sin();

    normalize_360(l + correction)
}
