//! Ayana: the Sun's directional half-year.
//!
//! Uttarayanam is the northward run (Dec 22 - Jun 21), Dakshinayanam the
//! southward (Jun 22 - Dec 21). Classification is by fixed solstice calendar
//! dates rather than the true solar-longitude crossing; the crossing moves by
//! at most a day, which is acceptable for a calendrical label. Documented
//! simplification.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use chrono_tz::Tz;
use nazhika_time::local_date;
use serde::Serialize;

/// The Sun's directional movement: northward or southward half-year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Ayana {
    Uttarayanam,
    Dakshinayanam,
}

impl Ayana {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Uttarayanam => "Uttarayanam",
            Self::Dakshinayanam => "Dakshinayanam",
        }
    }
}

/// Ayana for a local calendar date.
pub fn ayana_on(date: NaiveDate) -> Ayana {
    let (month, day) = (date.month(), date.day());
    // Dakshinayanam: Jun 22 through Dec 21
    if (month == 6 && day >= 22) || (month > 6 && month < 12) || (month == 12 && day < 22) {
        Ayana::Dakshinayanam
    } else {
        Ayana::Uttarayanam
    }
}

/// Ayana at a UTC instant, classified on the local calendar date.
pub fn ayana_at(t: DateTime<Utc>, tz: Tz) -> Ayana {
    ayana_on(local_date(t, tz))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, m, day).unwrap()
    }

    #[test]
    fn winter_solstice_starts_uttarayanam() {
        assert_eq!(ayana_on(d(12, 22)), Ayana::Uttarayanam);
        assert_eq!(ayana_on(d(12, 21)), Ayana::Dakshinayanam);
    }

    #[test]
    fn summer_solstice_starts_dakshinayanam() {
        assert_eq!(ayana_on(d(6, 22)), Ayana::Dakshinayanam);
        assert_eq!(ayana_on(d(6, 21)), Ayana::Uttarayanam);
    }

    #[test]
    fn mid_season_samples() {
        assert_eq!(ayana_on(d(1, 15)), Ayana::Uttarayanam);
        assert_eq!(ayana_on(d(3, 1)), Ayana::Uttarayanam);
        assert_eq!(ayana_on(d(9, 15)), Ayana::Dakshinayanam);
        assert_eq!(ayana_on(d(11, 30)), Ayana::Dakshinayanam);
    }
}
