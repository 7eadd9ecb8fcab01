//! Vara: the seven-day weekday cycle with Sanskrit and Tamil names.

use chrono::{DateTime, Datelike, NaiveDate, Utc, Weekday};
use chrono_tz::Tz;
use nazhika_time::local_date;
use serde::Serialize;

/// Weekday in the vedic week, Sunday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Vara {
    Bhanu,
    Soma,
    Mangala,
    Budha,
    Guru,
    Shukra,
    Shani,
}

/// All seven varas in week order (index 0 = Bhanu / Sunday).
pub const ALL_VARAS: [Vara; 7] = [
    Vara::Bhanu,
    Vara::Soma,
    Vara::Mangala,
    Vara::Budha,
    Vara::Guru,
    Vara::Shukra,
    Vara::Shani,
];

impl Vara {
    /// 0-based index, Sunday = 0 .. Saturday = 6.
    pub const fn index(self) -> u8 {
        match self {
            Self::Bhanu => 0,
            Self::Soma => 1,
            Self::Mangala => 2,
            Self::Budha => 3,
            Self::Guru => 4,
            Self::Shukra => 5,
            Self::Shani => 6,
        }
    }

    /// Sanskrit name, e.g. "Bhanuvasara".
    pub const fn sanskrit_name(self) -> &'static str {
        match self {
            Self::Bhanu => "Bhanuvasara",
            Self::Soma => "Somavasara",
            Self::Mangala => "Mangalavasara",
            Self::Budha => "Budhavasara",
            Self::Guru => "Guruvasara",
            Self::Shukra => "Shukravasara",
            Self::Shani => "Shanivasara",
        }
    }

    /// Tamil name, e.g. "Nyayiru".
    pub const fn tamil_name(self) -> &'static str {
        match self {
            Self::Bhanu => "Nyayiru",
            Self::Soma => "Thingal",
            Self::Mangala => "Chevvai",
            Self::Budha => "Budhan",
            Self::Guru => "Vyazhan",
            Self::Shukra => "Velli",
            Self::Shani => "Sani",
        }
    }

    /// English weekday name.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Bhanu => "Sunday",
            Self::Soma => "Monday",
            Self::Mangala => "Tuesday",
            Self::Budha => "Wednesday",
            Self::Guru => "Thursday",
            Self::Shukra => "Friday",
            Self::Shani => "Saturday",
        }
    }

    const fn from_weekday(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Sun => Self::Bhanu,
            Weekday::Mon => Self::Soma,
            Weekday::Tue => Self::Mangala,
            Weekday::Wed => Self::Budha,
            Weekday::Thu => Self::Guru,
            Weekday::Fri => Self::Shukra,
            Weekday::Sat => Self::Shani,
        }
    }
}

/// Vara for a local calendar date.
pub fn vara_on(date: NaiveDate) -> Vara {
    Vara::from_weekday(date.weekday())
}

/// Vara at a UTC instant, classified on the local calendar date.
pub fn vara_at(t: DateTime<Utc>, tz: Tz) -> Vara {
    vara_on(local_date(t, tz))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn indices_sequential() {
        for (i, vara) in ALL_VARAS.iter().enumerate() {
            assert_eq!(usize::from(vara.index()), i);
        }
    }

    #[test]
    fn known_dates() {
        // 2026-02-01 is a Sunday, 2026-02-02 a Monday
        assert_eq!(vara_on(NaiveDate::from_ymd_opt(2026, 2, 1).unwrap()), Vara::Bhanu);
        assert_eq!(vara_on(NaiveDate::from_ymd_opt(2026, 2, 2).unwrap()), Vara::Soma);
    }

    #[test]
    fn local_date_crosses_utc_midnight() {
        // 2026-02-01T19:30 UTC is already Feb 2 (Monday) in IST
        let t = Utc.with_ymd_and_hms(2026, 2, 1, 19, 30, 0).unwrap();
        assert_eq!(vara_at(t, chrono_tz::Asia::Kolkata), Vara::Soma);
        assert_eq!(vara_at(t, chrono_tz::UTC), Vara::Bhanu);
    }

    #[test]
    fn name_tables() {
        assert_eq!(Vara::Bhanu.tamil_name(), "Nyayiru");
        assert_eq!(Vara::Shani.sanskrit_name(), "Shanivasara");
        assert_eq!(Vara::Guru.english_name(), "Thursday");
    }
}
