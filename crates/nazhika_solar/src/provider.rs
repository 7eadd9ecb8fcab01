//! The provider seam and the fixed-time test double.

use chrono::{DateTime, NaiveDate, NaiveTime, Timelike, Utc};
use chrono_tz::Tz;
use nazhika_time::at_local_time;

use crate::coord::GeoCoordinate;

/// Source of sunrise and sunset instants for a local calendar date.
///
/// `None` means the event does not occur on that date (polar day/night, or
/// a local time skipped by a zone transition).
pub trait SolarProvider {
    fn sunrise(&self, date: NaiveDate, coord: GeoCoordinate, tz: Tz) -> Option<DateTime<Utc>>;
    fn sunset(&self, date: NaiveDate, coord: GeoCoordinate, tz: Tz) -> Option<DateTime<Utc>>;
}

impl<P: SolarProvider + ?Sized> SolarProvider for &P {
    fn sunrise(&self, date: NaiveDate, coord: GeoCoordinate, tz: Tz) -> Option<DateTime<Utc>> {
        (**self).sunrise(date, coord, tz)
    }

    fn sunset(&self, date: NaiveDate, coord: GeoCoordinate, tz: Tz) -> Option<DateTime<Utc>> {
        (**self).sunset(date, coord, tz)
    }
}

/// Provider that rises and sets at the same local wall-clock times every day,
/// regardless of the coordinate. Deterministic anchor for scheduling tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedSolar {
    rise: NaiveTime,
    set: NaiveTime,
}

impl FixedSolar {
    pub const fn new(rise: NaiveTime, set: NaiveTime) -> Self {
        Self { rise, set }
    }
}

impl SolarProvider for FixedSolar {
    fn sunrise(&self, date: NaiveDate, _coord: GeoCoordinate, tz: Tz) -> Option<DateTime<Utc>> {
        at_local_time(date, self.rise.hour(), self.rise.minute(), self.rise.second(), tz)
    }

    fn sunset(&self, date: NaiveDate, _coord: GeoCoordinate, tz: Tz) -> Option<DateTime<Utc>> {
        at_local_time(date, self.set.hour(), self.set.minute(), self.set.second(), tz)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono_tz::Asia::Kolkata;

    #[test]
    fn fixed_times_land_on_the_local_clock() {
        let provider = FixedSolar::new(
            NaiveTime::from_hms_opt(6, 30, 0).unwrap(),
            NaiveTime::from_hms_opt(18, 30, 0).unwrap(),
        );
        let coord = GeoCoordinate::new(13.0827, 80.2707).unwrap();
        let date = NaiveDate::from_ymd_opt(2026, 2, 2).unwrap();

        let rise = provider.sunrise(date, coord, Kolkata).unwrap();
        assert_eq!(rise, Kolkata.with_ymd_and_hms(2026, 2, 2, 6, 30, 0).unwrap());
        let set = provider.sunset(date, coord, Kolkata).unwrap();
        assert_eq!(set, Kolkata.with_ymd_and_hms(2026, 2, 2, 18, 30, 0).unwrap());
    }
}
