//! Bounded, expiring memo wrapper over a solar provider.
//!
//! Rise/set for a (date, coordinate) pair never changes, so entries are
//! cached and only evicted to bound memory (oldest-first beyond
//! [`MAX_ENTRIES`]) or after [`ENTRY_TTL_DAYS`] of staleness.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::coord::GeoCoordinate;
use crate::provider::SolarProvider;

/// Maximum number of (date, coordinate) entries kept.
pub const MAX_ENTRIES: usize = 10;

/// Entries older than this are recomputed on next access.
pub const ENTRY_TTL_DAYS: i64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct CacheKey {
    date: NaiveDate,
    // Microdegree-quantized coordinate; ~0.1 m, far below rise/set sensitivity.
    lat_micro: i64,
    lon_micro: i64,
}

impl CacheKey {
    fn new(date: NaiveDate, coord: GeoCoordinate) -> Self {
        Self {
            date,
            lat_micro: (coord.latitude_deg * 1e6).round() as i64,
            lon_micro: (coord.longitude_deg * 1e6).round() as i64,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct CacheEntry {
    sunrise: Option<DateTime<Utc>>,
    sunset: Option<DateTime<Utc>>,
    inserted_at: DateTime<Utc>,
    seq: u64,
}

#[derive(Debug, Default)]
struct CacheState {
    entries: HashMap<CacheKey, CacheEntry>,
    next_seq: u64,
}

/// Caching wrapper; computes both events of a date in one inner call pair.
#[derive(Debug, Default)]
pub struct CachedSolar<P> {
    inner: P,
    state: Mutex<CacheState>,
}

impl<P: SolarProvider> CachedSolar<P> {
    pub fn new(inner: P) -> Self {
        Self { inner, state: Mutex::new(CacheState::default()) }
    }

    fn entry(&self, date: NaiveDate, coord: GeoCoordinate, tz: Tz) -> CacheEntry {
        let key = CacheKey::new(date, coord);
        let now = Utc::now();
        let mut state = match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        state
            .entries
            .retain(|_, e| (now - e.inserted_at).num_days() < ENTRY_TTL_DAYS);
        if let Some(entry) = state.entries.get(&key) {
            return *entry;
        }
        let entry = CacheEntry {
            sunrise: self.inner.sunrise(date, coord, tz),
            sunset: self.inner.sunset(date, coord, tz),
            inserted_at: now,
            seq: state.next_seq,
        };
        state.next_seq += 1;
        if state.entries.len() >= MAX_ENTRIES {
            if let Some(oldest) = state
                .entries
                .iter()
                .min_by_key(|(_, e)| e.seq)
                .map(|(k, _)| *k)
            {
                state.entries.remove(&oldest);
            }
        }
        state.entries.insert(key, entry);
        entry
    }
}

impl<P: SolarProvider> SolarProvider for CachedSolar<P> {
    fn sunrise(&self, date: NaiveDate, coord: GeoCoordinate, tz: Tz) -> Option<DateTime<Utc>> {
        self.entry(date, coord, tz).sunrise
    }

    fn sunset(&self, date: NaiveDate, coord: GeoCoordinate, tz: Tz) -> Option<DateTime<Utc>> {
        self.entry(date, coord, tz).sunset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::FixedSolar;
    use chrono::NaiveTime;
    use chrono_tz::Asia::Kolkata;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Counting {
        inner: FixedSolar,
        calls: AtomicUsize,
    }

    impl Counting {
        fn new() -> Self {
            Self {
                inner: FixedSolar::new(
                    NaiveTime::from_hms_opt(6, 30, 0).unwrap(),
                    NaiveTime::from_hms_opt(18, 30, 0).unwrap(),
                ),
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl SolarProvider for Counting {
        fn sunrise(&self, date: NaiveDate, coord: GeoCoordinate, tz: Tz) -> Option<DateTime<Utc>> {
            self.calls.fetch_add(1, Ordering::Relaxed);
            self.inner.sunrise(date, coord, tz)
        }

        fn sunset(&self, date: NaiveDate, coord: GeoCoordinate, tz: Tz) -> Option<DateTime<Utc>> {
            self.inner.sunset(date, coord, tz)
        }
    }

    fn coord() -> GeoCoordinate {
        GeoCoordinate::new(13.0827, 80.2707).unwrap()
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, d).unwrap()
    }

    #[test]
    fn repeated_lookups_hit_the_cache() {
        let cached = CachedSolar::new(Counting::new());
        let first = cached.sunrise(day(2), coord(), Kolkata);
        let second = cached.sunrise(day(2), coord(), Kolkata);
        let third = cached.sunset(day(2), coord(), Kolkata);
        assert_eq!(first, second);
        assert!(third.is_some());
        assert_eq!(cached.inner.calls.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn distinct_dates_are_distinct_entries() {
        let cached = CachedSolar::new(Counting::new());
        cached.sunrise(day(2), coord(), Kolkata);
        cached.sunrise(day(3), coord(), Kolkata);
        assert_eq!(cached.inner.calls.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn oldest_entry_is_evicted_beyond_capacity() {
        let cached = CachedSolar::new(Counting::new());
        for d in 1..=(MAX_ENTRIES as u32 + 1) {
            cached.sunrise(day(d), coord(), Kolkata);
        }
        assert_eq!(cached.inner.calls.load(Ordering::Relaxed), MAX_ENTRIES + 1);
        // Newest survivors still cached
        cached.sunrise(day(MAX_ENTRIES as u32 + 1), coord(), Kolkata);
        assert_eq!(cached.inner.calls.load(Ordering::Relaxed), MAX_ENTRIES + 1);
        // Day 1 was evicted, so it recomputes
        cached.sunrise(day(1), coord(), Kolkata);
        assert_eq!(cached.inner.calls.load(Ordering::Relaxed), MAX_ENTRIES + 2);
    }
}
