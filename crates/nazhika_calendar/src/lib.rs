//! Calendrical composites: Sankranti search, Tamil solar date, and the
//! Nazhigai clock with its alarm-scheduling solver.
//!
//! This crate combines the longitude primitives of `nazhika_astro` with a
//! [`nazhika_solar::SolarProvider`] to produce the user-facing values:
//! - [`find_sankranti`]: exact instant the Sun enters a sidereal sector
//! - [`tamil_date`]: Tamil month and day-of-month under the sunset rule
//! - [`vedic_time`]: the 60-nazhigai clock anchored at the latest sunrise
//! - [`next_occurrence`]: next future firing of a recurring nazhigai target
//! - [`vedic_date`]: the composite tithi/nakshatra/samvatsara snapshot
//!
//! Every result that can degrade (provider failure, failed search) carries a
//! [`Provenance`] so callers can distinguish computed from fallback values.

pub mod error;
pub mod provenance;
pub mod sankranti;
pub mod tamil_date;
pub mod vedic_date;
pub mod vedic_time;

pub use error::CalendarError;
pub use provenance::Provenance;
pub use sankranti::{SANKRANTI_WINDOW_DAYS, find_sankranti};
pub use tamil_date::{TamilDate, sankranti_day_one, tamil_date};
pub use vedic_date::{VedicDate, vedic_date};
pub use vedic_time::{
    SECONDS_PER_NAZHIGAI, SECONDS_PER_VINAZHIGAI, VedicTime, nazhigai_to_instant, next_occurrence,
    vedic_time,
};
