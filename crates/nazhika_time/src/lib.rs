//! Time axis and local-calendar helpers for the calendrical engine.
//!
//! This crate provides:
//! - Julian Date / Julian century conversions from absolute UTC instants
//! - Timezone-explicit local calendar helpers (local date, local noon,
//!   calendar-day differences)
//!
//! All functions take their timezone explicitly as a [`chrono_tz::Tz`]; no
//! ambient process-wide locale or timezone state is ever consulted, so every
//! computation is reproducible across hosts.

pub mod julian;
pub mod local;

pub use julian::{
    J2000_JD, SECONDS_PER_DAY, UNIX_EPOCH_JD, julian_centuries, julian_day, julian_day_to_instant,
};
pub use local::{at_local_time, local_date, local_day_span, local_noon};
