//! Astronomical calculator for Vedic/Tamil calendrics.
//!
//! This crate provides the pure computational primitives the calendar layers
//! are built from:
//! - Sun and Moon ecliptic longitude (truncated Meeus series)
//! - Lahiri ayanamsa with two selectable models, and sidereal Sun longitude
//! - Tithi and Nakshatra (index + fractional progress)
//! - Ayana, Samvatsara, Rasi/Tamil month, and Vara lookups
//!
//! Everything here is a stateless function of its arguments; longitudes are
//! geocentric (the observer's coordinate has no bearing on the low-order
//! series used, see the `sun` module docs).

pub mod angles;
pub mod ayana;
pub mod ayanamsa;
pub mod moon;
pub mod nakshatra;
pub mod rasi;
pub mod samvatsara;
pub mod sun;
pub mod tithi;
pub mod vara;

pub use angles::{normalize_360, normalize_to_pm180};
pub use ayana::{Ayana, ayana_at, ayana_on};
pub use ayanamsa::{AyanamsaModel, ayanamsa_deg, sidereal_sun_longitude};
pub use moon::moon_longitude;
pub use nakshatra::{NAKSHATRA_SPAN_DEG, Nakshatra, nakshatra_at, sidereal_moon_longitude};
pub use rasi::{ALL_RASIS, RASI_SPAN_DEG, Rasi, rasi_from_longitude};
pub use samvatsara::{ALL_SAMVATSARA_NAMES, SAMVATSARA_EPOCH_YEAR, samvatsara_for_year};
pub use sun::sun_longitude;
pub use tithi::{Paksha, TITHI_SEGMENT_DEG, Tithi, tithi_at};
pub use vara::{Vara, vara_at, vara_on};
