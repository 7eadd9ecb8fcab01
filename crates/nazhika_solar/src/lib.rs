//! Sunrise and sunset providers.
//!
//! The calendar layers never compute rise/set themselves; they ask a
//! [`SolarProvider`]. Three implementations live here:
//! - [`MeeusSolar`]: the solar-transit sunrise equation (low-order Meeus
//!   series), accurate to a couple of minutes at temperate latitudes
//! - [`CachedSolar`]: a bounded, expiring memo wrapper around any provider
//! - [`FixedSolar`]: fixed local rise/set times, for deterministic tests
//!
//! Providers return `None` where no event exists on the requested local
//! date (polar day or polar night); callers decide the fallback.

pub mod cache;
pub mod coord;
pub mod meeus;
pub mod provider;

pub use cache::CachedSolar;
pub use coord::{GeoCoordinate, SolarError};
pub use meeus::MeeusSolar;
pub use provider::{FixedSolar, SolarProvider};
