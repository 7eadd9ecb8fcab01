//! Nakshatra (lunar mansion) determination.
//!
//! The sidereal circle is divided into 27 equal mansions of 13 deg 20' each.
//! Nakshatra is an inherently sidereal concept, so the Moon's tropical
//! longitude is converted through the ayanamsa before sectoring. (An earlier
//! formulation that sectored the tropical longitude directly drifts by the
//! full ayanamsa, nearly two whole mansions; it is not preserved here.)

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::angles::normalize_360;
use crate::ayanamsa::{AyanamsaModel, ayanamsa_deg};
use crate::moon::moon_longitude;

/// Span of one nakshatra: 360/27 = 13.3333... degrees.
pub const NAKSHATRA_SPAN_DEG: f64 = 360.0 / 27.0;

/// The 27 nakshatra names from Ashwini to Revati.
const NAKSHATRA_NAMES: [&str; 27] = [
    "Ashwini",
    "Bharani",
    "Krittika",
    "Rohini",
    "Mrigashira",
    "Ardra",
    "Punarvasu",
    "Pushya",
    "Ashlesha",
    "Magha",
    "Purva Phalguni",
    "Uttara Phalguni",
    "Hasta",
    "Chitra",
    "Swati",
    "Vishakha",
    "Anuradha",
    "Jyeshtha",
    "Mula",
    "Purva Ashadha",
    "Uttara Ashadha",
    "Shravana",
    "Dhanishtha",
    "Shatabhisha",
    "Purva Bhadrapada",
    "Uttara Bhadrapada",
    "Revati",
];

/// A lunar mansion: 1-based index plus fractional progress through it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Nakshatra {
    /// Nakshatra number, 1..=27 (1 = Ashwini, 27 = Revati).
    pub number: u8,
    /// Progress through the mansion, [0, 1).
    pub progress: f64,
}

impl Nakshatra {
    /// Sanskrit name of the nakshatra.
    pub fn name(&self) -> &'static str {
        NAKSHATRA_NAMES[usize::from(self.number - 1)]
    }
}

/// Moon's sidereal ecliptic longitude in degrees [0, 360).
pub fn sidereal_moon_longitude(t: DateTime<Utc>, model: AyanamsaModel) -> f64 {
    normalize_360(moon_longitude(t) - ayanamsa_deg(model, t))
}

/// Nakshatra at a UTC instant.
pub fn nakshatra_at(t: DateTime<Utc>, model: AyanamsaModel) -> Nakshatra {
    let sidereal = sidereal_moon_longitude(t, model);
    let nakshatra_float = sidereal / NAKSHATRA_SPAN_DEG;
    Nakshatra {
        number: (nakshatra_float.floor() as u32 % 27 + 1) as u8,
        progress: nakshatra_float.fract(),
    }
}
