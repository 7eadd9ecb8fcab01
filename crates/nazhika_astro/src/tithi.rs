//! Tithi (lunar day) and Paksha (fortnight) determination.
//!
//! A tithi is one of 30 equal 12-degree segments of the Moon-Sun elongation.
//! The ayanamsa cancels in the difference, so tropical longitudes suffice.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::angles::normalize_360;
use crate::moon::moon_longitude;
use crate::sun::sun_longitude;

/// Width of one tithi segment: 360/30 = 12 degrees of elongation.
pub const TITHI_SEGMENT_DEG: f64 = 12.0;

/// Lunar fortnight: waxing (Shukla) or waning (Krishna).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Paksha {
    Shukla,
    Krishna,
}

impl Paksha {
    /// Classify a tithi number (1-30): 1-15 is Shukla, 16-30 Krishna.
    pub const fn from_tithi_number(number: u8) -> Self {
        if number <= 15 { Self::Shukla } else { Self::Krishna }
    }
}

/// Tithi names within a paksha, Tamil forms (1-14); the fifteenth is
/// Pournami in Shukla and Amavasai in Krishna.
const TITHI_NAMES: [&str; 14] = [
    "Prathamai",
    "Thuthiyai",
    "Thirithiyai",
    "Chathurthi",
    "Panchami",
    "Shasti",
    "Sapthami",
    "Ashtami",
    "Navami",
    "Dhasami",
    "Ekadhasi",
    "Dhuvadhasi",
    "Thirayodhasi",
    "Chathurdhasi",
];

/// A lunar day: 1-based index into the 30-fold elongation circle plus the
/// fractional progress through the current segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Tithi {
    /// Tithi number, 1..=30 (15 = Pournami, 30 = Amavasai).
    pub number: u8,
    /// Progress through the segment, [0, 1).
    pub progress: f64,
}

impl Tithi {
    /// Tamil name of the tithi.
    pub fn name(&self) -> &'static str {
        match self.number {
            15 => "Pournami",
            30 => "Amavasai",
            n => TITHI_NAMES[((n - 1) % 15) as usize],
        }
    }

    /// Fortnight this tithi belongs to.
    pub fn paksha(&self) -> Paksha {
        Paksha::from_tithi_number(self.number)
    }

    /// Approximate lunar illumination fraction [0, 1], full at Pournami.
    pub fn illumination(&self) -> f64 {
        if self.number <= 15 {
            f64::from(self.number) / 15.0
        } else {
            f64::from(30 - self.number) / 15.0
        }
    }
}

/// Tithi at a UTC instant.
pub fn tithi_at(t: DateTime<Utc>) -> Tithi {
    let elongation = normalize_360(moon_longitude(t) - sun_longitude(t));
    let tithi_float = elongation / TITHI_SEGMENT_DEG;
    Tithi {
        number: (tithi_float.floor() as u32 % 30 + 1) as u8,
        progress: tithi_float.fract(),
    }
}
