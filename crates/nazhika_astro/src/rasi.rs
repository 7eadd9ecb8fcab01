//! Rasi (30-degree sidereal sector) and Tamil month mapping.
//!
//! The sidereal circle is divided into 12 equal rasis of 30 degrees each,
//! Mesha at 0. Each rasi maps to one Tamil solar month, Chithirai through
//! Panguni; the month begins at the instant the Sun enters the rasi.

use serde::Serialize;

use crate::angles::normalize_360;

/// Width of one rasi: 360/12 = 30 degrees.
pub const RASI_SPAN_DEG: f64 = 30.0;

/// The 12 rasis (sidereal zodiac signs) starting from Mesha at 0 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Rasi {
    Mesha,
    Vrishabha,
    Mithuna,
    Kataka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanus,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rasis in order (index 0 = Mesha).
pub const ALL_RASIS: [Rasi; 12] = [
    Rasi::Mesha,
    Rasi::Vrishabha,
    Rasi::Mithuna,
    Rasi::Kataka,
    Rasi::Simha,
    Rasi::Kanya,
    Rasi::Tula,
    Rasi::Vrischika,
    Rasi::Dhanus,
    Rasi::Makara,
    Rasi::Kumbha,
    Rasi::Meena,
];

impl Rasi {
    /// 0-based index (Mesha = 0 .. Meena = 11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Mesha => 0,
            Self::Vrishabha => 1,
            Self::Mithuna => 2,
            Self::Kataka => 3,
            Self::Simha => 4,
            Self::Kanya => 5,
            Self::Tula => 6,
            Self::Vrischika => 7,
            Self::Dhanus => 8,
            Self::Makara => 9,
            Self::Kumbha => 10,
            Self::Meena => 11,
        }
    }

    /// Sanskrit name of the rasi.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Kataka => "Kataka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanus => "Dhanus",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// Tamil solar month that begins when the Sun enters this rasi.
    pub const fn tamil_month(self) -> &'static str {
        match self {
            Self::Mesha => "Chithirai",
            Self::Vrishabha => "Vaigasi",
            Self::Mithuna => "Aani",
            Self::Kataka => "Aadi",
            Self::Simha => "Aavani",
            Self::Kanya => "Purattasi",
            Self::Tula => "Aippasi",
            Self::Vrischika => "Karthigai",
            Self::Dhanus => "Margazhi",
            Self::Makara => "Thai",
            Self::Kumbha => "Masi",
            Self::Meena => "Panguni",
        }
    }

    /// Sidereal longitude at which this rasi begins, in degrees.
    pub const fn start_deg(self) -> f64 {
        self.index() as f64 * RASI_SPAN_DEG
    }
}

/// Rasi containing a sidereal longitude.
pub fn rasi_from_longitude(sidereal_deg: f64) -> Rasi {
    let idx = (normalize_360(sidereal_deg) / RASI_SPAN_DEG) as usize % 12;
    ALL_RASIS[idx]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, rasi) in ALL_RASIS.iter().enumerate() {
            assert_eq!(usize::from(rasi.index()), i);
        }
    }

    #[test]
    fn boundaries() {
        assert_eq!(rasi_from_longitude(0.0), Rasi::Mesha);
        assert_eq!(rasi_from_longitude(29.999), Rasi::Mesha);
        assert_eq!(rasi_from_longitude(30.0), Rasi::Vrishabha);
        assert_eq!(rasi_from_longitude(270.0), Rasi::Makara);
        assert_eq!(rasi_from_longitude(359.999), Rasi::Meena);
    }

    #[test]
    fn wraps_beyond_circle() {
        assert_eq!(rasi_from_longitude(360.0), Rasi::Mesha);
        assert_eq!(rasi_from_longitude(-10.0), Rasi::Meena);
    }

    #[test]
    fn month_sequence_from_mesha() {
        assert_eq!(Rasi::Mesha.tamil_month(), "Chithirai");
        assert_eq!(Rasi::Makara.tamil_month(), "Thai");
        assert_eq!(Rasi::Meena.tamil_month(), "Panguni");
    }

    #[test]
    fn start_degrees() {
        assert!((Rasi::Mesha.start_deg() - 0.0).abs() < 1e-15);
        assert!((Rasi::Makara.start_deg() - 270.0).abs() < 1e-15);
    }
}
