//! Samvatsara: the 60-year named cycle.
//!
//! Pure modular lookup from a reference epoch; no astronomy involved.
//! CE 1987 anchors the cycle at Prabhava (order 1).

/// The 60 samvatsara names in cycle order (index 0 = Prabhava).
pub const ALL_SAMVATSARA_NAMES: [&str; 60] = [
    "Prabhava",
    "Vibhava",
    "Shukla",
    "Pramodoota",
    "Prajothpatti",
    "Angirasa",
    "Shrimukha",
    "Bhava",
    "Yuva",
    "Dhaatu",
    "Eeshvara",
    "Bahudhanya",
    "Pramaathi",
    "Vikrama",
    "Vrisha",
    "Chitrabhanu",
    "Svabhanu",
    "Taarana",
    "Paarthiva",
    "Vyaya",
    "Sarvajit",
    "Sarvadhari",
    "Virodhi",
    "Vikruti",
    "Khara",
    "Nandana",
    "Vijaya",
    "Jaya",
    "Manmatha",
    "Durmukhi",
    "Hevilambi",
    "Vilambi",
    "Vikari",
    "Sharvari",
    "Plava",
    "Shubhakrut",
    "Shobhakrut",
    "Krodhi",
    "Vishvavasu",
    "Paraabhava",
    "Plavanga",
    "Keelaka",
    "Saumya",
    "Sadharana",
    "Virodhikrut",
    "Paridhavi",
    "Pramaadhi",
    "Aananda",
    "Raakshasa",
    "Naala",
    "Pingala",
    "Kaalayukti",
    "Siddharthi",
    "Raudri",
    "Durmathi",
    "Dundubhi",
    "Rudhirodgaari",
    "Raktaakshi",
    "Krodhana",
    "Akshaya",
];

/// Reference epoch: CE 1987 = Prabhava (order 1).
pub const SAMVATSARA_EPOCH_YEAR: i32 = 1987;

/// Samvatsara for a CE year.
///
/// Returns `(name, order)` where order is 1-based (1..=60).
pub fn samvatsara_for_year(ce_year: i32) -> (&'static str, u8) {
    let offset = (ce_year - SAMVATSARA_EPOCH_YEAR).rem_euclid(60) as usize;
    (ALL_SAMVATSARA_NAMES[offset], (offset + 1) as u8)
}
