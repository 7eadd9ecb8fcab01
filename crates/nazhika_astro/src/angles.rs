//! Shared angular arithmetic.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    deg.rem_euclid(360.0)
}

/// Normalize an angle to (-180, 180] degrees.
///
/// Used when the *sign* of an angular separation steers a search: a raw
/// difference of 359.9 degrees is really -0.1 degrees of separation.
pub fn normalize_to_pm180(deg: f64) -> f64 {
    let r = normalize_360(deg);
    if r > 180.0 { r - 360.0 } else { r }
}
