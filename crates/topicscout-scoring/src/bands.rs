//! Stepped lookup tables and rounding shared by the scoring components.
//!
//! Every stepped score is an ordered `(threshold, value)` table tested
//! top-down, so the inclusive/exclusive boundary of each row is explicit at
//! the call site.

/// First row whose threshold `value` meets or exceeds (`>=`), else `fallback`.
pub(crate) fn at_least(value: f64, rows: &[(f64, f64)], fallback: f64) -> f64 {
    rows.iter()
        .find(|&&(threshold, _)| value >= threshold)
        .map_or(fallback, |&(_, score)| score)
}

/// First row whose threshold `value` strictly exceeds (`>`), else `fallback`.
pub(crate) fn above(value: f64, rows: &[(f64, f64)], fallback: f64) -> f64 {
    rows.iter()
        .find(|&&(threshold, _)| value > threshold)
        .map_or(fallback, |&(_, score)| score)
}

/// Round half away from zero to `places` decimal places.
#[must_use]
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10_f64.powi(places);
    (value * factor).round() / factor
}

/// Saturating `u32` to `f64` for counts taken from `len()`.
pub(crate) fn count_f64(count: usize) -> f64 {
    f64::from(u32::try_from(count).unwrap_or(u32::MAX))
}
