//! Deterministic numeric helpers.

#![forbid(unsafe_code)]

/// Round a floating point value to `decimals` decimal places.
///
/// Non-finite values are returned unchanged, as is any value whose scaled
/// form would not be finite (precision beyond what an `f64` can hold).
#[must_use]
pub fn round_f64(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let Ok(exponent) = i32::try_from(decimals) else {
        return value;
    };
    let factor = 10f64.powi(exponent);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

/// Divide `numer` by a count, returning `None` instead of dividing by zero.
#[must_use]
pub fn checked_ratio(numer: f64, denom: usize) -> Option<f64> {
    if denom == 0 {
        None
    } else {
        Some(numer / denom as f64)
    }
}

/// Return `100 * part / whole`, or `None` when `whole` is zero.
#[must_use]
pub fn percentage(part: usize, whole: usize) -> Option<f64> {
    checked_ratio(100.0 * part as f64, whole)
}
