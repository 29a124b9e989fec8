//! Normalization helpers for the cross-task scores.

/// Clamp to the unit interval; non-finite input collapses to 0.
pub fn clamp01(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}

/// Scale `value` against a saturation cap into 0..=1. Non-finite values
/// and non-positive caps score 0.
pub fn norm(value: f64, max_abs: f64) -> f64 {
    if !value.is_finite() || !max_abs.is_finite() || max_abs <= 0.0 {
        return 0.0;
    }
    clamp01(value / max_abs)
}

/// Weighted average over the present, finite entries. Missing entries give
/// up their weight instead of dragging the average toward zero; with no
/// usable entries at all the result is 0.
pub fn weighted_average(pairs: &[(Option<f64>, f64)]) -> f64 {
    let mut num = 0.0;
    let mut den = 0.0;
    for (value, weight) in pairs {
        if let Some(v) = value {
            if v.is_finite() {
                num += v * weight;
                den += weight;
            }
        }
    }
    if den > 0.0 {
        num / den
    } else {
        0.0
    }
}
