//! Missing-value-aware numerics shared by every reducer.
//!
//! The reducers never let a NaN or infinity escape into a summary: anything
//! that cannot be computed is `None`, and counts used as denominators are
//! floored to 1 so a ratio over an empty class degrades to 0 instead of
//! producing a division artifact.

/// Arithmetic mean, `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// Population standard deviation, `None` for an empty slice.
pub fn std_dev(values: &[f64]) -> Option<f64> {
    let m = mean(values)?;
    let variance = values.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / values.len() as f64;
    Some(variance.sqrt())
}

/// Parse a free-text numeric field; blank or non-numeric input is missing.
pub fn parse_field(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// `numer / max(1, denom)`, the safe-denominator rate used throughout.
pub fn ratio(numer: usize, denom: usize) -> f64 {
    numer as f64 / denom.max(1) as f64
}
