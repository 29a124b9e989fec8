//! Calibration reducer: hit rate against the 90% target and mean interval
//! width over the answered items.

use serde::{Deserialize, Serialize};

use crate::core::num::{mean, ratio};

use super::engine::CalibrationItemResult;

/// Nominal coverage the intervals were asked for.
const TARGET_HIT_RATE: f64 = 0.9;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalibrationMetrics {
    /// Hits over validly answered items.
    pub hit_rate: f64,
    /// Mean interval width over validly answered items.
    pub mean_interval_width: Option<f64>,
    /// Target coverage minus the observed hit rate.
    pub overconfidence: f64,
    pub n_valid: usize,
}

pub fn reduce(results: &[CalibrationItemResult]) -> Option<CalibrationMetrics> {
    if results.is_empty() {
        return None;
    }

    let valid: Vec<&CalibrationItemResult> = results.iter().filter(|r| r.valid).collect();
    let hits = valid.iter().filter(|r| r.hit).count();
    let widths: Vec<f64> = valid.iter().filter_map(|r| r.width).collect();
    let hit_rate = ratio(hits, valid.len());

    Some(CalibrationMetrics {
        hit_rate,
        mean_interval_width: mean(&widths),
        overconfidence: TARGET_HIT_RATE - hit_rate,
        n_valid: valid.len(),
    })
}
