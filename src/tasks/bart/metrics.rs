//! Balloon reducer: pumping appetite, burst exposure, and the first-to-
//! second-half escalation slope.

use serde::{Deserialize, Serialize};

use crate::core::num::{mean, ratio};

use super::engine::BalloonRecord;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BartMetrics {
    /// Mean pumps over balloons banked without bursting.
    pub avg_pumps_nonburst: Option<f64>,
    pub burst_rate: f64,
    pub total_earnings: u32,
    /// Second-half minus first-half mean pumps; needs at least 4 balloons.
    pub escalation_slope: Option<f64>,
    pub n_balloons: usize,
}

pub fn reduce(records: &[BalloonRecord]) -> Option<BartMetrics> {
    if records.is_empty() {
        return None;
    }

    let nonburst_pumps: Vec<f64> = records
        .iter()
        .filter(|r| !r.burst)
        .map(|r| r.pumps as f64)
        .collect();
    let bursts = records.iter().filter(|r| r.burst).count();
    let total_earnings = records.iter().map(|r| r.banked).sum();

    let n = records.len();
    let escalation_slope = if n < 4 {
        None
    } else {
        let half = n / 2;
        let pumps: Vec<f64> = records.iter().map(|r| r.pumps as f64).collect();
        match (mean(&pumps[..half]), mean(&pumps[half..])) {
            (Some(first), Some(second)) => Some(second - first),
            _ => None,
        }
    };

    Some(BartMetrics {
        avg_pumps_nonburst: mean(&nonburst_pumps),
        burst_rate: ratio(bursts, n),
        total_earnings,
        escalation_slope,
        n_balloons: n,
    })
}
