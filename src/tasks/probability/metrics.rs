//! Probability weighting reducer: lottery preference by probability band
//! and the classic overweight-small / underweight-large contrasts.

use serde::{Deserialize, Serialize};

use crate::core::num::ratio;

use super::engine::{LotteryChoice, ProbabilityRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Band {
    Small,
    Medium,
    Large,
}

fn band(p: f64) -> Band {
    if p <= 0.1 {
        Band::Small
    } else if p < 0.8 {
        Band::Medium
    } else {
        Band::Large
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityMetrics {
    /// Lottery-choice rate for p <= 0.1.
    pub lottery_rate_small: f64,
    /// Lottery-choice rate for 0.1 < p < 0.8.
    pub lottery_rate_medium: f64,
    /// Lottery-choice rate for p >= 0.8.
    pub lottery_rate_large: f64,
    /// Small-band rate minus medium-band rate.
    pub small_p_amplification: f64,
    /// Medium-band rate minus large-band rate.
    pub large_p_underweight: f64,
    pub n_trials: usize,
}

pub fn reduce(records: &[ProbabilityRecord]) -> Option<ProbabilityMetrics> {
    if records.is_empty() {
        return None;
    }

    let rate = |which: Band| {
        let total = records.iter().filter(|r| band(r.p) == which).count();
        let lotteries = records
            .iter()
            .filter(|r| band(r.p) == which && r.choice == LotteryChoice::Lottery)
            .count();
        ratio(lotteries, total)
    };
    let lottery_rate_small = rate(Band::Small);
    let lottery_rate_medium = rate(Band::Medium);
    let lottery_rate_large = rate(Band::Large);

    Some(ProbabilityMetrics {
        lottery_rate_small,
        lottery_rate_medium,
        lottery_rate_large,
        small_p_amplification: lottery_rate_small - lottery_rate_medium,
        large_p_underweight: lottery_rate_medium - lottery_rate_large,
        n_trials: records.len(),
    })
}
