//! Delay discounting reducer: hyperbolic discount rate from the converged
//! staircase plus choice-pattern consistency.

use serde::{Deserialize, Serialize};

use crate::core::num::ratio;

use super::engine::{ChoiceRecord, TimeChoice};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DelayMetrics {
    /// Immediate amount offered on the final trial.
    pub indifference_now: f64,
    /// Hyperbolic discount rate k, clamped at zero.
    pub discount_rate_k: f64,
    /// Share of choices that took the immediate amount.
    pub choice_now_pct: f64,
    /// Times consecutive choices flipped sides.
    pub switch_count: usize,
    /// 1 minus the switch rate over adjacent choice pairs.
    pub consistency: f64,
    pub n_trials: usize,
}

pub fn reduce(
    records: &[ChoiceRecord],
    later_amount: u32,
    delay_days: u32,
) -> Option<DelayMetrics> {
    let last = records.last()?;
    let n = records.len();

    let now_star = last.offered_now as f64;
    let k = ((later_amount as f64 / now_star.max(1.0) - 1.0) / (delay_days.max(1) as f64)).max(0.0);

    let now_choices = records
        .iter()
        .filter(|r| r.choice == TimeChoice::Now)
        .count();
    let switch_count = records
        .windows(2)
        .filter(|pair| pair[0].choice != pair[1].choice)
        .count();

    Some(DelayMetrics {
        indifference_now: now_star,
        discount_rate_k: k,
        choice_now_pct: ratio(now_choices, n),
        switch_count,
        consistency: 1.0 - ratio(switch_count, n.saturating_sub(1)),
        n_trials: n,
    })
}
