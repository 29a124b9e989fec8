//! Incentive delay reducer: reward-versus-neutral speed and accuracy
//! deltas. Negative deltas mean the reward cue sharpened performance.

use serde::{Deserialize, Serialize};

use crate::core::num::{mean, ratio};
use crate::core::scheduler::TrialEvent;

use super::engine::{Incentive, MidOutcome};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MidMetrics {
    /// Mean hit reaction time under reward cues, ms.
    pub rt_reward_ms: Option<f64>,
    /// Mean hit reaction time under neutral cues, ms.
    pub rt_neutral_ms: Option<f64>,
    /// Reward minus neutral reaction time.
    pub delta_rt_ms: Option<f64>,
    pub error_rate_reward: f64,
    pub error_rate_neutral: f64,
    /// Reward minus neutral error rate.
    pub delta_error_rate: f64,
    pub hit_rate_reward: f64,
    pub n_trials: usize,
}

pub fn reduce(log: &[TrialEvent<Incentive, MidOutcome>]) -> Option<MidMetrics> {
    if log.is_empty() {
        return None;
    }

    let condition = |incentive: Incentive| {
        let total = log.iter().filter(|e| e.kind == incentive).count();
        let hit_rts: Vec<f64> = log
            .iter()
            .filter(|e| e.kind == incentive && e.outcome == MidOutcome::Hit)
            .filter_map(|e| e.rt_ms)
            .collect();
        let error_rate = 1.0 - ratio(hit_rts.len(), total);
        (mean(&hit_rts), error_rate, ratio(hit_rts.len(), total))
    };

    let (rt_reward_ms, error_rate_reward, hit_rate_reward) = condition(Incentive::Reward);
    let (rt_neutral_ms, error_rate_neutral, _) = condition(Incentive::Neutral);
    let delta_rt_ms = match (rt_reward_ms, rt_neutral_ms) {
        (Some(r), Some(n)) => Some(r - n),
        _ => None,
    };

    Some(MidMetrics {
        rt_reward_ms,
        rt_neutral_ms,
        delta_rt_ms,
        error_rate_reward,
        error_rate_neutral,
        delta_error_rate: error_rate_reward - error_rate_neutral,
        hit_rate_reward,
        n_trials: log.len(),
    })
}
