//! Go/no-go reducer: reaction-time stability, inhibition failures, and a
//! block-to-block fatigue slope.

use serde::{Deserialize, Serialize};

use crate::core::num::{mean, ratio, std_dev};
use crate::core::scheduler::TrialEvent;

use super::engine::{Cue, GoNoGoOutcome};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoNoGoCounts {
    pub go: usize,
    pub nogo: usize,
    pub hits: usize,
    pub omissions: usize,
    pub commissions: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoNoGoMetrics {
    /// Mean reaction time over hits, ms.
    pub rt_mean_ms: Option<f64>,
    /// Population standard deviation of hit reaction times, ms.
    pub rt_std_ms: Option<f64>,
    /// Coefficient of variation of hit reaction times.
    pub rt_cv: Option<f64>,
    /// Commissions over no-go cues.
    pub inhibition_error_rate: f64,
    /// Omissions over go cues.
    pub omission_rate: f64,
    /// Combined error rate per scored block, practice excluded.
    pub block_error_rates: Vec<f64>,
    /// Last block error rate minus first; 0 with fewer than two blocks.
    pub fatigue_slope: f64,
    pub counts: GoNoGoCounts,
}

/// Reduce a trial log to summary metrics. Practice trials count toward the
/// overall rates but not the per-block series.
pub fn reduce(log: &[TrialEvent<Cue, GoNoGoOutcome>]) -> Option<GoNoGoMetrics> {
    if log.is_empty() {
        return None;
    }

    let hit_rts: Vec<f64> = log
        .iter()
        .filter(|e| e.outcome == GoNoGoOutcome::Hit)
        .filter_map(|e| e.rt_ms)
        .collect();
    let rt_mean_ms = mean(&hit_rts);
    let rt_std_ms = std_dev(&hit_rts);
    let rt_cv = match (rt_mean_ms, rt_std_ms) {
        (Some(m), Some(s)) if m > 0.0 => Some(s / m),
        _ => None,
    };

    let mut counts = GoNoGoCounts::default();
    for event in log {
        match event.kind {
            Cue::Go => counts.go += 1,
            Cue::NoGo => counts.nogo += 1,
        }
        match event.outcome {
            GoNoGoOutcome::Hit => counts.hits += 1,
            GoNoGoOutcome::Omission => counts.omissions += 1,
            GoNoGoOutcome::Commission => counts.commissions += 1,
            GoNoGoOutcome::CorrectWithhold => {}
        }
    }

    let mut block_ids: Vec<i32> = log.iter().map(|e| e.block).filter(|b| *b >= 0).collect();
    block_ids.sort_unstable();
    block_ids.dedup();
    let block_error_rates: Vec<f64> = block_ids
        .iter()
        .map(|b| {
            let events: Vec<_> = log.iter().filter(|e| e.block == *b).collect();
            let errors = events
                .iter()
                .filter(|e| {
                    matches!(
                        e.outcome,
                        GoNoGoOutcome::Omission | GoNoGoOutcome::Commission
                    )
                })
                .count();
            ratio(errors, events.len())
        })
        .collect();
    let fatigue_slope = match (block_error_rates.first(), block_error_rates.last()) {
        (Some(first), Some(last)) if block_error_rates.len() >= 2 => last - first,
        _ => 0.0,
    };

    Some(GoNoGoMetrics {
        rt_mean_ms,
        rt_std_ms,
        rt_cv,
        inhibition_error_rate: ratio(counts.commissions, counts.nogo),
        omission_rate: ratio(counts.omissions, counts.go),
        block_error_rates,
        fatigue_slope,
        counts,
    })
}
