//! Behavioral profile: per-task dimension scores on a 0..=100 scale and
//! the five 0..=1 trait scores feeding the allocation tilt.
//!
//! Each dimension normalizes its task's raw effect sizes against fixed
//! saturation caps, so a score of 100 means "at or beyond the cap", not a
//! population percentile. Missing metric values inside a present task
//! score 0 for their component; absent tasks are skipped entirely.

use serde::{Deserialize, Serialize};

use super::score::{clamp01, norm};
use super::BatteryResults;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DimensionScore {
    pub label: &'static str,
    /// 0..=100.
    pub value: f64,
}

/// Trait scores in 0..=1; a trait is `None` until its source task has run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TraitScores {
    pub risk_taking: Option<f64>,
    pub time_horizon: Option<f64>,
    pub reward_seeking: Option<f64>,
    pub impulse_control: Option<f64>,
    pub bias_adjustment: Option<f64>,
}

/// Inhibition load from the go/no-go summary, shared by the impulsivity
/// dimension and the impulse-control trait.
fn gonogo_load(m: &crate::tasks::gonogo::GoNoGoMetrics) -> f64 {
    let inh = norm(m.inhibition_error_rate, 0.3);
    let omiss = norm(m.omission_rate, 0.3);
    let cv = norm(m.rt_cv.unwrap_or(0.0), 0.6);
    let fatigue = norm(m.fatigue_slope + 0.2, 0.4);
    clamp01((inh + omiss + cv + fatigue) / 4.0)
}

fn bart_appetite(m: &crate::tasks::bart::BartMetrics) -> f64 {
    let avg_pumps = norm(m.avg_pumps_nonburst.unwrap_or(0.0), 10.0);
    let burst = norm(m.burst_rate, 0.6);
    let no_learning = norm((-m.escalation_slope.unwrap_or(0.0)).max(0.0), 4.0);
    clamp01((avg_pumps + burst + no_learning) / 3.0)
}

fn delay_present_bias(m: &crate::tasks::delay::DelayMetrics) -> f64 {
    let k_score = norm(m.discount_rate_k, 0.03);
    clamp01(0.6 * k_score + 0.4 * m.choice_now_pct)
}

fn mid_boost(m: &crate::tasks::mid::MidMetrics) -> f64 {
    let rt_boost = norm((-m.delta_rt_ms.unwrap_or(0.0)).max(0.0), 150.0);
    let err_boost = norm((-m.delta_error_rate).max(0.0), 0.1);
    clamp01((rt_boost + err_boost) / 2.0)
}

/// Overconfidence/anchoring load over both questionnaire tasks; a missing
/// task contributes zero while the divisor stays 3.
fn bias_load(results: &BatteryResults) -> Option<f64> {
    if results.calibration.is_none() && results.anchoring.is_none() {
        return None;
    }
    let (over, hit_gap) = match &results.calibration {
        Some(c) => (
            norm(c.overconfidence, 0.3),
            norm(0.9 - c.hit_rate, 0.3),
        ),
        None => (0.0, 0.0),
    };
    let rigid_gap = match &results.anchoring {
        Some(a) => norm(1.0 - a.rigidity.unwrap_or(0.0), 0.7),
        None => 0.0,
    };
    Some(clamp01((over + hit_gap + rigid_gap) / 3.0))
}

/// Radar-style dimension scores for every task that has a summary.
pub fn dimension_scores(results: &BatteryResults) -> Vec<DimensionScore> {
    let mut scores = Vec::new();

    if let Some(m) = &results.gonogo {
        scores.push(DimensionScore {
            label: "Impulsivity",
            value: gonogo_load(m) * 100.0,
        });
    }
    if let Some(m) = &results.stroop {
        let cost_rt = norm(m.interference_rt_cost_ms.unwrap_or(0.0).max(0.0), 300.0);
        let cost_err = norm(m.interference_error_cost, 0.2);
        scores.push(DimensionScore {
            label: "Distraction Sensitivity",
            value: clamp01((cost_rt + cost_err) / 2.0) * 100.0,
        });
    }
    if let Some(m) = &results.framing {
        let amp = norm(m.framing_amplitude.abs(), 0.5);
        let instability = norm(1.0 - m.repeat_consistency.unwrap_or(1.0), 0.5);
        scores.push(DimensionScore {
            label: "Framing Sensitivity",
            value: clamp01(0.7 * amp + 0.3 * instability) * 100.0,
        });
    }
    if let Some(m) = &results.mid {
        scores.push(DimensionScore {
            label: "Reward Sensitivity",
            value: mid_boost(m) * 100.0,
        });
    }
    if let Some(m) = &results.bart {
        scores.push(DimensionScore {
            label: "Risk Appetite",
            value: bart_appetite(m) * 100.0,
        });
    }
    if let Some(m) = &results.delay {
        scores.push(DimensionScore {
            label: "Short-Term Preference",
            value: delay_present_bias(m) * 100.0,
        });
    }
    if let Some(m) = &results.probability {
        let small = norm(m.small_p_amplification.abs(), 0.4);
        let large = norm(m.large_p_underweight.abs(), 0.4);
        scores.push(DimensionScore {
            label: "Probability Bias",
            value: clamp01((small + large) / 2.0) * 100.0,
        });
    }
    if let Some(load) = bias_load(results) {
        scores.push(DimensionScore {
            label: "Confidence & Memory Bias",
            value: load * 100.0,
        });
    }

    scores
}

/// Derive the five trait scores from whichever tasks have run.
pub fn trait_scores(results: &BatteryResults) -> TraitScores {
    TraitScores {
        risk_taking: results.bart.as_ref().map(bart_appetite),
        time_horizon: results
            .delay
            .as_ref()
            .map(|m| clamp01(1.0 - delay_present_bias(m))),
        reward_seeking: results.mid.as_ref().map(mid_boost),
        impulse_control: results
            .gonogo
            .as_ref()
            .map(|m| clamp01(1.0 - gonogo_load(m))),
        bias_adjustment: bias_load(results).map(|load| clamp01(1.0 - load)),
    }
}
