//! Anchoring reducer: per-field bias and adjustment, and a rigidity index
//! measuring how little round two moved toward the revealed truth.
//!
//! Rigidity is deliberately left unclamped: overcorrection past the truth
//! makes a component negative, and that signal is worth surfacing rather
//! than flooring away.

use serde::{Deserialize, Serialize};

use crate::core::num::mean;

use super::engine::{AnchorTruth, AnchorValues};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AnchorFieldScore {
    /// Round-one estimate minus the true value.
    pub bias_round1: Option<f64>,
    /// Round-two estimate minus the true value.
    pub bias_round2: Option<f64>,
    /// Round-two estimate minus round one.
    pub adjustment: Option<f64>,
    /// 1 minus the ratio of remaining error to initial error. Missing when
    /// round one was already exact or either round is unanswered.
    pub rigidity_component: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnchoringMetrics {
    pub best_year: AnchorFieldScore,
    pub worst_year: AnchorFieldScore,
    pub average_year: AnchorFieldScore,
    /// Mean of the defined rigidity components.
    pub rigidity: Option<f64>,
}

fn field_score(r1: Option<f64>, r2: Option<f64>, truth: f64) -> AnchorFieldScore {
    let bias_round1 = r1.map(|v| v - truth);
    let bias_round2 = r2.map(|v| v - truth);
    let adjustment = match (r1, r2) {
        (Some(a), Some(b)) => Some(b - a),
        _ => None,
    };
    let rigidity_component = match (r1, r2) {
        (Some(a), Some(b)) => {
            let initial = (a - truth).abs();
            if initial == 0.0 {
                None
            } else {
                Some(1.0 - (b - truth).abs() / initial)
            }
        }
        _ => None,
    };
    AnchorFieldScore {
        bias_round1,
        bias_round2,
        adjustment,
        rigidity_component,
    }
}

/// `None` when round one was left entirely blank.
pub fn reduce(
    round1: &AnchorValues,
    round2: &AnchorValues,
    truth: &AnchorTruth,
) -> Option<AnchoringMetrics> {
    if round1.is_blank() {
        return None;
    }

    let best_year = field_score(round1.best_year, round2.best_year, truth.best_year);
    let worst_year = field_score(round1.worst_year, round2.worst_year, truth.worst_year);
    let average_year = field_score(
        round1.average_year,
        round2.average_year,
        truth.average_year,
    );

    let components: Vec<f64> = [best_year, worst_year, average_year]
        .iter()
        .filter_map(|f| f.rigidity_component)
        .collect();

    Some(AnchoringMetrics {
        best_year,
        worst_year,
        average_year,
        rigidity: mean(&components),
    })
}
