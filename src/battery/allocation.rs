//! Allocation style tilt: the trait scores are blended into Growth,
//! Preservation, and Income leanings and renormalized into percentages.
//! Descriptive only, not investment advice.

use serde::{Deserialize, Serialize};

use super::profile::TraitScores;
use super::score::{clamp01, weighted_average};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AllocationStyle {
    Income,
    Preservation,
    Growth,
}

impl AllocationStyle {
    pub fn label(self) -> &'static str {
        match self {
            AllocationStyle::Income => "Income",
            AllocationStyle::Preservation => "Preservation",
            AllocationStyle::Growth => "Growth",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationTilt {
    /// Blended style scores in 0..=1.
    pub growth: f64,
    pub preservation: f64,
    pub income: f64,
    /// Shares of the three scores, summing to 100 when available.
    pub growth_pct: f64,
    pub preservation_pct: f64,
    pub income_pct: f64,
    /// Styles ordered by share, strongest first; empty when no task has
    /// produced a usable trait yet.
    pub ranking: Vec<AllocationStyle>,
}

impl AllocationTilt {
    pub fn available(&self) -> bool {
        !self.ranking.is_empty()
    }
}

/// Blend trait scores into the three-way tilt.
pub fn allocation_tilt(traits: &TraitScores) -> AllocationTilt {
    let growth_raw = weighted_average(&[
        (traits.risk_taking, 0.4),
        (traits.time_horizon, 0.3),
        (traits.reward_seeking, 0.2),
        (traits.bias_adjustment, 0.1),
    ]);
    // Poor inhibition discounts the growth leaning rather than feeding it.
    let impulse_factor = match traits.impulse_control {
        Some(ic) => 0.7 + 0.3 * ic,
        None => 1.0,
    };
    let growth = clamp01(growth_raw * impulse_factor);

    let preservation = clamp01(weighted_average(&[
        (traits.risk_taking.map(|v| 1.0 - v), 0.5),
        (traits.reward_seeking.map(|v| 1.0 - v), 0.3),
        (traits.bias_adjustment.map(|v| 1.0 - v), 0.2),
    ]));

    // Income favors a middling risk appetite over either extreme.
    let centered_risk = traits
        .risk_taking
        .map(|v| 1.0 - ((v - 0.5).abs() / 0.5).min(1.0));
    let income = clamp01(weighted_average(&[
        (centered_risk, 0.4),
        (traits.impulse_control, 0.3),
        (traits.bias_adjustment, 0.3),
    ]));

    let total = growth + preservation + income;
    let (growth_pct, preservation_pct, income_pct, ranking) = if total > 0.0 {
        let growth_pct = growth / total * 100.0;
        let preservation_pct = preservation / total * 100.0;
        let income_pct = income / total * 100.0;
        let mut ranked = vec![
            (AllocationStyle::Income, income_pct),
            (AllocationStyle::Preservation, preservation_pct),
            (AllocationStyle::Growth, growth_pct),
        ];
        // Stable sort keeps the declaration order on ties.
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        (
            growth_pct,
            preservation_pct,
            income_pct,
            ranked.into_iter().map(|(style, _)| style).collect(),
        )
    } else {
        (0.0, 0.0, 0.0, Vec::new())
    };

    AllocationTilt {
        growth,
        preservation,
        income,
        growth_pct,
        preservation_pct,
        income_pct,
        ranking,
    }
}
