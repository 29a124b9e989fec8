//! Plain-language advisory cards: one per completed task, flagged when the
//! summary crosses its attention threshold.

use serde::Serialize;

use super::BatteryResults;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Advisory {
    pub title: &'static str,
    pub explanation: &'static str,
    pub tip: &'static str,
    pub flagged: bool,
}

/// Build the advisory list for every task with a summary, in battery order.
pub fn advisories(results: &BatteryResults) -> Vec<Advisory> {
    let mut cards = Vec::new();

    if let Some(m) = &results.gonogo {
        cards.push(Advisory {
            title: "Impulsivity",
            explanation: "Higher scores indicate more fast, emotion-driven actions.",
            tip: "Use preset rules and avoid emotional trades.",
            flagged: m.inhibition_error_rate > 0.15
                || m.rt_cv.map_or(false, |cv| cv > 0.35)
                || m.fatigue_slope > 0.05,
        });
    }
    if let Some(m) = &results.stroop {
        cards.push(Advisory {
            title: "Distraction Sensitivity",
            explanation:
                "Higher scores reflect more difficulty staying focused when irrelevant information appears.",
            tip: "Rely on clear data before acting on fast-moving signals.",
            flagged: m.interference_rt_cost_ms.unwrap_or(0.0) > 120.0
                || m.interference_error_cost > 0.05,
        });
    }
    if let Some(m) = &results.framing {
        cards.push(Advisory {
            title: "Framing Sensitivity",
            explanation:
                "Higher scores reflect greater influence from how information is worded or presented.",
            tip: "Standardize scales and wording to reduce shifts driven by presentation.",
            flagged: m.framing_amplitude > 0.2
                || (1.0 - m.repeat_consistency.unwrap_or(1.0)) > 0.25,
        });
    }
    if let Some(m) = &results.mid {
        cards.push(Advisory {
            title: "Reward Sensitivity",
            explanation: "Higher scores reflect being more driven by attractive rewards.",
            tip: "Use ranges and scenarios instead of focusing on single short-term outcomes.",
            flagged: m.delta_rt_ms.unwrap_or(0.0) < -60.0 || m.delta_error_rate < -0.03,
        });
    }
    if let Some(m) = &results.bart {
        cards.push(Advisory {
            title: "Risk Appetite",
            explanation:
                "Higher scores reflect greater willingness to take chances for bigger payoffs.",
            tip: "Set limits and size positions carefully to keep risk within plan.",
            flagged: m.avg_pumps_nonburst.unwrap_or(0.0) > 8.0
                && m.burst_rate > 0.35
                && m.escalation_slope.map_or(true, |s| s <= 0.0),
        });
    }
    if let Some(m) = &results.delay {
        cards.push(Advisory {
            title: "Short-Term Preference",
            explanation:
                "Higher scores reflect stronger pull toward immediate outcomes (present bias).",
            tip: "Match holdings to short-, mid-, and long-term goals in separate buckets.",
            flagged: m.discount_rate_k > 0.02 || m.choice_now_pct > 0.5,
        });
    }
    if let Some(m) = &results.probability {
        cards.push(Advisory {
            title: "Probability Bias",
            explanation:
                "Higher scores reflect uneven weighting of small vs. large probabilities.",
            tip: "Compare outcomes across probability ranges, not only best-case scenarios.",
            flagged: m.small_p_amplification > 0.15 || m.large_p_underweight > 0.15,
        });
    }
    if let Some(m) = &results.calibration {
        cards.push(Advisory {
            title: "Confidence Bias",
            explanation:
                "Higher scores reflect a gap between confidence and accuracy (overconfidence).",
            tip: "Check views against long-run history to avoid over- or underconfidence.",
            flagged: m.overconfidence > 0.15 || m.hit_rate < 0.6,
        });
    }
    if let Some(m) = &results.anchoring {
        cards.push(Advisory {
            title: "Memory Bias",
            explanation:
                "Higher scores reflect stronger influence from memorable past events (anchoring).",
            tip: "Base plans on broad historical patterns rather than a few standout years.",
            flagged: m.rigidity.unwrap_or(0.0) < 0.3,
        });
    }

    cards
}
