//! Framing reducer: risk seeking per frame, the gain-to-loss reversal
//! amplitude, and repeat agreement on re-presented items.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::num::ratio;

use super::engine::{Frame, FramingRecord, GambleChoice};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FramingMetrics {
    /// Share of gamble choices under the gain frame.
    pub risk_seeking_gain: f64,
    /// Share of gamble choices under the loss frame.
    pub risk_seeking_loss: f64,
    /// Loss-frame gamble rate minus gain-frame gamble rate.
    pub framing_amplitude: f64,
    /// Agreement over item repeats; `None` when nothing repeated.
    pub repeat_consistency: Option<f64>,
    pub n_trials: usize,
}

pub fn reduce(records: &[FramingRecord]) -> Option<FramingMetrics> {
    if records.is_empty() {
        return None;
    }

    let frame_rate = |frame: Frame| {
        let total = records.iter().filter(|r| r.frame == frame).count();
        let gambles = records
            .iter()
            .filter(|r| r.frame == frame && r.choice == GambleChoice::Gamble)
            .count();
        ratio(gambles, total)
    };
    let risk_seeking_gain = frame_rate(Frame::Gain);
    let risk_seeking_loss = frame_rate(Frame::Loss);

    // First two answers to the same (frame, item) presentation.
    let mut groups: BTreeMap<(u8, bool), Vec<GambleChoice>> = BTreeMap::new();
    for record in records {
        groups
            .entry((record.item_id, record.frame == Frame::Gain))
            .or_default()
            .push(record.choice);
    }
    let pairs: Vec<&Vec<GambleChoice>> =
        groups.values().filter(|choices| choices.len() >= 2).collect();
    let repeat_consistency = if pairs.is_empty() {
        None
    } else {
        let agreeing = pairs.iter().filter(|c| c[0] == c[1]).count();
        Some(ratio(agreeing, pairs.len()))
    };

    Some(FramingMetrics {
        risk_seeking_gain,
        risk_seeking_loss,
        framing_amplitude: risk_seeking_loss - risk_seeking_gain,
        repeat_consistency,
        n_trials: records.len(),
    })
}
