//! Stroop reducer: per-frame accuracy and reaction time, plus the
//! interference costs between incongruent and congruent frames.

use serde::{Deserialize, Serialize};

use crate::core::num::{mean, ratio};
use crate::core::scheduler::TrialEvent;

use super::engine::{StroopOutcome, StroopStimulus};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StroopMetrics {
    /// Mean correct reaction time over congruent frames, ms.
    pub congruent_rt_ms: Option<f64>,
    /// Mean correct reaction time over incongruent frames, ms.
    pub incongruent_rt_ms: Option<f64>,
    pub congruent_error_rate: f64,
    pub incongruent_error_rate: f64,
    /// Incongruent minus congruent correct reaction time.
    pub interference_rt_cost_ms: Option<f64>,
    /// Incongruent minus congruent error rate.
    pub interference_error_cost: f64,
    pub n_trials: usize,
}

pub fn reduce(log: &[TrialEvent<StroopStimulus, StroopOutcome>]) -> Option<StroopMetrics> {
    if log.is_empty() {
        return None;
    }

    let frame = |congruent: bool| {
        let total = log.iter().filter(|e| e.kind.congruent == congruent).count();
        let correct_rts: Vec<f64> = log
            .iter()
            .filter(|e| e.kind.congruent == congruent && e.responded && e.correct)
            .filter_map(|e| e.rt_ms)
            .collect();
        let error_rate = 1.0 - ratio(correct_rts.len(), total);
        (mean(&correct_rts), error_rate)
    };

    let (congruent_rt_ms, congruent_error_rate) = frame(true);
    let (incongruent_rt_ms, incongruent_error_rate) = frame(false);
    let interference_rt_cost_ms = match (incongruent_rt_ms, congruent_rt_ms) {
        (Some(ic), Some(c)) => Some(ic - c),
        _ => None,
    };

    Some(StroopMetrics {
        congruent_rt_ms,
        incongruent_rt_ms,
        congruent_error_rate,
        incongruent_error_rate,
        interference_rt_cost_ms,
        interference_error_cost: incongruent_error_rate - congruent_error_rate,
        n_trials: log.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::stroop::engine::InkColor;
    use pretty_assertions::assert_eq;

    fn event(
        congruent: bool,
        rt_ms: Option<f64>,
        correct: bool,
    ) -> TrialEvent<StroopStimulus, StroopOutcome> {
        let ink = InkColor::Blue;
        let word = if congruent { ink } else { InkColor::Red };
        TrialEvent {
            at: 0.0,
            block: 0,
            kind: StroopStimulus {
                word,
                ink,
                congruent,
            },
            responded: rt_ms.is_some(),
            rt_ms,
            correct,
            outcome: if rt_ms.is_some() {
                StroopOutcome::Response
            } else {
                StroopOutcome::Timeout
            },
        }
    }

    #[test]
    fn interference_costs_compare_frames() {
        let log = vec![
            event(true, Some(600.0), true),
            event(true, Some(640.0), true),
            event(true, Some(900.0), false),
            event(false, Some(760.0), true),
            event(false, Some(800.0), true),
            event(false, None, false),
            event(false, Some(500.0), false),
        ];
        let m = reduce(&log).unwrap();
        assert_eq!(m.congruent_rt_ms, Some(620.0));
        assert_eq!(m.incongruent_rt_ms, Some(780.0));
        assert_eq!(m.interference_rt_cost_ms, Some(160.0));
        assert_eq!(m.congruent_error_rate, 1.0 - 2.0 / 3.0);
        assert_eq!(m.incongruent_error_rate, 0.5);
        assert_eq!(m.n_trials, 7);
    }

    #[test]
    fn timeouts_count_as_errors_without_rt() {
        let log = vec![event(true, None, false), event(false, None, false)];
        let m = reduce(&log).unwrap();
        assert_eq!(m.congruent_rt_ms, None);
        assert_eq!(m.interference_rt_cost_ms, None);
        assert_eq!(m.congruent_error_rate, 1.0);
        assert_eq!(m.incongruent_error_rate, 1.0);
        assert_eq!(m.interference_error_cost, 0.0);
    }

    #[test]
    fn empty_log_reduces_to_missing() {
        assert_eq!(reduce(&[]), None);
    }
}
