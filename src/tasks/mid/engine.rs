//! Incentive delay protocol: a cue announces whether the upcoming target
//! pays out, then a brief target window tests how fast the tap lands.

use rand::rngs::StdRng;
use rand::Rng;

use crate::core::scheduler::{
    Press, RunPlan, RunSchedule, StimulusSpec, TaskProtocol, TrialEvent, Verdict,
};

use super::metrics::{self, MidMetrics};

/// Cue display time preceding the target.
const CUE_MS: u64 = 600;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Incentive {
    Reward,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MidOutcome {
    Hit,
    Miss,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MidConfig {
    pub trials: usize,
    pub target_window_ms: u64,
}

impl MidConfig {
    pub fn standard() -> Self {
        Self {
            trials: 60,
            target_window_ms: 1_000,
        }
    }

    pub fn demo() -> Self {
        Self {
            trials: 16,
            target_window_ms: 1_400,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MidProtocol {
    config: MidConfig,
}

impl MidProtocol {
    pub fn new(config: MidConfig) -> Self {
        Self { config }
    }
}

impl TaskProtocol for MidProtocol {
    type Kind = Incentive;
    type Action = Press;
    type Outcome = MidOutcome;
    type Summary = MidMetrics;

    fn task_id(&self) -> &'static str {
        "mid"
    }

    fn plan(&self) -> RunPlan {
        RunPlan {
            practice_ms: None,
            schedule: RunSchedule::FixedTrials {
                total: self.config.trials,
            },
            tick_ms: 50,
            min_trials: self.config.trials,
        }
    }

    /// Cue time plus a jittered anticipation gap before target onset.
    fn lead_time_ms(&mut self, rng: &mut StdRng) -> u64 {
        CUE_MS + rng.gen_range(300..500)
    }

    fn make_stimulus(&mut self, rng: &mut StdRng) -> StimulusSpec<Incentive> {
        let kind = if rng.gen_bool(0.5) {
            Incentive::Reward
        } else {
            Incentive::Neutral
        };
        StimulusSpec {
            kind,
            window_ms: self.config.target_window_ms,
            accept_delay_ms: 0,
        }
    }

    fn classify_response(&self, _kind: &Incentive, _action: &Press, _rt_ms: f64) -> Verdict<MidOutcome> {
        Verdict {
            correct: true,
            outcome: MidOutcome::Hit,
        }
    }

    fn classify_miss(&self, _kind: &Incentive) -> Verdict<MidOutcome> {
        Verdict {
            correct: false,
            outcome: MidOutcome::Miss,
        }
    }

    fn summarize(&self, log: &[TrialEvent<Incentive, MidOutcome>]) -> Option<MidMetrics> {
        metrics::reduce(log)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn lead_time_spans_cue_plus_jitter() {
        let mut protocol = MidProtocol::new(MidConfig::standard());
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..200 {
            let lead = protocol.lead_time_ms(&mut rng);
            assert!((900..1_100).contains(&lead));
        }
    }

    #[test]
    fn any_tap_inside_the_window_is_a_hit() {
        let protocol = MidProtocol::new(MidConfig::demo());
        let hit = protocol.classify_response(&Incentive::Reward, &Press, 450.0);
        assert!(hit.correct);
        assert_eq!(hit.outcome, MidOutcome::Hit);
        let miss = protocol.classify_miss(&Incentive::Neutral);
        assert!(!miss.correct);
        assert_eq!(miss.outcome, MidOutcome::Miss);
    }
}
