//! Go/no-go protocol: timed blocks of go-biased cues with a tap-or-withhold
//! response rule.

use rand::rngs::StdRng;
use rand::Rng;

use crate::core::scheduler::{
    Press, RunPlan, RunSchedule, StimulusSpec, TaskProtocol, TrialEvent, Verdict,
};

use super::metrics::{self, GoNoGoMetrics};

/// Probability that a cue is a go cue.
const GO_PROBABILITY: f64 = 0.75;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Go,
    NoGo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoNoGoOutcome {
    /// Tap on a go cue.
    Hit,
    /// No tap on a go cue.
    Omission,
    /// Tap on a no-go cue.
    Commission,
    /// No tap on a no-go cue.
    CorrectWithhold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoNoGoConfig {
    pub blocks: usize,
    pub block_ms: u64,
    pub practice_ms: u64,
    pub min_trials: usize,
}

impl GoNoGoConfig {
    pub fn standard() -> Self {
        Self {
            blocks: 4,
            block_ms: 60_000,
            practice_ms: 15_000,
            min_trials: 60,
        }
    }

    pub fn demo() -> Self {
        Self {
            blocks: 3,
            block_ms: 10_000,
            practice_ms: 5_000,
            min_trials: 10,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct GoNoGoProtocol {
    config: GoNoGoConfig,
}

impl GoNoGoProtocol {
    pub fn new(config: GoNoGoConfig) -> Self {
        Self { config }
    }
}

impl TaskProtocol for GoNoGoProtocol {
    type Kind = Cue;
    type Action = Press;
    type Outcome = GoNoGoOutcome;
    type Summary = GoNoGoMetrics;

    fn task_id(&self) -> &'static str {
        "gonogo"
    }

    fn plan(&self) -> RunPlan {
        RunPlan {
            practice_ms: Some(self.config.practice_ms),
            schedule: RunSchedule::TimedBlocks {
                count: self.config.blocks,
                block_ms: self.config.block_ms,
            },
            tick_ms: 50,
            min_trials: self.config.min_trials,
        }
    }

    fn lead_time_ms(&mut self, rng: &mut StdRng) -> u64 {
        rng.gen_range(800..1_300)
    }

    fn make_stimulus(&mut self, rng: &mut StdRng) -> StimulusSpec<Cue> {
        let kind = if rng.gen_bool(GO_PROBABILITY) {
            Cue::Go
        } else {
            Cue::NoGo
        };
        StimulusSpec {
            kind,
            window_ms: rng.gen_range(600..900),
            accept_delay_ms: 0,
        }
    }

    fn classify_response(&self, kind: &Cue, _action: &Press, _rt_ms: f64) -> Verdict<GoNoGoOutcome> {
        match kind {
            Cue::Go => Verdict {
                correct: true,
                outcome: GoNoGoOutcome::Hit,
            },
            Cue::NoGo => Verdict {
                correct: false,
                outcome: GoNoGoOutcome::Commission,
            },
        }
    }

    fn classify_miss(&self, kind: &Cue) -> Verdict<GoNoGoOutcome> {
        match kind {
            Cue::Go => Verdict {
                correct: false,
                outcome: GoNoGoOutcome::Omission,
            },
            Cue::NoGo => Verdict {
                correct: true,
                outcome: GoNoGoOutcome::CorrectWithhold,
            },
        }
    }

    fn summarize(&self, log: &[TrialEvent<Cue, GoNoGoOutcome>]) -> Option<GoNoGoMetrics> {
        metrics::reduce(log)
    }
}
