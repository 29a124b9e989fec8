//! Stroop protocol: a fixed run of color words whose ink either matches
//! the word (congruent) or clashes with it.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::core::scheduler::{
    RunPlan, RunSchedule, StimulusSpec, TaskProtocol, TrialEvent, Verdict,
};

use super::metrics::{self, StroopMetrics};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InkColor {
    Red,
    Green,
    Blue,
    Yellow,
}

impl InkColor {
    pub const ALL: [InkColor; 4] = [
        InkColor::Red,
        InkColor::Green,
        InkColor::Blue,
        InkColor::Yellow,
    ];

    pub fn label(self) -> &'static str {
        match self {
            InkColor::Red => "red",
            InkColor::Green => "green",
            InkColor::Blue => "blue",
            InkColor::Yellow => "yellow",
        }
    }
}

/// One presented word: the name shown and the ink it is drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StroopStimulus {
    pub word: InkColor,
    pub ink: InkColor,
    pub congruent: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StroopOutcome {
    Response,
    Timeout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StroopConfig {
    pub trials: usize,
    pub deadline_ms: u64,
}

impl StroopConfig {
    pub fn standard() -> Self {
        Self {
            trials: 120,
            deadline_ms: 1_500,
        }
    }

    pub fn demo() -> Self {
        Self {
            trials: 24,
            deadline_ms: 2_000,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct StroopProtocol {
    config: StroopConfig,
}

impl StroopProtocol {
    pub fn new(config: StroopConfig) -> Self {
        Self { config }
    }
}

impl TaskProtocol for StroopProtocol {
    type Kind = StroopStimulus;
    type Action = InkColor;
    type Outcome = StroopOutcome;
    type Summary = StroopMetrics;

    fn task_id(&self) -> &'static str {
        "stroop"
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

    fn lead_time_ms(&mut self, _rng: &mut StdRng) -> u64 {
        250
    }

    fn make_stimulus(&mut self, rng: &mut StdRng) -> StimulusSpec<StroopStimulus> {
        let word = *InkColor::ALL
            .choose(rng)
            .unwrap_or(&InkColor::Red);
        let congruent = rng.gen_bool(0.5);
        let ink = if congruent {
            word
        } else {
            let others: Vec<InkColor> = InkColor::ALL
                .iter()
                .copied()
                .filter(|c| *c != word)
                .collect();
            *others.choose(rng).unwrap_or(&word)
        };
        StimulusSpec {
            kind: StroopStimulus {
                word,
                ink,
                congruent,
            },
            window_ms: self.config.deadline_ms,
            // Anything faster is anticipation, not reading.
            accept_delay_ms: 120,
        }
    }

    fn classify_response(
        &self,
        kind: &StroopStimulus,
        action: &InkColor,
        _rt_ms: f64,
    ) -> Verdict<StroopOutcome> {
        Verdict {
            correct: *action == kind.ink,
            outcome: StroopOutcome::Response,
        }
    }

    fn classify_miss(&self, _kind: &StroopStimulus) -> Verdict<StroopOutcome> {
        Verdict {
            correct: false,
            outcome: StroopOutcome::Timeout,
        }
    }

    fn summarize(&self, log: &[TrialEvent<StroopStimulus, StroopOutcome>]) -> Option<StroopMetrics> {
        metrics::reduce(log)
    }
}
