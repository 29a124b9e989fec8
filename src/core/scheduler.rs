//! Generic trial scheduler: one parametrized state machine shared by every
//! timed task instead of per-task copies of the same phase logic.
//!
//! A [`Session`] owns the phase state, the trial log, and the single active
//! stimulus window. Every operation is pure with respect to time: callers
//! pass the current monotonic stamp in, and the session hands back a list
//! of [`Effect`]s for the driver to execute (arm/cancel timers, publish
//! updates). Timer callbacks re-enter through [`Session::present_stimulus`]
//! and [`Session::expire`], which compare the captured run and window ids
//! against the live ones by value; a mismatch means the callback is stale
//! and the session ignores it. That id check, together with the driver
//! aborting the pending timer whenever it re-arms, is what guarantees at
//! most one trial event per stimulus window.

use std::fmt;

use rand::rngs::StdRng;
use serde::Serialize;

use super::qc::QualityFlags;
use super::timing::InstantStamp;

/// A "tap" response for tasks whose action carries no data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Press;

/// Task descriptor plugged into the generic scheduler: trial counts and
/// timing constants, the stimulus generator, the classification rule, and
/// the reducer for the finished log.
pub trait TaskProtocol: fmt::Debug + Send + 'static {
    /// Stimulus payload shown for one trial.
    type Kind: Clone + fmt::Debug + Send + 'static;
    /// Inbound response payload.
    type Action: fmt::Debug + Send + 'static;
    /// Task-specific trial outcome label.
    type Outcome: Clone + fmt::Debug + Send + 'static;
    /// Metrics summary produced from the finished log.
    type Summary: Serialize + Clone + fmt::Debug + Send + 'static;

    fn task_id(&self) -> &'static str;

    fn plan(&self) -> RunPlan;

    /// Inter-stimulus interval before the next onset.
    fn lead_time_ms(&mut self, rng: &mut StdRng) -> u64;

    /// Draw the stimulus presented at onset.
    fn make_stimulus(&mut self, rng: &mut StdRng) -> StimulusSpec<Self::Kind>;

    fn classify_response(
        &self,
        kind: &Self::Kind,
        action: &Self::Action,
        rt_ms: f64,
    ) -> Verdict<Self::Outcome>;

    fn classify_miss(&self, kind: &Self::Kind) -> Verdict<Self::Outcome>;

    /// Pure reducer; `None` for an empty log.
    fn summarize(&self, log: &[TrialEvent<Self::Kind, Self::Outcome>]) -> Option<Self::Summary>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunPlan {
    /// Practice segment length, if the task has one.
    pub practice_ms: Option<u64>,
    pub schedule: RunSchedule,
    /// Period of the block-clock tick for timed blocks.
    pub tick_ms: u64,
    /// Trial floor below which QC marks the run as underpowered.
    pub min_trials: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunSchedule {
    /// Fixed-duration blocks ended by the block clock (go/no-go).
    TimedBlocks { count: usize, block_ms: u64 },
    /// Fixed trial count, no block clock (stroop, MID).
    FixedTrials { total: usize },
}

/// One stimulus presentation as drawn by the protocol.
#[derive(Debug, Clone)]
pub struct StimulusSpec<K> {
    pub kind: K,
    /// Onset-to-deadline span.
    pub window_ms: u64,
    /// Responses earlier than this after onset are rejected as reflexive.
    pub accept_delay_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Verdict<O> {
    pub correct: bool,
    pub outcome: O,
}

/// One classified observation, immutable once appended.
#[derive(Debug, Clone, PartialEq)]
pub struct TrialEvent<K, O> {
    pub at: InstantStamp,
    /// Block index; practice trials carry -1.
    pub block: i32,
    pub kind: K,
    pub responded: bool,
    pub rt_ms: Option<f64>,
    pub correct: bool,
    pub outcome: O,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Intro,
    Practice,
    /// Pause between blocks (and after practice) until the user continues.
    Interval,
    Block,
    Done,
}

/// Instructions handed back to the driver. Timer effects replace the single
/// pending one-shot; the rest are forwarded as updates.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect<K, O> {
    ArmOnset { run_id: u64, delay_ms: u64 },
    ArmExpiry { run_id: u64, window_id: u64, delay_ms: u64 },
    CancelTimer,
    StartTick,
    StopTick,
    PhaseChanged(Phase),
    StimulusOn(K),
    StimulusOff,
    Trial(TrialEvent<K, O>),
    Completed,
}

/// The live contract for "this stimulus is presently respondable".
#[derive(Debug, Clone)]
struct ActiveWindow<K> {
    id: u64,
    kind: K,
    started_at: InstantStamp,
    accept_after: InstantStamp,
    deadline: InstantStamp,
}

/// Per-task session state: the only mutable resource in the core, owned
/// exclusively by the scheduler/classifier pair.
#[derive(Debug)]
pub struct Session<P: TaskProtocol> {
    protocol: P,
    plan: RunPlan,
    rng: StdRng,
    run_id: u64,
    next_window_id: u64,
    phase: Phase,
    block: i32,
    trials_done: usize,
    segment_started: Option<InstantStamp>,
    segment_ms: u64,
    active: Option<ActiveWindow<P::Kind>>,
    log: Vec<TrialEvent<P::Kind, P::Outcome>>,
    qc: QualityFlags,
}

type Effects<P> =
    Vec<Effect<<P as TaskProtocol>::Kind, <P as TaskProtocol>::Outcome>>;

impl<P: TaskProtocol> Session<P> {
    pub fn new(protocol: P, rng: StdRng) -> Self {
        let plan = protocol.plan();
        Self {
            protocol,
            plan,
            rng,
            run_id: 1,
            next_window_id: 0,
            phase: Phase::Intro,
            block: 0,
            trials_done: 0,
            segment_started: None,
            segment_ms: 0,
            active: None,
            log: Vec::new(),
            qc: QualityFlags::pristine(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn run_id(&self) -> u64 {
        self.run_id
    }

    pub fn plan(&self) -> &RunPlan {
        &self.plan
    }

    pub fn task_id(&self) -> &'static str {
        self.protocol.task_id()
    }

    pub fn log(&self) -> &[TrialEvent<P::Kind, P::Outcome>] {
        &self.log
    }

    pub fn trial_count(&self) -> usize {
        self.log.len()
    }

    pub fn active_window_id(&self) -> Option<u64> {
        self.active.as_ref().map(|w| w.id)
    }

    pub fn qc(&self) -> &QualityFlags {
        &self.qc
    }

    pub fn qc_mut(&mut self) -> &mut QualityFlags {
        &mut self.qc
    }

    pub fn summary(&self) -> Option<P::Summary> {
        self.protocol.summarize(&self.log)
    }

    /// User "start" intent: enter practice when the plan has one, otherwise
    /// go straight into the first block.
    pub fn start(&mut self, now: InstantStamp) -> Effects<P> {
        if self.phase != Phase::Intro {
            return Vec::new();
        }
        if self.plan.practice_ms.is_some() {
            self.start_practice(now)
        } else {
            self.log.clear();
            self.trials_done = 0;
            self.begin_block(0, now)
        }
    }

    /// Explicit practice start; a no-op for tasks without practice.
    pub fn start_practice(&mut self, now: InstantStamp) -> Effects<P> {
        let practice_ms = match (self.phase, self.plan.practice_ms) {
            (Phase::Intro, Some(ms)) => ms,
            _ => return Vec::new(),
        };
        self.log.clear();
        self.trials_done = 0;
        self.block = -1;
        self.phase = Phase::Practice;
        self.segment_started = Some(now);
        self.segment_ms = practice_ms;
        let mut effects = vec![
            Effect::PhaseChanged(Phase::Practice),
            Effect::StartTick,
        ];
        effects.push(self.arm_onset());
        effects
    }

    /// User acknowledgement from the interval pause: enter the next block.
    pub fn next_block(&mut self, now: InstantStamp) -> Effects<P> {
        if self.phase != Phase::Interval {
            return Vec::new();
        }
        self.begin_block(self.block + 1, now)
    }

    fn begin_block(&mut self, index: i32, now: InstantStamp) -> Effects<P> {
        self.block = index;
        self.phase = Phase::Block;
        self.segment_started = Some(now);
        let mut effects = vec![Effect::PhaseChanged(Phase::Block)];
        if let RunSchedule::TimedBlocks { block_ms, .. } = self.plan.schedule {
            self.segment_ms = block_ms;
            effects.push(Effect::StartTick);
        }
        effects.push(self.arm_onset());
        effects
    }

    fn arm_onset(&mut self) -> Effect<P::Kind, P::Outcome> {
        let delay_ms = self.protocol.lead_time_ms(&mut self.rng);
        Effect::ArmOnset {
            run_id: self.run_id,
            delay_ms,
        }
    }

    /// Onset timer callback: present the next stimulus and arm its expiry.
    pub fn present_stimulus(&mut self, run_id: u64, now: InstantStamp) -> Effects<P> {
        if run_id != self.run_id {
            tracing::debug!(run_id, live = self.run_id, "stale onset discarded");
            return Vec::new();
        }
        if !matches!(self.phase, Phase::Practice | Phase::Block) || self.active.is_some() {
            return Vec::new();
        }
        if let RunSchedule::FixedTrials { total } = self.plan.schedule {
            if self.trials_done >= total {
                return Vec::new();
            }
        }
        let spec = self.protocol.make_stimulus(&mut self.rng);
        self.next_window_id += 1;
        let window = ActiveWindow {
            id: self.next_window_id,
            kind: spec.kind.clone(),
            started_at: now,
            accept_after: now + spec.accept_delay_ms as f64,
            deadline: now + spec.window_ms as f64,
        };
        let effects = vec![
            Effect::StimulusOn(spec.kind),
            Effect::ArmExpiry {
                run_id: self.run_id,
                window_id: window.id,
                delay_ms: spec.window_ms,
            },
        ];
        self.active = Some(window);
        effects
    }

    /// Classify a user response against the live window. Responses with no
    /// live window, before the accept delay, or after the deadline are
    /// discarded and the window stays live.
    pub fn respond(&mut self, action: &P::Action, now: InstantStamp) -> Effects<P> {
        if !matches!(self.phase, Phase::Practice | Phase::Block) {
            return Vec::new();
        }
        let window = match &self.active {
            Some(w) => w,
            None => return Vec::new(),
        };
        if now < window.accept_after || now > window.deadline {
            tracing::debug!(task = self.task_id(), "response outside acceptance window");
            return Vec::new();
        }
        let rt_ms = now - window.started_at;
        let verdict = self.protocol.classify_response(&window.kind, action, rt_ms);
        let event = TrialEvent {
            at: now,
            block: self.block,
            kind: window.kind.clone(),
            responded: true,
            rt_ms: Some(rt_ms),
            correct: verdict.correct,
            outcome: verdict.outcome,
        };
        self.active = None;
        self.trials_done += 1;
        self.log.push(event.clone());
        let mut effects = vec![
            Effect::CancelTimer,
            Effect::StimulusOff,
            Effect::Trial(event),
        ];
        effects.extend(self.advance());
        effects
    }

    /// Expiry timer callback: append the miss outcome if the captured ids
    /// still name the live window; otherwise the callback is stale.
    pub fn expire(&mut self, run_id: u64, window_id: u64, now: InstantStamp) -> Effects<P> {
        if run_id != self.run_id {
            tracing::debug!(run_id, live = self.run_id, "stale expiry discarded");
            return Vec::new();
        }
        let window = match &self.active {
            Some(w) if w.id == window_id => w,
            _ => {
                tracing::debug!(window_id, "expiry for resolved window discarded");
                return Vec::new();
            }
        };
        let verdict = self.protocol.classify_miss(&window.kind);
        let event = TrialEvent {
            at: now,
            block: self.block,
            kind: window.kind.clone(),
            responded: false,
            rt_ms: None,
            correct: verdict.correct,
            outcome: verdict.outcome,
        };
        self.active = None;
        self.trials_done += 1;
        self.log.push(event.clone());
        let mut effects = vec![Effect::StimulusOff, Effect::Trial(event)];
        effects.extend(self.advance());
        effects
    }

    fn advance(&mut self) -> Effects<P> {
        match self.plan.schedule {
            RunSchedule::FixedTrials { total } if self.trials_done >= total => self.finish(),
            _ => vec![self.arm_onset()],
        }
    }

    fn finish(&mut self) -> Effects<P> {
        self.phase = Phase::Done;
        self.segment_started = None;
        tracing::info!(task = self.task_id(), trials = self.log.len(), "session complete");
        vec![
            Effect::StopTick,
            Effect::CancelTimer,
            Effect::PhaseChanged(Phase::Done),
            Effect::Completed,
        ]
    }

    /// Block-clock tick. Remaining time is recomputed from the monotonic
    /// stamp; at zero the segment ends and any pending stimulus is dropped
    /// without an event.
    pub fn tick(&mut self, now: InstantStamp) -> Effects<P> {
        let started = match (self.phase, self.segment_started) {
            (Phase::Practice | Phase::Block, Some(t0)) => t0,
            _ => return Vec::new(),
        };
        let remaining = self.segment_ms as f64 - (now - started);
        if remaining > 0.0 {
            return Vec::new();
        }
        let mut effects = vec![Effect::CancelTimer];
        if self.active.take().is_some() {
            effects.push(Effect::StimulusOff);
        }
        if self.phase == Phase::Practice {
            self.phase = Phase::Interval;
            self.segment_started = None;
            effects.push(Effect::StopTick);
            effects.push(Effect::PhaseChanged(Phase::Interval));
            return effects;
        }
        let final_block = match self.plan.schedule {
            RunSchedule::TimedBlocks { count, .. } => (self.block + 1) as usize >= count,
            RunSchedule::FixedTrials { .. } => true,
        };
        if final_block {
            effects.extend(self.finish());
        } else {
            self.phase = Phase::Interval;
            self.segment_started = None;
            effects.push(Effect::StopTick);
            effects.push(Effect::PhaseChanged(Phase::Interval));
        }
        effects
    }

    /// Discard the session and re-enter intro. Bumping the run id strands
    /// every in-flight timer tag; the driver additionally aborts them.
    pub fn restart(&mut self) -> Effects<P> {
        self.run_id += 1;
        self.phase = Phase::Intro;
        self.block = 0;
        self.trials_done = 0;
        self.segment_started = None;
        self.log.clear();
        self.qc = QualityFlags::pristine();
        let had_window = self.active.take().is_some();
        let mut effects = vec![Effect::CancelTimer, Effect::StopTick];
        if had_window {
            effects.push(Effect::StimulusOff);
        }
        effects.push(Effect::PhaseChanged(Phase::Intro));
        effects
    }

    /// Visibility loss: drop the live window without an event and note it
    /// in QC. The block clock keeps running.
    pub fn suspend(&mut self) -> Effects<P> {
        self.qc.log_visibility_blur();
        let mut effects = vec![Effect::CancelTimer];
        if self.active.take().is_some() {
            effects.push(Effect::StimulusOff);
        }
        effects
    }

    /// Visibility regained: re-arm the stimulus chain if a segment is live.
    pub fn resume(&mut self) -> Effects<P> {
        if matches!(self.phase, Phase::Practice | Phase::Block) {
            vec![self.arm_onset()]
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    /// Minimal deterministic protocol: respond-to-everything, fixed timing.
    #[derive(Debug)]
    struct EchoProtocol {
        total: usize,
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Ping;

    impl TaskProtocol for EchoProtocol {
        type Kind = Ping;
        type Action = Press;
        type Outcome = bool;
        type Summary = usize;

        fn task_id(&self) -> &'static str {
            "echo"
        }

        fn plan(&self) -> RunPlan {
            RunPlan {
                practice_ms: None,
                schedule: RunSchedule::FixedTrials { total: self.total },
                tick_ms: 50,
                min_trials: 1,
            }
        }

        fn lead_time_ms(&mut self, _rng: &mut StdRng) -> u64 {
            100
        }

        fn make_stimulus(&mut self, _rng: &mut StdRng) -> StimulusSpec<Ping> {
            StimulusSpec {
                kind: Ping,
                window_ms: 500,
                accept_delay_ms: 120,
            }
        }

        fn classify_response(&self, _kind: &Ping, _action: &Press, _rt: f64) -> Verdict<bool> {
            Verdict {
                correct: true,
                outcome: true,
            }
        }

        fn classify_miss(&self, _kind: &Ping) -> Verdict<bool> {
            Verdict {
                correct: false,
                outcome: false,
            }
        }

        fn summarize(&self, log: &[TrialEvent<Ping, bool>]) -> Option<usize> {
            if log.is_empty() {
                None
            } else {
                Some(log.len())
            }
        }
    }

    fn session(total: usize) -> Session<EchoProtocol> {
        Session::new(EchoProtocol { total }, StdRng::seed_from_u64(42))
    }

    fn onset_ids(effects: &[Effect<Ping, bool>]) -> Option<u64> {
        effects.iter().find_map(|e| match e {
            Effect::ArmOnset { run_id, .. } => Some(*run_id),
            _ => None,
        })
    }

    fn expiry_ids(effects: &[Effect<Ping, bool>]) -> Option<(u64, u64)> {
        effects.iter().find_map(|e| match e {
            Effect::ArmExpiry {
                run_id, window_id, ..
            } => Some((*run_id, *window_id)),
            _ => None,
        })
    }

    #[test]
    fn valid_response_appends_one_event() {
        let mut s = session(5);
        let fx = s.start(0.0);
        let run = onset_ids(&fx).unwrap();
        s.present_stimulus(run, 100.0);
        let fx = s.respond(&Press, 300.0);
        assert_eq!(s.trial_count(), 1);
        assert!(fx.iter().any(|e| matches!(e, Effect::CancelTimer)));
        let event = &s.log()[0];
        assert!(event.responded);
        assert_eq!(event.rt_ms, Some(200.0));
        assert!(event.correct);
    }

    #[test]
    fn stale_expiry_after_response_is_a_no_op() {
        let mut s = session(5);
        let fx = s.start(0.0);
        let run = onset_ids(&fx).unwrap();
        let fx = s.present_stimulus(run, 100.0);
        let (exp_run, exp_window) = expiry_ids(&fx).unwrap();
        s.respond(&Press, 300.0);
        // Suppose the expiry timer fires anyway.
        let fx = s.expire(exp_run, exp_window, 600.0);
        assert!(fx.is_empty());
        assert_eq!(s.trial_count(), 1);
    }

    #[test]
    fn early_response_is_discarded_and_window_can_still_miss() {
        let mut s = session(5);
        let fx = s.start(0.0);
        let run = onset_ids(&fx).unwrap();
        let fx = s.present_stimulus(run, 100.0);
        let (exp_run, exp_window) = expiry_ids(&fx).unwrap();
        // 50ms after onset, inside the 120ms accept delay.
        let fx = s.respond(&Press, 150.0);
        assert!(fx.is_empty());
        assert_eq!(s.trial_count(), 0);
        assert!(s.active_window_id().is_some());
        let _ = s.expire(exp_run, exp_window, 600.0);
        assert_eq!(s.trial_count(), 1);
        assert!(!s.log()[0].responded);
    }

    #[test]
    fn late_response_is_discarded() {
        let mut s = session(5);
        let fx = s.start(0.0);
        let run = onset_ids(&fx).unwrap();
        s.present_stimulus(run, 100.0);
        let fx = s.respond(&Press, 700.0);
        assert!(fx.is_empty());
        assert_eq!(s.trial_count(), 0);
    }

    #[test]
    fn restart_strands_old_run_timers() {
        let mut s = session(5);
        let fx = s.start(0.0);
        let old_run = onset_ids(&fx).unwrap();
        let fx = s.present_stimulus(old_run, 100.0);
        let (exp_run, exp_window) = expiry_ids(&fx).unwrap();
        s.restart();
        assert_eq!(s.phase(), Phase::Intro);
        assert!(s.expire(exp_run, exp_window, 700.0).is_empty());
        assert!(s.present_stimulus(old_run, 700.0).is_empty());
        assert_eq!(s.trial_count(), 0);
        assert!(s.run_id() > old_run);
    }

    #[test]
    fn fixed_trial_run_finishes_after_total() {
        let mut s = session(2);
        let fx = s.start(0.0);
        let run = onset_ids(&fx).unwrap();
        s.present_stimulus(run, 100.0);
        s.respond(&Press, 300.0);
        s.present_stimulus(run, 400.0);
        let fx = s.respond(&Press, 600.0);
        assert_eq!(s.phase(), Phase::Done);
        assert!(fx.iter().any(|e| matches!(e, Effect::Completed)));
        assert_eq!(s.summary(), Some(2));
    }

    #[test]
    fn suspend_drops_window_without_event() {
        let mut s = session(5);
        let fx = s.start(0.0);
        let run = onset_ids(&fx).unwrap();
        let fx = s.present_stimulus(run, 100.0);
        let (exp_run, exp_window) = expiry_ids(&fx).unwrap();
        s.suspend();
        assert!(s.active_window_id().is_none());
        assert!(s.expire(exp_run, exp_window, 600.0).is_empty());
        assert_eq!(s.trial_count(), 0);
        assert_eq!(s.qc().visibility_blur_events, 1);
        let fx = s.resume();
        assert!(onset_ids(&fx).is_some());
    }

    /// Timed-blocks variant of the echo protocol.
    #[derive(Debug)]
    struct TimedEcho;

    impl TaskProtocol for TimedEcho {
        type Kind = Ping;
        type Action = Press;
        type Outcome = bool;
        type Summary = usize;

        fn task_id(&self) -> &'static str {
            "echo-timed"
        }

        fn plan(&self) -> RunPlan {
            RunPlan {
                practice_ms: Some(1_000),
                schedule: RunSchedule::TimedBlocks {
                    count: 2,
                    block_ms: 2_000,
                },
                tick_ms: 50,
                min_trials: 1,
            }
        }

        fn lead_time_ms(&mut self, _rng: &mut StdRng) -> u64 {
            100
        }

        fn make_stimulus(&mut self, _rng: &mut StdRng) -> StimulusSpec<Ping> {
            StimulusSpec {
                kind: Ping,
                window_ms: 500,
                accept_delay_ms: 120,
            }
        }

        fn classify_response(&self, _kind: &Ping, _action: &Press, _rt: f64) -> Verdict<bool> {
            Verdict {
                correct: true,
                outcome: true,
            }
        }

        fn classify_miss(&self, _kind: &Ping) -> Verdict<bool> {
            Verdict {
                correct: false,
                outcome: false,
            }
        }

        fn summarize(&self, log: &[TrialEvent<Ping, bool>]) -> Option<usize> {
            Some(log.len())
        }
    }

    #[test]
    fn timed_blocks_walk_practice_interval_blocks_done() {
        let mut s = Session::new(TimedEcho, StdRng::seed_from_u64(7));
        let fx = s.start(0.0);
        assert_eq!(s.phase(), Phase::Practice);
        let run = onset_ids(&fx).unwrap();

        // Practice trial tagged block -1.
        s.present_stimulus(run, 100.0);
        s.respond(&Press, 300.0);
        assert_eq!(s.log()[0].block, -1);

        // Practice clock runs out.
        assert!(s.tick(500.0).is_empty());
        let fx = s.tick(1_100.0);
        assert_eq!(s.phase(), Phase::Interval);
        assert!(fx.iter().any(|e| matches!(e, Effect::StopTick)));

        // First block.
        s.next_block(1_200.0);
        assert_eq!(s.phase(), Phase::Block);
        s.present_stimulus(run, 1_300.0);
        s.respond(&Press, 1_500.0);
        assert_eq!(s.log()[1].block, 0);
        s.tick(3_300.0);
        assert_eq!(s.phase(), Phase::Interval);

        // Second and final block ends the run.
        s.next_block(3_400.0);
        let fx = s.tick(5_500.0);
        assert_eq!(s.phase(), Phase::Done);
        assert!(fx.iter().any(|e| matches!(e, Effect::Completed)));
    }

    #[test]
    fn block_end_drops_pending_window_without_event() {
        let mut s = Session::new(TimedEcho, StdRng::seed_from_u64(7));
        let fx = s.start(0.0);
        let run = onset_ids(&fx).unwrap();
        let fx = s.present_stimulus(run, 900.0);
        let (exp_run, exp_window) = expiry_ids(&fx).unwrap();
        // Window deadline sits past the end of practice.
        let fx = s.tick(1_050.0);
        assert!(fx.iter().any(|e| matches!(e, Effect::StimulusOff)));
        assert_eq!(s.trial_count(), 0);
        assert!(s.expire(exp_run, exp_window, 1_400.0).is_empty());
    }

    #[test]
    fn empty_log_summary_is_missing() {
        let s = session(5);
        assert_eq!(s.summary(), None);
    }
}
