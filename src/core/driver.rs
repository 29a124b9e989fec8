//! Async shell around [`Session`]: owns the timers, feeds callbacks back in,
//! and forwards updates to the caller.
//!
//! The driver serializes everything through one event loop, so the session
//! is never touched from two places at once. Exactly one one-shot timer is
//! pending at any time; arming a new one aborts the previous handle before
//! the new sleep is spawned, which makes replacement synchronous. Stale
//! callbacks that slip through anyway (abort raced the send) are rejected
//! inside the session by the run and window id checks.

use futures::future::{abortable, AbortHandle};
use futures_channel::mpsc::{unbounded, UnboundedReceiver, UnboundedSender};
use futures_util::{FutureExt, StreamExt};
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::platform;
use super::scheduler::{Effect, Phase, Session, TaskProtocol, TrialEvent};
use super::storage::SummaryRecord;
use super::timing::{self, InstantStamp};

/// User-originated commands.
#[derive(Debug)]
pub enum Intent<A> {
    Start,
    StartPractice,
    NextBlock,
    Respond { action: A, at: InstantStamp },
    Restart,
    Suspend,
    Resume,
    /// Response surface lost input focus; noted in QC only.
    FocusLost,
}

/// Timer callbacks, tagged with the ids captured when the timer was armed.
#[derive(Debug, Clone, Copy)]
enum TimerEvent {
    Onset { run_id: u64 },
    Expiry { run_id: u64, window_id: u64 },
    Tick,
}

/// Outbound notifications for a UI or test harness.
#[derive(Debug)]
pub enum Update<P: TaskProtocol> {
    Phase(Phase),
    StimulusOn(P::Kind),
    StimulusOff,
    Trial(TrialEvent<P::Kind, P::Outcome>),
    Completed {
        summary: Option<P::Summary>,
        record: Option<SummaryRecord>,
    },
}

/// Caller side of a running driver.
pub struct DriverHandle<P: TaskProtocol> {
    intents: UnboundedSender<Intent<P::Action>>,
    pub updates: UnboundedReceiver<Update<P>>,
}

impl<P: TaskProtocol> DriverHandle<P> {
    pub fn start(&self) {
        self.send(Intent::Start);
    }

    pub fn start_practice(&self) {
        self.send(Intent::StartPractice);
    }

    pub fn next_block(&self) {
        self.send(Intent::NextBlock);
    }

    /// Stamps the response at send time, not at loop-dispatch time, so
    /// reaction times do not absorb queue latency.
    pub fn respond(&self, action: P::Action) {
        self.send(Intent::Respond {
            action,
            at: timing::now(),
        });
    }

    pub fn restart(&self) {
        self.send(Intent::Restart);
    }

    pub fn suspend(&self) {
        self.send(Intent::Suspend);
    }

    pub fn resume(&self) {
        self.send(Intent::Resume);
    }

    pub fn focus_lost(&self) {
        self.send(Intent::FocusLost);
    }

    fn send(&self, intent: Intent<P::Action>) {
        // A closed channel means the driver already shut down.
        let _ = self.intents.unbounded_send(intent);
    }
}

pub struct SessionDriver<P: TaskProtocol> {
    session: Session<P>,
    intents_rx: UnboundedReceiver<Intent<P::Action>>,
    timers_tx: UnboundedSender<TimerEvent>,
    timers_rx: UnboundedReceiver<TimerEvent>,
    updates_tx: UnboundedSender<Update<P>>,
    oneshot: Option<AbortHandle>,
    tick: Option<AbortHandle>,
}

impl<P: TaskProtocol> SessionDriver<P> {
    /// Spawn a driver seeded from OS entropy.
    pub fn spawn(protocol: P) -> DriverHandle<P> {
        Self::launch(Session::new(protocol, StdRng::from_entropy()))
    }

    /// Spawn with a fixed seed, for reproducible runs.
    pub fn spawn_seeded(protocol: P, seed: u64) -> DriverHandle<P> {
        Self::launch(Session::new(protocol, StdRng::seed_from_u64(seed)))
    }

    fn launch(session: Session<P>) -> DriverHandle<P> {
        let (intents_tx, intents_rx) = unbounded();
        let (timers_tx, timers_rx) = unbounded();
        let (updates_tx, updates_rx) = unbounded();
        let driver = SessionDriver {
            session,
            intents_rx,
            timers_tx,
            timers_rx,
            updates_tx,
            oneshot: None,
            tick: None,
        };
        platform::spawn_future(driver.run());
        DriverHandle {
            intents: intents_tx,
            updates: updates_rx,
        }
    }

    async fn run(mut self) {
        tracing::info!(task = self.session.task_id(), "session driver started");
        loop {
            let effects = futures_util::select! {
                intent = self.intents_rx.next() => match intent {
                    Some(intent) => self.handle_intent(intent),
                    // All handles dropped: tear down.
                    None => break,
                },
                timer = self.timers_rx.next() => match timer {
                    Some(timer) => self.handle_timer(timer),
                    None => break,
                },
            };
            for effect in effects {
                self.perform(effect);
            }
        }
        self.cancel_all();
        tracing::info!(task = self.session.task_id(), "session driver stopped");
    }

    fn handle_intent(
        &mut self,
        intent: Intent<P::Action>,
    ) -> Vec<Effect<P::Kind, P::Outcome>> {
        match intent {
            Intent::Start => self.session.start(timing::now()),
            Intent::StartPractice => self.session.start_practice(timing::now()),
            Intent::NextBlock => self.session.next_block(timing::now()),
            Intent::Respond { action, at } => self.session.respond(&action, at),
            Intent::Restart => self.session.restart(),
            Intent::Suspend => self.session.suspend(),
            Intent::Resume => self.session.resume(),
            Intent::FocusLost => {
                self.session.qc_mut().log_focus_loss();
                Vec::new()
            }
        }
    }

    fn handle_timer(&mut self, timer: TimerEvent) -> Vec<Effect<P::Kind, P::Outcome>> {
        match timer {
            TimerEvent::Onset { run_id } => self.session.present_stimulus(run_id, timing::now()),
            TimerEvent::Expiry { run_id, window_id } => {
                self.session.expire(run_id, window_id, timing::now())
            }
            TimerEvent::Tick => self.session.tick(timing::now()),
        }
    }

    fn perform(&mut self, effect: Effect<P::Kind, P::Outcome>) {
        match effect {
            Effect::ArmOnset { run_id, delay_ms } => {
                self.arm_oneshot(delay_ms, TimerEvent::Onset { run_id });
            }
            Effect::ArmExpiry {
                run_id,
                window_id,
                delay_ms,
            } => {
                self.arm_oneshot(delay_ms, TimerEvent::Expiry { run_id, window_id });
            }
            Effect::CancelTimer => self.cancel_oneshot(),
            Effect::StartTick => self.start_tick(),
            Effect::StopTick => self.stop_tick(),
            Effect::PhaseChanged(phase) => {
                tracing::info!(task = self.session.task_id(), ?phase, "phase change");
                self.publish(Update::Phase(phase));
            }
            Effect::StimulusOn(kind) => self.publish(Update::StimulusOn(kind)),
            Effect::StimulusOff => self.publish(Update::StimulusOff),
            Effect::Trial(event) => self.publish(Update::Trial(event)),
            Effect::Completed => self.complete(),
        }
    }

    fn arm_oneshot(&mut self, delay_ms: u64, event: TimerEvent) {
        self.cancel_oneshot();
        let tx = self.timers_tx.clone();
        let (fut, handle) = abortable(async move {
            timing::sleep_ms(delay_ms).await;
            let _ = tx.unbounded_send(event);
        });
        self.oneshot = Some(handle);
        platform::spawn_future(fut.map(|_| ()));
    }

    fn cancel_oneshot(&mut self) {
        if let Some(handle) = self.oneshot.take() {
            handle.abort();
        }
    }

    fn start_tick(&mut self) {
        if self.tick.is_some() {
            return;
        }
        let tx = self.timers_tx.clone();
        let period = self.session.plan().tick_ms;
        let (fut, handle) = abortable(async move {
            loop {
                timing::sleep_ms(period).await;
                if tx.unbounded_send(TimerEvent::Tick).is_err() {
                    break;
                }
            }
        });
        self.tick = Some(handle);
        platform::spawn_future(fut.map(|_| ()));
    }

    fn stop_tick(&mut self) {
        if let Some(handle) = self.tick.take() {
            handle.abort();
        }
    }

    fn cancel_all(&mut self) {
        self.cancel_oneshot();
        self.stop_tick();
    }

    fn complete(&mut self) {
        let met = self.session.trial_count() >= self.session.plan().min_trials;
        self.session.qc_mut().mark_min_trials(met);
        let summary = self.session.summary();
        let record = match &summary {
            Some(metrics) => {
                match SummaryRecord::new(self.session.task_id(), metrics, self.session.qc().clone())
                {
                    Ok(record) => Some(record),
                    Err(err) => {
                        tracing::warn!(task = self.session.task_id(), %err, "record build failed");
                        None
                    }
                }
            }
            None => None,
        };
        tracing::info!(
            task = self.session.task_id(),
            trials = self.session.trial_count(),
            "run complete"
        );
        self.publish(Update::Completed { summary, record });
    }

    fn publish(&self, update: Update<P>) {
        let _ = self.updates_tx.unbounded_send(update);
    }
}
