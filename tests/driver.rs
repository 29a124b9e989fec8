//! Driver race tests under a paused clock: virtual time makes multi-minute
//! runs instant and the timer interleavings deterministic.

use std::time::Duration;

use futures_util::StreamExt;
use tokio::time::timeout;

use tiltlab::core::driver::{DriverHandle, SessionDriver, Update};
use tiltlab::core::scheduler::{Phase, TaskProtocol};
use tiltlab::tasks::gonogo::{GoNoGoConfig, GoNoGoOutcome, GoNoGoProtocol};
use tiltlab::tasks::stroop::{StroopConfig, StroopProtocol};

/// Virtual-time guard long enough for any demo run.
const GUARD: Duration = Duration::from_secs(300);

async fn next_update<P: TaskProtocol>(handle: &mut DriverHandle<P>) -> Update<P> {
    timeout(GUARD, handle.updates.next())
        .await
        .expect("driver went silent")
        .expect("driver dropped its update channel")
}

#[tokio::test(start_paused = true)]
async fn unattended_gonogo_run_logs_exactly_one_event_per_stimulus() {
    let mut handle = SessionDriver::spawn_seeded(GoNoGoProtocol::new(GoNoGoConfig::demo()), 7);
    handle.start();

    let mut stimuli = 0usize;
    let mut trials = Vec::new();
    loop {
        match next_update(&mut handle).await {
            Update::Phase(Phase::Interval) => handle.next_block(),
            Update::Phase(_) => {}
            Update::StimulusOn(_) => stimuli += 1,
            Update::StimulusOff => {}
            Update::Trial(event) => trials.push(event),
            Update::Completed { summary, record } => {
                let m = summary.expect("a full run reduces to metrics");
                // Nobody pressed anything: only misses in the log.
                assert_eq!(m.counts.hits, 0);
                assert_eq!(m.counts.commissions, 0);
                assert_eq!(m.rt_mean_ms, None);
                let record = record.expect("metrics serialize into a record");
                assert_eq!(record.task, "gonogo");
                break;
            }
        }
    }

    assert!(!trials.is_empty());
    // Windows cut short by a block boundary expire without an event, so the
    // trial count may trail the stimulus count but can never exceed it.
    assert!(trials.len() <= stimuli);
    assert!(stimuli - trials.len() <= 4);
    for event in &trials {
        assert!(!event.responded);
        assert!(matches!(
            event.outcome,
            GoNoGoOutcome::Omission | GoNoGoOutcome::CorrectWithhold
        ));
    }
}

#[tokio::test(start_paused = true)]
async fn stroop_responses_resolve_every_trial_with_clean_rts() {
    let mut handle = SessionDriver::spawn_seeded(StroopProtocol::new(StroopConfig::demo()), 42);
    handle.start();

    let mut trials = 0usize;
    loop {
        match next_update(&mut handle).await {
            Update::StimulusOn(stimulus) => {
                // Answer with the ink 200ms after onset, past the accept delay.
                tokio::time::sleep(Duration::from_millis(200)).await;
                handle.respond(stimulus.ink);
            }
            Update::Trial(event) => {
                trials += 1;
                assert!(event.responded);
                assert!(event.correct);
                let rt = event.rt_ms.expect("responded trials carry an rt");
                assert!((rt - 200.0).abs() < 5.0, "rt drifted: {rt}");
            }
            Update::Completed { summary, record } => {
                let m = summary.expect("a full run reduces to metrics");
                assert_eq!(m.n_trials, 24);
                assert_eq!(m.congruent_error_rate, 0.0);
                assert_eq!(m.incongruent_error_rate, 0.0);
                let record = record.expect("metrics serialize into a record");
                assert!(record.qc.min_trials_met);
                break;
            }
            _ => {}
        }
    }
    assert_eq!(trials, 24);
}

#[tokio::test(start_paused = true)]
async fn restart_mid_run_strands_every_pending_timer() {
    let mut handle = SessionDriver::spawn_seeded(GoNoGoProtocol::new(GoNoGoConfig::demo()), 7);
    handle.start();

    // Wait for a live stimulus so both an expiry timer and the tick loop
    // are in flight, then restart.
    loop {
        if let Update::StimulusOn(_) = next_update(&mut handle).await {
            break;
        }
    }
    handle.restart();

    // Drain until the driver confirms the reset.
    loop {
        match next_update(&mut handle).await {
            Update::Phase(Phase::Intro) => break,
            Update::Trial(_) => panic!("trial event after restart"),
            _ => {}
        }
    }

    // Nothing may fire afterwards: a long virtual wait stays silent.
    match timeout(GUARD, handle.updates.next()).await {
        Err(_) => {}
        Ok(update) => panic!("stray update after restart: {update:?}"),
    }
}
