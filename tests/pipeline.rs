//! End-to-end pipeline checks: synthetic trial logs through the reducers,
//! normalizer, composite scorer, and record export.

use pretty_assertions::assert_eq;

use tiltlab::battery::{
    advisories, allocation::allocation_tilt, dimension_scores, trait_scores, BatteryResults,
};
use tiltlab::core::qc::QualityFlags;
use tiltlab::core::scheduler::TrialEvent;
use tiltlab::core::storage::{export_document, import_document, SummaryRecord};
use tiltlab::tasks::anchoring::{self, AnchorValues, TRUTH};
use tiltlab::tasks::bart::{self, BalloonRecord};
use tiltlab::tasks::gonogo::{self, Cue, GoNoGoOutcome};

fn go_event(kind: Cue, rt_ms: Option<f64>, outcome: GoNoGoOutcome) -> TrialEvent<Cue, GoNoGoOutcome> {
    TrialEvent {
        at: 0.0,
        block: 0,
        kind,
        responded: rt_ms.is_some(),
        rt_ms,
        correct: matches!(outcome, GoNoGoOutcome::Hit | GoNoGoOutcome::CorrectWithhold),
        outcome,
    }
}

/// 10 go trials (8 hits, 2 omissions) and 5 no-go trials (1 commission).
fn inhibition_log() -> Vec<TrialEvent<Cue, GoNoGoOutcome>> {
    let mut log = Vec::new();
    for rt in [400.0, 420.0, 410.0, 430.0, 405.0, 415.0, 425.0, 395.0] {
        log.push(go_event(Cue::Go, Some(rt), GoNoGoOutcome::Hit));
    }
    log.push(go_event(Cue::Go, None, GoNoGoOutcome::Omission));
    log.push(go_event(Cue::Go, None, GoNoGoOutcome::Omission));
    log.push(go_event(Cue::NoGo, Some(350.0), GoNoGoOutcome::Commission));
    for _ in 0..4 {
        log.push(go_event(Cue::NoGo, None, GoNoGoOutcome::CorrectWithhold));
    }
    log
}

fn balloon_log() -> Vec<BalloonRecord> {
    vec![
        BalloonRecord {
            pumps: 5,
            burst: false,
            banked: 5,
        },
        BalloonRecord {
            pumps: 9,
            burst: true,
            banked: 0,
        },
        BalloonRecord {
            pumps: 3,
            burst: false,
            banked: 3,
        },
        BalloonRecord {
            pumps: 6,
            burst: false,
            banked: 6,
        },
    ]
}

#[test]
fn inhibition_log_reduces_to_the_reference_rates() {
    let m = gonogo::metrics::reduce(&inhibition_log()).unwrap();
    assert_eq!(m.omission_rate, 0.2);
    assert_eq!(m.inhibition_error_rate, 0.2);
    assert!((m.rt_mean_ms.unwrap() - 412.5).abs() < 1e-9);
    assert_eq!(m.counts.go, 10);
    assert_eq!(m.counts.nogo, 5);
}

#[test]
fn balloon_log_reduces_to_the_reference_summary() {
    let m = bart::metrics::reduce(&balloon_log()).unwrap();
    assert!((m.avg_pumps_nonburst.unwrap() - 14.0 / 3.0).abs() < 1e-9);
    assert_eq!(m.burst_rate, 0.25);
    assert_eq!(m.total_earnings, 14);
    assert_eq!(m.escalation_slope, Some(-2.5));
}

#[test]
fn partial_battery_produces_bounded_scores_and_a_full_ranking() {
    let results = BatteryResults {
        gonogo: gonogo::metrics::reduce(&inhibition_log()),
        bart: bart::metrics::reduce(&balloon_log()),
        ..Default::default()
    };

    let dims = dimension_scores(&results);
    assert_eq!(dims.len(), 2);
    for dim in &dims {
        assert!(
            (0.0..=100.0).contains(&dim.value),
            "{} out of range: {}",
            dim.label,
            dim.value
        );
    }

    let traits = trait_scores(&results);
    assert!(traits.risk_taking.is_some());
    assert!(traits.impulse_control.is_some());
    assert_eq!(traits.time_horizon, None);
    assert_eq!(traits.bias_adjustment, None);

    let tilt = allocation_tilt(&traits);
    assert!(tilt.available());
    let sum = tilt.growth_pct + tilt.preservation_pct + tilt.income_pct;
    assert!((sum - 100.0).abs() < 1e-6);
    assert_eq!(tilt.ranking.len(), 3);
}

#[test]
fn empty_battery_scores_nothing() {
    let results = BatteryResults::default();
    assert!(!results.any_present());
    assert!(dimension_scores(&results).is_empty());
    let tilt = allocation_tilt(&trait_scores(&results));
    assert!(!tilt.available());
    assert_eq!(tilt.growth_pct + tilt.preservation_pct + tilt.income_pct, 0.0);
    assert!(advisories(&results).is_empty());
}

#[test]
fn exact_round_one_guess_never_divides_by_zero() {
    let r1 = AnchorValues {
        best_year: Some(37.0),
        worst_year: Some(-37.0),
        average_year: Some(11.0),
    };
    let r2 = AnchorValues {
        best_year: Some(40.0),
        worst_year: Some(-30.0),
        average_year: Some(11.0),
    };
    let m = anchoring::metrics::reduce(&r1, &r2, &TRUTH).unwrap();
    assert_eq!(m.best_year.rigidity_component, None);
    assert_eq!(m.worst_year.rigidity_component, None);
    assert_eq!(m.average_year.rigidity_component, None);
    assert_eq!(m.rigidity, None);
}

#[test]
fn unclamped_rigidity_flows_into_bias_adjustment() {
    // Round two overshoots far past the truth on every field.
    let r1 = AnchorValues {
        best_year: Some(30.0),
        worst_year: Some(-30.0),
        average_year: Some(8.0),
    };
    let r2 = AnchorValues {
        best_year: Some(60.0),
        worst_year: Some(-60.0),
        average_year: Some(20.0),
    };
    let m = anchoring::metrics::reduce(&r1, &r2, &TRUTH).unwrap();
    let rigidity = m.rigidity.unwrap();
    assert!(rigidity < 0.0, "overcorrection should go negative: {rigidity}");

    let results = BatteryResults {
        anchoring: Some(m),
        ..Default::default()
    };
    // The trait stays bounded even though the input is not.
    let traits = trait_scores(&results);
    let bias = traits.bias_adjustment.unwrap();
    assert!((0.0..=1.0).contains(&bias));
    assert!(advisories(&results)[0].flagged);
}

#[test]
fn summary_records_round_trip_through_the_export_document() {
    let gonogo_metrics = gonogo::metrics::reduce(&inhibition_log()).unwrap();
    let bart_metrics = bart::metrics::reduce(&balloon_log()).unwrap();
    let records = vec![
        SummaryRecord::new("gonogo", &gonogo_metrics, QualityFlags::pristine()).unwrap(),
        SummaryRecord::new("bart", &bart_metrics, QualityFlags::pristine()).unwrap(),
    ];
    let doc = export_document(&records).unwrap();
    let parsed = import_document(&doc).unwrap();
    assert_eq!(parsed.len(), 2);
    assert_eq!(parsed[0].task, "gonogo");
    assert_eq!(parsed[1].task, "bart");
    assert_eq!(parsed[0].metrics["omission_rate"], 0.2);
    assert_eq!(parsed[1].metrics["total_earnings"], 14);
}
