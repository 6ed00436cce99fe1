use wcdaq_algorithms::{DaqConfig, DaqParams, EventContext, EventOrchestrator, NDigitsConfig};
use wcdaq_core::{RawHit, TriggerKind};

/// 50 hits on distinct sensors: 12 packed into one 200 ns span, the other
/// 38 spread out at one hit per microsecond.
fn spread_hits_with_burst() -> Vec<RawHit> {
    let mut hits = Vec::with_capacity(50);
    for i in 0..12_u32 {
        hits.push(RawHit::new(i, 10_000.0 + f64::from(i) * 10.0, 1.0));
    }
    for i in 0..38_u32 {
        hits.push(RawHit::new(100 + i, 20_000.0 + f64::from(i) * 1_000.0, 1.0));
    }
    hits
}

fn ndigits_daq(threshold: usize) -> DaqConfig {
    let params = DaqParams {
        ndigits: NDigitsConfig::new().with_threshold(threshold),
        ..DaqParams::default()
    };
    DaqConfig::new()
        .with_digitizer("SKI")
        .with_trigger("NDigits")
        .with_params(params)
}

#[test]
fn test_ski_ndigits_event_readout() {
    let mut orchestrator = EventOrchestrator::new(ndigits_daq(10));
    orchestrator.begin_event().unwrap();

    let ctx = EventContext {
        event_index: 0,
        raw_hits: spread_hits_with_burst(),
        ..EventContext::default()
    };
    let record = orchestrator.end_event(ctx).unwrap();

    // All 50 hits digitize (distinct sensors, nothing merges or drops).
    assert_eq!(record.digits.len(), 50);

    // Exactly the packed 12 read out as one NDigits window.
    assert_eq!(record.windows.len(), 1);
    let window = &record.windows[0];
    assert_eq!(window.trigger, TriggerKind::NDigits);
    assert_eq!(window.len(), 12);
    assert!((window.start - 10_000.0).abs() < f64::EPSILON);
    assert!(window.iter().all(|d| d.sensor.as_u32() < 12));
}

#[test]
fn test_quiet_event_reports_no_trigger() {
    let mut orchestrator = EventOrchestrator::new(ndigits_daq(25));

    // The burst only reaches 12, under the production threshold.
    let ctx = EventContext {
        raw_hits: spread_hits_with_burst(),
        ..EventContext::default()
    };
    let record = orchestrator.end_event(ctx).unwrap();

    assert_eq!(record.digits.len(), 50);
    assert!(record.no_trigger_fired());
}

#[test]
fn test_misconfigured_trigger_aborts_first_event() {
    let config = DaqConfig::new().with_trigger("Bogus");
    let mut orchestrator = EventOrchestrator::new(config);

    let ctx = EventContext {
        raw_hits: spread_hits_with_burst(),
        ..EventContext::default()
    };
    let err = orchestrator.end_event(ctx).unwrap_err();
    assert!(err.to_string().contains("Bogus"));
}

#[test]
fn test_passthrough_reads_out_everything() {
    let config = DaqConfig::new().with_trigger("NoTrigger");
    let mut orchestrator = EventOrchestrator::new(config);

    let ctx = EventContext {
        raw_hits: spread_hits_with_burst(),
        ..EventContext::default()
    };
    let record = orchestrator.end_event(ctx).unwrap();

    assert_eq!(record.windows.len(), 1);
    assert_eq!(record.windows[0].trigger, TriggerKind::NoTrigger);
    assert_eq!(record.windows[0].len(), 50);
}

#[test]
fn test_orchestrator_per_worker_runs_independently() {
    // Two workers with their own orchestrators process the same run
    // concurrently; each constructs its own strategy instances.
    let hits = spread_hits_with_burst();
    let handles: Vec<_> = (0..2_u32)
        .map(|worker| {
            let hits = hits.clone();
            std::thread::spawn(move || {
                let mut orchestrator = EventOrchestrator::new(ndigits_daq(10));
                let ctx = EventContext {
                    event_index: worker,
                    raw_hits: hits,
                    ..EventContext::default()
                };
                orchestrator.end_event(ctx).unwrap()
            })
        })
        .collect();

    for handle in handles {
        let record = handle.join().unwrap();
        assert_eq!(record.windows.len(), 1);
    }
}
