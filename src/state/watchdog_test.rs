use super::*;

const T0: f64 = 1_000_000.0;

#[test]
fn fires_exactly_at_the_deadline_without_activity() {
    let idle = IdleDeadline::new(DEFAULT_IDLE_MS, T0);
    assert!(!idle.expired(T0));
    assert!(!idle.expired(T0 + DEFAULT_IDLE_MS - 1.0));
    assert!(idle.expired(T0 + DEFAULT_IDLE_MS));
}

#[test]
fn activity_moves_the_deadline_to_event_time_plus_window() {
    let mut idle = IdleDeadline::new(DEFAULT_IDLE_MS, T0);
    let event_time = T0 + 10.0 * 60.0 * 1000.0;
    idle.record_activity(event_time);

    assert!(!idle.expired(T0 + DEFAULT_IDLE_MS));
    assert!(!idle.expired(event_time + DEFAULT_IDLE_MS - 1.0));
    assert!(idle.expired(event_time + DEFAULT_IDLE_MS));
}

#[test]
fn remaining_counts_down_and_clamps_at_zero() {
    let idle = IdleDeadline::new(1_000.0, T0);
    assert_eq!(idle.remaining_ms(T0), 1_000.0);
    assert_eq!(idle.remaining_ms(T0 + 400.0), 600.0);
    assert_eq!(idle.remaining_ms(T0 + 5_000.0), 0.0);
}

#[test]
fn only_evidence_removal_signals_logout() {
    assert!(storage_signals_logout(Some(storage::EVIDENCE_KEY), None));
    assert!(!storage_signals_logout(Some(storage::EVIDENCE_KEY), Some("1")));
    assert!(!storage_signals_logout(Some("resumeData"), None));
    assert!(!storage_signals_logout(None, None));
}
