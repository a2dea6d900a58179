use chrono::NaiveTime;
use timeledger::core::calculator::DayAggregator;
use timeledger::models::action::EventAction;
use timeledger::models::event::Event;

mod common;
use common::{d, ts};

fn ev(at: &str, action: EventAction) -> Event {
    Event::new(ts(at), action)
}

#[test]
fn matched_pair_is_wall_clock_difference() {
    let events = vec![
        ev("2025-01-02T06:00", EventAction::Start),
        ev("2025-01-02T14:30", EventAction::Stop),
    ];

    // independent of when it is computed
    for now in ["2025-01-02T20:00", "2025-03-01T09:00"] {
        let totals = DayAggregator::aggregate(d(2025, 1, 2), &events, ts(now));
        assert_eq!(totals.worked_minutes, 510.0);
        assert_eq!(totals.start_time, NaiveTime::from_hms_opt(6, 0, 0));
        assert_eq!(totals.end_time, NaiveTime::from_hms_opt(14, 30, 0));
    }
}

#[test]
fn open_session_today_runs_until_now() {
    let events = vec![ev("2025-01-02T06:00", EventAction::Start)];
    let totals = DayAggregator::aggregate(d(2025, 1, 2), &events, ts("2025-01-02T10:00"));
    assert_eq!(totals.worked_minutes, 240.0);
    assert_eq!(totals.end_time, NaiveTime::from_hms_opt(10, 0, 0));
}

#[test]
fn open_session_today_grows_with_now() {
    let events = vec![ev("2025-01-02T06:00", EventAction::Start)];
    let mut last = -1.0;
    for now in ["2025-01-02T06:00", "2025-01-02T07:15", "2025-01-02T12:00", "2025-01-02T23:59"] {
        let worked = DayAggregator::aggregate(d(2025, 1, 2), &events, ts(now)).worked_minutes;
        assert!(worked >= last, "{} < {}", worked, last);
        last = worked;
    }
}

#[test]
fn open_session_in_the_past_runs_until_midnight() {
    let events = vec![ev("2025-01-02T22:00", EventAction::Start)];
    let totals = DayAggregator::aggregate(d(2025, 1, 2), &events, ts("2025-01-05T09:00"));
    assert_eq!(totals.worked_minutes, 120.0);
    assert_eq!(totals.end_time, Some(NaiveTime::MIN));
}

#[test]
fn unmatched_events_are_skipped() {
    let events = vec![
        ev("2025-01-02T07:00", EventAction::Stop),
        ev("2025-01-02T08:00", EventAction::Start),
        ev("2025-01-02T09:00", EventAction::Start),
        ev("2025-01-02T12:00", EventAction::Stop),
        ev("2025-01-02T13:00", EventAction::Stop),
    ];
    let totals = DayAggregator::aggregate(d(2025, 1, 2), &events, ts("2025-02-01T00:00"));
    assert_eq!(totals.worked_minutes, 240.0);
    assert_eq!(totals.start_time, NaiveTime::from_hms_opt(8, 0, 0));
    assert_eq!(totals.end_time, NaiveTime::from_hms_opt(12, 0, 0));
}

#[test]
fn events_of_other_days_and_order_are_ignored() {
    let events = vec![
        ev("2025-01-02T12:30", EventAction::Stop),
        ev("2025-01-03T08:00", EventAction::Start),
        ev("2025-01-02T08:00", EventAction::Start),
    ];
    let totals = DayAggregator::aggregate(d(2025, 1, 2), &events, ts("2025-02-01T00:00"));
    assert_eq!(totals.worked_minutes, 270.0);
}

#[test]
fn day_without_events_is_zero() {
    let totals = DayAggregator::aggregate(d(2025, 1, 2), &[], ts("2025-02-01T00:00"));
    assert_eq!(totals.worked_minutes, 0.0);
    assert_eq!(totals.start_time, None);
    assert_eq!(totals.end_time, None);
}
