use chrono::NaiveDateTime;
use std::cell::Cell;
use std::rc::Rc;
use timeledger::core::{CacheState, CacheStats, Clock, ReportCache};
use timeledger::db::DbPool;
use timeledger::db::store::EventStore;
use timeledger::errors::AppError;
use timeledger::models::action::EventAction;
use timeledger::models::overtime::OvertimeTotals;

mod common;
use common::{cache_at, d, office_schedule, session, ts};

/// Clock the test can move forward while the cache holds it.
#[derive(Clone)]
struct SharedClock(Rc<Cell<NaiveDateTime>>);

impl Clock for SharedClock {
    fn now(&self) -> NaiveDateTime {
        self.0.get()
    }
}

#[test]
fn second_request_is_a_hit_with_identical_ledger() {
    let mut cache = cache_at("2025-03-15T12:00");
    session(cache.store_mut(), "2025-01-02T06:00", "2025-01-02T14:30");

    let first = cache.get_month(2025, 1).unwrap();
    let second = cache.get_month(2025, 1).unwrap();

    assert_eq!(first, second);
    assert_eq!(cache.stats(), CacheStats { hits: 1, misses: 1 });
    assert_eq!(cache.state(2025, 1), CacheState::Cached);
}

#[test]
fn new_event_is_reflected_after_cache_hit() {
    let mut cache = cache_at("2025-03-15T12:00");
    session(cache.store_mut(), "2025-01-02T06:00", "2025-01-02T14:30");

    let before = cache.get_month(2025, 1).unwrap();
    session(cache.store_mut(), "2025-01-03T08:00", "2025-01-03T09:00");
    let after = cache.get_month(2025, 1).unwrap();

    assert_ne!(before.content_hash, after.content_hash);
    assert_eq!(after.row(d(2025, 1, 3)).unwrap().worked_minutes, 60.0);
    assert_eq!(cache.stats().misses, 2);
}

#[test]
fn pause_change_invalidates_month() {
    let mut cache = cache_at("2025-03-15T12:00");
    session(cache.store_mut(), "2025-01-02T06:00", "2025-01-02T14:30");
    cache.get_month(2025, 1).unwrap();

    cache.store_mut().add_pause(30, d(2025, 1, 2)).unwrap();
    let ledger = cache.get_month(2025, 1).unwrap();

    assert_eq!(ledger.row(d(2025, 1, 2)).unwrap().overtime_minutes, 0.0);
}

#[test]
fn current_month_is_always_rebuilt() {
    let mut cache = cache_at("2025-01-02T10:00");
    cache
        .store_mut()
        .add_event(EventAction::Start, ts("2025-01-02T06:00"), None)
        .unwrap();

    let ledger = cache.get_month(2025, 1).unwrap();
    cache.get_month(2025, 1).unwrap();

    assert_eq!(ledger.row(d(2025, 1, 2)).unwrap().worked_minutes, 240.0);
    assert_eq!(cache.stats(), CacheStats { hits: 0, misses: 2 });
}

#[test]
fn invalid_month_is_a_typed_error() {
    let mut cache = cache_at("2025-03-15T12:00");
    let err = cache.get_month(2025, 13).unwrap_err();
    assert!(matches!(err, AppError::InvalidPeriod { year: 2025, month: 13 }));
    assert_eq!(cache.state(2025, 13), CacheState::Uncomputed);
}

#[test]
fn time_off_credit_is_idempotent() {
    let mut cache = cache_at("2025-08-10T12:00");
    session(cache.store_mut(), "2025-07-01T08:00", "2025-07-01T16:00");
    cache.store_mut().add_time_off(d(2025, 7, 4), "Vacation").unwrap();

    let once = cache.get_month(2025, 7).unwrap();
    cache.store_mut().add_time_off(d(2025, 7, 4), "Vacation").unwrap();
    let twice = cache.get_month(2025, 7).unwrap();

    assert_eq!(once, twice);
    let row = twice.row(d(2025, 7, 4)).unwrap();
    assert_eq!(row.worked_minutes, 480.0);
    assert_eq!(row.overtime_minutes, 0.0);
}

#[test]
fn invalidate_marks_entries_stale() {
    let mut cache = cache_at("2025-03-15T12:00");
    session(cache.store_mut(), "2025-01-02T06:00", "2025-01-02T14:30");
    session(cache.store_mut(), "2025-02-03T08:00", "2025-02-03T16:00");
    cache.get_month(2025, 1).unwrap();
    cache.get_month(2025, 2).unwrap();

    cache.invalidate(2025, 1);
    assert_eq!(cache.state(2025, 1), CacheState::Stale);
    assert_eq!(cache.state(2025, 2), CacheState::Cached);
    assert_eq!(cache.cached_ledgers().count(), 1);

    cache.get_month(2025, 1).unwrap();
    assert_eq!(cache.state(2025, 1), CacheState::Cached);

    cache.invalidate_all();
    assert_eq!(cache.cached_ledgers().count(), 0);
}

#[test]
fn empty_history_has_zero_overtime() {
    let mut cache = cache_at("2025-03-15T12:00");
    assert_eq!(cache.overtime_totals().unwrap(), OvertimeTotals::default());
    let totals = cache.overtime_totals().unwrap();
    assert_eq!(totals.all_time, 0.0);
    assert!(totals.by_year.is_empty());
}

#[test]
fn overtime_totals_are_grouped_by_year() {
    let mut cache = cache_at("2025-01-20T12:00");
    session(cache.store_mut(), "2024-12-02T08:00", "2024-12-02T16:30");
    session(cache.store_mut(), "2025-01-02T08:00", "2025-01-02T17:00");

    let totals = cache.overtime_totals().unwrap();

    let december = cache.get_month(2024, 12).unwrap().total_overtime();
    let january = cache.get_month(2025, 1).unwrap().total_overtime();
    assert_eq!(totals.for_year(2024), december);
    assert_eq!(totals.for_year(2025), january);
    assert_eq!(totals.all_time, december + january);
    assert_eq!(totals.by_year.len(), 2);
}

#[test]
fn deleted_month_drops_out_of_overtime() {
    let mut cache = cache_at("2025-03-15T12:00");
    session(cache.store_mut(), "2025-01-02T08:00", "2025-01-02T17:00");
    assert!(cache.overtime_totals().unwrap().by_year.contains_key(&2025));

    cache.store_mut().delete_event(ts("2025-01-02T08:00")).unwrap();
    cache.store_mut().delete_event(ts("2025-01-02T17:00")).unwrap();

    assert_eq!(cache.overtime_totals().unwrap(), OvertimeTotals::default());
}

#[test]
fn year_summary_lists_months_with_data() {
    let mut cache = cache_at("2025-12-31T12:00");
    session(cache.store_mut(), "2025-01-02T06:00", "2025-01-02T14:30");
    session(cache.store_mut(), "2025-03-03T08:00", "2025-03-03T16:00");

    let months = cache.year_summary(2025).unwrap();
    let keys: Vec<u32> = months.iter().map(|m| m.month).collect();
    assert_eq!(keys, vec![1, 3]);
    assert_eq!(months[0].worked_minutes, cache.get_month(2025, 1).unwrap().total_worked());
}

#[test]
fn day_detail_reports_events_and_pause() {
    let mut cache = cache_at("2025-03-15T12:00");
    session(cache.store_mut(), "2025-01-02T06:00", "2025-01-02T14:30");
    cache.store_mut().add_pause(20, d(2025, 1, 2)).unwrap();

    let detail = cache.day_detail(d(2025, 1, 2)).unwrap();
    assert_eq!(detail.events.len(), 2);
    assert_eq!(detail.pause_minutes, 20);
    assert_eq!(detail.totals.worked_minutes, 510.0);
}

#[test]
fn free_days_merge_holidays_and_time_off_on_workdays() {
    let mut cache = cache_at("2025-03-15T12:00");
    cache.store_mut().add_time_off(d(2025, 7, 4), "Vacation").unwrap();
    cache.store_mut().add_time_off(d(2025, 7, 5), "Vacation").unwrap();

    let free = cache.free_days(2025).unwrap();
    assert!(free.contains(&d(2025, 7, 4)));
    // Saturday is not a workday
    assert!(!free.contains(&d(2025, 7, 5)));
}

#[test]
fn month_cached_while_current_is_rebuilt_once_past() {
    let instant = Rc::new(Cell::new(ts("2025-01-20T12:00")));
    let pool = DbPool::in_memory().unwrap();
    let mut cache = ReportCache::with_clock(pool, office_schedule(), SharedClock(instant.clone()));
    session(cache.store_mut(), "2025-01-02T08:00", "2025-01-02T16:00");

    let while_current = cache.get_month(2025, 1).unwrap();
    assert_eq!(while_current.row(d(2025, 1, 21)).unwrap().target_minutes, 0.0);
    assert_eq!(cache.state(2025, 1), CacheState::Cached);

    instant.set(ts("2025-02-03T09:00"));
    let once_past = cache.get_month(2025, 1).unwrap();

    assert_ne!(while_current.content_hash, once_past.content_hash);
    assert_eq!(once_past.row(d(2025, 1, 21)).unwrap().target_minutes, 480.0);
    assert_eq!(once_past.row(d(2025, 1, 21)).unwrap().overtime_minutes, -480.0);
    assert_eq!(cache.stats(), CacheStats { hits: 0, misses: 2 });

    // settled: later requests are served from the cache
    instant.set(ts("2025-03-10T09:00"));
    assert_eq!(cache.get_month(2025, 1).unwrap(), once_past);
    assert_eq!(cache.stats(), CacheStats { hits: 1, misses: 2 });
}
