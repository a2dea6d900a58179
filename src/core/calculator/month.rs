//! Builds the per-day ledger of one calendar month.

use crate::core::calculator::day::{DayAggregator, DayTotals};
use crate::core::digest::month_digest;
use crate::core::schedule::{ScheduleConfig, weekday_index};
use crate::errors::AppResult;
use crate::models::event::Event;
use crate::models::ledger::{DayLedgerRow, MonthLedger, round2};
use crate::models::pause::PauseEntry;
use crate::utils::date::{days_inclusive, month_bounds};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::collections::{BTreeMap, BTreeSet, HashMap};

const MINUTES_PER_DAY: f64 = 24.0 * 60.0;

pub struct MonthReportBuilder<'a, C: ScheduleConfig + ?Sized> {
    schedule: &'a C,
}

impl<'a, C: ScheduleConfig + ?Sized> MonthReportBuilder<'a, C> {
    pub fn new(schedule: &'a C) -> Self {
        Self { schedule }
    }

    /// Build the ledger of `year`-`month`.
    ///
    /// `events` and `pauses` may contain entries outside the month, they are
    /// ignored. A month without any event yields an empty ledger.
    pub fn build(
        &self,
        year: i32,
        month: u32,
        events: &[Event],
        pauses: &[PauseEntry],
        free_days: &BTreeSet<NaiveDate>,
        now: NaiveDateTime,
    ) -> AppResult<MonthLedger> {
        let (first, last) = month_bounds(year, month)?;
        let today = now.date();

        let month_events: Vec<Event> = events
            .iter()
            .filter(|e| (first..=last).contains(&e.date()))
            .cloned()
            .collect();
        let month_pauses: Vec<PauseEntry> = pauses
            .iter()
            .filter(|p| (first..=last).contains(&p.date))
            .copied()
            .collect();

        let content_hash = month_digest(
            first,
            last,
            &month_events,
            &month_pauses,
            free_days,
            self.schedule,
            today,
        );
        let schedule_version = self.schedule.version();

        if month_events.is_empty() {
            return Ok(MonthLedger::empty(
                year,
                month,
                content_hash,
                schedule_version,
            ));
        }

        let mut by_day: BTreeMap<NaiveDate, Vec<Event>> = BTreeMap::new();
        for ev in month_events {
            by_day.entry(ev.date()).or_default().push(ev);
        }

        let pause_by_day: HashMap<NaiveDate, i64> =
            month_pauses.iter().map(|p| (p.date, p.minutes)).collect();

        let workdays = self.schedule.workdays();

        let rows = days_inclusive(first, last)
            .map(|day| {
                let day_events = by_day.get(&day).map(Vec::as_slice).unwrap_or(&[]);
                let totals = DayAggregator::aggregate(day, day_events, now);
                let is_free = free_days.contains(&day) && workdays.contains(&weekday_index(day));
                let pause = pause_by_day.get(&day).copied().unwrap_or(0);
                self.build_row(day, totals, is_free, pause, today)
            })
            .collect();

        Ok(MonthLedger {
            year,
            month,
            rows,
            content_hash,
            schedule_version,
        })
    }

    fn build_row(
        &self,
        day: NaiveDate,
        totals: DayTotals,
        free_day: bool,
        pause: i64,
        today: NaiveDate,
    ) -> DayLedgerRow {
        let scheduled = self.schedule.target_minutes(weekday_index(day));

        // free days are credited their target on top of logged work
        let worked = if free_day {
            totals.worked_minutes + scheduled
        } else {
            totals.worked_minutes
        };

        // negative totals are corrections and add back to the net
        let pause_minutes = pause as f64;
        let break_minutes = break_minutes(totals.start_time, totals.end_time, totals.worked_minutes);
        let target_minutes = if day <= today { scheduled } else { 0.0 };
        let net_minutes = round2((worked - pause_minutes).max(0.0));
        // overtime counts only for days before today
        let overtime_minutes = if day < today {
            round2(net_minutes - target_minutes)
        } else {
            0.0
        };

        DayLedgerRow {
            date: day,
            worked_minutes: round2(worked),
            start_time: totals.start_time,
            end_time: totals.end_time,
            pause_minutes,
            break_minutes,
            net_minutes,
            target_minutes,
            overtime_minutes,
            free_day,
        }
    }
}

/// Time between first start and last end not covered by sessions.
/// An end earlier than the start belongs to the next day.
fn break_minutes(start: Option<NaiveTime>, end: Option<NaiveTime>, session_minutes: f64) -> f64 {
    let (Some(start), Some(end)) = (start, end) else {
        return 0.0;
    };
    let mut span = (end - start).num_seconds() as f64 / 60.0;
    if end < start {
        span += MINUTES_PER_DAY;
    }
    round2((span - session_minutes).max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn break_is_span_minus_sessions() {
        assert_eq!(break_minutes(Some(t(6, 0)), Some(t(14, 30)), 450.0), 60.0);
        assert_eq!(break_minutes(Some(t(6, 0)), None, 450.0), 0.0);
    }

    #[test]
    fn break_wraps_past_midnight() {
        assert_eq!(break_minutes(Some(t(22, 0)), Some(t(0, 0)), 120.0), 0.0);
        assert_eq!(break_minutes(Some(t(20, 0)), Some(t(0, 0)), 180.0), 60.0);
    }

    #[test]
    fn break_is_never_negative() {
        assert_eq!(break_minutes(Some(t(8, 0)), Some(t(9, 0)), 120.0), 0.0);
    }
}
