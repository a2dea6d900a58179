//! Reduces one day's start/stop events to worked minutes.

use crate::models::event::Event;
use crate::models::ledger::round2;
use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use tracing::{debug, warn};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DayTotals {
    pub worked_minutes: f64,
    /// Earliest session start of the day.
    pub start_time: Option<NaiveTime>,
    /// Latest session end (`now` for a running session, 00:00 for the midnight fallback).
    pub end_time: Option<NaiveTime>,
}

pub struct DayAggregator;

impl DayAggregator {
    /// Pair `start`/`stop` events of `date` in timestamp order.
    ///
    /// A `start` while a session is open and a `stop` with no open session
    /// are skipped. A session still open after the last event runs until
    /// `now` when `date` is today, otherwise until midnight at the end of
    /// `date` (the worker is assumed to have forgotten to stop the clock).
    pub fn aggregate(date: NaiveDate, events: &[Event], now: NaiveDateTime) -> DayTotals {
        let mut day_events: Vec<&Event> = events.iter().filter(|e| e.date() == date).collect();
        day_events.sort_by_key(|e| e.timestamp);

        let mut total = TimeDelta::zero();
        let mut open: Option<NaiveDateTime> = None;
        let mut start_time: Option<NaiveTime> = None;
        let mut end_time: Option<NaiveTime> = None;

        for ev in day_events {
            match open {
                None if ev.action.is_start() => {
                    open = Some(ev.timestamp);
                    start_time.get_or_insert(ev.timestamp.time());
                }
                Some(session_start) if ev.action.is_stop() => {
                    total += ev.timestamp - session_start;
                    end_time = Some(ev.timestamp.time());
                    open = None;
                }
                _ => debug!(
                    timestamp = %ev.timestamp_str(),
                    action = %ev.action,
                    "skipping unmatched event"
                ),
            }
        }

        if let Some(session_start) = open {
            if date == now.date() {
                if now < session_start {
                    warn!(%now, %session_start, "clock is earlier than the open session start");
                }
                let end = now.max(session_start);
                total += end - session_start;
                end_time = Some(end.time());
            } else {
                let midnight = date
                    .checked_add_days(Days::new(1))
                    .map(|next| next.and_time(NaiveTime::MIN))
                    .unwrap_or(session_start);
                total += midnight - session_start;
                end_time = Some(NaiveTime::MIN);
            }
        }

        DayTotals {
            worked_minutes: round2(total.num_seconds() as f64 / 60.0),
            start_time,
            end_time,
        }
    }
}
