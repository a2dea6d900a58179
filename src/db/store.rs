//! Persistence seam of the report engine.
//!
//! The engine only talks to this trait; [`crate::db::DbPool`] is the SQLite
//! implementation. Every write commits atomically, so a reader never sees a
//! half-applied call. Errors are returned as-is, the engine never retries.

use crate::errors::AppResult;
use crate::models::action::EventAction;
use crate::models::event::Event;
use crate::models::pause::PauseEntry;
use crate::models::time_off::TimeOffEntry;
use chrono::{NaiveDate, NaiveDateTime};

pub trait EventStore {
    fn add_event(
        &mut self,
        action: EventAction,
        at: NaiveDateTime,
        project: Option<&str>,
    ) -> AppResult<()>;

    /// Accumulate `minutes` onto the pause entry of `on` (negative values correct it).
    fn add_pause(&mut self, minutes: i64, on: NaiveDate) -> AppResult<()>;

    /// Events whose timestamp falls on a date in `[from, to]`, ascending.
    fn get_events(&self, from: NaiveDate, to: NaiveDate) -> AppResult<Vec<Event>>;

    /// Pause entries dated in `[from, to]`, ascending.
    fn get_pauses(&self, from: NaiveDate, to: NaiveDate) -> AppResult<Vec<PauseEntry>>;

    /// Remove the event(s) logged at exactly `timestamp`; returns how many were removed.
    fn delete_event(&mut self, timestamp: NaiveDateTime) -> AppResult<usize>;

    fn add_time_off(&mut self, on: NaiveDate, reason: &str) -> AppResult<()>;

    fn remove_time_off(&mut self, on: NaiveDate) -> AppResult<()>;

    fn get_time_off(&self, year: i32) -> AppResult<Vec<TimeOffEntry>>;

    /// Distinct `(year, month)` keys that have at least one event, ascending.
    fn months_with_data(&self, year: Option<i32>) -> AppResult<Vec<(i32, u32)>>;
}
