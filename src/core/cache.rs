//! Month ledger cache keyed by `(year, month)`.
//!
//! Every request recomputes the content digest of the month's raw inputs
//! (events, pauses, free days of the year, schedule). A cached ledger is
//! served only when its digest matches and the month is not the current
//! one; the current month is always rebuilt because a running session keeps
//! growing with the clock.
//!
//! The cache is single-writer. Callers sharing it between threads must wrap
//! the whole cache in a lock so that check, rebuild and store happen as one
//! step.

use crate::core::calculator::{DayAggregator, DayTotals, MonthReportBuilder, OvertimeAggregator};
use crate::core::clock::{Clock, SystemClock};
use crate::core::digest::month_digest;
use crate::core::schedule::{ScheduleConfig, weekday_index};
use crate::db::store::EventStore;
use crate::errors::AppResult;
use crate::models::event::Event;
use crate::models::ledger::{MonthLedger, MonthSummary};
use crate::models::overtime::OvertimeTotals;
use crate::utils::date::month_bounds;
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

#[derive(Debug, Clone)]
enum CacheEntry {
    Cached(MonthLedger),
    Stale,
}

/// Observable state of one cache key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheState {
    Uncomputed,
    Cached,
    Stale,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

/// Raw entries and computed totals of a single day.
#[derive(Debug, Clone, PartialEq)]
pub struct DayDetail {
    pub date: NaiveDate,
    pub events: Vec<Event>,
    pub pause_minutes: i64,
    pub totals: DayTotals,
}

pub struct ReportCache<S, C, K = SystemClock>
where
    S: EventStore,
    C: ScheduleConfig,
    K: Clock,
{
    store: S,
    schedule: C,
    clock: K,
    first_year: i32,
    entries: BTreeMap<(i32, u32), CacheEntry>,
    stats: CacheStats,
}

impl<S: EventStore, C: ScheduleConfig> ReportCache<S, C, SystemClock> {
    pub fn new(store: S, schedule: C) -> Self {
        Self::with_clock(store, schedule, SystemClock)
    }
}

impl<S, C, K> ReportCache<S, C, K>
where
    S: EventStore,
    C: ScheduleConfig,
    K: Clock,
{
    pub fn with_clock(store: S, schedule: C, clock: K) -> Self {
        Self {
            store,
            schedule,
            clock,
            first_year: 2023,
            entries: BTreeMap::new(),
            stats: CacheStats::default(),
        }
    }

    /// First year rebuilt by [`ReportCache::overtime_totals`].
    pub fn with_first_year(mut self, year: i32) -> Self {
        self.first_year = year;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Writes through this handle are picked up by the digest on the next request.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn schedule(&self) -> &C {
        &self.schedule
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    pub fn state(&self, year: i32, month: u32) -> CacheState {
        match self.entries.get(&(year, month)) {
            None => CacheState::Uncomputed,
            Some(CacheEntry::Cached(_)) => CacheState::Cached,
            Some(CacheEntry::Stale) => CacheState::Stale,
        }
    }

    /// Force the next request for this month to rebuild.
    pub fn invalidate(&mut self, year: i32, month: u32) {
        if let Some(entry) = self.entries.get_mut(&(year, month)) {
            *entry = CacheEntry::Stale;
        }
    }

    pub fn invalidate_all(&mut self) {
        for entry in self.entries.values_mut() {
            *entry = CacheEntry::Stale;
        }
    }

    pub fn cached_ledgers(&self) -> impl Iterator<Item = &MonthLedger> {
        self.entries.values().filter_map(|e| match e {
            CacheEntry::Cached(ledger) => Some(ledger),
            CacheEntry::Stale => None,
        })
    }

    /// Time-off dates and holidays of `year` that fall on a workday.
    pub fn free_days(&self, year: i32) -> AppResult<BTreeSet<NaiveDate>> {
        let workdays = self.schedule.workdays();
        let time_off = self.store.get_time_off(year)?;

        Ok(time_off
            .into_iter()
            .map(|t| t.date)
            .chain(self.schedule.holidays(year))
            .filter(|d| workdays.contains(&weekday_index(*d)))
            .collect())
    }

    pub fn get_month(&mut self, year: i32, month: u32) -> AppResult<MonthLedger> {
        let now = self.clock.now();
        self.month_at(year, month, now)
    }

    fn month_at(&mut self, year: i32, month: u32, now: NaiveDateTime) -> AppResult<MonthLedger> {
        let (first, last) = month_bounds(year, month)?;
        let today = now.date();

        let events = self.store.get_events(first, last)?;
        let pauses = self.store.get_pauses(first, last)?;
        let free_days = self.free_days(year)?;
        let digest = month_digest(
            first,
            last,
            &events,
            &pauses,
            &free_days,
            &self.schedule,
            today,
        );

        let is_current = (year, month) == (today.year(), today.month());
        if !is_current
            && let Some(CacheEntry::Cached(ledger)) = self.entries.get(&(year, month))
            && ledger.content_hash == digest
        {
            self.stats.hits += 1;
            debug!(year, month, "ledger cache hit");
            return Ok(ledger.clone());
        }

        self.stats.misses += 1;
        debug!(
            year,
            month,
            state = ?self.state(year, month),
            is_current,
            "rebuilding ledger"
        );

        let ledger = MonthReportBuilder::new(&self.schedule).build(
            year, month, &events, &pauses, &free_days, now,
        )?;
        self.entries
            .insert((year, month), CacheEntry::Cached(ledger.clone()));
        Ok(ledger)
    }

    /// Month totals for every month of `year` that has data.
    pub fn year_summary(&mut self, year: i32) -> AppResult<Vec<MonthSummary>> {
        let now = self.clock.now();
        let mut out = Vec::new();
        for month in 1..=12 {
            let ledger = self.month_at(year, month, now)?;
            if !ledger.is_empty() {
                out.push(ledger.summary());
            }
        }
        Ok(out)
    }

    pub fn day_detail(&self, date: NaiveDate) -> AppResult<DayDetail> {
        let now = self.clock.now();
        let events = self.store.get_events(date, date)?;
        let pause_minutes = self
            .store
            .get_pauses(date, date)?
            .first()
            .map(|p| p.minutes)
            .unwrap_or(0);
        let totals = DayAggregator::aggregate(date, &events, now);

        Ok(DayDetail {
            date,
            events,
            pause_minutes,
            totals,
        })
    }

    /// Rebuild every month from `first_year` up to the current month that
    /// has data or is already cached, then fold the ledgers.
    pub fn overtime_totals(&mut self) -> AppResult<OvertimeTotals> {
        let now = self.clock.now();
        let first_year = self.first_year;
        let current = (now.year(), now.month());
        let in_range = |key: &(i32, u32)| key.0 >= first_year && *key <= current;

        let mut keys: BTreeSet<(i32, u32)> = self
            .store
            .months_with_data(None)?
            .into_iter()
            .filter(in_range)
            .collect();
        keys.extend(self.entries.keys().copied().filter(in_range));

        for (year, month) in &keys {
            self.month_at(*year, *month, now)?;
        }

        let ledgers = self
            .entries
            .iter()
            .filter(|(key, _)| keys.contains(key))
            .filter_map(|(_, entry)| match entry {
                CacheEntry::Cached(ledger) => Some(ledger),
                CacheEntry::Stale => None,
            });

        Ok(OvertimeAggregator::recompute(ledgers))
    }
}
