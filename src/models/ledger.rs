//! Derived per-day and per-month report rows.
//! Nothing in here is persisted: ledgers are rebuilt from raw events.

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// One computed row of a month ledger.
///
/// `overtime_minutes = net_minutes - target_minutes` for past days, where
/// `net_minutes = max(worked_minutes - pause_minutes, 0)`. Days after today
/// carry `target_minutes = 0` and `overtime_minutes = 0`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DayLedgerRow {
    pub date: NaiveDate,
    pub worked_minutes: f64,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub pause_minutes: f64,
    pub break_minutes: f64,
    pub net_minutes: f64,
    pub target_minutes: f64,
    pub overtime_minutes: f64,
    pub free_day: bool,
}

/// Full calendar-month ledger.
///
/// An empty `rows` vector means "no events logged this month"; it is not the
/// same thing as a month of zero-valued rows.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MonthLedger {
    pub year: i32,
    pub month: u32,
    pub rows: Vec<DayLedgerRow>,
    pub content_hash: String,
    pub schedule_version: u32,
}

impl MonthLedger {
    pub fn empty(year: i32, month: u32, content_hash: String, schedule_version: u32) -> Self {
        Self {
            year,
            month,
            rows: Vec::new(),
            content_hash,
            schedule_version,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, date: NaiveDate) -> Option<&DayLedgerRow> {
        self.rows.iter().find(|r| r.date == date)
    }

    pub fn total_worked(&self) -> f64 {
        round2(self.rows.iter().map(|r| r.worked_minutes).sum())
    }

    pub fn total_pause(&self) -> f64 {
        round2(self.rows.iter().map(|r| r.pause_minutes).sum())
    }

    pub fn total_net(&self) -> f64 {
        round2(self.rows.iter().map(|r| r.net_minutes).sum())
    }

    pub fn total_target(&self) -> f64 {
        round2(self.rows.iter().map(|r| r.target_minutes).sum())
    }

    pub fn total_overtime(&self) -> f64 {
        round2(self.rows.iter().map(|r| r.overtime_minutes).sum())
    }

    pub fn summary(&self) -> MonthSummary {
        MonthSummary {
            year: self.year,
            month: self.month,
            worked_minutes: self.total_worked(),
            pause_minutes: self.total_pause(),
            net_minutes: self.total_net(),
            target_minutes: self.total_target(),
            overtime_minutes: self.total_overtime(),
        }
    }
}

/// Month totals, one row per month in a year report.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MonthSummary {
    pub year: i32,
    pub month: u32,
    pub worked_minutes: f64,
    pub pause_minutes: f64,
    pub net_minutes: f64,
    pub target_minutes: f64,
    pub overtime_minutes: f64,
}

/// Round to two decimals of a minute.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
