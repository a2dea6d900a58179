use chrono::NaiveDate;
use serde::Serialize;

/// Manually logged break time for one date (unique per date).
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct PauseEntry {
    pub date: NaiveDate,
    pub minutes: i64,
}
