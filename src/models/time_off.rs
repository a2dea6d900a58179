use chrono::NaiveDate;
use serde::Serialize;

pub const DEFAULT_REASON: &str = "Vacation";

/// A free day (vacation, sick leave, ...). At most one per date.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TimeOffEntry {
    pub date: NaiveDate,
    pub reason: String,
}
