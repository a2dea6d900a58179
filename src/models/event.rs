use super::action::EventAction;
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// Storage format of `events.timestamp` (naive local time, second precision).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Event {
    pub timestamp: NaiveDateTime, // ⇔ events.timestamp (TEXT "YYYY-MM-DDTHH:MM:SS")
    pub action: EventAction,      // ⇔ events.action ('start' | 'stop')
    pub project: Option<String>,  // ⇔ events.project (TEXT NULL)
}

impl Event {
    pub fn new(timestamp: NaiveDateTime, action: EventAction) -> Self {
        Self {
            timestamp,
            action,
            project: None,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    pub fn timestamp_str(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }

    pub fn time_str(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }
}
