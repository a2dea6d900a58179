//! Structural content digest of everything a month ledger is built from.
//!
//! Inputs are written out in a fixed textual layout and hashed with SHA-256,
//! so equal inputs always give the same digest regardless of platform or
//! process. Collisions between distinct inputs are not guarded against.

use crate::core::schedule::ScheduleConfig;
use crate::models::event::Event;
use crate::models::pause::PauseEntry;
use chrono::NaiveDate;
use sha2::{Digest, Sha256};
use std::collections::BTreeSet;

/// Where "today" lies relative to the month being hashed.
fn as_of(today: NaiveDate, first: NaiveDate, last: NaiveDate) -> String {
    if today < first {
        "before".to_string()
    } else if today > last {
        "after".to_string()
    } else {
        today.format("%Y-%m-%d").to_string()
    }
}

pub fn month_digest<C: ScheduleConfig + ?Sized>(
    first: NaiveDate,
    last: NaiveDate,
    events: &[Event],
    pauses: &[PauseEntry],
    free_days: &BTreeSet<NaiveDate>,
    schedule: &C,
    today: NaiveDate,
) -> String {
    let mut lines: Vec<String> = vec![
        format!("month:{}", first.format("%Y-%m")),
        format!("as_of:{}", as_of(today, first, last)),
        format!("events:{}", events.len()),
    ];
    lines.extend(events.iter().map(|ev| {
        format!(
            "{}|{}|{}",
            ev.timestamp_str(),
            ev.action.to_db_str(),
            ev.project.as_deref().unwrap_or("")
        )
    }));

    lines.push(format!("pauses:{}", pauses.len()));
    lines.extend(
        pauses
            .iter()
            .map(|p| format!("{}|{}", p.date.format("%Y-%m-%d"), p.minutes)),
    );

    lines.push(format!("free:{}", free_days.len()));
    lines.extend(free_days.iter().map(|d| d.format("%Y-%m-%d").to_string()));

    lines.push(format!("schedule:v{}", schedule.version()));
    let targets: Vec<String> = (0..7)
        .map(|weekday| format!("{}={}", weekday, schedule.target_minutes(weekday)))
        .collect();
    lines.push(targets.join(";"));
    let workdays: Vec<String> = schedule.workdays().iter().map(u32::to_string).collect();
    lines.push(format!("workdays:{}", workdays.join(",")));

    let mut buf = lines.join("\n");
    buf.push('\n');

    let mut hasher = Sha256::new();
    hasher.update(buf.as_bytes());
    format!("{:x}", hasher.finalize())
}
