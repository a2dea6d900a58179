use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::store::EventStore;
use crate::errors::{AppError, AppResult};
use crate::models::action::EventAction;
use crate::models::event::{Event, TIMESTAMP_FORMAT};
use crate::models::pause::PauseEntry;
use crate::models::time_off::TimeOffEntry;
use chrono::{Days, NaiveDate, NaiveDateTime};
use rusqlite::{Result, Row, params};
use tracing::info;

const DATE_FORMAT: &str = "%Y-%m-%d";

fn conversion_error(col: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(col, rusqlite::types::Type::Text, Box::new(err))
}

fn date_str(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Lower bound (inclusive) and upper bound (exclusive) timestamps of a date range.
fn timestamp_bounds(from: NaiveDate, to: NaiveDate) -> (String, String) {
    let start = from.and_time(chrono::NaiveTime::MIN);
    let end = to
        .checked_add_days(Days::new(1))
        .map(|d| d.and_time(chrono::NaiveTime::MIN).format(TIMESTAMP_FORMAT).to_string())
        // past the last representable day every timestamp sorts below "~"
        .unwrap_or_else(|| "~".to_string());
    (start.format(TIMESTAMP_FORMAT).to_string(), end)
}

fn parse_date_col(row: &Row, col: usize) -> Result<NaiveDate> {
    let raw: String = row.get(col)?;
    NaiveDate::parse_from_str(&raw, DATE_FORMAT)
        .map_err(|_| conversion_error(col, AppError::InvalidDate(raw.clone())))
}

pub fn map_event(row: &Row) -> Result<Event> {
    let ts_str: String = row.get("timestamp")?;
    let timestamp = NaiveDateTime::parse_from_str(&ts_str, TIMESTAMP_FORMAT)
        .map_err(|_| conversion_error(0, AppError::InvalidTime(ts_str.clone())))?;

    let action_str: String = row.get("action")?;
    let action = EventAction::from_db_str(&action_str)
        .ok_or_else(|| conversion_error(1, AppError::InvalidAction(action_str.clone())))?;

    Ok(Event {
        timestamp,
        action,
        project: row.get("project")?,
    })
}

pub fn map_pause(row: &Row) -> Result<PauseEntry> {
    Ok(PauseEntry {
        date: parse_date_col(row, 0)?,
        minutes: row.get(1)?,
    })
}

pub fn map_time_off(row: &Row) -> Result<TimeOffEntry> {
    Ok(TimeOffEntry {
        date: parse_date_col(row, 0)?,
        reason: row.get(1)?,
    })
}

fn parse_year_month(raw: &str) -> Option<(i32, u32)> {
    let (y, m) = raw.split_once('-')?;
    let year = y.parse::<i32>().ok()?;
    let month = m.parse::<u32>().ok()?;
    (1..=12).contains(&month).then_some((year, month))
}

impl EventStore for DbPool {
    fn add_event(
        &mut self,
        action: EventAction,
        at: NaiveDateTime,
        project: Option<&str>,
    ) -> AppResult<()> {
        let ts = at.format(TIMESTAMP_FORMAT).to_string();
        info!(%action, timestamp = %ts, "add event");

        let tx = self.conn.transaction()?;
        tx.execute(
            "INSERT INTO events (timestamp, action, project) VALUES (?1, ?2, ?3)",
            params![ts, action.to_db_str(), project],
        )?;
        ttlog(&tx, "add", &ts, &format!("Added {} event", action))?;
        tx.commit()?;
        Ok(())
    }

    fn add_pause(&mut self, minutes: i64, on: NaiveDate) -> AppResult<()> {
        let d = date_str(on);
        info!(minutes, date = %d, "add pause");

        let tx = self.conn.transaction()?;
        tx.execute(
            "INSERT INTO pauses (date, minutes) VALUES (?1, ?2)
             ON CONFLICT(date) DO UPDATE SET minutes = minutes + excluded.minutes",
            params![d, minutes],
        )?;
        ttlog(&tx, "pause", &d, &format!("Pause changed by {} min", minutes))?;
        tx.commit()?;
        Ok(())
    }

    fn get_events(&self, from: NaiveDate, to: NaiveDate) -> AppResult<Vec<Event>> {
        let (lower, upper) = timestamp_bounds(from, to);
        let mut stmt = self.conn.prepare_cached(
            "SELECT timestamp, action, project FROM events
             WHERE timestamp >= ?1 AND timestamp < ?2
             ORDER BY timestamp ASC, id ASC",
        )?;

        let rows = stmt.query_map(params![lower, upper], map_event)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    fn get_pauses(&self, from: NaiveDate, to: NaiveDate) -> AppResult<Vec<PauseEntry>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT date, minutes FROM pauses
             WHERE date >= ?1 AND date <= ?2
             ORDER BY date ASC",
        )?;

        let rows = stmt.query_map(params![date_str(from), date_str(to)], map_pause)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    fn delete_event(&mut self, timestamp: NaiveDateTime) -> AppResult<usize> {
        let ts = timestamp.format(TIMESTAMP_FORMAT).to_string();

        let tx = self.conn.transaction()?;
        let removed = tx.execute("DELETE FROM events WHERE timestamp = ?1", [&ts])?;
        if removed > 0 {
            info!(timestamp = %ts, removed, "delete event");
            ttlog(&tx, "del", &ts, &format!("Deleted {} event(s)", removed))?;
        }
        tx.commit()?;
        Ok(removed)
    }

    fn add_time_off(&mut self, on: NaiveDate, reason: &str) -> AppResult<()> {
        let d = date_str(on);
        info!(date = %d, reason, "add time off");

        let tx = self.conn.transaction()?;
        tx.execute(
            "INSERT INTO time_off (date, reason) VALUES (?1, ?2)
             ON CONFLICT(date) DO UPDATE SET reason = excluded.reason",
            params![d, reason],
        )?;
        ttlog(&tx, "timeoff_add", &d, reason)?;
        tx.commit()?;
        Ok(())
    }

    fn remove_time_off(&mut self, on: NaiveDate) -> AppResult<()> {
        let d = date_str(on);

        let tx = self.conn.transaction()?;
        let removed = tx.execute("DELETE FROM time_off WHERE date = ?1", [&d])?;
        if removed > 0 {
            info!(date = %d, "remove time off");
            ttlog(&tx, "timeoff_del", &d, "Removed time off")?;
        }
        tx.commit()?;
        Ok(())
    }

    fn get_time_off(&self, year: i32) -> AppResult<Vec<TimeOffEntry>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT date, reason FROM time_off
             WHERE substr(date, 1, 4) = ?1
             ORDER BY date ASC",
        )?;

        let rows = stmt.query_map([format!("{:04}", year)], map_time_off)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    fn months_with_data(&self, year: Option<i32>) -> AppResult<Vec<(i32, u32)>> {
        let keys: Vec<String> = {
            let mut stmt = self.conn.prepare_cached(
                "SELECT DISTINCT substr(timestamp, 1, 7) AS ym FROM events
                 WHERE ?1 IS NULL OR substr(timestamp, 1, 4) = ?1
                 ORDER BY ym ASC",
            )?;
            let rows = stmt.query_map([year.map(|y| format!("{:04}", y))], |row| {
                row.get::<_, String>(0)
            })?;

            let mut v = Vec::new();
            for r in rows {
                v.push(r?);
            }
            v
        };

        keys.iter()
            .map(|k| parse_year_month(k).ok_or_else(|| AppError::InvalidDate(k.clone())))
            .collect()
    }
}
