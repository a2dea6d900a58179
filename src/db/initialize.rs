use crate::errors::AppResult;
use rusqlite::Connection;

/// Create every table and index the store needs. Idempotent.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS events (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            timestamp  TEXT NOT NULL,
            action     TEXT NOT NULL CHECK(action IN ('start','stop')),
            project    TEXT
        );

        CREATE INDEX IF NOT EXISTS idx_events_timestamp ON events(timestamp);

        CREATE TABLE IF NOT EXISTS pauses (
            id       INTEGER PRIMARY KEY AUTOINCREMENT,
            date     TEXT NOT NULL UNIQUE,
            minutes  INTEGER NOT NULL
        );

        CREATE TABLE IF NOT EXISTS time_off (
            id      INTEGER PRIMARY KEY AUTOINCREMENT,
            date    TEXT NOT NULL UNIQUE,
            reason  TEXT NOT NULL DEFAULT 'Vacation'
        );

        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}
