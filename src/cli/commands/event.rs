use crate::config::Config;
use crate::core::clock::{Clock, SystemClock};
use crate::db::pool::DbPool;
use crate::db::store::EventStore;
use crate::errors::AppResult;
use crate::models::action::EventAction;
use crate::ui::messages::success;
use crate::utils::time::parse_optional_datetime;
use chrono::Timelike;

/// Log a start or stop event, at `--at` or now.
pub fn handle(
    action: EventAction,
    at: Option<&String>,
    project: Option<&str>,
    cfg: &Config,
) -> AppResult<()> {
    let timestamp = match parse_optional_datetime(at)? {
        Some(ts) => ts,
        None => {
            let now = SystemClock.now();
            now.with_nanosecond(0).unwrap_or(now)
        }
    };

    let mut pool = DbPool::new(&cfg.database)?;
    pool.add_event(action, timestamp, project)?;

    success(format!(
        "Added event {} at {}",
        action,
        timestamp.format("%Y-%m-%d %H:%M:%S")
    ));
    Ok(())
}
