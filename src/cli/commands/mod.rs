pub mod config;
pub mod day;
pub mod del;
pub mod event;
pub mod init;
pub mod log;
pub mod overtime;
pub mod pause;
pub mod report;
pub mod timeoff;
pub mod year;

use crate::config::Config;
use crate::core::{ReportCache, WorkSchedule};
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Report engine over the configured database and schedule.
pub(crate) fn open_cache(cfg: &Config) -> AppResult<ReportCache<DbPool, WorkSchedule>> {
    let pool = DbPool::new(&cfg.database)?;
    Ok(ReportCache::new(pool, WorkSchedule::from_config(cfg)).with_first_year(cfg.first_year))
}
