use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::store::EventStore;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Pause { minutes, date } = cmd {
        let day = match date {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => date::today(),
        };

        let mut pool = DbPool::new(&cfg.database)?;
        pool.add_pause(*minutes, day)?;

        success(format!("Added pause of {} minutes on {}", minutes, day));
    }
    Ok(())
}
