use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::store::EventStore;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::time::parse_datetime;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { timestamp } = cmd {
        let ts = parse_datetime(timestamp)?;

        let mut pool = DbPool::new(&cfg.database)?;
        let removed = pool.delete_event(ts)?;

        if removed == 0 {
            warning(format!("No event found at {}", ts.format("%Y-%m-%d %H:%M:%S")));
        } else {
            success(format!(
                "Deleted {} event(s) at {}",
                removed,
                ts.format("%Y-%m-%d %H:%M:%S")
            ));
        }
    }
    Ok(())
}
