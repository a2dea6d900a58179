use crate::cli::commands::open_cache;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{header, info};
use crate::utils::date;
use crate::utils::formatting::{mins2readable, optional_time};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Day { date } = cmd {
        let day = match date {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => date::today(),
        };

        let cache = open_cache(cfg)?;
        let detail = cache.day_detail(day)?;

        header(day.format("%A %Y-%m-%d"));

        if detail.events.is_empty() && detail.pause_minutes == 0 {
            info(format!("No events for {}", day));
            return Ok(());
        }

        for ev in &detail.events {
            match &ev.project {
                Some(p) => println!("  {}  {:<5}  [{}]", ev.time_str(), ev.action, p),
                None => println!("  {}  {}", ev.time_str(), ev.action),
            }
        }
        if detail.pause_minutes != 0 {
            println!("  Pause: {} min", detail.pause_minutes);
        }

        println!();
        println!(
            "Worked: {} | Start: {} | End: {}",
            mins2readable(detail.totals.worked_minutes, false, false),
            optional_time(detail.totals.start_time),
            optional_time(detail.totals.end_time),
        );
    }
    Ok(())
}
