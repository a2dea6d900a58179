use crate::cli::commands::open_cache;
use crate::cli::parser::{Commands, TimeoffAction};
use crate::config::Config;
use crate::core::schedule::ScheduleConfig;
use crate::db::store::EventStore;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::utils::date;
use crate::utils::table::{Column, Table};
use chrono::Datelike;
use std::collections::BTreeMap;

fn parse_day(s: &str) -> AppResult<chrono::NaiveDate> {
    date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Timeoff { action } = cmd else {
        return Ok(());
    };

    let mut cache = open_cache(cfg)?;

    match action {
        TimeoffAction::Add { date, reason } => {
            let day = parse_day(date)?;
            cache.store_mut().add_time_off(day, reason)?;
            if !cache.schedule().is_workday(day) {
                info(format!("{} is not a configured workday, no time is credited", day));
            }
            success(format!("Marked {} as free day ({})", day, reason));
        }
        TimeoffAction::Del { date } => {
            let day = parse_day(date)?;
            cache.store_mut().remove_time_off(day)?;
            success(format!("Removed free day {}", day));
        }
        TimeoffAction::List { year } => {
            let year = year.unwrap_or_else(|| date::today().year());

            // holidays first, explicit time off wins on the same date
            let mut days: BTreeMap<chrono::NaiveDate, String> = cache
                .schedule()
                .holidays(year)
                .into_iter()
                .map(|d| (d, "Holiday".to_string()))
                .collect();
            for entry in cache.store().get_time_off(year)? {
                days.insert(entry.date, entry.reason);
            }

            if days.is_empty() {
                info(format!("No free days in {}", year));
                return Ok(());
            }

            let mut table = Table::new(vec![
                Column::left("Date"),
                Column::left("Day"),
                Column::left("Reason"),
                Column::left("Credited"),
            ]);
            for (day, reason) in days {
                let credited = if cache.schedule().is_workday(day) { "yes" } else { "no" };
                table.add_row(vec![
                    day.to_string(),
                    day.format("%a").to_string(),
                    reason,
                    credited.to_string(),
                ]);
            }
            print!("{}", table.render());
        }
    }

    Ok(())
}
