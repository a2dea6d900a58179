use crate::cli::commands::open_cache;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::date;
use crate::utils::formatting::{colorize_overtime, mins2readable, month_name};
use crate::utils::table::{Column, Table};
use chrono::Datelike;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Year { year, json } = cmd {
        let year = year.unwrap_or_else(|| date::today().year());

        let mut cache = open_cache(cfg)?;
        let months = cache.year_summary(year)?;

        if *json {
            println!("{}", serde_json::to_string_pretty(&months)?);
            return Ok(());
        }

        header(format!("Year {}", year));

        if months.is_empty() {
            info(format!("No data for {}", year));
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::left("Month"),
            Column::right("Worked"),
            Column::right("Pause"),
            Column::right("Net"),
            Column::right("Target"),
            Column::right("Overtime"),
        ]);
        for m in &months {
            table.add_row(vec![
                month_name(m.month).to_string(),
                mins2readable(m.worked_minutes, false, false),
                mins2readable(m.pause_minutes, false, false),
                mins2readable(m.net_minutes, false, false),
                mins2readable(m.target_minutes, false, false),
                mins2readable(m.overtime_minutes, true, false),
            ]);
        }
        print!("{}", table.render());

        let overtime: f64 = months.iter().map(|m| m.overtime_minutes).sum();
        println!("\nOvertime {}: {}", year, colorize_overtime(overtime));
    }
    Ok(())
}
