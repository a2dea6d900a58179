use crate::cli::commands::open_cache;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::ledger::MonthLedger;
use crate::ui::messages::{header, info};
use crate::utils::date;
use crate::utils::formatting::{colorize_overtime, mins2readable, month_name, optional_time};
use crate::utils::table::{Column, Table};
use chrono::Datelike;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report { month, json } = cmd {
        let (year, month) = match month {
            Some(m) => date::parse_month(m)?,
            None => {
                let t = date::today();
                (t.year(), t.month())
            }
        };

        let mut cache = open_cache(cfg)?;
        let ledger = cache.get_month(year, month)?;

        if *json {
            println!("{}", serde_json::to_string_pretty(&ledger)?);
            return Ok(());
        }

        header(format!("{} {}", month_name(month), year));

        if ledger.is_empty() {
            info(format!("No data for {}-{:02}", year, month));
            return Ok(());
        }

        print!("{}", render_ledger(&ledger));
        println!();
        println!(
            "Net: {} | Target: {} | Overtime: {}",
            mins2readable(ledger.total_net(), false, false),
            mins2readable(ledger.total_target(), false, false),
            colorize_overtime(ledger.total_overtime()),
        );
        if ledger.rows.iter().any(|r| r.free_day) {
            println!("* free day");
        }
    }
    Ok(())
}

pub fn render_ledger(ledger: &MonthLedger) -> String {
    let mut table = Table::new(vec![
        Column::left("Date"),
        Column::left("Day"),
        Column::left("Start"),
        Column::left("End"),
        Column::right("Worked"),
        Column::right("Pause"),
        Column::right("Break"),
        Column::right("Net"),
        Column::right("Target"),
        Column::right("Overtime"),
    ]);

    for row in &ledger.rows {
        let day = if row.free_day {
            format!("{}*", row.date.format("%a"))
        } else {
            row.date.format("%a").to_string()
        };
        table.add_row(vec![
            row.date.to_string(),
            day,
            optional_time(row.start_time),
            optional_time(row.end_time),
            mins2readable(row.worked_minutes, false, false),
            mins2readable(row.pause_minutes, false, false),
            mins2readable(row.break_minutes, false, false),
            mins2readable(row.net_minutes, false, false),
            mins2readable(row.target_minutes, false, false),
            mins2readable(row.overtime_minutes, true, false),
        ]);
    }

    table.render()
}
