use crate::cli::commands::open_cache;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::formatting::colorize_overtime;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Overtime { json } = cmd {
        let mut cache = open_cache(cfg)?;
        let totals = cache.overtime_totals()?;

        if *json {
            println!("{}", serde_json::to_string_pretty(&totals)?);
            return Ok(());
        }

        header("Overtime");
        for (year, minutes) in &totals.by_year {
            println!("  {}: {}", year, colorize_overtime(*minutes));
        }
        println!("  All time: {}", colorize_overtime(totals.all_time));
    }
    Ok(())
}
