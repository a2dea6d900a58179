use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            ConfigLogic::print(&path, cfg)?;
        }

        if *edit_config {
            if !path.exists() {
                info(format!("Creating {} with defaults", path.display()));
                if let Some(dir) = path.parent() {
                    std::fs::create_dir_all(dir)?;
                }
                cfg.save_to(&path)?;
            }
            ConfigLogic::edit(&path, editor)?;
            success("Configuration updated.");
        }

        if !*print_config && !*edit_config {
            info("Nothing to do: use --print or --edit");
        }
    }
    Ok(())
}
